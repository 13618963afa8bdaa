//! The metrics bundle: the aggregation output contract.
//!
//! The dashboard collaborator consumes this structure directly as JSON
//! (four named mappings), so field names and the aging bucket keys are part
//! of the public contract.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel category for equipment with no status value.
pub const NO_STATUS: &str = "Sin estado";
/// Sentinel category for equipment with no location value.
pub const NO_LOCATION: &str = "Sin ubicación";

/// Category label mapped to how many equipment records fall under it.
/// Iteration order is unspecified; exporters impose their own ordering.
pub type CountBucket = HashMap<String, u64>;

/// `"YYYY-MM"` period key mapped to the accumulated maintenance cost.
pub type CostSeries = HashMap<String, f64>;

/// Fixed three-bucket histogram of equipment age in years since purchase.
///
/// Equipment without a purchase date belongs to no bucket, so the bucket
/// total may be less than the equipment count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingProfile {
    #[serde(rename = "0-2")]
    pub years_0_2: u64,
    #[serde(rename = "3-5")]
    pub years_3_5: u64,
    #[serde(rename = "6+")]
    pub years_6_plus: u64,
}

impl AgingProfile {
    /// Counts one record into the bucket its age falls in.
    pub fn classify(&mut self, age: i32) {
        if age <= 2 {
            self.years_0_2 += 1;
        } else if age <= 5 {
            self.years_3_5 += 1;
        } else {
            self.years_6_plus += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.years_0_2 + self.years_3_5 + self.years_6_plus
    }

    /// The buckets in ascending label order.
    pub fn rows(&self) -> [(&'static str, u64); 3] {
        [
            ("0-2", self.years_0_2),
            ("3-5", self.years_3_5),
            ("6+", self.years_6_plus),
        ]
    }
}

/// The four groupings produced by one aggregation pass. Immutable once
/// produced; has no identity beyond the call that created it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsBundle {
    pub equipment_by_status: CountBucket,
    pub equipment_by_location: CountBucket,
    pub maintenance_costs: CostSeries,
    pub aging_profile: AgingProfile,
}

impl MetricsBundle {
    /// Every record lands in exactly one status bucket, so the bucket sum
    /// is the equipment count.
    pub fn total_equipment(&self) -> u64 {
        self.equipment_by_status.values().sum()
    }

    /// Count under the raw `"operational"` status key.
    pub fn operational_count(&self) -> u64 {
        self.equipment_by_status.get("operational").copied().unwrap_or(0)
    }

    /// Count under the raw `"obsolete"` status key.
    pub fn obsolete_count(&self) -> u64 {
        self.equipment_by_status.get("obsolete").copied().unwrap_or(0)
    }

    pub fn location_count(&self) -> usize {
        self.equipment_by_location.len()
    }

    pub fn months_with_costs(&self) -> usize {
        self.maintenance_costs.len()
    }

    pub fn total_cost(&self) -> f64 {
        self.maintenance_costs.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_serializes_as_four_named_mappings() {
        let mut bundle = MetricsBundle::default();
        bundle.equipment_by_status.insert("operational".into(), 2);
        bundle.maintenance_costs.insert("2024-03".into(), 120.5);
        bundle.aging_profile.years_6_plus = 1;

        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["equipment_by_status"]["operational"], 2);
        assert_eq!(json["maintenance_costs"]["2024-03"], 120.5);
        assert_eq!(json["aging_profile"]["0-2"], 0);
        assert_eq!(json["aging_profile"]["6+"], 1);
        assert!(json["equipment_by_location"].as_object().unwrap().is_empty());
    }

    #[test]
    fn summary_accessors_use_raw_status_keys() {
        let mut bundle = MetricsBundle::default();
        bundle.equipment_by_status.insert("operational".into(), 3);
        bundle.equipment_by_status.insert("obsolete".into(), 1);
        bundle.equipment_by_status.insert(NO_STATUS.into(), 2);

        assert_eq!(bundle.total_equipment(), 6);
        assert_eq!(bundle.operational_count(), 3);
        assert_eq!(bundle.obsolete_count(), 1);
    }

    #[test]
    fn aging_classification_boundaries() {
        let mut profile = AgingProfile::default();
        profile.classify(0);
        profile.classify(2);
        profile.classify(3);
        profile.classify(5);
        profile.classify(6);
        assert_eq!(profile.years_0_2, 2);
        assert_eq!(profile.years_3_5, 2);
        assert_eq!(profile.years_6_plus, 1);
        assert_eq!(profile.total(), 5);
    }
}
