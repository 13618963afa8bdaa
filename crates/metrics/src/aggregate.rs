use activa_types::{EquipmentRecord, MaintenanceLogRecord, MetricsBundle, NO_LOCATION, NO_STATUS};
use chrono::{Datelike, NaiveDate};

/// Aggregates a snapshot into the metrics bundle.
///
/// Pure and total: missing optional fields degrade to the sentinel buckets
/// or are excluded, never an error. Calling it twice on the same snapshot
/// yields identical bundles.
pub fn aggregate(
    equipment: &[EquipmentRecord],
    logs: &[MaintenanceLogRecord],
    as_of: NaiveDate,
) -> MetricsBundle {
    let mut bundle = MetricsBundle::default();

    for record in equipment {
        let status = category_or(record.status.as_deref(), NO_STATUS);
        *bundle.equipment_by_status.entry(status.to_string()).or_insert(0) += 1;

        let location = category_or(record.location.as_deref(), NO_LOCATION);
        *bundle.equipment_by_location.entry(location.to_string()).or_insert(0) += 1;

        if let Some(purchased) = record.purchase_date {
            // Calendar-year subtraction only, no month/day refinement;
            // consumers depend on these bucket boundaries.
            bundle.aging_profile.classify(as_of.year() - purchased.year());
        }
    }

    for entry in logs {
        let (Some(completed), Some(cost)) = (entry.completed_on, entry.cost) else {
            continue;
        };
        let key = format!("{}-{:02}", completed.year(), completed.month());
        *bundle.maintenance_costs.entry(key).or_insert(0.0) += cost;
    }

    log::debug!(
        "aggregated {} equipment records and {} logs into {} status / {} location buckets, {} cost months",
        equipment.len(),
        logs.len(),
        bundle.equipment_by_status.len(),
        bundle.equipment_by_location.len(),
        bundle.maintenance_costs.len(),
    );

    bundle
}

fn category_or<'a>(value: Option<&'a str>, sentinel: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => sentinel,
    }
}
