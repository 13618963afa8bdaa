use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fields the reporting path reads from an equipment row. The full
/// entity (asset tag, supplier, movements) lives with the inventory service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub status: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
}

/// A completed (or still open) maintenance intervention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceLogRecord {
    pub completed_on: Option<NaiveDate>,
    pub cost: Option<f64>,
}

/// One consistent read snapshot handed over by the persistence collaborator.
/// Treated as immutable for the duration of a report invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub equipment: Vec<EquipmentRecord>,
    pub logs: Vec<MaintenanceLogRecord>,
}
