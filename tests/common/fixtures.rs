use activa::{aggregate, EquipmentRecord, MaintenanceLogRecord, MetricsBundle, Snapshot};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn equipment(
    status: Option<&str>,
    location: Option<&str>,
    purchased: Option<NaiveDate>,
) -> EquipmentRecord {
    EquipmentRecord {
        status: status.map(str::to_string),
        location: location.map(str::to_string),
        purchase_date: purchased,
    }
}

pub fn maintenance_log(completed: Option<NaiveDate>, cost: Option<f64>) -> MaintenanceLogRecord {
    MaintenanceLogRecord {
        completed_on: completed,
        cost,
    }
}

/// A small snapshot touching every grouping.
pub fn mixed_snapshot() -> Snapshot {
    Snapshot {
        equipment: vec![
            equipment(Some("operational"), Some("HQ"), Some(date(2023, 1, 10))),
            equipment(Some("operational"), Some("HQ"), Some(date(2020, 7, 2))),
            equipment(Some("maintenance"), Some("Branch"), Some(date(2017, 3, 20))),
            equipment(Some("obsolete"), None, None),
            equipment(None, Some("Warehouse"), Some(date(2016, 11, 5))),
        ],
        logs: vec![
            maintenance_log(Some(date(2024, 3, 15)), Some(120.50)),
            maintenance_log(Some(date(2024, 3, 20)), Some(29.50)),
            maintenance_log(Some(date(2024, 5, 1)), Some(80.00)),
            maintenance_log(None, Some(999.0)),
            maintenance_log(Some(date(2024, 4, 1)), None),
        ],
    }
}

pub fn aggregate_snapshot(snapshot: &Snapshot) -> MetricsBundle {
    aggregate(&snapshot.equipment, &snapshot.logs, date(2024, 6, 1))
}
