//! Foundation data types shared across the reporting crates.

pub mod color;
pub mod geometry;
pub mod metrics;
pub mod records;

pub use color::Color;
pub use geometry::PageGeometry;
pub use metrics::{AgingProfile, CostSeries, CountBucket, MetricsBundle, NO_LOCATION, NO_STATUS};
pub use records::{EquipmentRecord, MaintenanceLogRecord, Snapshot};
