//! Asset & maintenance reporting engine.
//!
//! [`aggregate`] folds an equipment/maintenance snapshot into a
//! [`MetricsBundle`]; [`export_report`] renders that bundle as a tabular
//! spreadsheet or as a paginated PDF document planned by a page-flow
//! layout engine.

pub mod export;
pub mod source;

mod error;

pub use error::ExportError;
pub use export::{export_report, ExportedReport, ReportFormat, PDF_CONTENT_TYPE, XLSX_CONTENT_TYPE};
pub use source::{ReminderTrigger, SnapshotSource};

pub use activa_export_xlsx::export_tabular;
pub use activa_layout::{plan_report, PlannedDocument};
pub use activa_metrics::aggregate;
pub use activa_render_pdf::render_document;
pub use activa_types::{
    AgingProfile, CostSeries, CountBucket, EquipmentRecord, MaintenanceLogRecord, MetricsBundle,
    PageGeometry, Snapshot,
};
