//! Export dispatch: format selection, filename generation and the media
//! types the transport layer relays.

use crate::error::ExportError;
use activa_types::{MetricsBundle, PageGeometry};
use chrono::{Local, Utc};
use std::str::FromStr;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// The two export backends. The transport layer maps its `"excel"` /
/// `"pdf"` query tokens onto these via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Tabular,
    Document,
}

impl FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "excel" => Ok(Self::Tabular),
            "pdf" => Ok(Self::Document),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tabular => "xlsx",
            Self::Document => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Tabular => XLSX_CONTENT_TYPE,
            Self::Document => PDF_CONTENT_TYPE,
        }
    }
}

/// A finished export: the payload plus what the transport layer needs for
/// `Content-Disposition` and `Content-Type`.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
}

/// Renders the bundle in the requested format. All-or-nothing: an error
/// yields no bytes.
pub fn export_report(
    metrics: &MetricsBundle,
    format: ReportFormat,
) -> Result<ExportedReport, ExportError> {
    let bytes = match format {
        ReportFormat::Tabular => activa_export_xlsx::export_tabular(metrics)?,
        ReportFormat::Document => {
            let plan = activa_layout::plan_report(
                metrics,
                PageGeometry::letter(),
                Local::now().naive_local(),
            );
            activa_render_pdf::render_document(&plan)?
        }
    };
    let report = ExportedReport {
        bytes,
        filename: report_filename(format),
        content_type: format.content_type(),
    };
    log::debug!("exported {} ({} bytes)", report.filename, report.bytes.len());
    Ok(report)
}

/// `report_<UTC ISO timestamp>.<ext>` — unique per call, always well
/// formed.
fn report_filename(format: ReportFormat) -> String {
    let stamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f");
    format!("report_{stamp}.{}", format.extension())
}
