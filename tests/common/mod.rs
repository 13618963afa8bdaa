pub mod fixtures;
pub mod pdf_assertions;

use activa::{export_report, MetricsBundle, ReportFormat};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of one page (1-based), for per-page assertions.
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }
}

/// Export a bundle as a PDF document and parse the result.
pub fn export_pdf(metrics: &MetricsBundle) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let report = export_report(metrics, ReportFormat::Document)?;
    GeneratedPdf::from_bytes(report.bytes)
}
