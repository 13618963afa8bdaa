use activa_types::PageGeometry;

/// A summary card: short label over a large value.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub label: String,
    pub value: String,
}

impl Card {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// An indivisible unit of document content. Blocks are never split across
/// page boundaries; a long section flows as individual `Row` blocks
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// The banner repeated at the top of every page.
    Header,
    /// Up to two summary cards on one grid row.
    CardRow(Vec<Card>),
    SectionTitle(String),
    Row { label: String, value: String },
    /// Explicit placeholder for a section without rows.
    NoData,
}

/// A block with its baseline ordinate (bottom-up PDF points).
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedBlock {
    pub y: f32,
    pub block: Block,
}

/// The result of planning one report: pages of positioned blocks plus the
/// strings the repeated header needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDocument {
    pub geometry: PageGeometry,
    pub title: String,
    /// The "Generado: ..." timestamp line under the title.
    pub generated: String,
    /// Right-aligned caption in the banner.
    pub tagline: String,
    pub pages: Vec<Vec<PlannedBlock>>,
}

impl PlannedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
