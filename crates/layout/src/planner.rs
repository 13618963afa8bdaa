use crate::blocks::{Block, Card, PlannedBlock};
use activa_types::PageGeometry;

/// Height reserved per row when deciding page breaks.
pub const ROW_ESTIMATE: f32 = 16.0;
/// Vertical advance after drawing one section row.
pub const ROW_ADVANCE: f32 = 14.0;
/// Vertical advance after a section title.
pub const TITLE_ADVANCE: f32 = 18.0;
/// Trailing gap after a section's last row.
pub const SECTION_GAP: f32 = 8.0;
/// First free line sits this far under the top edge, below the banner.
pub const CONTENT_TOP_OFFSET: f32 = 120.0;
/// Extra space kept clear above the bottom margin.
pub const FLOOR_BUFFER: f32 = 20.0;
pub const CARD_HEIGHT: f32 = 50.0;
pub const CARD_GAP: f32 = 12.0;

/// Page-flow state machine: a cursor descends one page until the next
/// unbreakable block would cross the floor, then a new page opens with a
/// repeated header and the cursor resets.
pub struct PagePlanner {
    geometry: PageGeometry,
    pages: Vec<Vec<PlannedBlock>>,
    cursor: f32,
}

impl PagePlanner {
    pub fn new(geometry: PageGeometry) -> Self {
        let mut planner = Self {
            geometry,
            pages: Vec::new(),
            cursor: 0.0,
        };
        planner.open_page();
        planner
    }

    /// The next free vertical coordinate on the current page.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    fn open_page(&mut self) {
        self.pages.push(vec![PlannedBlock {
            y: self.geometry.height,
            block: Block::Header,
        }]);
        self.cursor = self.geometry.height - CONTENT_TOP_OFFSET;
    }

    fn floor(&self) -> f32 {
        self.geometry.margin + FLOOR_BUFFER
    }

    /// The pagination decision. Runs before any unbreakable unit so content
    /// is never split mid-row across a page boundary.
    fn ensure_space(&mut self, needed_rows: usize) {
        if self.cursor - needed_rows as f32 * ROW_ESTIMATE < self.floor() {
            self.open_page();
        }
    }

    fn push(&mut self, block: Block) {
        let planned = PlannedBlock { y: self.cursor, block };
        // pages is never empty after construction
        self.pages.last_mut().unwrap().push(planned);
    }

    /// Lays out summary cards two per grid row.
    pub fn cards(&mut self, cards: &[Card]) {
        for pair in cards.chunks(2) {
            self.ensure_space(4);
            self.push(Block::CardRow(pair.to_vec()));
            self.cursor -= CARD_HEIGHT + CARD_GAP;
        }
    }

    /// Places a section title followed by label/value rows. The title is
    /// placed once at its original position; rows may flow onto later
    /// pages. An empty section gets an explicit no-data row.
    pub fn section(&mut self, title: &str, rows: Vec<(String, String)>) {
        self.ensure_space(rows.len() + 2);
        self.push(Block::SectionTitle(title.to_string()));
        self.cursor -= TITLE_ADVANCE;

        if rows.is_empty() {
            self.push(Block::NoData);
            self.cursor -= ROW_ESTIMATE;
            return;
        }
        for (label, value) in rows {
            self.ensure_space(1);
            self.push(Block::Row { label, value });
            self.cursor -= ROW_ADVANCE;
        }
        self.cursor -= SECTION_GAP;
    }

    pub fn finish(self) -> Vec<Vec<PlannedBlock>> {
        log::debug!("planned {} page(s)", self.pages.len());
        self.pages
    }
}
