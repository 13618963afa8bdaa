//! Pure page-flow layout for the paginated report.
//!
//! The planner turns a metrics bundle into pages of positioned blocks with
//! no canvas in sight; `activa-render-pdf` draws the result. Page-break
//! decisions therefore stay unit-testable against heights alone.

mod blocks;
mod format;
mod planner;
mod report;

pub use blocks::{Block, Card, PlannedBlock, PlannedDocument};
pub use format::{currency, period_label, status_label};
pub use planner::{
    PagePlanner, CARD_GAP, CARD_HEIGHT, CONTENT_TOP_OFFSET, FLOOR_BUFFER, ROW_ADVANCE,
    ROW_ESTIMATE, SECTION_GAP, TITLE_ADVANCE,
};
pub use report::{plan_report, NO_DATA_LABEL, REPORT_TAGLINE, REPORT_TITLE};
