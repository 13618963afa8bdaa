/// Fixed page geometry for the paginated report. Distances are PDF points
/// with a bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// US-letter with the report's standard margin.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 45.0,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}
