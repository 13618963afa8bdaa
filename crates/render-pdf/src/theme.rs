use activa_types::Color;

/// Banner fill and section-title blue.
pub const PRIMARY: Color = Color::rgb(31, 92, 153);
/// Card label teal.
pub const ACCENT: Color = Color::rgb(0, 158, 135);
/// Body text.
pub const TEXT: Color = Color::rgb(31, 31, 41);
/// Card background.
pub const CARD_FILL: Color = Color::gray(245);
pub const WHITE: Color = Color::gray(255);
