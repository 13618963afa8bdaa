//! PDF rendering for planned report documents.
//!
//! Draws each planned block into lopdf content streams and assembles the
//! page tree. All layout decisions were made by `activa-layout`; this crate
//! only paints.

mod content;
mod error;
mod renderer;
mod theme;

pub use error::RenderError;
pub use renderer::render_document;
