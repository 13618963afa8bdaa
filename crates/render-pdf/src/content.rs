//! Content-stream construction for one page, with font and fill state
//! deduplication across operations.

use activa_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Internal resource name of the regular face (Helvetica).
pub const FONT_REGULAR: &str = "F1";
/// Internal resource name of the bold face (Helvetica-Bold).
pub const FONT_BOLD: &str = "F2";

pub struct PageContext {
    content: Content,
    state: PageRenderState,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: &'static str,
    font_size: f32,
    fill_color: Option<Color>,
}

impl PageContext {
    pub fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: Default::default(),
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    pub fn set_font(&mut self, name: &'static str, size: f32) {
        if self.state.font_name != name || self.state.font_size != size {
            self.content.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), size.into()],
            ));
            self.state.font_name = name;
            self.state.font_size = size;
        }
    }

    pub fn set_fill(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.content.operations.push(Operation::new(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            ));
            self.state.fill_color = Some(color);
        }
    }

    /// Draws `text` with its baseline at `(x, y)` in the current font and
    /// fill color.
    pub fn text(&mut self, x: f32, y: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        self.content
            .operations
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.content.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.content.operations.push(Operation::new("ET", vec![]));
    }

    /// Draws `text` so it ends at `right_edge`.
    pub fn text_right(&mut self, right_edge: f32, y: f32, text: &str) {
        let x = right_edge - text_width(text, self.state.font_size);
        self.text(x, y, text);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.content.operations.push(Operation::new(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        ));
        self.content.operations.push(Operation::new("f", vec![]));
    }
}

/// Approximate Helvetica advance width. Close enough for right alignment at
/// the label sizes used; no AFM metric tables are shipped.
pub fn text_width(text: &str, size: f32) -> f32 {
    let units: f32 = text
        .chars()
        .map(|c| match c {
            'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.28,
            'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' | '/' | ' ' => 0.33,
            'm' | 'w' | 'M' | 'W' | '%' => 0.89,
            'A'..='Z' => 0.70,
            '0'..='9' | '$' | '+' | '=' => 0.556,
            _ => 0.50,
        })
        .sum();
    units * size
}

/// Maps text onto WinAnsi bytes. Latin-1 characters keep their codepoint;
/// typographic characters above U+00FF that exist in WinAnsi get their
/// code-page positions; anything else degrades to '?'.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            c if (c as u32) <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}
