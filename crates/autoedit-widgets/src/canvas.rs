#![forbid(unsafe_code)]

//! Drawing surface abstraction.
//!
//! Fields never talk to a real graphics backend. They emit drawing calls to
//! a [`Canvas`]; hosts adapt it to their renderer, and [`DrawList`] records
//! the calls for tests and headless inspection.

use crate::color::Color;

/// Stroke/fill parameters for one drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    /// Stroke width in px (lines) or glyph size in px (text).
    pub size: f32,
}

impl Paint {
    #[must_use]
    pub const fn new(color: Color, size: f32) -> Self {
        Self { color, size }
    }
}

/// Target for field drawing.
pub trait Canvas {
    /// Draw `text` with its baseline starting at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: Paint);

    /// Draw a straight line from `(x0, y0)` to `(x1, y1)`.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: Paint);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        x: f32,
        y: f32,
        paint: Paint,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        paint: Paint,
    },
}

/// Canvas that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DrawList {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: Paint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            paint,
        });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: Paint) {
        self.commands.push(DrawCommand::Line {
            x0,
            y0,
            x1,
            y1,
            paint,
        });
    }
}

impl std::fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text { text, x, y, paint } => write!(
                f,
                "text {text:?} at ({x}, {y}) size={} color={}",
                paint.size, paint.color
            ),
            Self::Line {
                x0,
                y0,
                x1,
                y1,
                paint,
            } => write!(
                f,
                "line ({x0}, {y0}) -> ({x1}, {y1}) width={} color={}",
                paint.size, paint.color
            ),
        }
    }
}
