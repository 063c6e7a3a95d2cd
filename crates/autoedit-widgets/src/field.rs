#![forbid(unsafe_code)]

//! Single-line edit field with a left label and a focus-aware bottom line.
//!
//! # Layout
//!
//! ```text
//!  scroll_x
//!  │<label>  <padding>  <text ...................>
//!  └──────────────── bottom line ────────────────┘  height - 1dip
//! ```
//!
//! The label is drawn at the field's horizontal scroll offset, vertically
//! centered on its glyph size. The text starts after the label, so the left
//! padding grows by the label width plus `left_text_padding`.
//!
//! # Invariants
//!
//! 1. The bottom line uses the focus width/color exactly when the field is
//!    focused and the line is shown.
//! 2. `set_focused` reports a redraw only for an actual focus change on a
//!    field that shows its bottom line.

use autoedit_text::{TextChange, TextContainer, TextError};

use crate::canvas::{Canvas, Paint};
use crate::color::Color;
use crate::metrics::{DisplayMetrics, MonospaceMeasure, TextMeasure};
use crate::style::FieldStyle;

/// Padding around the text area, in px.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    /// Left padding; widened by the label when one is set.
    pub left: i32,
    /// Top padding.
    pub top: i32,
    /// Right padding.
    pub right: i32,
    /// Bottom padding.
    pub bottom: i32,
}

impl Insets {
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same padding on every side.
    #[must_use]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Measured size and horizontal scroll of a field, in px.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldGeometry {
    /// Laid-out width; the bottom line spans it.
    pub width: f32,
    /// Laid-out height; text and label are centered in it.
    pub height: f32,
    /// Horizontal scroll offset applied to everything drawn.
    pub scroll_x: f32,
}

/// Edit field model. Owns one [`TextContainer`].
#[derive(Debug)]
pub struct EditField {
    text: TextContainer,
    style: FieldStyle,
    metrics: DisplayMetrics,
    base_padding: Insets,
    label_width: f32,
    focused: bool,
    line: Paint,
    geometry: FieldGeometry,
}

impl EditField {
    /// Create an empty, unfocused field measuring its label with
    /// [`MonospaceMeasure`].
    #[must_use]
    pub fn new(style: FieldStyle, metrics: DisplayMetrics) -> Self {
        Self::with_measure(style, metrics, Insets::default(), &MonospaceMeasure::default())
    }

    /// Create a field with explicit base padding and label measurement.
    #[must_use]
    pub fn with_measure(
        style: FieldStyle,
        metrics: DisplayMetrics,
        base_padding: Insets,
        measure: &dyn TextMeasure,
    ) -> Self {
        let label_width = style
            .label()
            .map_or(0.0, |label| measure.measure(label, style.resolved_left_text_size()));
        let line = Self::line_paint(&style, &metrics, false);
        Self {
            text: TextContainer::new(),
            style,
            metrics,
            base_padding,
            label_width,
            focused: false,
            line,
            geometry: FieldGeometry::default(),
        }
    }

    /// The field's text. Subscribe here to observe edits.
    #[must_use]
    pub fn text(&self) -> &TextContainer {
        &self.text
    }

    /// Replace the field's text.
    ///
    /// # Errors
    ///
    /// Propagates [`TextError`] from the container.
    pub fn set_text(&self, text: impl Into<String>) -> Result<TextChange, TextError> {
        self.text.set_text(text)
    }

    #[must_use]
    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    #[must_use]
    pub fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Current bottom-line paint.
    #[must_use]
    pub fn bottom_line(&self) -> Paint {
        self.line
    }

    #[must_use]
    pub fn geometry(&self) -> FieldGeometry {
        self.geometry
    }

    /// Padding of the text area, widened to make room for the label.
    #[must_use]
    pub fn padding(&self) -> Insets {
        let mut padding = self.base_padding;
        if self.style.label().is_some() {
            padding.left += self.label_width as i32 + self.style.left_text_padding;
        }
        padding
    }

    /// Update focus. Returns `true` if the field needs a redraw.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        if self.focused == focused {
            return false;
        }
        self.focused = focused;
        if !self.style.show_bottom_line {
            return false;
        }
        self.line = Self::line_paint(&self.style, &self.metrics, focused);
        tracing::debug!(
            focused,
            line_width = self.line.size,
            line_color = %self.line.color,
            "edit field focus changed"
        );
        true
    }

    /// Record the laid-out size and scroll offset.
    pub fn layout(&mut self, width: f32, height: f32, scroll_x: f32) {
        self.geometry = FieldGeometry {
            width,
            height,
            scroll_x,
        };
    }

    /// Draw text, label and bottom line, in that order.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let FieldGeometry {
            width,
            height,
            scroll_x,
        } = self.geometry;

        let text_size = self.style.text_size;
        let content = self.text.content();
        if !content.is_empty() {
            canvas.draw_text(
                &content,
                scroll_x + self.padding().left as f32,
                centered_baseline(height, text_size),
                Paint::new(self.style.text_color, text_size),
            );
        }

        if let Some(label) = self.style.label() {
            let size = self.style.resolved_left_text_size();
            canvas.draw_text(
                label,
                scroll_x,
                centered_baseline(height, size),
                Paint::new(self.style.left_text_color, size),
            );
        }

        if self.style.show_bottom_line {
            let y = height - self.metrics.dip_to_px(1.0) as f32;
            canvas.draw_line(scroll_x, y, scroll_x + width, y, self.line);
        }
    }

    fn line_paint(style: &FieldStyle, metrics: &DisplayMetrics, focused: bool) -> Paint {
        let (width_dp, color): (f32, Color) = if focused {
            (style.focus_line_width_dp, style.resolved_focus_color())
        } else {
            (style.default_line_width_dp, style.bottom_line_default_color)
        };
        Paint::new(color, metrics.dip_to_px(f64::from(width_dp)) as f32)
    }
}

/// Baseline that vertically centers glyphs of `size` px in `height` px.
fn centered_baseline(height: f32, size: f32) -> f32 {
    (height - size) / 2.0 + size
}
