#![forbid(unsafe_code)]

//! Visual configuration for [`EditField`](crate::EditField).

use crate::color::Color;

/// Bottom-line width when the field is not focused, in dip.
pub const DEFAULT_LINE_WIDTH_DP: f32 = 0.5;
/// Bottom-line width when the field is focused, in dip.
pub const FOCUS_LINE_WIDTH_DP: f32 = 1.0;
/// Text size used when none is configured, in px.
pub const DEFAULT_TEXT_SIZE: f32 = 14.0;
/// Gap between label and text when none is configured, in px.
pub const DEFAULT_LABEL_PADDING: i32 = 8;

/// Label, text and bottom-line appearance of an edit field.
///
/// Optional fields fall back to the field's defaults when resolved:
/// `left_text_size` to `text_size`, `bottom_line_focus_color` to
/// `accent_color`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldStyle {
    /// Label drawn to the left of the text. `None` or empty hides it.
    pub left_text: Option<String>,
    pub left_text_color: Color,
    pub left_text_size: Option<f32>,
    /// Gap between the label and the text, in px.
    pub left_text_padding: i32,
    pub text_size: f32,
    pub text_color: Color,
    pub accent_color: Color,
    pub show_bottom_line: bool,
    pub bottom_line_default_color: Color,
    pub bottom_line_focus_color: Option<Color>,
    pub default_line_width_dp: f32,
    pub focus_line_width_dp: f32,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            left_text: None,
            left_text_color: Color::BLACK,
            left_text_size: None,
            left_text_padding: DEFAULT_LABEL_PADDING,
            text_size: DEFAULT_TEXT_SIZE,
            text_color: Color::BLACK,
            accent_color: Color::DEFAULT_ACCENT,
            show_bottom_line: true,
            bottom_line_default_color: Color::BLACK,
            bottom_line_focus_color: None,
            default_line_width_dp: DEFAULT_LINE_WIDTH_DP,
            focus_line_width_dp: FOCUS_LINE_WIDTH_DP,
        }
    }
}

impl FieldStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_left_text(mut self, text: impl Into<String>) -> Self {
        self.left_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_left_text_color(mut self, color: Color) -> Self {
        self.left_text_color = color;
        self
    }

    #[must_use]
    pub fn with_left_text_size(mut self, size: f32) -> Self {
        self.left_text_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_left_text_padding(mut self, padding: i32) -> Self {
        self.left_text_padding = padding;
        self
    }

    #[must_use]
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    #[must_use]
    pub fn with_accent_color(mut self, color: Color) -> Self {
        self.accent_color = color;
        self
    }

    #[must_use]
    pub fn with_bottom_line(mut self, show: bool) -> Self {
        self.show_bottom_line = show;
        self
    }

    #[must_use]
    pub fn with_bottom_line_colors(mut self, default: Color, focus: Color) -> Self {
        self.bottom_line_default_color = default;
        self.bottom_line_focus_color = Some(focus);
        self
    }

    #[must_use]
    pub fn with_line_widths_dp(mut self, default: f32, focus: f32) -> Self {
        self.default_line_width_dp = default;
        self.focus_line_width_dp = focus;
        self
    }

    /// Label text if present and non-empty.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.left_text.as_deref().filter(|s| !s.is_empty())
    }

    /// Label size, falling back to the text size.
    #[must_use]
    pub fn resolved_left_text_size(&self) -> f32 {
        self.left_text_size.unwrap_or(self.text_size)
    }

    /// Focused bottom-line color, falling back to the accent color.
    #[must_use]
    pub fn resolved_focus_color(&self) -> Color {
        self.bottom_line_focus_color.unwrap_or(self.accent_color)
    }
}
