#![forbid(unsafe_code)]

//! Headless edit-field model for autoedit.
//!
//! [`EditField`] wraps a [`TextContainer`](autoedit_text::TextContainer)
//! with the presentation state of a labelled input: an optional label drawn
//! to the left of the text, and a bottom line whose width and color follow
//! focus. Nothing here renders pixels; [`EditField::draw`] emits calls to a
//! [`Canvas`] implemented by the host.

pub mod canvas;
pub mod color;
pub mod field;
pub mod metrics;
pub mod style;

pub use canvas::{Canvas, DrawCommand, DrawList, Paint};
pub use color::{Color, ColorParseError};
pub use field::{EditField, FieldGeometry, Insets};
pub use metrics::{DisplayMetrics, MonospaceMeasure, TextMeasure};
pub use style::FieldStyle;
