#![forbid(unsafe_code)]

//! Errors from text container operations.

/// Errors returned by [`TextContainer`](crate::TextContainer) mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A mutation was attempted while observers were being notified.
    ReentrantMutation,
    /// A ranged edit referred to chars outside the current content.
    OutOfBounds {
        /// Requested start (in chars).
        start: usize,
        /// Requested end (in chars, exclusive).
        end: usize,
        /// Content length (in chars) at the time of the call.
        len: usize,
    },
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReentrantMutation => {
                write!(f, "illegal reentrant mutation during change notification")
            }
            Self::OutOfBounds { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for text of {len} chars")
            }
        }
    }
}

impl std::error::Error for TextError {}
