#![forbid(unsafe_code)]

//! Change descriptors and the prefix/suffix diff policy.
//!
//! All positions and counts are measured in `char`s (Unicode scalar values),
//! never bytes, so multi-byte text reports the same numbers an editor cursor
//! would see.
//!
//! # Diff policy
//!
//! `start` is the length of the common prefix of old and new text. The
//! common suffix is then measured on what remains, so it never overlaps the
//! prefix. Everything between is reported as one replaced span:
//!
//! ```
//! use autoedit_text::diff;
//!
//! let change = diff("hello", "help");
//! assert_eq!((change.start, change.removed, change.inserted), (3, 2, 1));
//! ```

use std::ops::Range;

/// One mutation of a text container, in char units.
///
/// Applying the change means: keep `old[..start]`, drop `removed` chars,
/// insert `inserted` chars from the new text, keep the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextChange {
    /// First char index that differs.
    pub start: usize,
    /// Number of chars removed from the old text at `start`.
    pub removed: usize,
    /// Number of chars inserted into the new text at `start`.
    pub inserted: usize,
}

impl TextChange {
    /// Create a change descriptor.
    #[must_use]
    pub const fn new(start: usize, removed: usize, inserted: usize) -> Self {
        Self {
            start,
            removed,
            inserted,
        }
    }

    /// True if the change leaves the text as it was.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.removed == 0 && self.inserted == 0
    }

    /// Char range of the old text that was replaced.
    #[must_use]
    pub const fn removed_range(&self) -> Range<usize> {
        self.start..self.start + self.removed
    }

    /// Char range of the new text that was inserted.
    #[must_use]
    pub const fn inserted_range(&self) -> Range<usize> {
        self.start..self.start + self.inserted
    }

    /// Net change in length, in chars.
    #[must_use]
    pub fn delta(&self) -> isize {
        self.inserted as isize - self.removed as isize
    }
}

/// Compute the change that turns `old` into `new`.
#[must_use]
pub fn diff(old: &str, new: &str) -> TextChange {
    let old_len = old.chars().count();
    let new_len = new.chars().count();

    let prefix = old
        .chars()
        .zip(new.chars())
        .take_while(|(a, b)| a == b)
        .count();

    let max_suffix = old_len.min(new_len) - prefix;
    let suffix = old
        .chars()
        .rev()
        .zip(new.chars().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    TextChange {
        start: prefix,
        removed: old_len - prefix - suffix,
        inserted: new_len - prefix - suffix,
    }
}

/// Byte offset of char index `idx` in `text`; `text.len()` when `idx` is the
/// char length.
pub(crate) fn byte_offset(text: &str, idx: usize) -> usize {
    text.char_indices()
        .nth(idx)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Slice `text` by a char range. Callers guarantee the range is in bounds.
pub(crate) fn char_slice(text: &str, range: Range<usize>) -> &str {
    let start = byte_offset(text, range.start);
    let end = byte_offset(text, range.end);
    &text[start..end]
}
