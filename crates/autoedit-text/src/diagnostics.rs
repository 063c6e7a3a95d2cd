#![forbid(unsafe_code)]

//! Diagnostic sinks for text changes.
//!
//! A container with a sink installed emits two records per mutation: the
//! full text before the change and the full text after it. The container
//! only depends on the [`DiagnosticSink`] capability; concrete sinks live
//! here so hosts can pick one without writing glue.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::Level;

/// Capability that accepts `(tag, message)` diagnostic records.
pub trait DiagnosticSink {
    /// Record one diagnostic line.
    fn log(&self, tag: &str, message: &str);
}

impl<F: Fn(&str, &str)> DiagnosticSink for F {
    fn log(&self, tag: &str, message: &str) {
        self(tag, message);
    }
}

/// Tags attached to the before/after records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticTags {
    /// Tag for the record carrying the text before the change.
    pub before: String,
    /// Tag for the record carrying the text after the change.
    pub after: String,
}

impl Default for DiagnosticTags {
    fn default() -> Self {
        Self {
            before: "text.before".to_owned(),
            after: "text.after".to_owned(),
        }
    }
}

impl DiagnosticTags {
    /// Create tags for the before and after records.
    #[must_use]
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Sink that forwards records as `tracing` events.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: Level,
}

impl Default for TracingSink {
    fn default() -> Self {
        Self { level: Level::DEBUG }
    }
}

impl TracingSink {
    /// Sink emitting at `DEBUG`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level records are emitted at.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Level records are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl DiagnosticSink for TracingSink {
    fn log(&self, tag: &str, message: &str) {
        // `tracing` needs the level at compile time.
        let level = self.level;
        if level == Level::ERROR {
            tracing::error!(tag = %tag, "{message}");
        } else if level == Level::WARN {
            tracing::warn!(tag = %tag, "{message}");
        } else if level == Level::INFO {
            tracing::info!(tag = %tag, "{message}");
        } else if level == Level::DEBUG {
            tracing::debug!(tag = %tag, "{message}");
        } else {
            tracing::trace!(tag = %tag, "{message}");
        }
    }
}

/// One recorded diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    /// Before or after tag the record was emitted with.
    pub tag: String,
    /// Full text at the time of the record.
    pub message: String,
}

/// In-memory sink. Clones share the same record list.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Rc<RefCell<Vec<DiagnosticRecord>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far.
    #[must_use]
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.borrow().clone()
    }

    /// Remove and return all records.
    pub fn take(&self) -> Vec<DiagnosticRecord> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn log(&self, tag: &str, message: &str) {
        self.records.borrow_mut().push(DiagnosticRecord {
            tag: tag.to_owned(),
            message: message.to_owned(),
        });
    }
}
