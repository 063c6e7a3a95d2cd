#![forbid(unsafe_code)]

//! Change-notifying text container.
//!
//! # Role in autoedit
//! `autoedit-text` is the core of the workspace. It owns the text content of
//! an editable field and broadcasts every mutation to registered observers.
//! The widget model (`autoedit-widgets`) wraps one container and adds
//! presentation state; the demo binary wires a logging observer to it.
//!
//! # Primary types
//! - [`TextContainer`]: shared, single-threaded text value with observer
//!   dispatch and version tracking.
//! - [`ChangeObserver`]: three-phase callback contract
//!   (`before_change` → `on_change` → `after_change`).
//! - [`TextChange`]: the char range a mutation touched, computed with a
//!   prefix/suffix diff.
//! - [`DiagnosticSink`]: injected `(tag, message)` logging capability.
//!
//! # Invariants
//!
//! 1. Every accepted mutation notifies every live observer exactly once per
//!    phase, in the order before → on → after.
//! 2. Observers are notified in subscription order.
//! 3. Mutating the container from inside a notification fails with
//!    [`TextError::ReentrantMutation`] and leaves the content untouched.
//! 4. An unsubscribed observer receives no further callbacks, including the
//!    remaining phases of an in-flight dispatch.

pub mod change;
pub mod container;
pub mod diagnostics;
pub mod error;
pub mod observer;

pub use change::{TextChange, diff};
pub use container::{SubscriptionHandle, TextContainer, WeakTextContainer};
pub use diagnostics::{DiagnosticRecord, DiagnosticSink, DiagnosticTags, MemorySink, TracingSink};
pub use error::TextError;
pub use observer::{AfterChangeFn, ChangeObserver};
