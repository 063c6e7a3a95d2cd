#![forbid(unsafe_code)]

//! Observer contract for text changes.

/// Receives the three phases of every mutation of a
/// [`TextContainer`](crate::TextContainer).
///
/// All methods default to doing nothing, so an observer only implements the
/// phases it cares about. Callbacks run synchronously on the mutating
/// thread; mutating the container from inside one is rejected.
pub trait ChangeObserver {
    /// Called before the content is replaced.
    ///
    /// `count` chars starting at `start` in `old` are about to be replaced
    /// by `after` new chars.
    fn before_change(&mut self, old: &str, start: usize, count: usize, after: usize) {
        let _ = (old, start, count, after);
    }

    /// Called right after the content was replaced.
    ///
    /// `count` chars starting at `start` in `new` replaced `before` old
    /// chars.
    fn on_change(&mut self, new: &str, start: usize, before: usize, count: usize) {
        let _ = (new, start, before, count);
    }

    /// Called last, with the final content.
    fn after_change(&mut self, content: &str) {
        let _ = content;
    }
}

/// Adapter that runs a closure in the after-change phase only.
pub struct AfterChangeFn<F>(pub F);

impl<F: FnMut(&str)> ChangeObserver for AfterChangeFn<F> {
    fn after_change(&mut self, content: &str) {
        (self.0)(content);
    }
}

impl<F> std::fmt::Debug for AfterChangeFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AfterChangeFn").finish_non_exhaustive()
    }
}
