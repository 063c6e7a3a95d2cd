#![forbid(unsafe_code)]

//! Text container with ordered, three-phase change notification.
//!
//! # Design
//!
//! [`TextContainer`] keeps its text in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). Every mutation goes through one path:
//!
//! 1. compute the [`TextChange`] against the current content,
//! 2. emit the "before" diagnostic record, then `before_change` to every
//!    observer with the old content,
//! 3. replace the content and bump the version,
//! 4. `on_change`, then `after_change` to every observer with the new
//!    content, then the "after" diagnostic record.
//!
//! No borrow of the shared state is held while callbacks run, so observers
//! may read the container, subscribe, or unsubscribe from inside a callback.
//!
//! # Performance
//!
//! | Operation       | Complexity                          |
//! |-----------------|-------------------------------------|
//! | `content()`     | O(n) clone                          |
//! | `len_chars()`   | O(1)                                |
//! | `set_text()`    | O(n + S) where S = observers        |
//! | `subscribe()`   | O(1) amortized                      |
//! | `unsubscribe()` | O(S)                                |
//!
//! # Failure Modes
//!
//! - **Re-entrant mutation**: mutating from inside a callback, a diagnostic
//!   sink, or a [`TextContainer::with`] closure returns
//!   [`TextError::ReentrantMutation`]. The in-flight mutation completes
//!   normally; the nested one is dropped.
//! - **Reference cycles**: an observer that keeps a strong [`TextContainer`]
//!   to its own container keeps the whole container alive forever. Observers
//!   that read back their container hold a [`WeakTextContainer`] instead.
//! - **Panicking observer**: the notifying flag is cleared on unwind, so
//!   the container stays usable if the panic is caught. Observers after the
//!   panicking one miss that mutation.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::change::{self, TextChange};
use crate::diagnostics::{DiagnosticSink, DiagnosticTags};
use crate::error::TextError;
use crate::observer::{AfterChangeFn, ChangeObserver};

type ObserverRc = Rc<RefCell<dyn ChangeObserver>>;

/// Opaque handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

struct ObserverEntry {
    id: u64,
    observer: ObserverRc,
    /// Cleared on unsubscribe so an in-flight dispatch skips the observer.
    active: Rc<Cell<bool>>,
}

struct Diagnostics {
    sink: Box<dyn DiagnosticSink>,
    tags: DiagnosticTags,
}

/// Shared interior for [`TextContainer`].
struct ContainerInner {
    content: String,
    len_chars: usize,
    version: u64,
    next_id: u64,
    notifying: bool,
    observers: Vec<ObserverEntry>,
    diagnostics: Option<Rc<Diagnostics>>,
}

/// A text value that notifies observers before and after each mutation.
///
/// Cloning a `TextContainer` creates a new handle to the **same** text and
/// observer list. The type is `!Send`; all access stays on one thread.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 per accepted mutation, including
///    `set_text` calls that leave the text unchanged.
/// 2. Observers are notified in subscription order, once per phase.
/// 3. No mutation is accepted while observers are being notified.
pub struct TextContainer {
    inner: Rc<RefCell<ContainerInner>>,
}

impl Clone for TextContainer {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Non-owning handle to a [`TextContainer`].
///
/// Does not keep the text or its observers alive. Obtained from
/// [`TextContainer::downgrade`].
#[derive(Clone)]
pub struct WeakTextContainer {
    inner: Weak<RefCell<ContainerInner>>,
}

impl WeakTextContainer {
    /// Strong handle, or `None` once every [`TextContainer`] is dropped.
    #[must_use]
    pub fn upgrade(&self) -> Option<TextContainer> {
        self.inner.upgrade().map(|inner| TextContainer { inner })
    }
}

impl std::fmt::Debug for WeakTextContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakTextContainer")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

impl Default for TextContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("TextContainer")
            .field("content", &inner.content)
            .field("version", &inner.version)
            .field("observer_count", &inner.observers.len())
            .field("notifying", &inner.notifying)
            .finish()
    }
}

/// Clears the notifying flag when dispatch ends, including on unwind.
struct NotifyGuard<'a> {
    inner: &'a RefCell<ContainerInner>,
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.notifying = false;
        }
    }
}

impl TextContainer {
    /// Create an empty container with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_text(String::new())
    }

    /// Create a container holding `text`. No notifications are sent.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let content = text.into();
        let len_chars = content.chars().count();
        Self {
            inner: Rc::new(RefCell::new(ContainerInner {
                content,
                len_chars,
                version: 0,
                next_id: 0,
                notifying: false,
                observers: Vec::new(),
                diagnostics: None,
            })),
        }
    }

    /// Clone of the current text.
    #[must_use]
    pub fn content(&self) -> String {
        self.inner.borrow().content.clone()
    }

    /// Handle that does not keep the container alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakTextContainer {
        WeakTextContainer {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Access the current text without cloning.
    ///
    /// Mutations attempted inside `f` return
    /// [`TextError::ReentrantMutation`].
    ///
    /// # Panics
    ///
    /// Panics if `f` calls [`subscribe`](Self::subscribe),
    /// [`unsubscribe`](Self::unsubscribe) or the diagnostics setters on
    /// this container.
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(&self.inner.borrow().content)
    }

    /// Length of the text in chars.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.inner.borrow().len_chars
    }

    /// True if the text has no chars.
    ///
    /// ```
    /// use autoedit_text::TextContainer;
    ///
    /// let text = TextContainer::with_text("x");
    /// assert!(!text.is_empty());
    /// text.clear().unwrap();
    /// assert!(text.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().content.is_empty()
    }

    /// Number of accepted mutations so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// True while observers of a mutation are being called.
    #[must_use]
    pub fn is_notifying(&self) -> bool {
        self.inner.borrow().notifying
    }

    /// Register an observer. It is appended to the notification order and
    /// first sees the next mutation that starts after this call.
    pub fn subscribe<O: ChangeObserver + 'static>(&self, observer: O) -> SubscriptionHandle {
        let observer: ObserverRc = Rc::new(RefCell::new(observer));
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.push(ObserverEntry {
            id,
            observer,
            active: Rc::new(Cell::new(true)),
        });
        tracing::trace!(subscription = id, observers = inner.observers.len(), "subscribed");
        SubscriptionHandle(id)
    }

    /// Register a closure called with the final text after each mutation.
    pub fn subscribe_fn(&self, callback: impl FnMut(&str) + 'static) -> SubscriptionHandle {
        self.subscribe(AfterChangeFn(callback))
    }

    /// Remove an observer. Returns `false` if it was already removed.
    ///
    /// Safe to call from inside a callback: the observer receives no
    /// further phases of the mutation being dispatched.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(pos) = inner.observers.iter().position(|e| e.id == handle.0) else {
            return false;
        };
        let entry = inner.observers.remove(pos);
        entry.active.set(false);
        tracing::trace!(subscription = handle.0, observers = inner.observers.len(), "unsubscribed");
        true
    }

    /// Install a diagnostic sink receiving the full text before and after
    /// every mutation. Replaces any previous sink.
    pub fn set_diagnostics(&self, sink: impl DiagnosticSink + 'static, tags: DiagnosticTags) {
        self.inner.borrow_mut().diagnostics = Some(Rc::new(Diagnostics {
            sink: Box::new(sink),
            tags,
        }));
    }

    /// Remove the diagnostic sink, if any.
    pub fn clear_diagnostics(&self) {
        self.inner.borrow_mut().diagnostics = None;
    }

    /// Replace the whole text.
    ///
    /// Observers are notified even when `text` equals the current content.
    ///
    /// # Errors
    ///
    /// [`TextError::ReentrantMutation`] if called from inside a callback.
    pub fn set_text(&self, text: impl Into<String>) -> Result<TextChange, TextError> {
        let text = text.into();
        self.mutate(|old, _| Ok((change::diff(old, &text), text)))
    }

    /// Replace the chars in `start..end` with `text`.
    ///
    /// # Errors
    ///
    /// [`TextError::OutOfBounds`] if `start > end` or `end` exceeds the
    /// length in chars; [`TextError::ReentrantMutation`] if called from
    /// inside a callback.
    pub fn replace(&self, start: usize, end: usize, text: &str) -> Result<TextChange, TextError> {
        self.mutate(|old, len| {
            if start > end || end > len {
                return Err(TextError::OutOfBounds { start, end, len });
            }
            let head = change::char_slice(old, 0..start);
            let tail = change::char_slice(old, end..len);
            let mut updated = String::with_capacity(head.len() + text.len() + tail.len());
            updated.push_str(head);
            updated.push_str(text);
            updated.push_str(tail);
            let change = TextChange::new(start, end - start, text.chars().count());
            Ok((change, updated))
        })
    }

    /// Insert `text` before char index `at`.
    ///
    /// # Errors
    ///
    /// See [`replace`](Self::replace).
    pub fn insert(&self, at: usize, text: &str) -> Result<TextChange, TextError> {
        self.replace(at, at, text)
    }

    /// Append `text` to the end.
    ///
    /// # Errors
    ///
    /// [`TextError::ReentrantMutation`] if called from inside a callback.
    pub fn append(&self, text: &str) -> Result<TextChange, TextError> {
        let len = self.len_chars();
        self.replace(len, len, text)
    }

    /// Remove all text.
    ///
    /// # Errors
    ///
    /// [`TextError::ReentrantMutation`] if called from inside a callback.
    pub fn clear(&self) -> Result<TextChange, TextError> {
        self.set_text(String::new())
    }

    /// Single mutation path. `build` receives the current text and its
    /// length in chars and returns the change plus the replacement text.
    fn mutate<F>(&self, build: F) -> Result<TextChange, TextError>
    where
        F: FnOnce(&str, usize) -> Result<(TextChange, String), TextError>,
    {
        let (old, updated, change, observers, diagnostics) = {
            let Ok(mut inner) = self.inner.try_borrow_mut() else {
                tracing::warn!("rejected text mutation while the text is borrowed");
                return Err(TextError::ReentrantMutation);
            };
            if inner.notifying {
                tracing::warn!(version = inner.version, "rejected reentrant text mutation");
                return Err(TextError::ReentrantMutation);
            }
            let (change, updated) = build(&inner.content, inner.len_chars)?;
            inner.notifying = true;
            let observers: Vec<(ObserverRc, Rc<Cell<bool>>)> = inner
                .observers
                .iter()
                .map(|e| (Rc::clone(&e.observer), Rc::clone(&e.active)))
                .collect();
            (
                inner.content.clone(),
                updated,
                change,
                observers,
                inner.diagnostics.clone(),
            )
        };
        let _guard = NotifyGuard { inner: &self.inner };

        if let Some(diag) = &diagnostics {
            diag.sink.log(&diag.tags.before, &old);
        }
        for (observer, active) in &observers {
            if active.get() {
                observer
                    .borrow_mut()
                    .before_change(&old, change.start, change.removed, change.inserted);
            }
        }

        let version = {
            let mut inner = self.inner.borrow_mut();
            inner.content.clone_from(&updated);
            inner.len_chars += change.inserted;
            inner.len_chars -= change.removed;
            inner.version += 1;
            inner.version
        };
        tracing::debug!(
            version,
            start = change.start,
            removed = change.removed,
            inserted = change.inserted,
            "text changed"
        );

        for (observer, active) in &observers {
            if active.get() {
                observer
                    .borrow_mut()
                    .on_change(&updated, change.start, change.removed, change.inserted);
            }
        }
        for (observer, active) in &observers {
            if active.get() {
                observer.borrow_mut().after_change(&updated);
            }
        }
        if let Some(diag) = &diagnostics {
            diag.sink.log(&diag.tags.after, &updated);
        }

        Ok(change)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;

    /// Records every callback as a readable line.
    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ChangeObserver for Recorder {
        fn before_change(&mut self, old: &str, start: usize, count: usize, after: usize) {
            self.log
                .borrow_mut()
                .push(format!("{}:before({old},{start},{count},{after})", self.name));
        }

        fn on_change(&mut self, new: &str, start: usize, before: usize, count: usize) {
            self.log
                .borrow_mut()
                .push(format!("{}:on({new},{start},{before},{count})", self.name));
        }

        fn after_change(&mut self, content: &str) {
            self.log
                .borrow_mut()
                .push(format!("{}:after({content})", self.name));
        }
    }

    fn recorder(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Recorder {
        Recorder {
            name,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn hello_scenario() {
        let text = TextContainer::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        text.subscribe(recorder("O", &log));

        let change = text.set_text("hello").unwrap();
        assert_eq!(change, TextChange::new(0, 0, 5));
        assert_eq!(text.content(), "hello");
        assert_eq!(
            *log.borrow(),
            vec![
                "O:before(,0,0,5)".to_owned(),
                "O:on(hello,0,0,5)".to_owned(),
                "O:after(hello)".to_owned(),
            ]
        );
    }

    #[test]
    fn help_scenario() {
        let text = TextContainer::with_text("hello");
        let change = text.set_text("help").unwrap();
        assert_eq!(change, TextChange::new(3, 2, 1));
        assert_eq!(text.content(), "help");
        assert_eq!(text.len_chars(), 4);
    }

    #[test]
    fn same_text_still_notifies() {
        let text = TextContainer::new();
        let count = Rc::new(Cell::new(0u32));
        let count_clone = Rc::clone(&count);
        text.subscribe_fn(move |_| count_clone.set(count_clone.get() + 1));

        text.set_text("a").unwrap();
        let change = text.set_text("a").unwrap();
        assert!(change.is_empty());
        assert_eq!(count.get(), 2);
        assert_eq!(text.version(), 2);
        assert_eq!(text.content(), "a");
    }

    #[test]
    fn observers_notified_in_subscription_order() {
        let text = TextContainer::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        text.subscribe(recorder("A", &log));
        text.subscribe(recorder("B", &log));

        text.set_text("x").unwrap();
        let names: Vec<String> = log.borrow().iter().map(|l| l[..1].to_owned()).collect();
        // Each phase visits every observer before the next phase starts.
        assert_eq!(names, vec!["A", "B", "A", "B", "A", "B"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let text = TextContainer::new();
        let count = Rc::new(Cell::new(0u32));
        let count_clone = Rc::clone(&count);
        let handle = text.subscribe_fn(move |_| count_clone.set(count_clone.get() + 1));

        text.set_text("1").unwrap();
        assert!(text.unsubscribe(handle));
        text.set_text("2").unwrap();
        assert_eq!(count.get(), 1);
        assert_eq!(text.observer_count(), 0);
    }

    #[test]
    fn unsubscribe_twice_is_noop() {
        let text = TextContainer::new();
        let handle = text.subscribe_fn(|_| {});
        assert!(text.unsubscribe(handle));
        assert!(!text.unsubscribe(handle));
    }

    #[test]
    fn observer_reads_container_during_callbacks() {
        let text = TextContainer::with_text("old");
        let seen = Rc::new(RefCell::new(Vec::new()));

        struct Reader {
            text: WeakTextContainer,
            seen: Rc<RefCell<Vec<String>>>,
        }
        impl Reader {
            fn read(&self) {
                if let Some(text) = self.text.upgrade() {
                    self.seen.borrow_mut().push(text.content());
                }
            }
        }
        impl ChangeObserver for Reader {
            fn before_change(&mut self, _: &str, _: usize, _: usize, _: usize) {
                self.read();
            }
            fn after_change(&mut self, _: &str) {
                self.read();
            }
        }

        text.subscribe(Reader {
            text: text.downgrade(),
            seen: Rc::clone(&seen),
        });
        text.set_text("new").unwrap();
        assert_eq!(*seen.borrow(), vec!["old".to_owned(), "new".to_owned()]);
    }

    #[test]
    fn reentrant_mutation_is_rejected() {
        let text = TextContainer::new();
        let result = Rc::new(RefCell::new(None));

        let handle = text.downgrade();
        let result_clone = Rc::clone(&result);
        text.subscribe_fn(move |_| {
            if let Some(text) = handle.upgrade() {
                *result_clone.borrow_mut() = Some(text.set_text("nested"));
            }
        });

        text.set_text("outer").unwrap();
        assert_eq!(*result.borrow(), Some(Err(TextError::ReentrantMutation)));
        assert_eq!(text.content(), "outer");
        assert_eq!(text.version(), 1);
        assert!(!text.is_notifying());
    }

    /// Attempts a nested `set_text` in one chosen phase.
    struct NestedWriter {
        text: WeakTextContainer,
        phase: &'static str,
        results: Rc<RefCell<Vec<Result<TextChange, TextError>>>>,
    }

    impl NestedWriter {
        fn attempt(&self, phase: &str) {
            if phase != self.phase {
                return;
            }
            if let Some(text) = self.text.upgrade() {
                self.results.borrow_mut().push(text.set_text("nested"));
            }
        }
    }

    impl ChangeObserver for NestedWriter {
        fn before_change(&mut self, _: &str, _: usize, _: usize, _: usize) {
            self.attempt("before");
        }
        fn on_change(&mut self, _: &str, _: usize, _: usize, _: usize) {
            self.attempt("on");
        }
    }

    #[test]
    fn reentrant_mutation_rejected_in_before_and_on_phases() {
        for phase in ["before", "on"] {
            let text = TextContainer::with_text("start");
            let results = Rc::new(RefCell::new(Vec::new()));
            text.subscribe(NestedWriter {
                text: text.downgrade(),
                phase,
                results: Rc::clone(&results),
            });

            text.set_text("outer").unwrap();
            assert_eq!(
                *results.borrow(),
                vec![Err(TextError::ReentrantMutation)],
                "phase {phase}"
            );
            assert_eq!(text.content(), "outer", "phase {phase}");
            assert_eq!(text.version(), 1, "phase {phase}");
            assert!(!text.is_notifying());
        }
    }

    #[test]
    fn reentrant_mutation_rejected_in_diagnostic_sink() {
        let text = TextContainer::with_text("start");
        let results = Rc::new(RefCell::new(Vec::new()));

        let handle = text.downgrade();
        let results_clone = Rc::clone(&results);
        text.set_diagnostics(
            move |_: &str, _: &str| {
                if let Some(text) = handle.upgrade() {
                    results_clone.borrow_mut().push(text.set_text("nested"));
                }
            },
            DiagnosticTags::default(),
        );

        text.set_text("outer").unwrap();
        // One attempt from the before record, one from the after record.
        assert_eq!(
            *results.borrow(),
            vec![
                Err(TextError::ReentrantMutation),
                Err(TextError::ReentrantMutation)
            ]
        );
        assert_eq!(text.content(), "outer");
        assert_eq!(text.version(), 1);
    }

    #[test]
    fn mutation_inside_with_is_rejected() {
        let text = TextContainer::with_text("abc");
        let result = text.with(|s| text.set_text(format!("{s}!")));
        assert_eq!(result, Err(TextError::ReentrantMutation));
        assert_eq!(text.with(|s| text.append("x")), Err(TextError::ReentrantMutation));
        assert_eq!(text.content(), "abc");
        assert_eq!(text.version(), 0);

        text.set_text("abc!").unwrap();
        assert_eq!(text.version(), 1);
    }

    struct DropFlag(Rc<Cell<bool>>);

    impl ChangeObserver for DropFlag {}

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn weak_handle_does_not_keep_container_alive() {
        let dropped = Rc::new(Cell::new(false));
        let text = TextContainer::with_text("a");
        let weak = text.downgrade();

        let reader = text.downgrade();
        text.subscribe_fn(move |_| {
            if let Some(text) = reader.upgrade() {
                let _ = text.len_chars();
            }
        });
        text.subscribe(DropFlag(Rc::clone(&dropped)));
        text.set_text("b").unwrap();

        assert_eq!(weak.upgrade().map(|t| t.content()).as_deref(), Some("b"));
        drop(text);
        assert!(dropped.get());
        assert!(weak.upgrade().is_none());
        assert!(format!("{weak:?}").contains("alive: false"));
    }

    #[test]
    fn unsubscribe_mid_dispatch_skips_remaining_phases() {
        let text = TextContainer::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let victim = Rc::new(Cell::new(None));

        struct Remover {
            text: WeakTextContainer,
            victim: Rc<Cell<Option<SubscriptionHandle>>>,
        }
        impl ChangeObserver for Remover {
            fn before_change(&mut self, _: &str, _: usize, _: usize, _: usize) {
                if let (Some(handle), Some(text)) = (self.victim.get(), self.text.upgrade()) {
                    text.unsubscribe(handle);
                }
            }
        }

        text.subscribe(Remover {
            text: text.downgrade(),
            victim: Rc::clone(&victim),
        });
        victim.set(Some(text.subscribe(recorder("V", &log))));

        text.set_text("x").unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn subscribe_mid_dispatch_waits_for_next_mutation() {
        let text = TextContainer::new();
        let late_count = Rc::new(Cell::new(0u32));
        let subscribed = Rc::new(Cell::new(false));

        let handle = text.downgrade();
        let late = Rc::clone(&late_count);
        let flag = Rc::clone(&subscribed);
        text.subscribe_fn(move |_| {
            if !flag.replace(true)
                && let Some(text) = handle.upgrade()
            {
                let late = Rc::clone(&late);
                text.subscribe_fn(move |_| late.set(late.get() + 1));
            }
        });

        text.set_text("1").unwrap();
        assert_eq!(late_count.get(), 0);
        text.set_text("2").unwrap();
        assert_eq!(late_count.get(), 1);
    }

    #[test]
    fn replace_range() {
        let text = TextContainer::with_text("hello world");
        let change = text.replace(6, 11, "there").unwrap();
        assert_eq!(change, TextChange::new(6, 5, 5));
        assert_eq!(text.content(), "hello there");
    }

    #[test]
    fn replace_out_of_bounds() {
        let text = TextContainer::with_text("abc");
        assert_eq!(
            text.replace(1, 4, "x"),
            Err(TextError::OutOfBounds {
                start: 1,
                end: 4,
                len: 3
            })
        );
        assert_eq!(
            text.replace(2, 1, "x"),
            Err(TextError::OutOfBounds {
                start: 2,
                end: 1,
                len: 3
            })
        );
        assert_eq!(text.version(), 0);
    }

    #[test]
    fn insert_append_clear() {
        let text = TextContainer::with_text("ñb");
        text.insert(1, "a").unwrap();
        assert_eq!(text.content(), "ñab");
        text.append("c").unwrap();
        assert_eq!(text.content(), "ñabc");
        assert_eq!(text.len_chars(), 4);
        text.clear().unwrap();
        assert!(text.is_empty());
        assert_eq!(text.len_chars(), 0);
        assert_eq!(text.version(), 3);
    }

    #[test]
    fn diagnostics_record_before_and_after() {
        let text = TextContainer::with_text("a");
        let sink = MemorySink::new();
        text.set_diagnostics(sink.clone(), DiagnosticTags::new("pre", "post"));

        text.set_text("b").unwrap();
        let records = sink.take();
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].tag.as_str(), records[0].message.as_str()), ("pre", "a"));
        assert_eq!((records[1].tag.as_str(), records[1].message.as_str()), ("post", "b"));

        text.clear_diagnostics();
        text.set_text("c").unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn clone_shares_state() {
        let a = TextContainer::new();
        let b = a.clone();
        a.set_text("shared").unwrap();
        assert_eq!(b.content(), "shared");
        assert_eq!(b.version(), 1);
    }

    #[test]
    fn with_access() {
        let text = TextContainer::with_text("abc");
        assert_eq!(text.with(str::len), 3);
    }

    #[test]
    fn debug_format() {
        let text = TextContainer::with_text("dbg");
        let dbg = format!("{text:?}");
        assert!(dbg.contains("TextContainer"));
        assert!(dbg.contains("dbg"));
        assert!(dbg.contains("version"));
    }

    #[test]
    fn panicking_observer_leaves_container_usable() {
        let text = TextContainer::new();
        let handle = text.subscribe_fn(|s| {
            if s == "boom" {
                panic!("observer failure");
            }
        });

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = text.set_text("boom");
        }));
        assert!(outcome.is_err());
        assert!(!text.is_notifying());

        text.unsubscribe(handle);
        assert!(text.set_text("fine").is_ok());
    }
}
