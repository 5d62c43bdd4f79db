//! Edit notifications delivered to the host.
//!
//! Listeners are owned by a single session; there is no global registry, so
//! two sessions never see each other's edits.

use crate::text::WrapEvent;

/// What kind of change produced an [`EditEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Backspace,
    Delete,
    Enter,
    Paste,
    Cut,
    /// Text replaced wholesale through `set_text`.
    Load,
}

/// Snapshot passed to listeners after a mutating operation.
#[derive(Clone, Copy, Debug)]
pub struct EditEvent<'a> {
    pub kind: EditKind,
    /// Text after the edit.
    pub text: &'a str,
    /// Caret after the edit.
    pub cursor: usize,
    pub selection: Option<(usize, usize)>,
    /// Session revision after the edit.
    pub revision: u64,
    /// Wraps performed as part of the edit.
    pub wraps: &'a [WrapEvent],
}

/// Handle returned by registration, used to remove a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type EditCallback = Box<dyn FnMut(&EditEvent<'_>) + Send + 'static>;

/// Ordered set of edit callbacks.
#[derive(Default)]
pub struct EditListeners {
    next_id: u64,
    callbacks: Vec<(ListenerId, EditCallback)>,
}

impl EditListeners {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; callbacks run in registration order.
    pub fn register<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&EditEvent<'_>) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Check if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Deliver an event to every callback.
    pub fn emit(&mut self, event: &EditEvent<'_>) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }
}

impl std::fmt::Debug for EditListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditListeners")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn event(text: &str) -> EditEvent<'_> {
        EditEvent {
            kind: EditKind::Insert,
            text,
            cursor: text.chars().count(),
            selection: None,
            revision: 1,
            wraps: &[],
        }
    }

    #[test]
    fn test_emit_reaches_all_listeners() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut listeners = EditListeners::new();
        for _ in 0..2 {
            let calls = Arc::clone(&calls);
            listeners.register(move |ev| {
                assert_eq!(ev.text, "hi");
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }
        listeners.emit(&event("hi"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_remove_listener() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut listeners = EditListeners::new();
        let counter = Arc::clone(&calls);
        let id = listeners.register(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert!(listeners.is_empty());
        listeners.emit(&event("x"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
