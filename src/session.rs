//! One editing session: the text, its cursor and everything that reacts to
//! edits.
//!
//! The host owns an [`EditSession`] by value and drives it through
//! [`EditSession::dispatch`] (or [`EditSession::handle_key`]). Each call runs
//! to completion: the buffer and cursor are updated, a wrap is applied if
//! needed, the viewport follows the cursor, and `on_edit` listeners hear
//! about text changes before the call returns.
//!
//! # Examples
//!
//! ```
//! use notepad_core::{EditSession, Intent, Motion, SessionConfig, WrapConfig};
//!
//! let config = SessionConfig::default()
//!     .with_wrap(WrapConfig::new(50, |text: &str| text.chars().count() as u32 * 10));
//! let mut session = EditSession::new(config);
//! for ch in "aaaaa bbbbb".chars() {
//!     session.dispatch(Intent::Insert(ch));
//! }
//! assert_eq!(session.get_text(), "aaaaa\nbbbbb");
//!
//! session.dispatch(Intent::extend(Motion::Home));
//! assert_eq!(session.get_selection(), Some((6, 11)));
//! ```

use crate::config::SessionConfig;
use crate::error::{EditError, Result};
use crate::event::{EditEvent, EditKind, EditListeners, ListenerId};
use crate::input::{Intent, KeyEvent};
use crate::text::{
    CursorState, EditBuffer, EditOutcome, Navigator, ViewportState, WordWrapEngine,
    WrapConfig, WrapEvent,
};

/// State the host needs after an intent has been applied.
#[derive(Clone, Debug, PartialEq)]
pub struct EditResult {
    /// Whether the text changed.
    pub text_changed: bool,
    /// Caret offset.
    pub cursor: usize,
    pub selection: Option<(usize, usize)>,
    /// Caret line.
    pub line: usize,
    /// Caret column.
    pub column: usize,
    /// Total lines, counting a trailing empty line.
    pub total_lines: usize,
    /// First visible line.
    pub top_line: usize,
    /// Scrollbar position in `[0, 1]`.
    pub scroll_fraction: f32,
    /// Session revision; bumped by every text change.
    pub revision: u64,
    /// Wraps performed by this intent.
    pub wraps: Vec<WrapEvent>,
}

/// An editing session over one note.
#[derive(Debug)]
pub struct EditSession {
    edit: EditBuffer,
    navigator: Navigator,
    viewport: ViewportState,
    listeners: EditListeners,
    revision: u64,
    measure_cache_capacity: usize,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl EditSession {
    /// Start an empty session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut edit = EditBuffer::new();
        edit.set_wrap_engine(
            config
                .wrap
                .map(|wrap| WordWrapEngine::new(wrap, config.measure_cache_capacity)),
        );
        Self {
            edit,
            navigator: Navigator::new(config.page_lines),
            viewport: ViewportState::new(config.visible_lines),
            listeners: EditListeners::new(),
            revision: 0,
            measure_cache_capacity: config.measure_cache_capacity,
        }
    }

    /// Start a session holding `text`.
    #[must_use]
    pub fn with_text(config: SessionConfig, text: &str) -> Self {
        let mut session = Self::new(config);
        session.edit.set_text(text);
        session
    }

    /// Current text.
    #[must_use]
    pub fn get_text(&self) -> &str {
        self.edit.text()
    }

    /// Load text as stored; no wrapping is applied.
    ///
    /// The cursor moves to the start and listeners receive an
    /// [`EditKind::Load`] event.
    pub fn set_text(&mut self, text: &str) {
        self.edit.set_text(text);
        self.viewport.top_line = 0;
        self.revision += 1;
        tracing::debug!(chars = self.edit.buffer().len(), "session text loaded");
        self.notify(EditKind::Load, &[]);
    }

    /// Caret offset.
    #[must_use]
    pub fn get_cursor(&self) -> usize {
        self.edit.cursor().primary
    }

    /// Full cursor state, including the anchor.
    #[must_use]
    pub fn cursor_state(&self) -> CursorState {
        self.edit.cursor()
    }

    /// Selected range, if any.
    #[must_use]
    pub fn get_selection(&self) -> Option<(usize, usize)> {
        self.edit.selection()
    }

    /// Text in the logical copy buffer.
    #[must_use]
    pub fn copied(&self) -> &str {
        self.edit.copied()
    }

    /// Revision counter; increases on every text change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Resize the visible window and re-follow the cursor.
    pub fn set_visible_lines(&mut self, visible_lines: u32) {
        self.viewport.visible_lines = visible_lines.max(1);
        let buffer = self.edit.buffer();
        let line = buffer.line_of(self.get_cursor());
        let total_lines = buffer.len_lines();
        self.viewport.follow(line, total_lines);
    }

    /// Replace (or remove) the wrap settings, e.g. after a font change.
    ///
    /// Existing text is not re-wrapped.
    pub fn set_wrap_config(&mut self, wrap: Option<WrapConfig>) {
        tracing::debug!(
            max_width_px = wrap.as_ref().map(|w| w.max_width_px),
            "wrap config replaced"
        );
        let Some(config) = wrap else {
            self.edit.set_wrap_engine(None);
            return;
        };
        if let Some(engine) = self.edit.wrap_engine_mut() {
            engine.set_config(config);
        } else {
            let engine = WordWrapEngine::new(config, self.measure_cache_capacity);
            self.edit.set_wrap_engine(Some(engine));
        }
    }

    /// Register an edit listener.
    pub fn on_edit<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&EditEvent<'_>) + Send + 'static,
    {
        self.listeners.register(callback)
    }

    /// Remove an edit listener.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Map a key event to an intent and apply it.
    ///
    /// Returns `None` for keys the editor ignores.
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<EditResult> {
        Intent::from_key(event).map(|intent| self.dispatch(intent))
    }

    /// Apply one intent.
    pub fn dispatch(&mut self, intent: Intent) -> EditResult {
        tracing::trace!(?intent, "dispatch");
        let version = self.edit.buffer().version();
        let outcome = match self.apply(&intent) {
            Ok(outcome) => outcome,
            Err(err) => self.recover(&intent, &err, version),
        };
        self.commit(edit_kind(&intent), outcome)
    }

    fn apply(&mut self, intent: &Intent) -> Result<EditOutcome> {
        let outcome = match intent {
            Intent::Move { motion, extend } => {
                let state =
                    self.navigator
                        .apply(self.edit.cursor(), self.edit.text(), *motion, *extend);
                self.edit.set_cursor_state(state);
                EditOutcome::default()
            }
            Intent::SelectAll => {
                let state = self.navigator.select_all(self.edit.text());
                self.edit.set_cursor_state(state);
                EditOutcome::default()
            }
            Intent::Copy => {
                self.edit.copy();
                EditOutcome::default()
            }
            Intent::Insert(ch) => self.edit.insert_char(*ch)?,
            Intent::Backspace => self.edit.backspace()?,
            Intent::Delete => self.edit.delete_forward()?,
            Intent::Enter => self.edit.enter()?,
            Intent::Paste(text) => self.edit.paste(text)?,
            Intent::PasteCopied => self.edit.paste_copied()?,
            Intent::Cut => self.edit.cut()?,
        };
        Ok(outcome)
    }

    /// Settle the session after the buffer rejected an edit.
    ///
    /// The edit counts as a change only if the buffer moved past `version`
    /// before the failure.
    fn recover(&mut self, intent: &Intent, err: &EditError, version: u64) -> EditOutcome {
        tracing::error!(%err, ?intent, "edit rejected by text buffer");
        let cursor = self.edit.cursor();
        self.edit.set_cursor_state(cursor);
        EditOutcome {
            changed: self.edit.buffer().version() != version,
            wraps: Vec::new(),
        }
    }

    fn commit(&mut self, kind: Option<EditKind>, outcome: EditOutcome) -> EditResult {
        if outcome.changed {
            self.revision += 1;
            if let Some(kind) = kind {
                self.notify(kind, &outcome.wraps);
            }
        }
        self.result(outcome)
    }

    fn result(&mut self, outcome: EditOutcome) -> EditResult {
        let cursor = self.edit.cursor();
        let buffer = self.edit.buffer();
        let line = buffer.line_of(cursor.primary);
        let column = cursor.primary - buffer.line(line).start;
        let total_lines = buffer.len_lines();
        self.viewport.follow(line, total_lines);

        EditResult {
            text_changed: outcome.changed,
            cursor: cursor.primary,
            selection: cursor.selection(),
            line,
            column,
            total_lines,
            top_line: self.viewport.top_line as usize,
            scroll_fraction: self.viewport.fraction(total_lines),
            revision: self.revision,
            wraps: outcome.wraps,
        }
    }

    fn notify(&mut self, kind: EditKind, wraps: &[WrapEvent]) {
        if self.listeners.is_empty() {
            return;
        }
        let cursor = self.edit.cursor();
        let event = EditEvent {
            kind,
            text: self.edit.text(),
            cursor: cursor.primary,
            selection: cursor.selection(),
            revision: self.revision,
            wraps,
        };
        self.listeners.emit(&event);
    }
}

fn edit_kind(intent: &Intent) -> Option<EditKind> {
    match intent {
        Intent::Insert(_) => Some(EditKind::Insert),
        Intent::Backspace => Some(EditKind::Backspace),
        Intent::Delete => Some(EditKind::Delete),
        Intent::Enter => Some(EditKind::Enter),
        Intent::Paste(_) | Intent::PasteCopied => Some(EditKind::Paste),
        Intent::Cut => Some(EditKind::Cut),
        Intent::Move { .. } | Intent::Copy | Intent::SelectAll => None,
    }
}
