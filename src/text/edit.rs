//! Editable text with cursor, selection and soft wrap.
//!
//! This module provides [`EditBuffer`], which pairs a [`TextBuffer`] with the
//! session's [`CursorState`] and applies each edit as one step: selection
//! replacement, the buffer change, the cursor update, and the optional wrap.
//!
//! # Examples
//!
//! ```
//! use notepad_core::text::EditBuffer;
//!
//! let mut buf = EditBuffer::with_text("Hello World");
//! buf.set_cursor(11);
//! buf.backspace().unwrap();
//! assert_eq!(buf.text(), "Hello Worl");
//! assert_eq!(buf.cursor().primary, 10);
//! ```

use crate::error::Result;
use crate::text::buffer::TextBuffer;
use crate::text::cursor::CursorState;
use crate::text::wrap::{WordWrapEngine, WrapEvent};

/// What an edit did to the text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditOutcome {
    /// Whether any character changed.
    pub changed: bool,
    /// Wraps performed, in order.
    pub wraps: Vec<WrapEvent>,
}

impl EditOutcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            wraps: Vec::new(),
        }
    }

    fn merge(&mut self, other: Self) {
        self.changed |= other.changed;
        self.wraps.extend(other.wraps);
    }
}

/// Text buffer with cursor-aware editing operations.
///
/// Every operation keeps `cursor <= len` and never surfaces an out-of-range
/// offset to the underlying [`TextBuffer`]; the `Result` only carries
/// contract violations from that layer.
#[derive(Debug, Default)]
pub struct EditBuffer {
    buffer: TextBuffer,
    cursor: CursorState,
    wrap: Option<WordWrapEngine>,
    copied: String,
}

impl EditBuffer {
    /// Create a new empty edit buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edit buffer with initial text and the cursor at the start.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::with_text(text),
            ..Self::default()
        }
    }

    /// Attach (or detach) the wrap engine used for typed characters.
    pub fn set_wrap_engine(&mut self, engine: Option<WordWrapEngine>) {
        self.wrap = engine;
    }

    /// Mutable wrap engine, if wrapping is on.
    pub fn wrap_engine_mut(&mut self) -> Option<&mut WordWrapEngine> {
        self.wrap.as_mut()
    }

    /// Get the underlying text buffer.
    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Get the full text content.
    #[must_use]
    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// Replace the entire text without wrapping; the cursor goes to the start.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.cursor = CursorState::default();
    }

    /// Current cursor state.
    #[must_use]
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// Replace the cursor state, clamping it to the text.
    pub fn set_cursor_state(&mut self, cursor: CursorState) {
        self.cursor = cursor.clamped(self.buffer.len());
    }

    /// Place the caret at `offset` (clamped) and drop any selection.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = CursorState::at(offset.min(self.buffer.len()));
    }

    /// Selected range, if any.
    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.cursor.selection()
    }

    /// Text held by the logical copy buffer.
    #[must_use]
    pub fn copied(&self) -> &str {
        &self.copied
    }

    /// Remove the selection, leaving the caret at its start.
    pub fn delete_selection(&mut self) -> Result<EditOutcome> {
        let Some((start, end)) = self.cursor.selection() else {
            self.cursor.selection_anchor = None;
            return Ok(EditOutcome::unchanged());
        };
        self.buffer.delete_range(start, end)?;
        self.cursor = CursorState::at(start);
        Ok(EditOutcome::changed())
    }

    /// Insert text at the caret, replacing any selection.
    ///
    /// A single printable character is followed by a wrap check.
    pub fn insert(&mut self, text: &str) -> Result<EditOutcome> {
        let mut outcome = self.delete_selection()?;
        if text.is_empty() {
            return Ok(outcome);
        }

        let at = self.cursor.primary;
        self.buffer.insert(at, text)?;
        self.cursor = CursorState::at(at + text.chars().count());
        outcome.changed = true;

        if is_printable_char(text) {
            if let Some(engine) = self.wrap.as_mut() {
                if let Some(event) = engine.wrap_at_cursor(&mut self.buffer, self.cursor.primary)? {
                    self.cursor = CursorState::at(event.cursor);
                    outcome.wraps.push(event);
                }
            }
        }
        Ok(outcome)
    }

    /// Insert a single character.
    pub fn insert_char(&mut self, ch: char) -> Result<EditOutcome> {
        let mut tmp = [0u8; 4];
        self.insert(ch.encode_utf8(&mut tmp))
    }

    /// Insert an explicit line break; never wrapped.
    pub fn enter(&mut self) -> Result<EditOutcome> {
        self.insert("\n")
    }

    /// Insert `text` one character at a time, as if typed.
    pub fn paste(&mut self, text: &str) -> Result<EditOutcome> {
        let mut outcome = EditOutcome::unchanged();
        for ch in text.chars() {
            outcome.merge(self.insert_char(ch)?);
        }
        if text.is_empty() {
            outcome.merge(self.delete_selection()?);
        }
        Ok(outcome)
    }

    /// Delete the selection, or the character before the caret.
    pub fn backspace(&mut self) -> Result<EditOutcome> {
        if self.cursor.has_selection() {
            return self.delete_selection();
        }
        self.cursor.selection_anchor = None;
        let at = self.cursor.primary;
        if at == 0 {
            return Ok(EditOutcome::unchanged());
        }
        self.buffer.delete_range(at - 1, at)?;
        self.cursor = CursorState::at(at - 1);
        Ok(EditOutcome::changed())
    }

    /// Delete the selection, or the character after the caret.
    pub fn delete_forward(&mut self) -> Result<EditOutcome> {
        if self.cursor.has_selection() {
            return self.delete_selection();
        }
        self.cursor.selection_anchor = None;
        let at = self.cursor.primary;
        if at >= self.buffer.len() {
            return Ok(EditOutcome::unchanged());
        }
        self.buffer.delete_range(at, at + 1)?;
        Ok(EditOutcome::changed())
    }

    /// Copy the selection into the copy buffer. Returns false with no selection.
    pub fn copy(&mut self) -> bool {
        match self.cursor.selection() {
            Some((start, end)) => {
                self.copied = self.buffer.slice(start, end);
                true
            }
            None => false,
        }
    }

    /// Move the selection into the copy buffer.
    pub fn cut(&mut self) -> Result<EditOutcome> {
        let Some((start, end)) = self.cursor.selection() else {
            return Ok(EditOutcome::unchanged());
        };
        self.copied = self.buffer.delete_range(start, end)?;
        self.cursor = CursorState::at(start);
        Ok(EditOutcome::changed())
    }

    /// Paste the copy buffer as if typed.
    pub fn paste_copied(&mut self) -> Result<EditOutcome> {
        let copied = self.copied.clone();
        self.paste(&copied)
    }
}

/// Check if `text` is exactly one non-control character.
fn is_printable_char(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if !ch.is_control())
}
