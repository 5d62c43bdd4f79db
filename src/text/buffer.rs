//! Owned character storage for one editing session.
//!
//! [`TextBuffer`] keeps the text in a rope so inserts and deletes stay cheap
//! on long notes, and materializes a flat `String` lazily for callers that
//! need a `&str` view. Line lookups go through the rope, so per-keystroke
//! work does not touch the flat copy. All offsets are character offsets.

use crate::error::{EditError, Result};
use crate::text::line::Line;
use crate::text::rope::RopeWrapper;
use std::cell::OnceCell;

/// Text storage with bounds-checked insert and delete primitives.
///
/// The buffer never moves a cursor; keeping cursors in range after an edit is
/// the caller's job.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    rope: RopeWrapper,
    flat: OnceCell<String>,
    /// Bumped by every call that changes the content.
    version: u64,
}

impl TextBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: RopeWrapper::from_str(text),
            flat: OnceCell::new(),
            version: 0,
        }
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if the buffer holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    /// Number of lines, including the empty line after a trailing `\n`.
    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content version; changes whenever the text does.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Index of the line holding `offset`, clamped to the last line.
    ///
    /// The offset just before a `\n` belongs to the line it terminates.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset)
    }

    /// Range of line `idx`, excluding its `\n`, clamped to the last line.
    #[must_use]
    pub fn line(&self, idx: usize) -> Line {
        let idx = idx.min(self.len_lines() - 1);
        let start = self.rope.line_to_char(idx);
        let end = if idx + 1 < self.len_lines() {
            self.rope.line_to_char(idx + 1) - 1
        } else {
            self.len()
        };
        Line { start, end }
    }

    /// Range of the line holding `offset`.
    #[must_use]
    pub fn line_at(&self, offset: usize) -> Line {
        self.line(self.line_of(offset))
    }

    /// Borrow the whole text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.flat.get_or_init(|| self.rope.to_string())
    }

    /// Character at `offset`, if any.
    #[must_use]
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.rope.char(offset)
    }

    /// Copy out the characters in `start..end`.
    ///
    /// Returns an empty string for malformed ranges.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.rope.slice_to_string(start, end)
    }

    /// Insert `s` before the character at `at`.
    pub fn insert(&mut self, at: usize, s: &str) -> Result<()> {
        let len = self.len();
        if at > len {
            return Err(EditError::OutOfBounds { offset: at, len });
        }
        if s.is_empty() {
            return Ok(());
        }
        self.rope.insert(at, s);
        self.touch();
        Ok(())
    }

    /// Remove `start..end` and return the removed text.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<String> {
        let len = self.len();
        if start > end || end > len {
            return Err(EditError::InvalidRange { start, end, len });
        }
        if start == end {
            return Ok(String::new());
        }
        let removed = self.rope.slice_to_string(start, end);
        self.rope.remove(start, end);
        self.touch();
        Ok(removed)
    }

    /// Replace the whole content.
    pub fn set_text(&mut self, text: &str) {
        self.rope.replace(text);
        self.touch();
    }

    fn touch(&mut self) {
        self.flat.take();
        self.version += 1;
    }
}
