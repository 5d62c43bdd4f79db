//! Cursor and selection navigation.
//!
//! Navigation is a pure function of the cursor state, the text and a
//! [`Motion`]; it never touches the buffer.

// if-let-else is clearer than map_or for the selection logic
#![allow(clippy::option_if_let_else)]

use crate::text::line::LineIndex;

/// Lines moved by Page Up / Page Down unless configured otherwise.
pub const DEFAULT_PAGE_LINES: usize = 10;

/// Cursor offset plus an optional selection anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Character offset of the caret.
    pub primary: usize,
    /// Where the selection started, if one is being extended.
    pub selection_anchor: Option<usize>,
}

impl CursorState {
    /// A caret at `offset` with no selection.
    #[must_use]
    pub fn at(offset: usize) -> Self {
        Self {
            primary: offset,
            selection_anchor: None,
        }
    }

    /// A selection from `anchor` to `primary`.
    #[must_use]
    pub fn selecting(anchor: usize, primary: usize) -> Self {
        Self {
            primary,
            selection_anchor: Some(anchor),
        }
    }

    /// The selected range as `(start, end)`, if non-empty.
    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        match self.selection_anchor {
            Some(anchor) if anchor != self.primary => {
                Some((anchor.min(self.primary), anchor.max(self.primary)))
            }
            _ => None,
        }
    }

    /// Check whether a non-empty selection exists.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    /// Clamp both offsets to `len`.
    #[must_use]
    pub fn clamped(self, len: usize) -> Self {
        Self {
            primary: self.primary.min(len),
            selection_anchor: self.selection_anchor.map(|a| a.min(len)),
        }
    }
}

/// A navigation intent, independent of the selection flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    WordLeft,
    WordRight,
    Home,
    End,
    PageUp,
    PageDown,
    BufferStart,
    BufferEnd,
}

/// Applies motions to cursor state.
#[derive(Clone, Copy, Debug)]
pub struct Navigator {
    page_lines: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            page_lines: DEFAULT_PAGE_LINES,
        }
    }
}

impl Navigator {
    /// Create a navigator paging by `page_lines` (minimum 1).
    #[must_use]
    pub fn new(page_lines: usize) -> Self {
        Self {
            page_lines: page_lines.max(1),
        }
    }

    /// Lines moved per page.
    #[must_use]
    pub fn page_lines(&self) -> usize {
        self.page_lines
    }

    /// Move the cursor.
    ///
    /// With `extend`, the first move anchors the selection at the pre-move
    /// offset. Without it, any selection is dropped before moving.
    #[must_use]
    pub fn apply(&self, state: CursorState, text: &str, motion: Motion, extend: bool) -> CursorState {
        let index = LineIndex::new(text);
        let len = index.text_len();
        let state = state.clamped(len);

        let anchor = if extend {
            Some(state.selection_anchor.unwrap_or(state.primary))
        } else {
            None
        };

        let primary = match motion {
            Motion::Left => state.primary.saturating_sub(1),
            Motion::Right => (state.primary + 1).min(len),
            Motion::Up => self.vertical(&index, state.primary, -1),
            Motion::Down => self.vertical(&index, state.primary, 1),
            Motion::WordLeft => prev_word_boundary(text, state.primary),
            Motion::WordRight => next_word_boundary(text, state.primary),
            Motion::Home => index.line_at(state.primary).start,
            Motion::End => index.line_at(state.primary).end,
            Motion::PageUp => self.page(&index, state.primary, false),
            Motion::PageDown => self.page(&index, state.primary, true),
            Motion::BufferStart => 0,
            Motion::BufferEnd => len,
        };

        CursorState {
            primary,
            selection_anchor: anchor,
        }
    }

    /// Select the whole text, leaving the caret at the end.
    #[must_use]
    pub fn select_all(&self, text: &str) -> CursorState {
        CursorState::selecting(0, text.chars().count())
    }

    fn vertical(&self, index: &LineIndex, offset: usize, delta: isize) -> usize {
        let (line, column) = index.locate(offset);
        let target = if delta < 0 {
            line.checked_sub(1)
        } else {
            Some(line + 1).filter(|&l| l <= index.last_line())
        };
        match target {
            Some(target) => index.offset_for(target, column),
            None => offset,
        }
    }

    fn page(&self, index: &LineIndex, offset: usize, down: bool) -> usize {
        let (line, column) = index.locate(offset);
        let last = index.last_line();
        if down {
            if line == last {
                return index.text_len();
            }
            index.offset_for((line + self.page_lines).min(last), column)
        } else {
            if line == 0 {
                return 0;
            }
            index.offset_for(line.saturating_sub(self.page_lines), column)
        }
    }
}

/// Offset reached by a word jump to the left.
///
/// Skips whitespace immediately left of `offset`, then the run of
/// non-whitespace before it.
#[must_use]
pub fn prev_word_boundary(text: &str, offset: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut idx = offset.min(chars.len());

    while idx > 0 && chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    while idx > 0 && !chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    idx
}

/// Offset reached by a word jump to the right.
///
/// Skips the run of non-whitespace at `offset`, then the whitespace after it.
#[must_use]
pub fn next_word_boundary(text: &str, offset: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut idx = offset.min(chars.len());

    while idx < chars.len() && !chars[idx].is_whitespace() {
        idx += 1;
    }
    while idx < chars.len() && chars[idx].is_whitespace() {
        idx += 1;
    }
    idx
}
