//! Line boundaries derived from buffer text.
//!
//! Lines are recomputed from the text every time they are needed; nothing
//! here outlives an edit.
//!
//! Boundary rule: the offset just before a `\n` is the end of the line that
//! the `\n` terminates, and the offset just after it is the start of the
//! next line. A buffer ending in `\n` therefore has a trailing empty line.
//!
//! ```
//! use notepad_core::text::{Line, LineIndex};
//!
//! let index = LineIndex::new("ab\ncd");
//! assert_eq!(index.line(0), Some(Line { start: 0, end: 2 }));
//! assert_eq!(index.locate(2), (0, 2));
//! assert_eq!(index.locate(3), (1, 0));
//! ```

/// A line's character range, excluding its trailing `\n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Line {
    /// Offset of the first character.
    pub start: usize,
    /// Offset one past the last content character.
    pub end: usize,
}

impl Line {
    /// Number of content characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the line has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `text` into lines.
#[must_use]
pub fn lines(text: &str) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    for ch in text.chars() {
        if ch == '\n' {
            lines.push(Line { start, end: offset });
            start = offset + 1;
        }
        offset += 1;
    }
    lines.push(Line { start, end: offset });
    lines
}

/// Resolve `offset` to `(line, column)`.
#[must_use]
pub fn locate(text: &str, offset: usize) -> (usize, usize) {
    LineIndex::new(text).locate(offset)
}

/// Offset of `column` on `line`, both clamped.
#[must_use]
pub fn offset_for(text: &str, line: usize, column: usize) -> usize {
    LineIndex::new(text).offset_for(line, column)
}

/// Snapshot of the line layout of one text.
///
/// Build one per operation; it is invalid as soon as the text changes.
#[derive(Clone, Debug)]
pub struct LineIndex {
    lines: Vec<Line>,
}

#[allow(clippy::len_without_is_empty)]
impl LineIndex {
    /// Index the lines of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { lines: lines(text) }
    }

    /// Number of lines. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Index of the last line.
    #[must_use]
    pub fn last_line(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Get a line by index.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<Line> {
        self.lines.get(idx).copied()
    }

    /// All lines in order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Total character count of the indexed text.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.lines.last().map_or(0, |line| line.end)
    }

    /// Resolve `offset` to `(line, column)`; offsets past the end clamp to it.
    #[must_use]
    pub fn locate(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text_len());
        let idx = self
            .lines
            .partition_point(|line| line.end < offset)
            .min(self.last_line());
        let start = self.lines.get(idx).map_or(0, |line| line.start);
        (idx, offset - start)
    }

    /// The line containing `offset`.
    #[must_use]
    pub fn line_at(&self, offset: usize) -> Line {
        let (idx, _) = self.locate(offset);
        self.lines.get(idx).copied().unwrap_or_default()
    }

    /// Offset of `column` on `line`, clamping both.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        let line = self.lines[line.min(self.last_line())];
        line.start + column.min(line.len())
    }
}
