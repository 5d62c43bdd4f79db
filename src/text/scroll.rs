//! Keeping the cursor line inside the visible window.

/// Visible window over the lines of a session. Derived, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    /// Number of lines the host can show at once.
    pub visible_lines: u32,
    /// Index of the first visible line.
    pub top_line: u32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            visible_lines: 1,
            top_line: 0,
        }
    }
}

impl ViewportState {
    /// Create a viewport showing `visible_lines` lines from the top.
    #[must_use]
    pub fn new(visible_lines: u32) -> Self {
        Self {
            visible_lines: visible_lines.max(1),
            top_line: 0,
        }
    }

    /// Scroll just enough to show `cursor_line`.
    pub fn follow(&mut self, cursor_line: usize, total_lines: usize) {
        let top = compute_top_line(
            cursor_line,
            total_lines,
            self.visible_lines as usize,
            self.top_line as usize,
        );
        self.top_line = u32::try_from(top).unwrap_or(u32::MAX);
    }

    /// Scrollbar position for the current top line.
    #[must_use]
    pub fn fraction(&self, total_lines: usize) -> f32 {
        scroll_fraction(
            self.top_line as usize,
            total_lines,
            self.visible_lines as usize,
        )
    }
}

/// First visible line after bringing `cursor_line` into view.
///
/// The window moves only when the cursor leaves it, and the result is
/// clamped to `[0, max(0, total_lines - visible_lines)]`.
#[must_use]
pub fn compute_top_line(
    cursor_line: usize,
    total_lines: usize,
    visible_lines: usize,
    current_top: usize,
) -> usize {
    let visible = visible_lines.max(1);
    let top = if cursor_line < current_top {
        cursor_line
    } else if cursor_line >= current_top + visible {
        cursor_line + 1 - visible
    } else {
        current_top
    };
    top.min(total_lines.saturating_sub(visible))
}

/// Normalized scroll position in `[0, 1]`; 0 when everything fits.
#[must_use]
pub fn scroll_fraction(top_line: usize, total_lines: usize, visible_lines: usize) -> f32 {
    let scrollable = total_lines.saturating_sub(visible_lines.max(1));
    if scrollable == 0 {
        return 0.0;
    }
    (top_line.min(scrollable) as f32) / (scrollable as f32)
}
