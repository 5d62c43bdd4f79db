//! Session configuration.
//!
//! A [`SessionConfig`] is built once by the host and handed to
//! [`EditSession::new`](crate::EditSession::new). It is never mutated behind
//! the session's back; to change the font or width, build a new
//! [`WrapConfig`] and pass it to
//! [`EditSession::set_wrap_config`](crate::EditSession::set_wrap_config).

use crate::text::{DEFAULT_MEASURE_CACHE_CAPACITY, DEFAULT_PAGE_LINES, WrapConfig};

/// Default number of lines the host shows.
pub const DEFAULT_VISIBLE_LINES: u32 = 20;

/// Options for one editing session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Soft-wrap settings; `None` disables wrapping.
    pub wrap: Option<WrapConfig>,
    /// Lines moved by Page Up / Page Down.
    pub page_lines: usize,
    /// Lines visible in the host's text area.
    pub visible_lines: u32,
    /// Entries kept by the width-measurement cache.
    pub measure_cache_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            wrap: None,
            page_lines: DEFAULT_PAGE_LINES,
            visible_lines: DEFAULT_VISIBLE_LINES,
            measure_cache_capacity: DEFAULT_MEASURE_CACHE_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Enable soft wrap.
    #[must_use]
    pub fn with_wrap(mut self, wrap: WrapConfig) -> Self {
        self.wrap = Some(wrap);
        self
    }

    /// Set the Page Up / Page Down distance.
    #[must_use]
    pub fn with_page_lines(mut self, page_lines: usize) -> Self {
        self.page_lines = page_lines.max(1);
        self
    }

    /// Set the number of visible lines.
    #[must_use]
    pub fn with_visible_lines(mut self, visible_lines: u32) -> Self {
        self.visible_lines = visible_lines.max(1);
        self
    }

    /// Set the measurement cache capacity.
    #[must_use]
    pub fn with_measure_cache_capacity(mut self, capacity: usize) -> Self {
        self.measure_cache_capacity = capacity.max(1);
        self
    }
}
