//! Text storage, line layout, navigation and editing.
//!
//! Key types:
//!
//! - [`TextBuffer`]: rope-backed character storage with bounds-checked edits
//! - [`LineIndex`]: line boundaries recomputed from the text on demand
//! - [`WordWrapEngine`]: pixel-width soft wrap applied while typing
//! - [`Navigator`]: pure cursor/selection movement
//! - [`EditBuffer`]: selection-aware insert, delete and paste
//! - [`ViewportState`]: keeps the cursor line visible
//!
//! # Examples
//!
//! ```
//! use notepad_core::text::{CursorState, Motion, Navigator, TextBuffer};
//!
//! let buffer = TextBuffer::with_text("foo bar baz");
//! let nav = Navigator::default();
//! let moved = nav.apply(CursorState::at(11), buffer.as_str(), Motion::WordLeft, false);
//! assert_eq!(moved.primary, 8);
//! ```

mod buffer;
mod cursor;
mod edit;
mod line;
mod measure;
mod rope;
mod scroll;
mod wrap;

pub use buffer::TextBuffer;
pub use cursor::{
    CursorState, DEFAULT_PAGE_LINES, Motion, Navigator, next_word_boundary, prev_word_boundary,
};
pub use edit::{EditBuffer, EditOutcome};
pub use line::{Line, LineIndex, lines, locate, offset_for};
pub use measure::{
    DEFAULT_MEASURE_CACHE_CAPACITY, FontKey, MeasureCache, MeasureFn, monospace_measure,
};
pub use rope::RopeWrapper;
pub use scroll::{ViewportState, compute_top_line, scroll_fraction};
pub use wrap::{WordWrapEngine, WrapConfig, WrapEvent, WrapKind};
