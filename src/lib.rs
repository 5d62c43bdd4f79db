//! `notepad_core` - plain-text editing core for a notepad widget
//!
//! Holds the text of one note, tracks cursor and selection, turns key events
//! into navigation and edits, and breaks lines that grow wider than the host's
//! text area. Rendering, persistence and real clipboard access stay with the
//! host; it talks to this crate through plain strings, offsets and
//! [`EditSession::on_edit`] notifications.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Offsets and pixel widths are small
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)] // Scroll fractions are approximate
#![allow(clippy::module_name_repetitions)] // Allow text::TextBuffer etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening

pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod session;
pub mod text;

// Re-export core types at crate root
pub use config::SessionConfig;
pub use error::{EditError, Result};
pub use event::{EditEvent, EditKind, ListenerId};
pub use input::{Intent, KeyCode, KeyEvent, KeyModifiers};
pub use session::{EditResult, EditSession};
pub use text::{
    CursorState, EditBuffer, FontKey, Line, LineIndex, Motion, TextBuffer, ViewportState,
    WordWrapEngine, WrapConfig, WrapEvent, WrapKind, monospace_measure,
};
