//! Key events from the host and the intents they map to.
//!
//! The host translates its own windowing events into [`KeyEvent`]s; the
//! session turns each one into an [`Intent`] and dispatches it.

mod intent;
mod keyboard;

pub use intent::Intent;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
