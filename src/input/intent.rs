//! Edit and navigation intents.
//!
//! Every key or character event a host forwards is turned into exactly one
//! [`Intent`]; the session has a single entry point that matches on it.

use crate::input::keyboard::{KeyCode, KeyEvent};
use crate::text::Motion;

/// Everything a session can be asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Move the caret; `extend` grows the selection (Shift held).
    Move { motion: Motion, extend: bool },
    /// Type one character.
    Insert(char),
    Backspace,
    Delete,
    /// Explicit line break.
    Enter,
    /// Insert text character by character.
    Paste(String),
    /// Paste the logical copy buffer.
    PasteCopied,
    Copy,
    Cut,
    SelectAll,
}

impl Intent {
    /// Plain navigation.
    #[must_use]
    pub fn motion(motion: Motion) -> Self {
        Self::Move {
            motion,
            extend: false,
        }
    }

    /// Navigation that extends the selection.
    #[must_use]
    pub fn extend(motion: Motion) -> Self {
        Self::Move {
            motion,
            extend: true,
        }
    }

    /// Map a key event to an intent.
    ///
    /// Shift extends the selection, Ctrl turns arrows into word jumps and
    /// Home/End into buffer bounds. Ctrl+A/C/X/V select all, copy, cut and
    /// paste the copy buffer. Keys with no meaning to the editor yield `None`.
    #[must_use]
    pub fn from_key(event: KeyEvent) -> Option<Self> {
        let extend = event.shift();
        let ctrl = event.ctrl();
        let motion = |m: Motion| Some(Self::Move { motion: m, extend });

        match event.code {
            KeyCode::Left if ctrl => motion(Motion::WordLeft),
            KeyCode::Right if ctrl => motion(Motion::WordRight),
            KeyCode::Home if ctrl => motion(Motion::BufferStart),
            KeyCode::End if ctrl => motion(Motion::BufferEnd),
            KeyCode::Left => motion(Motion::Left),
            KeyCode::Right => motion(Motion::Right),
            KeyCode::Up => motion(Motion::Up),
            KeyCode::Down => motion(Motion::Down),
            KeyCode::Home => motion(Motion::Home),
            KeyCode::End => motion(Motion::End),
            KeyCode::PageUp => motion(Motion::PageUp),
            KeyCode::PageDown => motion(Motion::PageDown),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Delete => Some(Self::Delete),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Tab => Some(Self::Insert('\t')),
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'a' => Some(Self::SelectAll),
                'c' => Some(Self::Copy),
                'x' => Some(Self::Cut),
                'v' => Some(Self::PasteCopied),
                _ => None,
            },
            KeyCode::Char(_) if event.alt() => None,
            KeyCode::Char(c) => Some(Self::Insert(c)),
            KeyCode::Esc => None,
        }
    }
}
