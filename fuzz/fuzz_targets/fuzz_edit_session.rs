//! Fuzz target for keystroke sequences against an editing session.
//!
//! Replays arbitrary key events (with and without soft wrap) and checks that
//! the session never panics and never reports a cursor outside the text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use notepad_core::{EditSession, KeyCode, KeyEvent, KeyModifiers, SessionConfig, WrapConfig};

#[derive(Arbitrary, Debug)]
struct SessionInput {
    /// Initial text loaded through `set_text`.
    initial: String,
    /// Wrap width in pixels; `None` disables wrapping.
    wrap_width: Option<u8>,
    keys: Vec<Key>,
}

#[derive(Arbitrary, Debug)]
struct Key {
    code: Code,
    shift: bool,
    ctrl: bool,
}

#[derive(Arbitrary, Debug)]
enum Code {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    Delete,
    Char(char),
}

impl Key {
    fn event(&self) -> KeyEvent {
        let code = match self.code {
            Code::Backspace => KeyCode::Backspace,
            Code::Enter => KeyCode::Enter,
            Code::Left => KeyCode::Left,
            Code::Right => KeyCode::Right,
            Code::Up => KeyCode::Up,
            Code::Down => KeyCode::Down,
            Code::Home => KeyCode::Home,
            Code::End => KeyCode::End,
            Code::PageUp => KeyCode::PageUp,
            Code::PageDown => KeyCode::PageDown,
            Code::Tab => KeyCode::Tab,
            Code::Delete => KeyCode::Delete,
            Code::Char(c) => KeyCode::Char(c),
        };
        let mut modifiers = KeyModifiers::empty();
        modifiers.set(KeyModifiers::SHIFT, self.shift);
        modifiers.set(KeyModifiers::CTRL, self.ctrl);
        KeyEvent::new(code, modifiers)
    }
}

fuzz_target!(|input: SessionInput| {
    let mut config = SessionConfig::default().with_visible_lines(5);
    if let Some(width) = input.wrap_width {
        let wrap = WrapConfig::new(u32::from(width), |text: &str| {
            text.chars().count() as u32 * 7
        });
        config = config.with_wrap(wrap);
    }

    let mut session = EditSession::new(config);
    session.set_text(&input.initial);

    for key in input.keys.iter().take(512) {
        if let Some(result) = session.handle_key(key.event()) {
            let len = session.get_text().chars().count();
            assert!(result.cursor <= len);
            assert!(result.line < result.total_lines);
            if let Some((start, end)) = result.selection {
                assert!(start < end && end <= len);
            }
        }
    }
});
