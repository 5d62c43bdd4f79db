//! End-to-end editing scenarios driven through key events.
//!
//! Each test feeds a session the keystrokes a user would press and checks
//! the resulting text, cursor and selection.

use std::sync::{Arc, Mutex, Once};

use notepad_core::{
    EditKind, EditSession, Intent, KeyCode, KeyEvent, KeyModifiers, Motion, SessionConfig,
    WrapConfig, WrapKind, monospace_measure,
};
use tracing::{debug, info};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// 10px per character, 50px wide: five characters fit on a line.
fn five_char_session() -> EditSession {
    let wrap = WrapConfig::new(50, |text: &str| text.chars().count() as u32 * 10);
    EditSession::new(SessionConfig::default().with_wrap(wrap))
}

fn type_text(session: &mut EditSession, text: &str) {
    for ch in text.chars() {
        session.handle_key(KeyEvent::char(ch));
    }
}

fn key(session: &mut EditSession, code: KeyCode, modifiers: KeyModifiers) {
    session.handle_key(KeyEvent::new(code, modifiers));
}

// ============================================================================
// Wrap Scenarios
// ============================================================================

#[test]
fn forced_wrap_inserts_one_break_per_overflow() {
    setup_test_logging();
    let mut session = five_char_session();

    type_text(&mut session, "Superc");
    info!(text = session.get_text(), "after first overflow");
    assert_eq!(session.get_text(), "Super\nc");

    // The new segment is left alone until it overflows itself.
    type_text(&mut session, "alif");
    assert_eq!(session.get_text().matches('\n').count(), 1);

    type_text(&mut session, "ragilistic");
    debug!(text = session.get_text(), "after full word");
    assert_eq!(session.get_text(), "Super\ncalif\nragil\nistic");
    assert_eq!(session.get_cursor(), 23);
}

#[test]
fn whitespace_wrap_consumes_the_space() {
    setup_test_logging();
    let mut session = five_char_session();
    type_text(&mut session, "aaaaa bbbbb");
    assert_eq!(session.get_text(), "aaaaa\nbbbbb");
    assert_eq!(session.get_cursor(), 11);
}

#[test]
fn wrap_keeps_typing_position_mid_line() {
    let mut session = five_char_session();
    session.set_text("ab cd");
    key(&mut session, KeyCode::Right, KeyModifiers::empty());
    key(&mut session, KeyCode::Right, KeyModifiers::empty());
    let result = session.handle_key(KeyEvent::char('x')).unwrap();

    // "abx cd" is 60px; the only space becomes the break.
    assert_eq!(session.get_text(), "abx\ncd");
    assert_eq!(result.wraps.len(), 1);
    assert_eq!(result.wraps[0].kind, WrapKind::Whitespace);
    assert_eq!(result.cursor, 3);
}

#[test]
fn paste_follows_the_typing_wrap_rule() {
    let mut session = five_char_session();
    let result = session.dispatch(Intent::Paste("aaaaa bbbbb cc".to_string()));
    assert_eq!(session.get_text(), "aaaaa\nbbbbb\ncc");
    assert_eq!(result.wraps.len(), 2);
    assert_eq!(result.line, 2);
}

#[test]
fn monospace_helper_wraps_by_columns() {
    let wrap = WrapConfig::from_shared(40, monospace_measure(8));
    let mut session = EditSession::new(SessionConfig::default().with_wrap(wrap));
    type_text(&mut session, "one two");
    assert_eq!(session.get_text(), "one\ntwo");
}

// ============================================================================
// Navigation Scenarios
// ============================================================================

#[test]
fn word_jumps_are_symmetric() {
    let mut session = EditSession::with_text(SessionConfig::default(), "foo bar baz");
    key(&mut session, KeyCode::End, KeyModifiers::empty());
    assert_eq!(session.get_cursor(), 11);
    key(&mut session, KeyCode::Left, KeyModifiers::CTRL);
    assert_eq!(session.get_cursor(), 8);
    key(&mut session, KeyCode::Right, KeyModifiers::CTRL);
    assert_eq!(session.get_cursor(), 11);
}

#[test]
fn home_and_end_stay_on_their_line() {
    let mut session = EditSession::with_text(SessionConfig::default(), "ab\ncd");
    key(&mut session, KeyCode::Right, KeyModifiers::empty());
    key(&mut session, KeyCode::End, KeyModifiers::empty());
    assert_eq!(session.get_cursor(), 2);
    key(&mut session, KeyCode::Home, KeyModifiers::empty());
    assert_eq!(session.get_cursor(), 0);
}

#[test]
fn page_down_clamps_to_last_line() {
    let mut session = EditSession::with_text(SessionConfig::default(), "one\ntwo\nthree");
    let result = session
        .handle_key(KeyEvent::key(KeyCode::PageDown))
        .unwrap();
    assert_eq!(result.line, 2);
    assert_eq!(result.column, 0);

    let result = session
        .handle_key(KeyEvent::key(KeyCode::PageDown))
        .unwrap();
    assert_eq!(result.cursor, 13, "already on last line: jump to end");
}

#[test]
fn trailing_newline_counts_as_a_line() {
    let mut session = EditSession::with_text(SessionConfig::default(), "a\nb\n");
    let result = session.dispatch(Intent::motion(Motion::BufferEnd));
    assert_eq!(result.total_lines, 3);
    assert_eq!((result.line, result.column), (2, 0));
}

// ============================================================================
// Selection Scenarios
// ============================================================================

#[test]
fn typing_replaces_shift_selection() {
    let mut session = EditSession::with_text(SessionConfig::default(), "hello world");
    for _ in 0..6 {
        key(&mut session, KeyCode::Right, KeyModifiers::empty());
    }
    key(&mut session, KeyCode::End, KeyModifiers::SHIFT);
    assert_eq!(session.get_selection(), Some((6, 11)));

    session.handle_key(KeyEvent::char('X'));
    assert_eq!(session.get_text(), "hello X");
    assert_eq!(session.get_cursor(), 7);
    assert_eq!(session.get_selection(), None);
}

#[test]
fn plain_arrow_drops_selection() {
    let mut session = EditSession::with_text(SessionConfig::default(), "abcdef");
    key(&mut session, KeyCode::Right, KeyModifiers::SHIFT);
    key(&mut session, KeyCode::Right, KeyModifiers::SHIFT);
    assert_eq!(session.get_selection(), Some((0, 2)));
    key(&mut session, KeyCode::Right, KeyModifiers::empty());
    assert_eq!(session.get_selection(), None);
    assert_eq!(session.get_cursor(), 3);
}

#[test]
fn backspace_and_delete_remove_selection() {
    let mut session = EditSession::with_text(SessionConfig::default(), "abcdef");
    session.dispatch(Intent::motion(Motion::BufferEnd));
    key(&mut session, KeyCode::Left, KeyModifiers::SHIFT);
    key(&mut session, KeyCode::Left, KeyModifiers::SHIFT);
    key(&mut session, KeyCode::Backspace, KeyModifiers::empty());
    assert_eq!(session.get_text(), "abcd");
    assert_eq!(session.get_cursor(), 4);

    key(&mut session, KeyCode::Home, KeyModifiers::SHIFT);
    key(&mut session, KeyCode::Delete, KeyModifiers::empty());
    assert_eq!(session.get_text(), "");
}

#[test]
fn clipboard_round_trip_through_keys() {
    let mut session = EditSession::with_text(SessionConfig::default(), "copy");
    key(&mut session, KeyCode::Char('a'), KeyModifiers::CTRL);
    key(&mut session, KeyCode::Char('c'), KeyModifiers::CTRL);
    key(&mut session, KeyCode::End, KeyModifiers::empty());
    key(&mut session, KeyCode::Char('v'), KeyModifiers::CTRL);
    assert_eq!(session.get_text(), "copycopy");
}

// ============================================================================
// Host Notifications
// ============================================================================

#[test]
fn host_sees_every_text_change_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut session = five_char_session();
    let sink = Arc::clone(&log);
    session.on_edit(move |event| {
        sink.lock()
            .unwrap()
            .push((event.kind, event.text.to_string(), event.wraps.len()));
    });

    type_text(&mut session, "abcdef");
    key(&mut session, KeyCode::Enter, KeyModifiers::empty());
    key(&mut session, KeyCode::Left, KeyModifiers::empty());

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 7, "six characters and one enter");
    assert_eq!(log[5], (EditKind::Insert, "abcde\nf".to_string(), 1));
    assert_eq!(log[6], (EditKind::Enter, "abcde\nf\n".to_string(), 0));
}
