//! Pixel-width soft wrap applied while typing.
//!
//! After a printable character lands in the buffer, [`WordWrapEngine`]
//! measures the cursor's line. If it is wider than the configured limit, the
//! line is broken once: at its last whitespace character if there is one
//! (the whitespace becomes the `\n`), otherwise at a position interpolated
//! from the measured width. The new second segment is left alone until a
//! later keystroke makes it overflow too.

use crate::error::Result;
use crate::text::buffer::TextBuffer;
use crate::text::measure::{FontKey, MeasureCache, MeasureFn};
use std::fmt;
use std::sync::Arc;

/// Immutable wrap settings supplied by the host.
///
/// Changing the font or width means building a new config and handing it to
/// the session; nothing here is mutated in place.
#[derive(Clone)]
pub struct WrapConfig {
    /// Widest a line may be before it is broken.
    pub max_width_px: u32,
    /// Width function for the current font.
    pub measure_fn: MeasureFn,
    /// Font the measure function belongs to; part of the cache key.
    pub font: FontKey,
}

impl WrapConfig {
    /// Create a config from a width limit and a measure function.
    pub fn new<F>(max_width_px: u32, measure_fn: F) -> Self
    where
        F: Fn(&str) -> u32 + Send + Sync + 'static,
    {
        Self {
            max_width_px,
            measure_fn: Arc::new(measure_fn),
            font: FontKey::default(),
        }
    }

    /// Create a config around an already shared measure function.
    #[must_use]
    pub fn from_shared(max_width_px: u32, measure_fn: MeasureFn) -> Self {
        Self {
            max_width_px,
            measure_fn,
            font: FontKey::default(),
        }
    }

    /// Tag the config with the font the measure function uses.
    #[must_use]
    pub fn with_font(mut self, font: FontKey) -> Self {
        self.font = font;
        self
    }
}

impl fmt::Debug for WrapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapConfig")
            .field("max_width_px", &self.max_width_px)
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

/// How a line was broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapKind {
    /// A whitespace character was replaced by `\n`.
    Whitespace,
    /// A `\n` was inserted inside an overlong token.
    Forced,
}

/// A single wrap performed by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrapEvent {
    /// Offset of the `\n` that was written.
    pub split: usize,
    pub kind: WrapKind,
    /// Cursor after the wrap.
    pub cursor: usize,
}

/// Breaks overflowing lines for one session.
#[derive(Debug)]
pub struct WordWrapEngine {
    config: WrapConfig,
    cache: MeasureCache,
}

impl WordWrapEngine {
    /// Create an engine with a cache of the given capacity.
    #[must_use]
    pub fn new(config: WrapConfig, cache_capacity: usize) -> Self {
        Self {
            config,
            cache: MeasureCache::with_capacity(cache_capacity),
        }
    }

    /// Current config.
    #[must_use]
    pub fn config(&self) -> &WrapConfig {
        &self.config
    }

    /// Swap in a new config; cached widths from the old font are dropped.
    pub fn set_config(&mut self, config: WrapConfig) {
        self.config = config;
        self.cache.clear();
    }

    /// Width of `text` under the current config.
    pub fn measure(&mut self, text: &str) -> u32 {
        self.cache
            .measure(&self.config.font, text, &self.config.measure_fn)
    }

    /// Break the line holding `cursor` once if it overflows.
    ///
    /// Returns `None` when the line fits or cannot be split. A zero
    /// measurement counts as fitting. Only the cursor's line is copied out
    /// of the buffer.
    pub fn wrap_at_cursor(
        &mut self,
        buffer: &mut TextBuffer,
        cursor: usize,
    ) -> Result<Option<WrapEvent>> {
        let cursor = cursor.min(buffer.len());
        let line = buffer.line_at(cursor);
        let text = buffer.slice(line.start, line.end);
        let width = self.measure(&text);
        if width == 0 || width <= self.config.max_width_px {
            return Ok(None);
        }

        let chars: Vec<char> = text.chars().collect();
        if let Some(idx) = find_nearest_space(&chars) {
            let split = line.start + idx;
            buffer.delete_range(split, split + 1)?;
            buffer.insert(split, "\n")?;
            tracing::debug!(split, width, "wrapped line at whitespace");
            return Ok(Some(WrapEvent {
                split,
                kind: WrapKind::Whitespace,
                cursor,
            }));
        }

        let Some(idx) = forced_split(chars.len(), width, self.config.max_width_px) else {
            return Ok(None);
        };
        let split = line.start + idx;
        buffer.insert(split, "\n")?;
        let cursor = if cursor > split { cursor + 1 } else { cursor };
        tracing::debug!(split, width, "force-wrapped overlong token");
        Ok(Some(WrapEvent {
            split,
            kind: WrapKind::Forced,
            cursor,
        }))
    }
}

/// Index of the last whitespace character, if any.
fn find_nearest_space(chars: &[char]) -> Option<usize> {
    chars.iter().rposition(|ch| ch.is_whitespace())
}

/// Split position for a token with no whitespace.
///
/// Interpolates linearly from the measured width, so it is approximate for
/// proportional fonts. Kept inside `1..len` so both segments are non-empty.
fn forced_split(len: usize, width: u32, max_width: u32) -> Option<usize> {
    if len < 2 || width == 0 {
        return None;
    }
    let estimate = (len as u64 * u64::from(max_width)) / u64::from(width);
    Some((estimate as usize).clamp(1, len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_px_engine() -> WordWrapEngine {
        WordWrapEngine::new(
            WrapConfig::new(50, |text: &str| text.chars().count() as u32 * 10),
            64,
        )
    }

    #[test]
    fn test_fitting_line_is_untouched() {
        let mut engine = ten_px_engine();
        let mut buf = TextBuffer::with_text("hello");
        assert_eq!(engine.wrap_at_cursor(&mut buf, 5).unwrap(), None);
        assert_eq!(buf.as_str(), "hello");
    }

    #[test]
    fn test_whitespace_wrap_consumes_space() {
        let mut engine = ten_px_engine();
        let mut buf = TextBuffer::with_text("aaa bbb");
        let event = engine.wrap_at_cursor(&mut buf, 7).unwrap().unwrap();
        assert_eq!(buf.as_str(), "aaa\nbbb");
        assert_eq!(event.kind, WrapKind::Whitespace);
        assert_eq!(event.split, 3);
        assert_eq!(event.cursor, 7);
    }

    #[test]
    fn test_whitespace_wrap_uses_last_space() {
        let mut engine = ten_px_engine();
        let mut buf = TextBuffer::with_text("a b c");
        engine.wrap_at_cursor(&mut buf, 5).unwrap();
        assert_eq!(buf.as_str(), "a b\nc");
    }

    #[test]
    fn test_forced_wrap_shifts_cursor() {
        let mut engine = ten_px_engine();
        let mut buf = TextBuffer::with_text("abcdef");
        let event = engine.wrap_at_cursor(&mut buf, 6).unwrap().unwrap();
        assert_eq!(buf.as_str(), "abcde\nf");
        assert_eq!(event.kind, WrapKind::Forced);
        assert_eq!(event.split, 5);
        assert_eq!(event.cursor, 7);
    }

    #[test]
    fn test_forced_wrap_leaves_cursor_before_split() {
        let mut engine = ten_px_engine();
        let mut buf = TextBuffer::with_text("abcdef");
        let event = engine.wrap_at_cursor(&mut buf, 2).unwrap().unwrap();
        assert_eq!(event.cursor, 2);
    }

    #[test]
    fn test_forced_wrap_keeps_cursor_at_split() {
        let mut engine = ten_px_engine();
        // "abcd|XYZ" with 'e' just typed at the cursor.
        let mut buf = TextBuffer::with_text("abcdeXYZ");
        let event = engine.wrap_at_cursor(&mut buf, 5).unwrap().unwrap();
        assert_eq!(buf.as_str(), "abcde\nXYZ");
        assert_eq!(event.split, 5);
        assert_eq!(event.cursor, 5);
    }

    #[test]
    fn test_wrap_in_middle_of_long_note() {
        let mut engine = ten_px_engine();
        let mut text = "ok\n".repeat(200);
        text.push_str("abc def");
        text.push_str(&"\nok".repeat(200));
        let mut buf = TextBuffer::with_text(&text);
        let cursor = 600 + 7;
        let event = engine.wrap_at_cursor(&mut buf, cursor).unwrap().unwrap();
        assert_eq!(event.split, 603);
        assert_eq!(buf.slice(600, 607), "abc\ndef");
        assert_eq!(buf.len_lines(), 402);
        assert_eq!(buf.line_at(607).start, 604);
    }

    #[test]
    fn test_only_cursor_line_is_considered() {
        let mut engine = ten_px_engine();
        let mut buf = TextBuffer::with_text("abcdefgh\nxy");
        assert_eq!(engine.wrap_at_cursor(&mut buf, 11).unwrap(), None);
        assert_eq!(buf.as_str(), "abcdefgh\nxy");
    }

    #[test]
    fn test_single_char_line_never_split() {
        let mut engine = WordWrapEngine::new(WrapConfig::new(5, |_: &str| 100), 8);
        let mut buf = TextBuffer::with_text("W");
        assert_eq!(engine.wrap_at_cursor(&mut buf, 1).unwrap(), None);
    }

    #[test]
    fn test_zero_measurement_means_no_overflow() {
        let mut engine = WordWrapEngine::new(WrapConfig::new(1, |_: &str| 0), 8);
        let mut buf = TextBuffer::with_text("a very long line indeed");
        assert_eq!(engine.wrap_at_cursor(&mut buf, 3).unwrap(), None);
    }

    #[test]
    fn test_second_segment_not_rewrapped() {
        let mut engine = ten_px_engine();
        // Second segment is itself too wide; only one break happens.
        let mut buf = TextBuffer::with_text("abcdefghijklmn");
        engine.wrap_at_cursor(&mut buf, 14).unwrap();
        assert_eq!(buf.as_str().matches('\n').count(), 1);
    }

    #[test]
    fn test_forced_split_estimate() {
        assert_eq!(forced_split(6, 60, 50), Some(5));
        assert_eq!(forced_split(21, 210, 50), Some(5));
        assert_eq!(forced_split(10, 1000, 50), Some(1));
        assert_eq!(forced_split(1, 100, 50), None);
    }

    #[test]
    fn test_set_config_clears_cache() {
        let mut engine = ten_px_engine();
        engine.measure("abc");
        engine.set_config(WrapConfig::new(80, |text: &str| text.len() as u32));
        assert_eq!(engine.measure("abc"), 3);
        assert_eq!(engine.config().max_width_px, 80);
    }
}
