//! Width measurement with a bounded memo cache.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// Host-supplied width function: text in, pixel width out.
pub type MeasureFn = Arc<dyn Fn(&str) -> u32 + Send + Sync + 'static>;

/// Default number of cached measurements.
pub const DEFAULT_MEASURE_CACHE_CAPACITY: usize = 512;

/// Identifies the font a measurement was taken with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontKey {
    pub family: String,
    pub size: u32,
}

impl FontKey {
    /// Create a font key.
    #[must_use]
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Build a measure function for a fixed-pitch font.
///
/// Each terminal column (per `unicode-width`) counts as `px_per_column`
/// pixels, so wide CJK characters take two columns.
#[must_use]
pub fn monospace_measure(px_per_column: u32) -> MeasureFn {
    Arc::new(move |text: &str| {
        let columns = u32::try_from(UnicodeWidthStr::width(text)).unwrap_or(u32::MAX);
        columns.saturating_mul(px_per_column)
    })
}

/// Memo of measured widths keyed by `(font, text)`.
///
/// Once the entry count exceeds the capacity, the oldest quarter of entries
/// is dropped. Lookups never change what a measurement returns.
#[derive(Clone, Debug)]
pub struct MeasureCache {
    entries: HashMap<(FontKey, String), u32>,
    order: VecDeque<(FontKey, String)>,
    capacity: usize,
}

impl Default for MeasureCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MEASURE_CACHE_CAPACITY)
    }
}

impl MeasureCache {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Number of cached measurements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the cached width or compute and store it.
    pub fn measure(&mut self, font: &FontKey, text: &str, measure: &MeasureFn) -> u32 {
        let key = (font.clone(), text.to_string());
        if let Some(&width) = self.entries.get(&key) {
            return width;
        }
        let width = measure(text);
        self.order.push_back(key.clone());
        self.entries.insert(key, width);
        if self.entries.len() > self.capacity {
            self.evict();
        }
        width
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn evict(&mut self) {
        let excess = (self.entries.len() / 4).max(1);
        for key in self.order.drain(..excess.min(self.order.len())) {
            self.entries.remove(&key);
        }
        tracing::trace!(
            evicted = excess,
            remaining = self.entries.len(),
            "measure cache evicted oldest entries"
        );
    }
}
