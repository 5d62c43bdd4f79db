//! Error types for the editing core.

use thiserror::Error;

/// Result type alias for buffer-level operations.
pub type Result<T> = std::result::Result<T, EditError>;

/// Contract violations raised by the low-level buffer API.
///
/// The session layer clamps every offset before it reaches the buffer, so
/// these are never surfaced to the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// An offset lies past the end of the buffer.
    #[error("offset {offset} out of bounds for buffer of {len} chars")]
    OutOfBounds { offset: usize, len: usize },
    /// A delete range is reversed or extends past the end of the buffer.
    #[error("invalid range {start}..{end} for buffer of {len} chars")]
    InvalidRange { start: usize, end: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditError::OutOfBounds { offset: 9, len: 4 };
        assert!(err.to_string().contains("offset 9"));

        let err = EditError::InvalidRange {
            start: 3,
            end: 1,
            len: 4,
        };
        assert!(err.to_string().contains("3..1"));
    }
}
