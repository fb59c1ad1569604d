//! Error types for the seistrace library.

use thiserror::Error;

/// Main error type for time-series operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Sample index out of bounds. A dead series is an implicit empty
    /// range and reports a count of zero whatever its buffer length.
    #[error("Sample index {index} out of bounds (count: {count})")]
    SampleOutOfBounds { index: usize, count: usize },

    /// Stack attempted between series whose sample intervals differ
    /// beyond tolerance.
    #[error("Incompatible sample intervals: {lhs} vs {rhs}")]
    IncompatibleSampling { lhs: f64, rhs: f64 },

    /// Stack attempted between a relative-time and an absolute-time series.
    #[error("Time reference mismatch: cannot combine relative and absolute series")]
    TimeReferenceMismatch,

    /// Attribute not found by key.
    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    /// Attribute exists but holds a value of a different type.
    #[error("Attribute type mismatch for '{key}': expected {expected}, got {actual}")]
    AttributeTypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Result type alias for time-series operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::SampleOutOfBounds { index: 5, count: 3 };
        assert!(e.to_string().contains("5"));
        assert!(e.to_string().contains("3"));

        let e = Error::IncompatibleSampling { lhs: 1.0, rhs: 2.0 };
        assert!(e.to_string().contains("Incompatible"));

        let e = Error::AttributeTypeMismatch {
            key: "sta".into(),
            expected: "real",
            actual: "text",
        };
        assert!(e.to_string().contains("sta"));
        assert!(e.to_string().contains("real"));
    }
}
