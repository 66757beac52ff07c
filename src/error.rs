//! Error types for polyline-codec operations.

use thiserror::Error;

/// Errors that can occur while simplifying, encoding or decoding a path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolylineError {
    /// A coordinate is NaN or infinite.
    #[error("invalid input: coordinate at index {index} is not finite")]
    NonFiniteCoordinate {
        /// Index of the offending point in the input path.
        index: usize,
    },

    /// Tolerance is negative or not finite.
    #[error("invalid input: tolerance must be finite and non-negative")]
    InvalidTolerance,

    /// A coordinate does not fit the encoder's integer range once scaled.
    #[error("invalid input: coordinate at index {index} is out of range for the precision")]
    CoordinateOutOfRange {
        /// Index of the offending point in the input path.
        index: usize,
    },

    /// The encoded string contains a byte outside `[63, 126]` or ends mid-chunk.
    #[error("invalid encoding at byte {position}")]
    InvalidEncoding {
        /// Byte offset where decoding stopped.
        position: usize,
    },

    /// A decoded chunk does not fit in 64 bits.
    #[error("encoded value overflows at byte {position}")]
    Overflow {
        /// Byte offset where decoding stopped.
        position: usize,
    },

    /// Configuration could not be parsed or holds an unusable value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PolylineError {
    /// Returns `true` for errors caused by malformed caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PolylineError::NonFiniteCoordinate { .. }
                | PolylineError::InvalidTolerance
                | PolylineError::CoordinateOutOfRange { .. }
        )
    }
}

impl From<serde_json::Error> for PolylineError {
    fn from(err: serde_json::Error) -> Self {
        PolylineError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_kinds() {
        assert!(PolylineError::NonFiniteCoordinate { index: 3 }.is_invalid_input());
        assert!(PolylineError::InvalidTolerance.is_invalid_input());
        assert!(PolylineError::CoordinateOutOfRange { index: 0 }.is_invalid_input());
        assert!(!PolylineError::InvalidEncoding { position: 1 }.is_invalid_input());
        assert!(!PolylineError::Config("bad".into()).is_invalid_input());
    }

    #[test]
    fn test_display() {
        let err = PolylineError::NonFiniteCoordinate { index: 7 };
        assert_eq!(
            err.to_string(),
            "invalid input: coordinate at index 7 is not finite"
        );
        assert_eq!(
            PolylineError::Overflow { position: 12 }.to_string(),
            "encoded value overflows at byte 12"
        );
    }
}
