//! Error types.

use thiserror::Error;

use crate::Precision;

/// A [Simplifier](crate::Simplifier) could not be constructed from the given keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Fewer than two coordinate keys were given.
    #[error("points must have at least two dimensions, got {found}")]
    TooFewDimensions {
        /// Number of keys supplied.
        found: usize,
    },

    /// The same coordinate key was given more than once.
    #[error("coordinate key {key} is given more than once")]
    DuplicateKey {
        /// Debug rendering of the repeated key.
        key: String,
    },
}

/// A path could not be simplified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// Tolerance was negative or NaN.
    #[error("invalid tolerance {0}: must be a non-negative number")]
    InvalidTolerance(Precision),

    /// A point has no value for one of the configured keys.
    #[error("point {index} has no coordinate {key}")]
    MissingCoordinate {
        /// Position of the point in the input path.
        index: usize,
        /// Debug rendering of the missing key.
        key: String,
    },

    /// A point has a NaN or infinite value for one of the configured keys.
    #[error("point {index} has non-finite coordinate {key} = {value}")]
    NonFiniteCoordinate {
        /// Position of the point in the input path.
        index: usize,
        /// Debug rendering of the key.
        key: String,
        /// The offending value.
        value: Precision,
    },
}
