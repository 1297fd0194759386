//! Error types shared by the `cs` algorithms.

use thiserror::Error;

/// Errors raised at the boundary of the coding algorithms.
///
/// The Hamming core itself never fails: decode outcomes such as an
/// uncorrectable syndrome are returned as values. These variants cover
/// malformed input handed over by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Generic invalid input with a description
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A character other than '0' or '1' in a bit string
    #[error("Invalid bit {found:?} at index {index}, expected '0' or '1'")]
    InvalidBit { index: usize, found: char },

    /// Input shorter than the minimum meaningful length
    #[error("Input too short: length {length}, need at least {min_length}")]
    InputTooShort { length: usize, min_length: usize },
}

/// Result type for `cs` operations
pub type Result<T> = std::result::Result<T, Error>;
