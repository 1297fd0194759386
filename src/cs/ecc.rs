//! Error correction code implementations.
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! Currently implemented:
//! - Hamming single-error-correcting codes over arbitrary-length bit vectors
//!
//! # Examples
//!
//! ```rust
//! use hamming::cs::ecc::hamming::{encode, parse_bits, format_bits};
//!
//! let data = parse_bits("1011").unwrap();
//! assert_eq!(format_bits(&encode(&data)), "0110011");
//! ```

use crate::cs::error::Error;

/// Result type for error correction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Hamming codes
pub mod hamming;
pub use hamming::{detect_and_correct, encode, extract_data, Bits, Decoded};
