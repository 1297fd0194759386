//! Hamming single-error-correcting code.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! A codeword of `n = m + r` bits carries `m` data bits and `r` parity bits, where `r` is the
//! smallest count with `2^r >= m + r + 1`. Parity bits sit at the 1-based positions that are powers
//! of two; parity bit `2^i` covers every position whose index has bit `i` set.
//!
//! On decoding, the failed checks form a syndrome. Zero means no error, a value within the
//! codeword names the single flipped bit, and anything larger cannot be explained by one error.
//! The code gives no guarantee for two or more simultaneous errors.
//!
//! This module provides:
//! - Parity planning and covering-set queries ([`parity_bit_count`], [`covered_positions`])
//! - Encoding of arbitrary-length data vectors ([`encode`])
//! - Syndrome decoding with single-bit correction ([`detect_and_correct`])
//! - Step-by-step traces of both directions ([`EncodingTrace`], [`DecodingTrace`])
//! - Bit string parsing for callers holding text ([`parse_bits`], [`parse_codeword`])
//!
//! # Examples
//!
//! ```
//! use bitvec::prelude::*;
//! use hamming::cs::ecc::hamming::{detect_and_correct, encode, extract_data, Decoded};
//!
//! let data = bits![u8, Msb0; 1, 0, 1, 1];
//! let code = encode(data);
//! assert_eq!(detect_and_correct(&code), Decoded::NoError);
//!
//! let mut received = code.clone();
//! let bit = received[2];
//! received.set(2, !bit);
//! if let Decoded::Corrected { position, codeword } = detect_and_correct(&received) {
//!     assert_eq!(position, 3);
//!     assert_eq!(extract_data(&codeword).as_bitslice(), data);
//! }
//! ```

use bitvec::prelude::*;

/// Owned bit sequence used for data vectors and codewords
pub type Bits = BitVec<u8, Msb0>;

pub mod bits;
mod decode;
mod encode;
pub mod planner;
pub mod trace;

#[cfg(test)]
mod tests;

pub use bits::{format_bits, parse_bits, parse_codeword, MIN_CODEWORD_LEN};
pub use decode::{detect_and_correct, syndrome, Decoded};
pub use encode::{encode, extract_data};
pub use planner::{
    check_count_for_codeword, codeword_len, covered_positions, is_parity_position,
    is_power_of_two, minimal_check_count, parity_bit_count,
};
pub use trace::{DecodingTrace, EncodingTrace, ParityStep};
