//! Conversions between bit strings and bit vectors.
//!
//! The coding functions assume well-formed input. Callers holding text such
//! as `"1011"` go through these helpers, which reject anything else.

use super::Bits;
use crate::cs::ecc::Result;
use crate::cs::error::Error;
use bitvec::prelude::*;

/// Shortest codeword worth decoding: one data bit plus two parity bits.
pub const MIN_CODEWORD_LEN: usize = 3;

/// Parses a string of '0' and '1' characters into bits.
///
/// # Errors
///
/// `Error::InvalidInput` for an empty string, `Error::InvalidBit` for the
/// first character that is not a binary digit.
pub fn parse_bits(text: &str) -> Result<Bits> {
    if text.is_empty() {
        return Err(Error::InvalidInput(
            "Bit string must not be empty".to_string(),
        ));
    }

    let mut bits = Bits::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            found => return Err(Error::InvalidBit { index, found }),
        }
    }
    Ok(bits)
}

/// Parses a received codeword, also enforcing `MIN_CODEWORD_LEN`.
pub fn parse_codeword(text: &str) -> Result<Bits> {
    let bits = parse_bits(text)?;
    if bits.len() < MIN_CODEWORD_LEN {
        return Err(Error::InputTooShort {
            length: bits.len(),
            min_length: MIN_CODEWORD_LEN,
        });
    }
    Ok(bits)
}

/// Renders bits as a string of '0' and '1'.
pub fn format_bits(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
