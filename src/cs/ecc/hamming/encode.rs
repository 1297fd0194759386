//! Hamming encoder.
//!
//! Interleaves parity bits at the power-of-two positions of the codeword
//! and fills every other position with the data bits in order.

use super::planner::{is_parity_position, parity_bit_count};
use super::Bits;
use bitvec::prelude::*;
use log::{debug, trace};

/// XOR of the codeword bits covered by the parity bit at `parity_pos`.
///
/// When `include_self` is false the parity position itself is skipped, which
/// is what the encoder needs while the parity bit is still a placeholder.
pub(super) fn covered_parity(
    code: &BitSlice<u8, Msb0>,
    parity_pos: usize,
    include_self: bool,
) -> bool {
    let mut parity = false;
    for position in parity_pos..=code.len() {
        if position & parity_pos == 0 || (!include_self && position == parity_pos) {
            continue;
        }
        parity ^= code[position - 1];
    }
    parity
}

/// Spreads `data` over the non-parity positions of a zeroed codeword of `len` bits.
pub(super) fn place_data(data: &BitSlice<u8, Msb0>, len: usize) -> Bits {
    let mut code = bitvec![u8, Msb0; 0; len];
    let mut data_bits = data.iter().by_vals();
    for position in 1..=len {
        if is_parity_position(position) {
            continue;
        }
        if let Some(bit) = data_bits.next() {
            code.set(position - 1, bit);
        }
    }
    code
}

/// Encodes a data vector into a Hamming codeword.
///
/// The codeword has `m + r` bits where `r` is the minimal parity bit count
/// for `m` data bits. Each parity bit at position `2^i` makes the XOR over
/// its covered positions zero.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
/// use hamming::cs::ecc::hamming::encode;
///
/// let data = bits![u8, Msb0; 1, 0, 1, 1];
/// assert_eq!(encode(data), bitvec![u8, Msb0; 0, 1, 1, 0, 0, 1, 1]);
/// ```
pub fn encode(data: &BitSlice<u8, Msb0>) -> Bits {
    let parity_bits = parity_bit_count(data.len());
    let len = data.len() + parity_bits;
    debug!(
        "encoding {} data bits into a {}-bit codeword ({} parity bits)",
        data.len(),
        len,
        parity_bits
    );

    let mut code = place_data(data, len);
    for i in 0..parity_bits {
        let parity_pos = 1usize << i;
        let parity = covered_parity(&code, parity_pos, false);
        trace!("parity bit p{} at position {} = {}", i + 1, parity_pos, parity as u8);
        code.set(parity_pos - 1, parity);
    }
    code
}

/// Reads the data bits back out of a codeword, skipping parity positions.
pub fn extract_data(code: &BitSlice<u8, Msb0>) -> Bits {
    code.iter()
        .by_vals()
        .enumerate()
        .filter(|(i, _)| !is_parity_position(i + 1))
        .map(|(_, bit)| bit)
        .collect()
}
