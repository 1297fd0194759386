//! Parity planning for Hamming codes.
//!
//! Decides how many parity bits a data vector needs and which codeword
//! positions each parity bit covers. Positions are 1-based throughout:
//! position `p` is a parity position iff `p` is a power of two.

use log::debug;
use std::collections::BTreeSet;

/// Returns the smallest `r >= start` such that `2^r >= required(r)`.
///
/// Encoding and decoding differ only in the budget they must cover:
/// `m + r + 1` when planning from the data length, `n + 1` when planning
/// from a received codeword.
pub fn minimal_check_count<F>(start: usize, required: F) -> usize
where
    F: Fn(usize) -> usize,
{
    let mut r = start;
    while r < usize::BITS as usize - 1 && (1usize << r) < required(r) {
        r += 1;
    }
    r
}

/// Number of parity bits needed to protect `data_len` data bits.
///
/// This is the minimal `r` with `2^r >= m + r + 1`, starting from one so
/// that an empty data vector still gets a single parity bit.
pub fn parity_bit_count(data_len: usize) -> usize {
    let r = minimal_check_count(1, |r| data_len + r + 1);
    debug!("planned {} parity bits for {} data bits", r, data_len);
    r
}

/// Number of parity checks the decoder runs on a codeword of `codeword_len` bits.
pub fn check_count_for_codeword(codeword_len: usize) -> usize {
    minimal_check_count(0, |_| codeword_len + 1)
}

/// Total codeword length for `data_len` data bits.
pub fn codeword_len(data_len: usize) -> usize {
    data_len + parity_bit_count(data_len)
}

/// True iff `x` has exactly one set bit.
pub fn is_power_of_two(x: usize) -> bool {
    x != 0 && (x & (x - 1)) == 0
}

/// True iff the 1-based `position` holds a parity bit.
pub fn is_parity_position(position: usize) -> bool {
    is_power_of_two(position)
}

/// Positions checked by parity bit `parity_bit_index` in a codeword of
/// `codeword_len` bits: every `p` in `1..=codeword_len` with bit
/// `parity_bit_index` set, the parity position itself included.
pub fn covered_positions(parity_bit_index: usize, codeword_len: usize) -> BTreeSet<usize> {
    if parity_bit_index >= usize::BITS as usize {
        return BTreeSet::new();
    }
    let mask = 1usize << parity_bit_index;
    (mask..=codeword_len).filter(|p| p & mask != 0).collect()
}
