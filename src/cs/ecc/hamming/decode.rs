//! Hamming syndrome decoding and single-error correction.

use super::encode::covered_parity;
use super::planner::check_count_for_codeword;
use super::Bits;
use bitvec::prelude::*;
use log::{debug, trace, warn};
use std::fmt::{Display, Formatter};

/// Outcome of checking a received codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Every parity check passed
    NoError,
    /// A single bit error at the 1-based `position` was flipped back
    Corrected {
        /// 1-based position of the flipped bit
        position: usize,
        /// Copy of the received codeword with the error fixed
        codeword: Bits,
    },
    /// The syndrome points past the end of the codeword
    Uncorrectable {
        /// Syndrome computed from the failed checks
        syndrome: usize,
        /// Length of the received codeword
        codeword_len: usize,
    },
}

impl Decoded {
    /// The corrected codeword, if a correction was made.
    pub fn corrected(&self) -> Option<&BitSlice<u8, Msb0>> {
        match self {
            Decoded::Corrected { codeword, .. } => Some(codeword.as_bitslice()),
            _ => None,
        }
    }

    /// Human readable status line.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_error_free(&self) -> bool {
        matches!(self, Decoded::NoError)
    }
}

impl Display for Decoded {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Decoded::NoError => write!(f, "no error detected"),
            Decoded::Corrected { position, codeword } => {
                write!(f, "error detected at position {}; corrected codeword: ", position)?;
                for bit in codeword.iter().by_vals() {
                    write!(f, "{}", bit as u8)?;
                }
                Ok(())
            }
            Decoded::Uncorrectable {
                syndrome,
                codeword_len,
            } => write!(
                f,
                "error detected but cannot be corrected: syndrome {} exceeds codeword length {}",
                syndrome, codeword_len
            ),
        }
    }
}

/// Computes the syndrome of a received codeword.
///
/// Bit `i` of the result is set when the check over the positions covered by
/// parity bit `2^i` (the parity bit included) has odd parity.
pub fn syndrome(code: &BitSlice<u8, Msb0>) -> usize {
    let checks = check_count_for_codeword(code.len());
    let syndrome = compute_syndrome(code, checks);
    debug!(
        "syndrome of {}-bit codeword over {} checks = {}",
        code.len(),
        checks,
        syndrome
    );
    syndrome
}

fn check_bit(code: &BitSlice<u8, Msb0>, i: usize) -> usize {
    let parity_pos = 1usize << i;
    let parity = covered_parity(code, parity_pos, true);
    trace!("check p{} at position {}: parity {}", i + 1, parity_pos, parity as u8);
    if parity {
        parity_pos
    } else {
        0
    }
}

#[cfg(not(feature = "parallel"))]
fn compute_syndrome(code: &BitSlice<u8, Msb0>, checks: usize) -> usize {
    (0..checks).map(|i| check_bit(code, i)).fold(0, |acc, bit| acc | bit)
}

#[cfg(feature = "parallel")]
fn compute_syndrome(code: &BitSlice<u8, Msb0>, checks: usize) -> usize {
    use rayon::prelude::*;

    (0..checks)
        .into_par_iter()
        .map(|i| check_bit(code, i))
        .reduce(|| 0, |acc, bit| acc | bit)
}

/// Checks a received codeword and corrects a single bit error.
///
/// The number of checks is derived from the codeword length alone. A zero
/// syndrome means no error; a syndrome within `1..=n` names the 1-based
/// position to flip; anything larger cannot be attributed to a single error.
///
/// # Examples
///
/// ```
/// use bitvec::prelude::*;
/// use hamming::cs::ecc::hamming::{detect_and_correct, Decoded};
///
/// let received = bits![u8, Msb0; 0, 1, 1, 0, 1, 1, 1];
/// match detect_and_correct(received) {
///     Decoded::Corrected { position, codeword } => {
///         assert_eq!(position, 5);
///         assert_eq!(codeword, bitvec![u8, Msb0; 0, 1, 1, 0, 0, 1, 1]);
///     }
///     other => panic!("unexpected outcome: {}", other),
/// }
/// ```
pub fn detect_and_correct(code: &BitSlice<u8, Msb0>) -> Decoded {
    let syndrome = syndrome(code);
    let len = code.len();

    if syndrome == 0 {
        Decoded::NoError
    } else if syndrome <= len {
        let mut codeword = code.to_bitvec();
        let bit = codeword[syndrome - 1];
        codeword.set(syndrome - 1, !bit);
        debug!("corrected bit error at position {}", syndrome);
        Decoded::Corrected {
            position: syndrome,
            codeword,
        }
    } else {
        warn!(
            "uncorrectable codeword: syndrome {} exceeds length {}",
            syndrome, len
        );
        Decoded::Uncorrectable {
            syndrome,
            codeword_len: len,
        }
    }
}
