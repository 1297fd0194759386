//! Step-by-step traces of encoding and decoding.
//!
//! These are read-only diagnostics that rebuild the intermediate tables of
//! the parity computation: where each data bit lands, which positions every
//! parity bit covers and what value it takes. The `Display` impls render the
//! traces as plain-text tables.

use super::decode::{detect_and_correct, Decoded};
use super::encode::{covered_parity, place_data};
use super::planner::{
    check_count_for_codeword, covered_positions, is_parity_position, parity_bit_count,
};
use super::Bits;
use bitvec::prelude::*;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// One parity bit of an encoding or decoding trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityStep {
    /// 0-based check index `i`
    pub index: usize,
    /// 1-based position `2^i`
    pub position: usize,
    /// Positions covered by this parity bit, its own position included
    pub covered: BTreeSet<usize>,
    /// Parity computed at this step
    pub value: bool,
}

/// Record of how a data vector was encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingTrace {
    pub data: Bits,
    /// Codeword with data placed and parity positions still zero
    pub layout: Bits,
    pub steps: Vec<ParityStep>,
    pub codeword: Bits,
}

impl EncodingTrace {
    /// Encodes `data`, recording every parity computation along the way.
    pub fn new(data: &BitSlice<u8, Msb0>) -> Self {
        let parity_bits = parity_bit_count(data.len());
        let len = data.len() + parity_bits;
        let layout = place_data(data, len);

        let mut codeword = layout.clone();
        let mut steps = Vec::with_capacity(parity_bits);
        for index in 0..parity_bits {
            let position = 1usize << index;
            let value = covered_parity(&codeword, position, false);
            codeword.set(position - 1, value);
            steps.push(ParityStep {
                index,
                position,
                covered: covered_positions(index, len),
                value,
            });
        }

        EncodingTrace {
            data: data.to_bitvec(),
            layout,
            steps,
            codeword,
        }
    }
}

/// Record of the checks run over a received codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingTrace {
    pub received: Bits,
    /// One step per check; `value` is true when the check failed
    pub steps: Vec<ParityStep>,
    pub syndrome: usize,
    pub outcome: Decoded,
}

impl DecodingTrace {
    pub fn new(code: &BitSlice<u8, Msb0>) -> Self {
        let len = code.len();
        let steps: Vec<ParityStep> = (0..check_count_for_codeword(len))
            .map(|index| {
                let position = 1usize << index;
                ParityStep {
                    index,
                    position,
                    covered: covered_positions(index, len),
                    value: covered_parity(code, position, true),
                }
            })
            .collect();
        let syndrome = steps
            .iter()
            .filter(|step| step.value)
            .fold(0, |acc, step| acc | step.position);

        DecodingTrace {
            received: code.to_bitvec(),
            steps,
            syndrome,
            outcome: detect_and_correct(code),
        }
    }
}

/// Width of the binary position labels, at least 4 like the classic tables.
fn label_width(len: usize) -> usize {
    let bits = (usize::BITS - len.leading_zeros()) as usize;
    bits.max(4)
}

fn write_header(f: &mut Formatter<'_>, len: usize) -> std::fmt::Result {
    let width = label_width(len);
    write!(f, "{:<12}", "")?;
    for position in 1..=len {
        let label = if is_parity_position(position) {
            format!("p{}", position.trailing_zeros() + 1)
        } else {
            format!("d{}", position)
        };
        write!(f, " {:>w$}", label, w = width)?;
    }
    writeln!(f)?;
    write!(f, "{:<12}", "position")?;
    for position in 1..=len {
        write!(f, " {:0w$b}", position, w = width)?;
    }
    writeln!(f)
}

fn write_row<F>(f: &mut Formatter<'_>, name: &str, len: usize, cell: F) -> std::fmt::Result
where
    F: Fn(usize) -> Option<bool>,
{
    let width = label_width(len);
    write!(f, "{:<12}", name)?;
    for position in 1..=len {
        match cell(position) {
            Some(bit) => write!(f, " {:>w$}", bit as u8, w = width)?,
            None => write!(f, " {:>w$}", "", w = width)?,
        }
    }
    writeln!(f)
}

impl Display for EncodingTrace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let len = self.codeword.len();
        write_header(f, len)?;
        write_row(f, "data", len, |p| {
            (!is_parity_position(p)).then(|| self.layout[p - 1])
        })?;
        for step in &self.steps {
            write_row(f, &format!("p{}", step.index + 1), len, |p| {
                step.covered.contains(&p).then(|| self.codeword[p - 1])
            })?;
        }
        write_row(f, "codeword", len, |p| Some(self.codeword[p - 1]))?;
        for step in &self.steps {
            writeln!(
                f,
                "p{} at position {} = {}",
                step.index + 1,
                step.position,
                step.value as u8
            )?;
        }
        Ok(())
    }
}

impl Display for DecodingTrace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let len = self.received.len();
        write_header(f, len)?;
        write_row(f, "received", len, |p| Some(self.received[p - 1]))?;
        for step in &self.steps {
            write_row(f, &format!("p{}", step.index + 1), len, |p| {
                step.covered.contains(&p).then(|| self.received[p - 1])
            })?;
        }
        for step in &self.steps {
            writeln!(
                f,
                "check p{} (position {}): {}",
                step.index + 1,
                step.position,
                if step.value { "fail" } else { "ok" }
            )?;
        }
        writeln!(f, "syndrome = {} ({:b})", self.syndrome, self.syndrome)?;
        writeln!(f, "{}", self.outcome)
    }
}
