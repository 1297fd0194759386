use crate::cs::ecc::hamming::{
    check_count_for_codeword, detect_and_correct, encode, extract_data, parity_bit_count,
    Decoded,
};
use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Every data vector of length `m`, as the bits of `0..2^m`.
fn all_vectors(m: usize) -> impl Iterator<Item = BitVec<u8, Msb0>> {
    (0u32..(1u32 << m)).map(move |value| (0..m).map(|i| (value >> i) & 1 == 1).collect())
}

fn random_vectors(m: usize, count: usize, seed: u64) -> Vec<BitVec<u8, Msb0>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..m).map(|_| rng.gen::<bool>()).collect())
        .collect()
}

/// Exhaustive up to 10 data bits, sampled beyond that
fn vectors_of_len(m: usize) -> Vec<BitVec<u8, Msb0>> {
    if m <= 10 {
        all_vectors(m).collect()
    } else {
        random_vectors(m, 256, m as u64)
    }
}

fn assert_round_trip(data: &BitSlice<u8, Msb0>) {
    let code = encode(data);
    assert_eq!(code.len(), data.len() + parity_bit_count(data.len()));
    assert_eq!(detect_and_correct(&code), Decoded::NoError, "data {}", data);
    assert_eq!(extract_data(&code).as_bitslice(), data);
}

fn assert_corrects_every_flip(data: &BitSlice<u8, Msb0>) {
    let code = encode(data);
    for p in 1..=code.len() {
        let mut received = code.clone();
        let bit = received[p - 1];
        received.set(p - 1, !bit);

        let decoded = detect_and_correct(&received);
        assert!(
            decoded.message().contains(&format!("position {}", p)),
            "message {:?} for flip at {}",
            decoded.message(),
            p
        );
        assert_eq!(
            decoded,
            Decoded::Corrected {
                position: p,
                codeword: code.clone(),
            },
            "data {} flipped at {}",
            data,
            p
        );
    }
}

#[test]
fn test_round_trip_without_errors() {
    for m in 1..=20 {
        for data in vectors_of_len(m) {
            assert_round_trip(&data);
        }
    }
}

#[test]
fn test_single_bit_errors_are_corrected() {
    for m in 1..=20 {
        for data in vectors_of_len(m) {
            assert_corrects_every_flip(&data);
        }
    }
}

#[test]
fn test_long_vectors() {
    for &m in &[57, 120, 247, 1000] {
        for data in random_vectors(m, 4, 7) {
            assert_round_trip(&data);
            assert_corrects_every_flip(&data);
        }
    }
}

#[test]
fn test_decoder_check_count_matches_encoder() {
    for m in 0..=1024 {
        let n = encode(&bitvec![u8, Msb0; 0; m]).len();
        assert_eq!(check_count_for_codeword(n), parity_bit_count(m), "m = {}", m);
    }
}

#[test]
fn test_scenario_encode() {
    let data = bits![u8, Msb0; 1, 0, 1, 1];
    assert_eq!(parity_bit_count(data.len()), 3);
    assert_eq!(encode(data), bitvec![u8, Msb0; 0, 1, 1, 0, 0, 1, 1]);
}

#[test]
fn test_scenario_correct_position_five() {
    let received = bits![u8, Msb0; 0, 1, 1, 0, 1, 1, 1];
    let decoded = detect_and_correct(received);
    assert_eq!(
        decoded.corrected(),
        Some(bits![u8, Msb0; 0, 1, 1, 0, 0, 1, 1])
    );
    assert!(decoded.message().contains("position 5"));
}

#[test]
fn test_scenario_no_error() {
    let code = bits![u8, Msb0; 0, 1, 1, 0, 0, 1, 1];
    assert_eq!(detect_and_correct(code), Decoded::NoError);
}
