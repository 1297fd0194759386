use bitvec::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming::cs::ecc::hamming::{detect_and_correct, encode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_data(len: usize) -> BitVec<u8, Msb0> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen::<bool>()).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_encode");
    for &size in &[4usize, 57, 1013, 8178] {
        let data = random_data(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_detect_and_correct");
    for &size in &[4usize, 57, 1013, 8178] {
        let mut code = encode(&random_data(size));
        let bit = code[size / 2];
        code.set(size / 2, !bit);
        group.bench_with_input(BenchmarkId::from_parameter(size), &code, |b, code| {
            b.iter(|| detect_and_correct(black_box(code)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
