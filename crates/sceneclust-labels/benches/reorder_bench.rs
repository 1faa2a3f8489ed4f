//! Criterion benchmarks for sceneclust-labels: reordering and parsing.

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sceneclust_labels::{ReorderConfig, parse_labels};

/// Four scenario blocks of `block` samples, each mostly one label, with noise.
fn make_labels(block: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let block_labels = [2i64, 0, 3, 1];
    let mut labels = Vec::with_capacity(block * block_labels.len());
    for &label in &block_labels {
        for _ in 0..block {
            let roll: f64 = rng.random();
            labels.push(if roll < 0.8 {
                label
            } else if roll < 0.95 {
                rng.random_range(0..4)
            } else {
                -1
            });
        }
    }
    labels
}

fn bench_reorder(c: &mut Criterion) {
    let labels = make_labels(25_000);
    let cfg = ReorderConfig::new(4).unwrap();

    c.bench_function("reorder_100k_p4", |b| {
        b.iter(|| cfg.fit(&labels).unwrap());
    });
}

fn bench_parse(c: &mut Criterion) {
    let labels = make_labels(2_500);
    let rendered = format!("{labels:?}");

    c.bench_function("parse_10k_labels", |b| {
        b.iter(|| parse_labels(&rendered).unwrap());
    });
}

criterion_group!(benches, bench_reorder, bench_parse);
criterion_main!(benches);
