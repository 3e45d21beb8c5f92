use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use percoder::percent;

fn generate_text(len: usize) -> String {
    (0..len)
        .map(|i| char::from(percent::FIRST + (i % percent::TABLE_LEN) as u8))
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("percent_encode");
    for size_kb in [1, 64, 1024] {
        let data = generate_text(size_kb * 1024);
        group.bench_with_input(
            BenchmarkId::new("single", format!("{}KB", size_kb)),
            &data,
            |b, data| b.iter(|| percent::encode(black_box(data), false)),
        );
        group.bench_with_input(
            BenchmarkId::new("double", format!("{}KB", size_kb)),
            &data,
            |b, data| b.iter(|| percent::encode(black_box(data), true)),
        );
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("percent_decode");
    for size_kb in [1, 64, 1024] {
        let encoded = percent::encode(&generate_text(size_kb * 1024), false).unwrap();
        group.bench_with_input(
            BenchmarkId::new("single", format!("{}KB", size_kb)),
            &encoded,
            |b, data| b.iter(|| percent::decode(black_box(data), false)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
