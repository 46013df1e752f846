use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use umorse_core::{encoder::encode, Layout};

const PANGRAM: &[u8] = b"The quick brown fox jumps over the lazy dog 0123456789.\n";

fn make_text(size: usize) -> Vec<u8> {
    PANGRAM.iter().copied().cycle().take(size).collect()
}

fn bench_encode(c: &mut Criterion) {
    for (name, layout) in [("encode_aligned", Layout::Aligned), ("encode_compact", Layout::Compact)] {
        let mut group = c.benchmark_group(name);

        for size in [64, 256, 1024, 4096] {
            let text = make_text(size);
            // Large enough that nothing is truncated
            let mut code = vec![0u8; 3 * size + 4];

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
                b.iter(|| encode(black_box(text), &mut code, layout).unwrap());
            });
        }

        group.finish();
    }
}

fn bench_truncating_encode(c: &mut Criterion) {
    let text = make_text(4096);
    let mut code = vec![0u8; 128];

    c.bench_function("encode_truncated_128", |b| {
        b.iter(|| encode(black_box(&text), &mut code, Layout::Compact).unwrap());
    });
}

criterion_group!(benches, bench_encode, bench_truncating_encode);
criterion_main!(benches);
