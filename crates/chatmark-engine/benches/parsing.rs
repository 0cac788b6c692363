use chatmark_engine::{normalize_chart, parse_blocks, resolve_segments};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_block_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_answer(100);
    group.bench_function("parse_blocks", |b| {
        b.iter(|| {
            let blocks = parse_blocks(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

fn bench_inline_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let fragment = common::generate_inline_fragment(50);
    group.bench_function("resolve_segments", |b| {
        b.iter(|| {
            let segments = resolve_segments(std::hint::black_box(&fragment));
            std::hint::black_box(segments);
        });
    });

    group.finish();
}

fn bench_chart_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");

    let payload = common::generate_loose_chart(200);
    group.bench_function("normalize_loose_payload", |b| {
        b.iter(|| {
            let spec = normalize_chart(std::hint::black_box(payload.as_str()));
            std::hint::black_box(spec);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_block_parsing,
    bench_inline_resolution,
    bench_chart_normalization
);
criterion_main!(benches);
