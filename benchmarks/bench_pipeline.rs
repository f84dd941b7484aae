use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use logstat::parallel::aggregate_chunk;
use logstat::parsers::parse_line;
use logstat::{ParallelConfig, ParallelProcessor};

fn synthetic_log(lines: usize) -> Vec<String> {
    (0..lines)
        .map(|i| {
            let marker = match i % 20 {
                0 => " [ERROR]",
                1 | 2 => " [WARNING]",
                _ => "",
            };
            format!(
                "10.{}.{}.{} GET /api/items/{}{} {}",
                i % 3,
                i % 17,
                i % 251,
                i,
                marker,
                [200, 200, 200, 301, 404, 500][i % 6]
            )
        })
        .collect()
}

fn bench_parse_line(c: &mut Criterion) {
    let line = "10.0.0.1 GET /api/items/42 [WARNING] 404";
    c.bench_function("parse_line", |b| {
        b.iter(|| {
            black_box(parse_line(black_box(line)));
        });
    });
}

fn bench_aggregate_chunk(c: &mut Criterion) {
    let lines = synthetic_log(10_000);
    c.bench_function("aggregate_chunk_10k", |b| {
        b.iter(|| {
            black_box(aggregate_chunk(black_box(&lines)));
        });
    });
}

fn bench_parallel_process(c: &mut Criterion) {
    let lines = synthetic_log(200_000);
    let mut group = c.benchmark_group("parallel_process_200k");
    for workers in [1usize, 2, 4, 8] {
        let processor = ParallelProcessor::new(ParallelConfig {
            num_workers: workers,
        });
        group.bench_with_input(BenchmarkId::from_parameter(workers), &lines, |b, lines| {
            b.iter(|| {
                black_box(processor.process(black_box(lines)).ok());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_line,
    bench_aggregate_chunk,
    bench_parallel_process
);
criterion_main!(benches);
