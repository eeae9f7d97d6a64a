//! Pipeline benchmarks: aggregation throughput by worker count, then
//! implicit-mode statistics.
//! Run with: cargo bench -p comention-analysis --bench pipeline_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use comention_analysis::dictionary::{Lexicon, LexiconBuilder};
use comention_analysis::scanner::StreamAggregator;
use comention_analysis::statistics::StatisticsEngine;
use comention_core::config::OutputMode;

const VOCABULARY: usize = 200;

fn lexicon() -> Lexicon {
    let mut builder = LexiconBuilder::new();
    for i in 0..VOCABULARY {
        builder.add_term(&format!("E{i}"), &format!("entity{i}"), false);
    }
    builder.build().unwrap()
}

fn corpus(lines: usize) -> String {
    let mut corpus = String::with_capacity(lines * 64);
    for i in 0..lines {
        let a = i % VOCABULARY;
        let b = (i * 31 + 7) % VOCABULARY;
        let c = (i / 5) % 20;
        corpus.push_str(&format!(
            "patients with entity{a} and entity{b} showed entity{c} responses\n"
        ));
    }
    corpus
}

fn aggregation(c: &mut Criterion) {
    let lexicon = lexicon();
    let text = corpus(50_000);

    let mut group = c.benchmark_group("aggregation");
    group.sample_size(10);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for workers in [1, 2, 4] {
        group.bench_with_input(BenchmarkId::new("workers", workers), &workers, |b, &workers| {
            b.iter(|| {
                StreamAggregator::new(lexicon.tagger())
                    .workers(workers)
                    .chunk_lines(5_000)
                    .run(text.as_bytes())
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn implicit_statistics(c: &mut Criterion) {
    let lexicon = lexicon();
    let (state, _) = StreamAggregator::new(lexicon.tagger())
        .workers(2)
        .run(corpus(50_000).as_bytes())
        .unwrap();
    let engine = StatisticsEngine::new(OutputMode::Implicit);

    c.bench_function("implicit_statistics", |b| {
        b.iter(|| engine.compute(&state, lexicon.registry()));
    });
}

criterion_group!(benches, aggregation, implicit_statistics);
criterion_main!(benches);
