//! Chunked, multi-worker corpus aggregation.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use comention_analysis::dictionary::{Lexicon, LexiconBuilder};
use comention_analysis::scanner::{AggregationState, StreamAggregator};
use comention_core::config::ScanConfig;
use comention_core::events::types::{ChunkMergedEvent, ScanCompleteEvent, ScanStartedEvent};
use comention_core::events::ComentionEventHandler;
use comention_core::types::EntityId;

const ALPHA: EntityId = EntityId(0);
const BETA: EntityId = EntityId(1);
const GAMMA: EntityId = EntityId(2);

fn greek_lexicon() -> Lexicon {
    let mut builder = LexiconBuilder::new();
    builder.add_term("alpha", "alpha", false);
    builder.add_term("beta", "beta", false);
    builder.add_term("gamma", "gamma", false);
    builder.build().unwrap()
}

fn synthetic_corpus(lines: usize) -> String {
    let words = ["alpha", "beta", "gamma", "delta"];
    let mut corpus = String::new();
    for i in 0..lines {
        let a = words[i % 4];
        let b = words[(i * 7 + 3) % 4];
        let c = words[(i / 3) % 4];
        corpus.push_str(&format!("{a} then {b} and {c} here\n"));
    }
    corpus
}

#[derive(Default)]
struct Recorder {
    started: AtomicUsize,
    chunks: Mutex<Vec<u64>>,
    max_processed: AtomicU64,
    completed: AtomicUsize,
}

impl ComentionEventHandler for Recorder {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_chunk_merged(&self, event: &ChunkMergedEvent) {
        self.chunks.lock().unwrap().push(event.chunk_index);
        self.max_processed
            .fetch_max(event.lines_processed, Ordering::Relaxed);
    }

    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn each_line_counts_an_entity_and_a_pair_at_most_once() {
    let lexicon = greek_lexicon();
    let (state, summary) = StreamAggregator::new(lexicon.tagger())
        .run("alpha beta alpha beta alpha\n".as_bytes())
        .unwrap();

    assert_eq!(summary.lines, 1);
    assert_eq!(state.mentions(ALPHA), 1);
    assert_eq!(state.mentions(BETA), 1);
    assert_eq!(state.comentions(ALPHA, BETA), 1);
    assert_eq!(state.comentions(BETA, ALPHA), 1);
    assert_eq!(state.mentions(GAMMA), 0);
}

#[test]
fn lines_without_entities_still_count() {
    let lexicon = greek_lexicon();
    let (state, summary) = StreamAggregator::new(lexicon.tagger())
        .run("nothing here\nalpha\n\nstill nothing\n".as_bytes())
        .unwrap();

    assert_eq!(state.lines(), 4);
    assert_eq!(summary.lines, 4);
    assert_eq!(summary.entities, 1);
    assert_eq!(summary.pairs, 0);
}

#[test]
fn first_seen_is_the_exact_line_number() {
    let lexicon = greek_lexicon();
    let corpus = "none\nalpha\nnone\nnone\nbeta and alpha\ngamma\nalpha and beta\n";
    let (state, _) = StreamAggregator::new(lexicon.tagger())
        .workers(4)
        .chunk_lines(1)
        .run(corpus.as_bytes())
        .unwrap();

    assert_eq!(state.first_seen(ALPHA), Some(2));
    assert_eq!(state.first_seen(BETA), Some(5));
    assert_eq!(state.first_seen(GAMMA), Some(6));
    assert_eq!(state.pair_first_seen(ALPHA, BETA), Some(5));
    assert_eq!(state.pair_first_seen(ALPHA, GAMMA), None);
    assert_eq!(state.comentions(ALPHA, BETA), 2);
}

#[test]
fn worker_count_and_chunk_size_do_not_change_results() {
    let lexicon = greek_lexicon();
    let corpus = synthetic_corpus(2_000);

    let (sequential, seq_summary) = StreamAggregator::new(lexicon.tagger())
        .workers(1)
        .chunk_lines(20_000)
        .run(corpus.as_bytes())
        .unwrap();
    let (parallel, par_summary) = StreamAggregator::new(lexicon.tagger())
        .workers(4)
        .chunk_lines(7)
        .queue_depth(3)
        .run(corpus.as_bytes())
        .unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(seq_summary.chunks, 1);
    assert_eq!(par_summary.chunks, 286);
    assert_eq!(par_summary.lines, 2_000);
}

#[test]
fn events_report_every_merged_chunk() {
    let lexicon = greek_lexicon();
    let recorder = Recorder::default();
    let corpus = synthetic_corpus(95);

    let (_, summary) = StreamAggregator::new(lexicon.tagger())
        .workers(3)
        .chunk_lines(10)
        .with_events(&recorder)
        .run(corpus.as_bytes())
        .unwrap();

    let mut chunks = recorder.chunks.lock().unwrap().clone();
    chunks.sort_unstable();
    assert_eq!(chunks, (0..10).collect::<Vec<u64>>());
    assert_eq!(summary.chunks, 10);
    assert_eq!(recorder.max_processed.load(Ordering::Relaxed), 95);
    assert_eq!(recorder.started.load(Ordering::Relaxed), 1);
    assert_eq!(recorder.completed.load(Ordering::Relaxed), 1);
}

#[test]
fn empty_corpus_produces_empty_state() {
    let lexicon = greek_lexicon();
    let (state, summary) = StreamAggregator::new(lexicon.tagger())
        .workers(2)
        .run("".as_bytes())
        .unwrap();

    assert_eq!(state, AggregationState::new());
    assert_eq!(summary.lines, 0);
    assert_eq!(summary.chunks, 0);
}

#[test]
fn config_drives_pool_shape() {
    let lexicon = greek_lexicon();
    let config = ScanConfig {
        workers: Some(2),
        chunk_lines: Some(3),
        queue_depth: None,
    };
    let (_, summary) = StreamAggregator::from_config(lexicon.tagger(), &config)
        .run(synthetic_corpus(10).as_bytes())
        .unwrap();
    assert_eq!(summary.chunks, 4);
}

#[test]
fn merge_adds_counts_and_keeps_earliest_first_seen() {
    let mut early = AggregationState::new();
    early.record_line(3, &[ALPHA, BETA]);
    let mut late = AggregationState::new();
    late.record_line(10, &[ALPHA, BETA, GAMMA]);
    late.record_line(11, &[GAMMA]);

    let mut merged = AggregationState::new();
    merged.merge(late);
    merged.merge(early);

    assert_eq!(merged.lines(), 3);
    assert_eq!(merged.mentions(ALPHA), 2);
    assert_eq!(merged.mentions(GAMMA), 2);
    assert_eq!(merged.comentions(ALPHA, BETA), 2);
    assert_eq!(merged.comentions(BETA, GAMMA), 1);
    assert_eq!(merged.first_seen(ALPHA), Some(3));
    assert_eq!(merged.pair_first_seen(ALPHA, BETA), Some(3));
    assert_eq!(merged.first_seen(GAMMA), Some(10));
}
