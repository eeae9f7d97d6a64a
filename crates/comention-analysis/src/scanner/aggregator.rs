//! StreamAggregator: the parallel corpus scan.

use std::any::Any;
use std::io::BufRead;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use comention_core::config::ScanConfig;
use comention_core::constants::{DEFAULT_CHUNK_LINES, DEFAULT_QUEUE_DEPTH_PER_WORKER};
use comention_core::errors::ScanError;
use comention_core::events::types::{ChunkMergedEvent, ScanCompleteEvent, ScanStartedEvent};
use comention_core::events::ComentionEventHandler;
use serde::Serialize;

use super::chunker::{Chunk, ChunkReader};
use super::state::AggregationState;
use crate::tagger::EntityTagger;

/// Totals of one scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    pub lines: u64,
    pub chunks: u64,
    pub entities: usize,
    pub pairs: usize,
    pub duration: Duration,
}

/// Streams a corpus through a pool of tagging workers.
///
/// The calling thread reads chunks and feeds a bounded channel; each worker
/// tags a whole chunk into local counts, then takes the single merge lock
/// once to fold them into the shared state. The tagger is only read.
pub struct StreamAggregator<'a> {
    tagger: &'a EntityTagger,
    workers: usize,
    chunk_lines: usize,
    queue_depth: Option<usize>,
    events: Option<&'a dyn ComentionEventHandler>,
}

impl<'a> StreamAggregator<'a> {
    /// One worker, default chunk size.
    pub fn new(tagger: &'a EntityTagger) -> Self {
        Self {
            tagger,
            workers: 1,
            chunk_lines: DEFAULT_CHUNK_LINES,
            queue_depth: None,
            events: None,
        }
    }

    pub fn from_config(tagger: &'a EntityTagger, config: &ScanConfig) -> Self {
        Self::new(tagger)
            .workers(config.effective_workers())
            .chunk_lines(config.effective_chunk_lines())
            .queue_depth(config.effective_queue_depth())
    }

    /// Worker threads; 0 means one per available CPU.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = match workers {
            0 => thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            n => n,
        };
        self
    }

    pub fn chunk_lines(mut self, chunk_lines: usize) -> Self {
        self.chunk_lines = chunk_lines.max(1);
        self
    }

    /// Chunks buffered between the reader and the workers.
    pub fn queue_depth(mut self, depth: usize) -> Self {
        self.queue_depth = Some(depth.max(1));
        self
    }

    pub fn with_events(mut self, events: &'a dyn ComentionEventHandler) -> Self {
        self.events = Some(events);
        self
    }

    fn effective_queue_depth(&self) -> usize {
        self.queue_depth
            .unwrap_or(self.workers * DEFAULT_QUEUE_DEPTH_PER_WORKER)
    }

    /// Scan `reader` to exhaustion.
    pub fn run<R: BufRead>(&self, reader: R) -> Result<(AggregationState, ScanSummary), ScanError> {
        let started = Instant::now();
        tracing::info!(
            workers = self.workers,
            chunk_lines = self.chunk_lines,
            "scan started"
        );
        if let Some(events) = self.events {
            events.on_scan_started(&ScanStartedEvent {
                workers: self.workers,
                chunk_lines: self.chunk_lines,
            });
        }

        let shared = Mutex::new(AggregationState::new());
        let lines_processed = AtomicU64::new(0);

        let chunks = thread::scope(|scope| {
            let (sender, receiver) = crossbeam_channel::bounded::<Chunk>(self.effective_queue_depth());

            let mut handles = Vec::with_capacity(self.workers);
            for worker in 0..self.workers {
                let receiver = receiver.clone();
                let shared = &shared;
                let lines_processed = &lines_processed;
                let handle = thread::Builder::new()
                    .name(format!("comention-scan-{worker}"))
                    .spawn_scoped(scope, move || {
                        for chunk in receiver {
                            self.process_chunk(chunk, shared, lines_processed);
                        }
                    })
                    .map_err(|err| ScanError::PoolStartFailed {
                        message: err.to_string(),
                    })?;
                handles.push(handle);
            }
            drop(receiver);

            let mut chunk_reader = ChunkReader::new(reader, self.chunk_lines);
            let mut dispatched = 0u64;
            let mut read_error = None;
            loop {
                match chunk_reader.next_chunk() {
                    Ok(Some(chunk)) => {
                        dispatched += 1;
                        if sender.send(chunk).is_err() {
                            // Every worker is gone; the join below reports why.
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(err) => {
                        read_error = Some(err);
                        break;
                    }
                }
            }
            drop(sender);

            let mut worker_error = None;
            for (worker, handle) in handles.into_iter().enumerate() {
                if let Err(payload) = handle.join() {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(worker, %message, "scan worker panicked");
                    worker_error.get_or_insert(ScanError::WorkerFailed { worker, message });
                }
            }

            match worker_error.or(read_error) {
                Some(err) => Err(err),
                None => Ok(dispatched),
            }
        })?;

        let state = shared.into_inner().unwrap_or_else(PoisonError::into_inner);
        let summary = ScanSummary {
            lines: state.lines(),
            chunks,
            entities: state.entity_count(),
            pairs: state.pair_count(),
            duration: started.elapsed(),
        };

        tracing::info!(
            lines = summary.lines,
            chunks = summary.chunks,
            entities = summary.entities,
            pairs = summary.pairs,
            duration_ms = summary.duration.as_millis() as u64,
            "scan complete"
        );
        if let Some(events) = self.events {
            events.on_scan_complete(&ScanCompleteEvent {
                lines: summary.lines,
                chunks: summary.chunks,
                entities: summary.entities,
                pairs: summary.pairs,
                duration_ms: summary.duration.as_millis() as u64,
            });
        }

        Ok((state, summary))
    }

    fn process_chunk(&self, chunk: Chunk, shared: &Mutex<AggregationState>, lines_processed: &AtomicU64) {
        let mut local = AggregationState::new();
        for (ordinal, line) in chunk.numbered_lines() {
            let entities = self.tagger.tag_line(line);
            local.record_line(ordinal, &entities);
        }

        let lines_in_chunk = chunk.lines.len();
        {
            let mut global = shared.lock().unwrap_or_else(PoisonError::into_inner);
            global.merge(local);
        }
        let processed =
            lines_processed.fetch_add(lines_in_chunk as u64, Ordering::Relaxed) + lines_in_chunk as u64;

        tracing::debug!(chunk = chunk.index, lines = lines_in_chunk, processed, "chunk merged");
        if let Some(events) = self.events {
            events.on_chunk_merged(&ChunkMergedEvent {
                chunk_index: chunk.index,
                lines_in_chunk,
                lines_processed: processed,
            });
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
