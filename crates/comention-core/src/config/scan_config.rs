//! Corpus scan configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHUNK_LINES, DEFAULT_QUEUE_DEPTH_PER_WORKER, DEFAULT_WORKERS};

/// Configuration for the chunked corpus scan.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Worker threads. 0 = one per available CPU. Default: 1.
    pub workers: Option<usize>,
    /// Lines per chunk. Default: 20000.
    pub chunk_lines: Option<usize>,
    /// Chunks buffered between the reader and the workers. Default: 2 per worker.
    pub queue_depth: Option<usize>,
}

impl ScanConfig {
    /// Returns the effective worker count, resolving 0 to the CPU count.
    pub fn effective_workers(&self) -> usize {
        match self.workers.unwrap_or(DEFAULT_WORKERS) {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }

    /// Returns the effective chunk size, defaulting to 20000 lines.
    pub fn effective_chunk_lines(&self) -> usize {
        self.chunk_lines.unwrap_or(DEFAULT_CHUNK_LINES)
    }

    /// Returns the effective queue depth, defaulting to 2 chunks per worker.
    pub fn effective_queue_depth(&self) -> usize {
        self.queue_depth
            .unwrap_or(self.effective_workers() * DEFAULT_QUEUE_DEPTH_PER_WORKER)
    }
}
