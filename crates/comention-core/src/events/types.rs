//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_dictionary_loaded`.
#[derive(Debug, Clone)]
pub struct DictionaryLoadedEvent {
    pub path: PathBuf,
    pub case_sensitive: bool,
    pub records: usize,
    pub terms: usize,
    pub missing: bool,
}

/// Payload for `on_scan_started`.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub workers: usize,
    pub chunk_lines: usize,
}

/// Payload for `on_chunk_merged`.
#[derive(Debug, Clone)]
pub struct ChunkMergedEvent {
    pub chunk_index: u64,
    pub lines_in_chunk: usize,
    /// Lines processed across all workers when this chunk was merged.
    pub lines_processed: u64,
}

/// Payload for `on_scan_complete`.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub lines: u64,
    pub chunks: u64,
    pub entities: usize,
    pub pairs: usize,
    pub duration_ms: u64,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
