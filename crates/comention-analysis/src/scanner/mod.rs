//! Scanner subsystem: chunked corpus reading, a worker pool tagging lines,
//! and one lock-guarded merge per completed chunk.
//!
//! Every line gets its 1-based corpus ordinal from the chunk it was read
//! into, so first-seen positions are exact whatever order chunks finish in.

pub mod aggregator;
pub mod chunker;
pub mod state;

pub use aggregator::{ScanSummary, StreamAggregator};
pub use chunker::{Chunk, ChunkReader};
pub use state::AggregationState;
