//! ComentionEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling comention lifecycle events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. `on_chunk_merged` is called from
/// scan worker threads, hence `Send + Sync`.
pub trait ComentionEventHandler: Send + Sync {
    // ---- Dictionaries ----
    fn on_dictionary_loaded(&self, _event: &DictionaryLoadedEvent) {}

    // ---- Scan Lifecycle ----
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_chunk_merged(&self, _event: &ChunkMergedEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
