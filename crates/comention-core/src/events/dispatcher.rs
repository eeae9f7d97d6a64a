//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::ComentionEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ComentionEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn ComentionEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn ComentionEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_dictionary_loaded(&self, event: &DictionaryLoadedEvent) {
        self.emit(|h| h.on_dictionary_loaded(event));
    }

    pub fn emit_scan_started(&self, event: &ScanStartedEvent) {
        self.emit(|h| h.on_scan_started(event));
    }

    pub fn emit_chunk_merged(&self, event: &ChunkMergedEvent) {
        self.emit(|h| h.on_chunk_merged(event));
    }

    pub fn emit_scan_complete(&self, event: &ScanCompleteEvent) {
        self.emit(|h| h.on_scan_complete(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl ComentionEventHandler for EventDispatcher {
    fn on_dictionary_loaded(&self, event: &DictionaryLoadedEvent) {
        self.emit_dictionary_loaded(event);
    }

    fn on_scan_started(&self, event: &ScanStartedEvent) {
        self.emit_scan_started(event);
    }

    fn on_chunk_merged(&self, event: &ChunkMergedEvent) {
        self.emit_chunk_merged(event);
    }

    fn on_scan_complete(&self, event: &ScanCompleteEvent) {
        self.emit_scan_complete(event);
    }

    fn on_error(&self, event: &ErrorEvent) {
        self.emit_error(event);
    }
}
