//! Per-resolution generation ids
//!
//! Every resolution takes the next id before it suspends. When it resumes,
//! it may only touch the viewer if its id is still the latest one handed
//! out; otherwise a newer click has taken over.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A shared, monotonically increasing generation counter.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    latest: Arc<AtomicU64>,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation and return its id.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The most recently started generation (0 before any).
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// True if no generation has started since `id`.
    pub fn is_current(&self, id: u64) -> bool {
        self.latest() == id
    }
}
