//! Cache statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for cache operations.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Fetches answered by a fresh entry.
    pub hits: AtomicU64,
    /// Fetches that found no entry or an expired one.
    pub misses: AtomicU64,
    /// Entries stored after a successful producer run.
    pub inserts: AtomicU64,
    /// Fetches that bypassed the store because caching was disabled.
    pub bypasses: AtomicU64,
    /// Producer runs that returned an error.
    pub failures: AtomicU64,
    /// Calls to `clear`.
    pub clears: AtomicU64,
}

impl CacheStats {
    /// Create new stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get hit rate (0.0 to 1.0). Bypassed fetches are not counted.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Reset all counters.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.inserts.store(0, Ordering::Relaxed);
        self.bypasses.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
        self.clears.store(0, Ordering::Relaxed);
    }

    pub(crate) fn record(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl Clone for CacheStats {
    fn clone(&self) -> Self {
        Self {
            hits: AtomicU64::new(self.hits.load(Ordering::Relaxed)),
            misses: AtomicU64::new(self.misses.load(Ordering::Relaxed)),
            inserts: AtomicU64::new(self.inserts.load(Ordering::Relaxed)),
            bypasses: AtomicU64::new(self.bypasses.load(Ordering::Relaxed)),
            failures: AtomicU64::new(self.failures.load(Ordering::Relaxed)),
            clears: AtomicU64::new(self.clears.load(Ordering::Relaxed)),
        }
    }
}
