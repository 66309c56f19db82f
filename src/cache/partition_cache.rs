//! The partition metadata cache.
//!
//! Memoizes expensive introspection lookups (which model backs a child
//! table, which partitions a table has) behind a single lock, with lazy
//! TTL-based expiry.

use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::ConfigSource;
use crate::util::clock::{Clock, SystemClock};

use super::entry::CacheEntry;
use super::record::{KeyRecord, Slot};
use super::stats::CacheStats;

/// Thread-safe TTL memoization cache keyed by table, then by slot.
///
/// - `K`: top-level key (e.g. a table identifier)
/// - `C`: child key for the model slot (e.g. a child table name)
/// - `M`: cached model value
/// - `P`: cached partition list value
///
/// Every enabled-mode operation is serialized through one mutex, and the
/// producer passed to a fetch runs while that mutex is held. This gives at
/// most one producer run per slot under concurrent callers, but a slow
/// producer stalls every other lookup.
///
/// # Reentrancy
///
/// A producer must not call back into the same cache, directly or
/// transitively. The lock is not reentrant and such a call deadlocks.
pub struct PartitionCache<K, C, M, P> {
    store: Mutex<HashMap<K, KeyRecord<C, M, P>>>,
    config: Arc<dyn ConfigSource>,
    clock: Arc<dyn Clock>,
    stats: Arc<CacheStats>,
}

impl<K, C, M, P> PartitionCache<K, C, M, P>
where
    K: Hash + Eq + Clone,
    C: Hash + Eq + Clone,
    M: Clone,
    P: Clone,
{
    /// Create a cache reading its settings from `config`.
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Create a cache with an explicit time source.
    pub fn with_clock(config: Arc<dyn ConfigSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
            config,
            clock,
            stats: Arc::new(CacheStats::new()),
        }
    }

    /// Discard every key and every entry.
    pub fn clear(&self) {
        let keys = {
            let mut store = self.store.lock();
            let keys = store.len();
            store.clear();
            keys
        };

        CacheStats::record(&self.stats.clears);
        debug!(keys, "partition cache cleared");
    }

    /// Get the model cached for `child_key` under `key`, running
    /// `producer` on a miss.
    pub fn fetch_model<F>(&self, key: &K, child_key: &C, producer: F) -> M
    where
        F: FnOnce() -> M,
    {
        match self.try_fetch_model(key, child_key, || Ok::<_, Infallible>(producer())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible form of [`fetch_model`](Self::fetch_model).
    ///
    /// A producer error is returned unchanged and nothing is cached, so the
    /// next fetch for the slot runs the producer again.
    pub fn try_fetch_model<E, F>(&self, key: &K, child_key: &C, producer: F) -> Result<M, E>
    where
        F: FnOnce() -> Result<M, E>,
    {
        if !self.config.caching_enabled() {
            return self.bypass(Slot::Model, producer);
        }

        let mut store = self.store.lock();
        let ttl = self.config.caching_ttl();
        let record = store.entry(key.clone()).or_insert_with(KeyRecord::new);

        if let Some(value) = self.live_value(record.models.get(child_key), ttl, Slot::Model) {
            return Ok(value);
        }

        let entry = self.populate(Slot::Model, producer)?;
        let value = entry.value().clone();
        record.models.insert(child_key.clone(), entry);
        Ok(value)
    }

    /// Get the partitions cached under `key`, running `producer` on a miss.
    ///
    /// Lists with and without sub-partitions are cached separately.
    pub fn fetch_partitions<F>(&self, key: &K, include_subpartitions: bool, producer: F) -> P
    where
        F: FnOnce() -> P,
    {
        match self.try_fetch_partitions(key, include_subpartitions, || {
            Ok::<_, Infallible>(producer())
        }) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible form of [`fetch_partitions`](Self::fetch_partitions).
    pub fn try_fetch_partitions<E, F>(
        &self,
        key: &K,
        include_subpartitions: bool,
        producer: F,
    ) -> Result<P, E>
    where
        F: FnOnce() -> Result<P, E>,
    {
        let slot_id = Slot::for_partitions(include_subpartitions);

        if !self.config.caching_enabled() {
            return self.bypass(slot_id, producer);
        }

        let mut store = self.store.lock();
        let ttl = self.config.caching_ttl();
        let record = store.entry(key.clone()).or_insert_with(KeyRecord::new);
        let slot = record.partitions_mut(include_subpartitions);

        if let Some(value) = self.live_value(slot.as_ref(), ttl, slot_id) {
            return Ok(value);
        }

        let entry = self.populate(slot_id, producer)?;
        let value = entry.value().clone();
        *slot = Some(entry);
        Ok(value)
    }

    /// Number of top-level keys with a record.
    ///
    /// Takes the cache lock, so it blocks while a producer runs.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Check if the cache holds no records.
    ///
    /// Takes the cache lock, so it blocks while a producer runs.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Get cache statistics.
    pub fn stats(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }

    /// Get the configuration source.
    pub fn config(&self) -> &Arc<dyn ConfigSource> {
        &self.config
    }

    fn bypass<V, E, F>(&self, slot: Slot, producer: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        CacheStats::record(&self.stats.bypasses);
        trace!(%slot, "caching disabled, running producer directly");
        producer()
    }

    fn live_value<V: Clone>(
        &self,
        entry: Option<&CacheEntry<V>>,
        ttl: f64,
        slot: Slot,
    ) -> Option<V> {
        let entry = entry?;
        if entry.is_expired(ttl, self.clock.now()) {
            debug!(%slot, ttl, "cache entry expired");
            return None;
        }

        CacheStats::record(&self.stats.hits);
        trace!(%slot, "cache hit");
        Some(entry.value().clone())
    }

    fn populate<V, E, F>(&self, slot: Slot, producer: F) -> Result<CacheEntry<V>, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        CacheStats::record(&self.stats.misses);
        debug!(%slot, "cache miss, running producer");

        match producer() {
            Ok(value) => {
                CacheStats::record(&self.stats.inserts);
                Ok(CacheEntry::new(value, self.clock.now()))
            }
            Err(err) => {
                CacheStats::record(&self.stats.failures);
                debug!(%slot, "producer failed, nothing cached");
                Err(err)
            }
        }
    }
}
