//! Caching infrastructure for partition metadata.
//!
//! - **Partition Cache**: two-level TTL memoization store behind one lock
//! - **Entries**: immutable, timestamped values with lazy expiry
//! - **Records**: the independent model and partition slots of one key
//! - **Stats**: lock-free hit/miss counters

mod entry;
mod partition_cache;
mod record;
mod stats;

pub use entry::CacheEntry;
pub use partition_cache::PartitionCache;
pub use record::Slot;
pub use stats::CacheStats;
