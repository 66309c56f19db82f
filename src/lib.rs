//! # partition-cache
//!
//! A thread-safe TTL memoization cache for partitioned-table metadata.
//!
//! Looking up which model backs a child partition, or which partitions a
//! table has, means a round trip to the database catalog. This crate keeps
//! the answers around until a configurable TTL elapses.
//!
//! ## Features
//!
//! - **Two-level store**: table key, then model / partition slot
//! - **Lazy computation**: producers only run on a miss or an expired entry
//! - **At-most-once**: concurrent callers of a cold slot share one producer run
//! - **Failure-safe**: a failed producer leaves nothing behind, so the next call retries
//! - **Live configuration**: caching flag and TTL are re-read on every fetch
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use partition_cache::{Options, PartitionCache};
//!
//! let cache: PartitionCache<u32, String, String, Vec<String>> =
//!     PartitionCache::new(Arc::new(Options::default()));
//!
//! let partitions = cache.fetch_partitions(&16384, false, || {
//!     vec!["orders_2024".to_string(), "orders_2025".to_string()]
//! });
//!
//! let model = cache.try_fetch_model(&16384, &"orders_2024".to_string(), || {
//!     lookup_model("orders_2024")
//! })?;
//!
//! cache.clear();
//! ```
//!
//! Producers run while the cache lock is held and must not call back into
//! the same cache.

// Public modules
pub mod error;
pub mod options;

// Internal modules
mod cache;
mod config;
mod util;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use options::{Options, OptionsBuilder};

// Cache
pub use cache::{CacheEntry, CacheStats, PartitionCache, Slot};

// Configuration sources
pub use config::{ConfigSource, SharedConfig};

// Time sources
pub use util::clock::{Clock, ManualClock, SystemClock};
