//! Call-time configuration sources.
//!
//! The cache never snapshots its configuration: both the caching flag and
//! the TTL are read through a [`ConfigSource`] on every fetch, so a change
//! made at runtime applies to the very next lookup.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::options::{check_ttl, Options};
use crate::Result;

/// Provider of the caching flag and TTL, consulted on every fetch.
pub trait ConfigSource: Send + Sync {
    /// Whether lookups are served from the cache.
    fn caching_enabled(&self) -> bool;

    /// Entry TTL in seconds. Zero, negative, or NaN means never expire.
    fn caching_ttl(&self) -> f64;
}

impl ConfigSource for Options {
    fn caching_enabled(&self) -> bool {
        self.caching
    }

    fn caching_ttl(&self) -> f64 {
        self.caching_ttl
    }
}

/// Configuration that can be changed while the cache is in use.
///
/// Readers load the current options without locking; writers publish a
/// whole new `Options` value atomically.
pub struct SharedConfig {
    current: ArcSwap<Options>,
}

impl SharedConfig {
    /// Create a shared configuration from validated options.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            current: ArcSwap::from_pointee(options),
        })
    }

    /// Get the current options.
    pub fn load(&self) -> Arc<Options> {
        self.current.load_full()
    }

    /// Replace the options wholesale.
    pub fn update(&self, options: Options) -> Result<()> {
        options.validate()?;
        self.current.store(Arc::new(options));
        Ok(())
    }

    /// Turn caching on or off.
    pub fn set_caching(&self, enabled: bool) {
        self.current.rcu(|current| Options {
            caching: enabled,
            ..**current
        });
    }

    /// Change the TTL in seconds.
    pub fn set_caching_ttl(&self, secs: f64) -> Result<()> {
        check_ttl(secs)?;
        self.current.rcu(|current| Options {
            caching_ttl: secs,
            ..**current
        });
        Ok(())
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            current: ArcSwap::from_pointee(Options::default()),
        }
    }
}

impl ConfigSource for SharedConfig {
    fn caching_enabled(&self) -> bool {
        self.current.load().caching
    }

    fn caching_ttl(&self) -> f64 {
        self.current.load().caching_ttl
    }
}
