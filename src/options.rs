//! Configuration options for partition-cache.

use std::time::Duration;

/// Caching is on unless explicitly disabled.
pub const DEFAULT_CACHING: bool = true;

/// Default TTL in seconds. Non-positive values mean entries never expire.
pub const DEFAULT_CACHING_TTL: f64 = -1.0;

/// Cache configuration options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Serve lookups from the cache. When false every fetch runs its
    /// producer and the store is left untouched.
    pub caching: bool,

    /// Entry time-to-live in seconds. Zero or negative disables expiry.
    pub caching_ttl: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            caching: DEFAULT_CACHING,
            caching_ttl: DEFAULT_CACHING_TTL,
        }
    }
}

impl Options {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the options.
    pub fn validate(&self) -> crate::Result<()> {
        check_ttl(self.caching_ttl)
    }

    /// The TTL as a duration, or `None` when entries never expire.
    ///
    /// A TTL too large for a `Duration` can never elapse and is reported
    /// as `None`.
    pub fn ttl(&self) -> Option<Duration> {
        if self.caching_ttl > 0.0 {
            Duration::try_from_secs_f64(self.caching_ttl).ok()
        } else {
            None
        }
    }
}

pub(crate) fn check_ttl(secs: f64) -> crate::Result<()> {
    if !secs.is_finite() {
        return Err(crate::Error::invalid_configuration(format!(
            "caching_ttl must be a finite number of seconds, got {}",
            secs
        )));
    }

    Ok(())
}

/// Builder for Options.
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable caching.
    pub fn caching(mut self, value: bool) -> Self {
        self.options.caching = value;
        self
    }

    /// Set the TTL in seconds.
    pub fn caching_ttl(mut self, secs: f64) -> Self {
        self.options.caching_ttl = secs;
        self
    }

    /// Set the TTL from a duration.
    pub fn caching_ttl_duration(mut self, ttl: Duration) -> Self {
        self.options.caching_ttl = ttl.as_secs_f64();
        self
    }

    /// Build the options.
    pub fn build(self) -> crate::Result<Options> {
        self.options.validate()?;
        Ok(self.options)
    }
}
