//! Timestamped cache entries.

use std::time::{Duration, Instant};

/// A cached value paired with the instant it was produced.
///
/// Entries are never mutated. Refreshing a slot replaces the entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    value: V,
    created_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Create a new entry stamped with `created_at`.
    pub fn new(value: V, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    /// Get the cached value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Get the creation instant.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Time elapsed between creation and `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Check whether the entry has outlived `ttl_secs` as of `now`.
    ///
    /// Only a strictly positive TTL can expire an entry, and only once the
    /// age is strictly greater than it.
    pub fn is_expired(&self, ttl_secs: f64, now: Instant) -> bool {
        ttl_secs > 0.0 && self.age(now).as_secs_f64() > ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_value() {
        let now = Instant::now();
        let entry = CacheEntry::new(vec!["orders_2024"], now);
        assert_eq!(entry.value(), &vec!["orders_2024"]);
        assert_eq!(entry.created_at(), now);
    }

    #[test]
    fn test_entry_non_positive_ttl_never_expires() {
        let now = Instant::now();
        let entry = CacheEntry::new(1, now);
        let later = now + Duration::from_secs(365 * 24 * 3600);

        assert!(!entry.is_expired(0.0, later));
        assert!(!entry.is_expired(-1.0, later));
        assert!(!entry.is_expired(f64::NAN, later));
    }

    #[test]
    fn test_entry_expiry() {
        let now = Instant::now();
        let entry = CacheEntry::new(1, now);

        assert!(!entry.is_expired(1.0, now));
        assert!(!entry.is_expired(1.0, now + Duration::from_millis(999)));
        // Age equal to the TTL is still fresh
        assert!(!entry.is_expired(1.0, now + Duration::from_secs(1)));
        assert!(entry.is_expired(1.0, now + Duration::from_millis(1001)));
        assert!(entry.is_expired(1.0, now + Duration::from_secs(2)));
    }

    #[test]
    fn test_entry_age_saturates() {
        let now = Instant::now();
        let entry = CacheEntry::new(1, now + Duration::from_secs(5));
        assert_eq!(entry.age(now), Duration::ZERO);
        assert!(!entry.is_expired(1.0, now));
    }
}
