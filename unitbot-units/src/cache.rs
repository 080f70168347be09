//! Exchange rate cache
//!
//! Rates are keyed by currency pair and expire after a fixed time-to-live.
//! Expired entries are ignored on read and swept out lazily, at most once
//! per sweep interval, during normal cache traffic.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tracing::debug;

/// How long a fetched rate stays valid
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Minimum time between sweeps of expired entries
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: f64,
    expires_at: Instant,
}

impl CachedRate {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Time-bounded map from currency pair to rate
#[derive(Debug)]
pub struct RateCache {
    entries: RwLock<HashMap<String, CachedRate>>,
    last_sweep: Mutex<Instant>,
    ttl: Duration,
    sweep_interval: Duration,
}

impl RateCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL, DEFAULT_SWEEP_INTERVAL)
    }

    pub fn with_ttl(ttl: Duration, sweep_interval: Duration) -> Self {
        RateCache {
            entries: RwLock::new(HashMap::new()),
            last_sweep: Mutex::new(Instant::now()),
            ttl,
            sweep_interval,
        }
    }

    /// Live rate for `key`, if cached
    pub fn get(&self, key: &str) -> Option<f64> {
        let now = Instant::now();
        let guard = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(key).filter(|e| e.is_live(now)).map(|e| e.rate)
    }

    /// Store a rate, replacing any previous entry for `key`
    pub fn insert(&self, key: &str, rate: f64) {
        let entry = CachedRate { rate, expires_at: Instant::now() + self.ttl };
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), entry);
        self.maybe_sweep();
    }

    /// Return the cached rate or fetch and cache a fresh one.
    ///
    /// Concurrent misses on the same key may each call `fetch`; the last
    /// writer wins.
    pub fn get_or_fetch<E, F>(&self, key: &str, fetch: F) -> Result<f64, E>
    where
        F: FnOnce() -> Result<f64, E>,
    {
        self.maybe_sweep();
        if let Some(rate) = self.get(key) {
            debug!(key, "rate cache hit");
            return Ok(rate);
        }

        debug!(key, "rate cache miss");
        let rate = fetch()?;
        self.insert(key, rate);
        Ok(rate)
    }

    /// Remove expired entries, returning how many were dropped
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let removed = {
            let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            let before = guard.len();
            guard.retain(|_, e| e.is_live(now));
            before - guard.len()
        };
        *self.last_sweep.lock().unwrap_or_else(PoisonError::into_inner) = now;
        if removed > 0 {
            debug!(removed, "swept expired rates");
        }
        removed
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn maybe_sweep(&self) {
        let due = self
            .last_sweep
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .elapsed()
            >= self.sweep_interval;
        if due {
            self.sweep();
        }
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::thread;

    #[test]
    fn test_insert_and_get() {
        let cache = RateCache::new();
        assert_eq!(cache.get("USD_EUR"), None);
        cache.insert("USD_EUR", 0.9);
        assert_eq!(cache.get("USD_EUR"), Some(0.9));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_or_fetch_caches() {
        let cache = RateCache::new();
        let calls = Cell::new(0);
        let fetch = || -> Result<f64, ()> {
            calls.set(calls.get() + 1);
            Ok(1.25)
        };

        assert_eq!(cache.get_or_fetch("GBP_USD", fetch), Ok(1.25));
        assert_eq!(cache.get_or_fetch("GBP_USD", fetch), Ok(1.25));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_fetch_error_not_cached() {
        let cache = RateCache::new();
        let result: Result<f64, &str> = cache.get_or_fetch("USD_JPY", || Err("down"));
        assert_eq!(result, Err("down"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expiry() {
        let cache = RateCache::with_ttl(Duration::from_millis(10), DEFAULT_SWEEP_INTERVAL);
        cache.insert("USD_EUR", 0.9);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(cache.get("USD_EUR"), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.sweep(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_lazy_sweep_on_insert() {
        let cache = RateCache::with_ttl(Duration::from_millis(10), Duration::from_millis(10));
        cache.insert("USD_EUR", 0.9);
        thread::sleep(Duration::from_millis(30));
        cache.insert("EUR_USD", 1.1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("EUR_USD"), Some(1.1));
    }
}
