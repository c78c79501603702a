use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
    time::{Duration, Instant},
};

use serde_json::Value;
use tracing::debug;

use crate::domain::cache::ports::ResponseCache;

const SWEEP_EVERY: u64 = 100;

#[derive(Debug)]
struct CacheEntry {
    value: Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.stored_at) >= self.ttl
    }
}

/// In-memory response cache: a bare key-to-entry map with per-entry TTL.
/// Every hundredth insert triggers a linear sweep that drops entries older
/// than twice the default TTL. Lookups check expiry on read, so the sweep
/// only bounds memory, never correctness.
#[derive(Debug)]
pub struct InMemoryResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
    inserts: RwLock<u64>,
}

impl InMemoryResponseCache {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl,
            inserts: RwLock::new(0),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sweep(&self, entries: &mut HashMap<String, CacheEntry>) {
        let now = Instant::now();
        let horizon = self.default_ttl * 2;
        let before = entries.len();
        entries.retain(|_, entry| now.duration_since(entry.stored_at) < horizon);

        let cleaned = before - entries.len();
        if cleaned > 0 {
            debug!("Cleaned up {} expired cache entries", cleaned);
        }
    }
}

impl ResponseCache for InMemoryResponseCache {
    fn get(&self, key: &str) -> Option<Value> {
        // A panic elsewhere poisons the lock; cached values are plain data,
        // so the map stays usable and the entry is served anyway.
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(key)?;
        if entry.expired(Instant::now()) {
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&self, key: String, value: Value, ttl: Duration) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
                ttl,
            },
        );

        let mut inserts = self
            .inserts
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *inserts += 1;
        if *inserts % SWEEP_EVERY == 0 {
            self.sweep(&mut entries);
        }
    }

    fn evict(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
