use std::time::Duration;

use serde_json::Value;

/// Injected response-cache capability. The request layer keys entries by
/// `METHOD:uri`; the implementation decides storage and expiry. Injecting
/// the cache keeps it swappable (or absent) in tests without touching the
/// query logic.
#[cfg_attr(test, mockall::automock)]
pub trait ResponseCache: Send + Sync {
    /// Returns the cached value if present and not expired.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores a value with its own time-to-live.
    fn set(&self, key: String, value: Value, ttl: Duration);

    /// Drops a single entry.
    fn evict(&self, key: &str);

    /// Drops everything.
    fn clear(&self);
}
