//! TTL cache for live-status payloads.
//!
//! The free 511.org API keys allow 60 requests per hour, so live-status
//! lookups are cached per endpoint/stop-code key. Expiry is checked
//! lazily on read, and an expired entry still hands back its payload
//! and insertion time: when the upstream throttles us, a stale answer
//! with its age attached beats no answer at all.
//!
//! There is no background sweep. The key space is one key per monitored
//! endpoint/stop-code combination, so an expired entry that is never
//! read again just waits to be overwritten or cleared.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Default cache TTL: 5 minutes.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Time source for expiry checks, substitutable for deterministic
/// tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// One stored payload with its bookkeeping times.
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Vec<u8>,
    inserted_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// A cache read result.
///
/// `fresh` is false once the entry's TTL has elapsed, but the payload
/// and insertion time are still present so callers can serve degraded
/// reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedPayload {
    /// The stored payload bytes.
    pub payload: Vec<u8>,
    /// When the payload was stored.
    pub inserted_at: DateTime<Utc>,
    /// Whether the entry is still within its TTL.
    pub fresh: bool,
}

/// Key→payload store with lazy expiration and stale reads.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use caltrain::cache::TtlCache;
///
/// let cache = TtlCache::new(Duration::from_secs(300));
/// cache.set("status", b"payload".to_vec());
///
/// let hit = cache.get("status").unwrap();
/// assert!(hit.fresh);
/// assert_eq!(hit.payload, b"payload");
/// assert!(cache.get("missing").is_none());
/// ```
pub struct TtlCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: chrono::Duration,
    clock: Box<dyn Clock>,
}

impl TtlCache {
    /// Create a cache with the given TTL, using the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Box::new(SystemClock))
    }

    /// Create a cache with a custom clock.
    pub fn with_clock(ttl: Duration, clock: Box<dyn Clock>) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Store `payload` under `key`, overwriting any existing entry.
    pub fn set(&self, key: &str, payload: Vec<u8>) {
        let now = self.clock.now();
        let entry = CacheEntry {
            payload,
            inserted_at: now,
            expires_at: now + self.ttl,
        };
        self.lock().insert(key.to_string(), entry);
    }

    /// Look up `key`.
    ///
    /// Returns `None` for a key that was never set (or cleared). An
    /// expired entry comes back with `fresh == false` and its original
    /// payload and insertion time intact.
    pub fn get(&self, key: &str) -> Option<CachedPayload> {
        let now = self.clock.now();
        let entries = self.lock();
        entries.get(key).map(|entry| CachedPayload {
            payload: entry.payload.clone(),
            inserted_at: entry.inserted_at,
            fresh: now <= entry.expires_at,
        })
    }

    /// Drop every entry by swapping in an empty store.
    pub fn clear(&self) {
        *self.lock() = HashMap::new();
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        // The map is only ever replaced wholesale, so a poisoned lock
        // still guards consistent data.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for TtlCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}
