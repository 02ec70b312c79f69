//! Content-addressed build cache.
//!
//! Keyed by a blake3 digest of the raw build code string, so textually
//! identical inputs always collide and any textual difference (even pure
//! whitespace) is a distinct entry. The cache is the only shared mutable
//! state in the engine; values are handed out as `Arc<ParsedBuild>` and
//! never mutated after insertion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::build::{BuildCode, ParsedBuild};

/// Snapshot returned by [`BuildCache::stats`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
    /// Hit-rate tracking is not implemented; this is a constant placeholder.
    pub hit_rate: f64,
}

struct CacheEntry {
    build: Arc<ParsedBuild>,
    inserted: Instant,
    last_used: u64,
}

struct CacheInner {
    map: HashMap<String, CacheEntry>,
    tick: u64,
}

/// LRU + TTL cache sitting between the public parse entry point and the
/// decode pipeline. A hit skips decoding, parsing and extraction entirely.
pub struct BuildCache {
    inner: Mutex<CacheInner>,
    max_entries: usize,
    ttl: Duration,
}

impl BuildCache {
    pub const DEFAULT_MAX_ENTRIES: usize = 100;
    pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                map: HashMap::new(),
                tick: 0,
            }),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    /// Cache key for a raw build code string: the `BuildCode` content hash.
    pub fn key_for(raw: &str) -> String {
        BuildCode::new(raw).content_hash
    }

    fn locked(&self) -> MutexGuard<'_, CacheInner> {
        // A poisoned lock only means another request panicked mid-access;
        // the map itself is still structurally sound.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a build by its raw code. Refreshes recency on hit; expired
    /// entries are removed and reported as misses.
    pub fn lookup(&self, raw: &str) -> Option<Arc<ParsedBuild>> {
        let key = Self::key_for(raw);
        let mut inner = self.locked();
        inner.tick += 1;
        let tick = inner.tick;

        match inner.map.get_mut(&key) {
            Some(entry) if entry.inserted.elapsed() <= self.ttl => {
                entry.last_used = tick;
                Some(Arc::clone(&entry.build))
            }
            Some(_) => {
                inner.map.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Existence check. Refreshes recency just like `lookup`.
    pub fn contains(&self, raw: &str) -> bool {
        self.lookup(raw).is_some()
    }

    /// Insert a parsed build, evicting the least-recently-used entry when
    /// the cache is full. Returns the shared handle for the caller.
    pub fn store(&self, raw: &str, build: ParsedBuild) -> Arc<ParsedBuild> {
        let key = Self::key_for(raw);
        let shared = Arc::new(build);
        let mut inner = self.locked();
        inner.tick += 1;
        let tick = inner.tick;

        if !inner.map.contains_key(&key) && inner.map.len() >= self.max_entries {
            if let Some(lru_key) = inner
                .map
                .iter()
                .min_by_key(|(_, e)| e.last_used)
                .map(|(k, _)| k.clone())
            {
                inner.map.remove(&lru_key);
            }
        }

        inner.map.insert(
            key,
            CacheEntry {
                build: Arc::clone(&shared),
                inserted: Instant::now(),
                last_used: tick,
            },
        );
        shared
    }

    pub fn invalidate_all(&self) {
        self.locked().map.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.locked().map.len(),
            max_size: self.max_entries,
            hit_rate: 0.0,
        }
    }
}

impl Default for BuildCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ENTRIES, Self::DEFAULT_TTL)
    }
}
