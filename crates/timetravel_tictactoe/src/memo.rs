//! Capped FIFO memoization cache.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use tracing::trace;

/// Hit/miss counters for a [`MemoCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the computation.
    pub misses: u64,
}

/// Maps argument keys to computed results, holding at most `capacity`
/// entries. When full, the oldest inserted entry is dropped.
///
/// A capacity of zero disables storage; every lookup recomputes.
#[derive(Debug, Clone)]
pub struct MemoCache<K, V> {
    capacity: usize,
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    stats: CacheStats,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&mut self, key: &K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some(value) = self.entries.get(key) {
            self.stats.hits += 1;
            return value.clone();
        }
        self.stats.misses += 1;
        let value = compute(key);
        self.insert(key.clone(), value.clone());
        value
    }

    /// Stores `value`, evicting the oldest entry if the cache is full.
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.contains_key(&key) {
            self.entries.insert(key, value);
            return;
        }
        if self.entries.len() >= self.capacity
            && let Some(oldest) = self.order.pop_front()
        {
            trace!(len = self.entries.len(), "Evicting oldest cache entry");
            self.entries.remove(&oldest);
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, value);
    }

    /// Cached value for `key`, without computing.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
