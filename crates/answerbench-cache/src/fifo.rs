use std::collections::{HashMap, VecDeque};

use crate::AnswerCache;

/// Capacity used by [`FifoCache::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Fixed-capacity answer cache with strict first-in-first-out eviction.
///
/// Lookups never reorder entries. When the cache is full, `put` removes the single
/// entry inserted before all others and then inserts. The capacity check runs on
/// every `put`, including overwrites of a key that is already present: at capacity,
/// re-putting an existing key still evicts the oldest entry (which may be an
/// unrelated key), and the overwritten key keeps its original position.
#[derive(Debug, Clone)]
pub struct FifoCache {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
    capacity: usize,
}

impl FifoCache {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero produces a cache that never stores anything.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.order.pop_front() {
            self.entries.remove(&oldest);
            tracing::debug!(evicted_len = oldest.len(), "answer cache evicted oldest entry");
        }
    }
}

impl Default for FifoCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl AnswerCache for FifoCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: String, value: String) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        match self.entries.get_mut(&key) {
            Some(existing) => *existing = value,
            None => {
                self.order.push_back(key.clone());
                self.entries.insert(key, value);
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_and_entries_stay_in_sync() {
        let mut cache = FifoCache::new(3);
        for i in 0..10 {
            cache.put(format!("k{}", i % 4), format!("v{i}"));
            assert_eq!(cache.order.len(), cache.entries.len());
            assert!(cache.order.iter().all(|k| cache.entries.contains_key(k)));
        }
    }
}
