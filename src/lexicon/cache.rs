// Bounded LRU cache used by the Lexicon Store adapter.
// Capacity-based eviction only, no TTL. Not synchronized; the owner wraps it
// in a lock.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Least-recently-used cache with a fixed capacity
#[derive(Debug)]
pub struct LruCache<K, V> {
    entries: HashMap<K, (V, u64)>,
    /// Access tick -> key, oldest first
    order: BTreeMap<u64, K>,
    tick: u64,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache holding at most `capacity` entries (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            order: BTreeMap::new(),
            tick: 0,
            capacity,
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Get a clone of the value and mark it most recently used
    pub fn get(&mut self, key: &K) -> Option<V> {
        let tick = self.next_tick();
        let (value, last) = self.entries.get_mut(key)?;
        let previous = std::mem::replace(last, tick);
        let value = value.clone();

        if let Some(k) = self.order.remove(&previous) {
            self.order.insert(tick, k);
        }
        Some(value)
    }

    /// Check presence without touching recency
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace a value, evicting the least recently used entry
    /// when over capacity.
    pub fn insert(&mut self, key: K, value: V) {
        let tick = self.next_tick();

        if let Some((_, previous)) = self.entries.insert(key.clone(), (value, tick)) {
            self.order.remove(&previous);
        }
        self.order.insert(tick, key);

        while self.entries.len() > self.capacity {
            let Some((_, oldest)) = self.order.pop_first() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
