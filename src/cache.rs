//! Bounded recency cache for downloaded images
//!
//! Entries are kept in a sequence ordered most-recently-used first. `put`
//! inserts at the front and evicts from the back once the capacity is
//! exceeded; `get` moves a hit back to the front.

use std::borrow::Borrow;
use std::collections::VecDeque;

/// How `put` treats a key that is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Drop existing entries for the key before inserting
    #[default]
    Collapse,
    /// Insert without looking for the key. Duplicates stay until the next
    /// `get` of that key merges them.
    Keep,
}

/// Fixed-capacity key/value store with move-to-front on access
#[derive(Debug, Clone)]
pub struct BasicCache<K, V> {
    entries: VecDeque<(K, V)>,
    capacity: usize,
    policy: DuplicatePolicy,
}

impl<K: PartialEq, V> BasicCache<K, V> {
    /// Create a cache holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, DuplicatePolicy::default())
    }

    /// Create a cache with an explicit duplicate policy
    pub fn with_policy(capacity: usize, policy: DuplicatePolicy) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            policy,
        }
    }

    /// Insert a pair at the most-recently-used position.
    ///
    /// Evicts the least-recently-used entry if the cache is over capacity.
    pub fn put(&mut self, key: K, value: V) {
        if self.policy == DuplicatePolicy::Collapse {
            self.entries.retain(|(k, _)| *k != key);
        }

        self.entries.push_front((key, value));

        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Look up `key`, moving it to the most-recently-used position on a hit.
    ///
    /// All entries for the key are removed and the first one found (the most
    /// recent) is reinserted at the front. A miss leaves the cache untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let pos = self.entries.iter().position(|(k, _)| k.borrow() == key)?;
        let hit = self.entries.remove(pos)?;
        self.entries.retain(|(k, _)| k.borrow() != key);
        self.entries.push_front(hit);
        self.entries.front().map(|(_, v)| v)
    }

    /// Check for a key without touching recency
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries.iter().any(|(k, _)| k.borrow() == key)
    }

    /// Keys in recency order, most recent first
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Number of stored entries (duplicates counted under `Keep`)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Duplicate policy this cache was built with
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
