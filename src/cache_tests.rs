//! Tests for the bounded recency cache

use crate::cache::{BasicCache, DuplicatePolicy};

fn keys<V>(cache: &BasicCache<u32, V>) -> Vec<u32> {
    cache.keys().copied().collect()
}

#[test]
fn put_orders_most_recent_first() {
    let mut cache = BasicCache::new(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");

    assert_eq!(keys(&cache), vec![3, 2, 1]);
}

#[test]
fn walkthrough_capacity_three() {
    let mut cache = BasicCache::new(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");

    assert_eq!(cache.get(&1), Some(&"a"));
    assert_eq!(keys(&cache), vec![1, 3, 2]);

    cache.put(4, "d");
    assert_eq!(keys(&cache), vec![4, 1, 3]);

    assert_eq!(cache.get(&2), None);
}

#[test]
fn never_exceeds_capacity() {
    let mut cache = BasicCache::new(5);
    for i in 0..50u32 {
        cache.put(i % 7, i);
        assert!(cache.len() <= 5);
    }
}

#[test]
fn evicts_first_inserted_key() {
    let n = 4;
    let mut cache = BasicCache::new(n);
    for i in 0..=n as u32 {
        cache.put(i, i * 10);
    }

    assert_eq!(cache.get(&0), None);
    for i in 1..=n as u32 {
        assert_eq!(cache.get(&i), Some(&(i * 10)));
    }
}

#[test]
fn get_refreshes_entry_before_eviction() {
    let mut cache: BasicCache<u32, &str> = BasicCache::new(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");

    // 1 is oldest, accessing it makes 2 the eviction candidate
    assert!(cache.get(&1).is_some());
    cache.put(4, "d");

    assert_eq!(cache.get(&1), Some(&"a"));
    assert_eq!(cache.get(&2), None);
}

#[test]
fn accessed_key_survives_fewer_than_capacity_inserts() {
    let capacity = 5;
    let mut cache = BasicCache::new(capacity);
    for i in 0..capacity as u32 {
        cache.put(i, i);
    }

    assert!(cache.get(&0).is_some());
    for i in 100..100 + capacity as u32 - 1 {
        cache.put(i, i);
    }

    assert_eq!(cache.get(&0), Some(&0));
}

#[test]
fn miss_leaves_order_unchanged() {
    let mut cache = BasicCache::new(3);
    cache.put(1, "a");
    cache.put(2, "b");

    assert_eq!(cache.get(&42), None);
    assert_eq!(keys(&cache), vec![2, 1]);
    assert_eq!(cache.len(), 2);
}

#[test]
fn zero_capacity_stores_nothing() {
    let mut cache: BasicCache<u32, &str> = BasicCache::new(0);
    cache.put(1, "a");
    cache.put(2, "b");

    assert!(cache.is_empty());
    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&2), None);
}

#[test]
fn collapse_policy_replaces_existing_key() {
    let mut cache = BasicCache::new(3);
    cache.put(1, "old");
    cache.put(2, "b");
    cache.put(1, "new");

    assert_eq!(keys(&cache), vec![1, 2]);
    assert_eq!(cache.get(&1), Some(&"new"));
}

#[test]
fn keep_policy_allows_transient_duplicates() {
    let mut cache = BasicCache::with_policy(4, DuplicatePolicy::Keep);
    cache.put(1, "old");
    cache.put(2, "b");
    cache.put(1, "new");

    assert_eq!(keys(&cache), vec![1, 2, 1]);
    assert_eq!(cache.len(), 3);

    // get returns the most recent value and merges the duplicates
    assert_eq!(cache.get(&1), Some(&"new"));
    assert_eq!(keys(&cache), vec![1, 2]);
}

#[test]
fn keep_policy_duplicates_count_toward_capacity() {
    let mut cache = BasicCache::with_policy(2, DuplicatePolicy::Keep);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(2, "c");

    // the second put of 2 pushed 1 out
    assert_eq!(keys(&cache), vec![2, 2]);
    assert!(!cache.contains(&1));
}

#[test]
fn contains_does_not_reorder() {
    let mut cache = BasicCache::new(3);
    cache.put(1, "a");
    cache.put(2, "b");

    assert!(cache.contains(&1));
    assert!(!cache.contains(&3));
    assert_eq!(keys(&cache), vec![2, 1]);
}

#[test]
fn string_keys_lookup_by_str() {
    let mut cache: BasicCache<String, Vec<u8>> = BasicCache::new(2);
    cache.put("https://media.rawg.io/a.jpg".to_string(), vec![1, 2, 3]);

    assert_eq!(
        cache.get("https://media.rawg.io/a.jpg").map(Vec::as_slice),
        Some(&[1u8, 2, 3][..])
    );
    assert!(cache.contains("https://media.rawg.io/a.jpg"));
}

#[test]
fn reports_capacity_and_policy() {
    let cache: BasicCache<u32, ()> = BasicCache::new(7);
    assert_eq!(cache.capacity(), 7);
    assert_eq!(cache.policy(), DuplicatePolicy::Collapse);

    let cache: BasicCache<u32, ()> = BasicCache::with_policy(1, DuplicatePolicy::Keep);
    assert_eq!(cache.policy(), DuplicatePolicy::Keep);
}
