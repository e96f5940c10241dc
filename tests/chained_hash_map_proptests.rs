// ChainedHashMap property tests (consolidated).
//
// Property 1: operational equivalence with std's HashMap.
//  - Model: std::collections::HashMap<String, u64>.
//  - Operations: insert (weighted double), remove, get, contains_key,
//    clear, rehash; insert/remove/get/contains_key must return exactly
//    what the model returns.
//  - Invariants after each step: len parity with the model; capacity is
//    a multiple of 8, at least 8, and never shrinks; the load factor
//    stays at or below 0.75 (in integers: 4 * len <= 3 * capacity).
//  - Final check: contents agree exactly in both directions.
//
// Property 2: the growth rule, restated from the constants.
//  - An insert of a fresh key grows capacity iff the new length strictly
//    exceeds 0.75 * the old capacity, and then by exactly 8 buckets.
use chained_hashmap::{BUCKET_GROWTH, ChainedHashMap, INITIAL_BUCKETS};
use proptest::prelude::*;
use std::collections::HashMap;

// Small pool so overwrites, removals of present keys, and collisions are
// all likely; includes the empty key on purpose.
const KEY_POOL: [&str; 12] = [
    "", "a", "b", "alpha", "beta", "gamma", "delta", "k0", "k1", "k2", "collide",
    "long-key-with-some-bytes",
];

proptest! {
    #[test]
    fn prop_matches_std_hashmap(
        ops in proptest::collection::vec((0u8..=6u8, 0usize..64usize, any::<u64>()), 1..200)
    ) {
        let mut table = ChainedHashMap::new();
        let mut model: HashMap<String, u64> = HashMap::new();
        let mut last_capacity = table.bucket_count();

        for (op, raw_key, value) in ops {
            let key = KEY_POOL[raw_key % KEY_POOL.len()];
            match op {
                // Insert: same previous-value answer as the model.
                0 | 1 => {
                    prop_assert_eq!(table.insert(key, value), model.insert(key.to_string(), value));
                }
                // Remove: same removed-value answer.
                2 => {
                    prop_assert_eq!(table.remove(key), model.remove(key));
                }
                // Get: same lookup answer.
                3 => {
                    prop_assert_eq!(table.get(key), model.get(key).copied());
                }
                // Clear: both forget everything; capacity must stay.
                4 => {
                    let capacity = table.bucket_count();
                    table.clear();
                    model.clear();
                    prop_assert_eq!(table.bucket_count(), capacity);
                }
                // Forced rehash: exactly one growth step, contents kept.
                5 => {
                    let capacity = table.bucket_count();
                    table.rehash();
                    prop_assert_eq!(table.bucket_count(), capacity + BUCKET_GROWTH);
                }
                // Membership check: same yes/no answer, no state change.
                6 => {
                    prop_assert_eq!(table.contains_key(key), model.contains_key(key));
                }
                _ => unreachable!(),
            }

            // Structural invariants at every observation point.
            prop_assert_eq!(table.len(), model.len());
            let capacity = table.bucket_count();
            prop_assert!(capacity >= INITIAL_BUCKETS);
            prop_assert_eq!(capacity % BUCKET_GROWTH, 0);
            prop_assert!(capacity >= last_capacity, "capacity never shrinks");
            prop_assert!(4 * table.len() <= 3 * capacity, "load factor above 0.75");
            last_capacity = capacity;
        }

        // Final contents agree exactly, both directions.
        prop_assert_eq!(table.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(table.get(key), Some(*value));
        }
        for (key, value) in &table {
            prop_assert_eq!(model.get(key), Some(&value));
        }
    }
}

proptest! {
    #[test]
    fn prop_growth_fires_exactly_on_threshold(count in 1usize..=64) {
        let mut table = ChainedHashMap::new();
        for i in 0..count {
            let before = table.bucket_count();
            let len_before = table.len();
            table.insert(&format!("key{i}"), i as u64);

            // Distinct keys: each insert adds exactly one entry.
            prop_assert_eq!(table.len(), len_before + 1);
            let after = table.bucket_count();
            if 4 * (len_before + 1) > 3 * before {
                prop_assert_eq!(after, before + BUCKET_GROWTH);
            } else {
                prop_assert_eq!(after, before);
            }
        }

        // Every key survives the growth steps with its value.
        for i in 0..count {
            prop_assert_eq!(table.get(&format!("key{i}")), Some(i as u64));
        }
    }
}
