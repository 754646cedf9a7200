// HashMap / HashSet property tests against std models.
//
// Property 1: round trip.
//  - Model: std HashMap receiving the same put/remove sequence.
//  - Invariant: get(k) equals the most recent put for k; len() equals the
//    number of distinct live keys.
//
// Property 2: remove-then-absent.
//  - Invariant: after remove(k), get/contains_key report absence and len()
//    drops by exactly one; removing an absent key changes nothing.
//
// Property 3: free-slot reuse.
//  - Invariant: removing n keys then inserting n fresh keys never grows the
//    arena.
//
// Property 4: rehash preserves contents.
//  - Operations: inserts across several bucket doublings, with a small key
//    space hashed to few buckets so chains are long.
//  - Invariant: every live key maps to its model value after each insert.
use std::collections::HashMap as StdHashMap;
use std::collections::HashSet as StdHashSet;

use chain_hash::HashMap;
use chain_hash::HashSet;
use chain_hash::hasher::HashFn;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_round_trip(ops in proptest::collection::vec((any::<bool>(), 0u16..64, any::<i32>()), 1..256)) {
        let mut m: HashMap<u16, i32> = HashMap::new();
        let mut model: StdHashMap<u16, i32> = StdHashMap::new();

        for (is_put, k, v) in ops {
            if is_put {
                prop_assert_eq!(m.put(k, v), model.insert(k, v));
            } else {
                prop_assert_eq!(m.remove(&k), model.remove(&k));
            }
            prop_assert_eq!(m.len(), model.len());
            prop_assert_eq!(m.get(&k), model.get(&k));
        }

        for (k, v) in &model {
            prop_assert_eq!(m.get(k), Some(v));
        }
        let keys: StdHashSet<u16> = m.keys().copied().collect();
        prop_assert_eq!(keys.len(), model.len());
    }
}

proptest! {
    #[test]
    fn prop_remove_then_absent(keys in proptest::collection::hash_set(0u32..500, 1..100), extra in 500u32..1000) {
        let mut m: HashMap<u32, u32> = keys.iter().map(|&k| (k, k * 2)).collect();

        for &k in &keys {
            let before = m.len();
            prop_assert_eq!(m.remove(&k), Some(k * 2));
            prop_assert_eq!(m.len(), before - 1);
            prop_assert!(m.get(&k).is_none());
            prop_assert!(!m.contains_key(&k));

            prop_assert_eq!(m.remove(&extra), None);
            prop_assert_eq!(m.len(), before - 1);
        }
        prop_assert!(m.is_empty());
    }
}

proptest! {
    #[test]
    fn prop_freed_slots_are_reused(n in 1usize..200, removed in 0usize..200) {
        let removed = removed.min(n);
        let mut set: HashSet<usize> = (0..n).collect();
        // Room for the reinsertions without growth.
        let capacity = set.capacity();

        for k in 0..removed {
            prop_assert!(set.remove(&k));
        }
        for k in 0..removed {
            prop_assert!(set.put(n + k));
        }

        prop_assert_eq!(set.capacity(), capacity);
        prop_assert_eq!(set.len(), n);
    }
}

proptest! {
    #[test]
    fn prop_rehash_preserves_contents(keys in proptest::collection::vec(0u64..10_000, 1..600)) {
        // Only the low three bits feed the hash, so many keys share a chain.
        let mut m = HashMap::with_hasher(HashFn(|k: &u64| k & 7));
        let mut model = StdHashMap::new();

        for (i, k) in keys.into_iter().enumerate() {
            let buckets = m.bucket_count();
            m.put(k, i);
            model.insert(k, i);

            if m.bucket_count() != buckets {
                prop_assert_eq!(m.bucket_count(), buckets * 2);
            }
            for (k, v) in &model {
                prop_assert_eq!(m.get(k), Some(v));
            }
        }
        prop_assert_eq!(m.len(), model.len());
    }
}

proptest! {
    #[test]
    fn prop_set_matches_model(ops in proptest::collection::vec((0u8..3, 0i32..50), 1..200)) {
        let mut s: HashSet<i32> = HashSet::new();
        let mut model: StdHashSet<i32> = StdHashSet::new();

        for (op, v) in ops {
            match op {
                0 => prop_assert_eq!(s.put(v), model.insert(v)),
                1 => prop_assert_eq!(s.remove(&v), model.remove(&v)),
                2 => prop_assert_eq!(s.take(&v), model.take(&v)),
                _ => unreachable!(),
            }
            prop_assert_eq!(s.len(), model.len());
            prop_assert_eq!(s.contains(&v), model.contains(&v));
        }
    }
}
