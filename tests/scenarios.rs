// End-to-end scenarios mixing the containers with the pipeline.
use chain_hash::Collection;
use chain_hash::DefaultHashBuilder;
use chain_hash::HashMap;
use chain_hash::HashSet;
use chain_hash::OptionExt;
use chain_hash::ResultExt;
use chain_hash::pipeline::terminal::HashMapCollector;
use chain_hash::pipeline::terminal::average;
use chain_hash::pipeline::terminal::collect;
use chain_hash::pipeline::terminal::collect_to_vec;
use chain_hash::pipeline::terminal::fold;
use chain_hash::pipeline::transform::enumerate;
use chain_hash::pipeline::transform::filter;
use chain_hash::pipeline::transform::flatten;
use chain_hash::pipeline::transform::map;
use chain_hash::pipeline::transform::zip;

#[test]
fn dictionary_scenario() {
    let mut d = HashMap::new();
    d.put("a", 1);
    d.put("b", 2);
    d.put("a", 3);
    assert_eq!(d.get(&"a"), Some(&3));
    assert_eq!(d.len(), 2);

    assert_eq!(d.remove(&"b"), Some(2));
    assert_eq!(d.len(), 1);
    assert!(d.get(&"b").is_none());
}

#[test]
fn set_scenario() {
    let mut s = HashSet::of([1, 2, 3]);
    assert!(!s.put(2));
    assert_eq!(s.len(), 3);
    assert!(s.put(4));
    assert_eq!(s.len(), 4);
}

#[test]
fn fold_and_average_scenario() {
    assert_eq!(fold(0, |acc, x| acc + x, [1, 2, 3, 4, 5]), 15);
    assert_eq!(average([1, 2, 3, 4, 5]), 3.0);
}

#[test]
fn flatten_scenario() {
    let nested = vec![vec![1, 2], vec![], vec![3]];
    assert_eq!(collect_to_vec(flatten(nested)), [1, 2, 3]);
}

#[test]
fn zip_and_filter_laws() {
    assert_eq!(zip([1, 2, 3], [4, 5, 6, 7, 8]).count(), 3);
    let evens: Vec<i32> = filter(|x: &i32| x % 2 == 0, [1, 2, 3, 4, 5, 6]).collect();
    assert_eq!(evens, [2, 4, 6]);
}

#[test]
fn word_index_from_a_pipeline() {
    let text = ["the quick fox", "", "the lazy dog"];
    let words = flatten(map(|line: &str| line.split_whitespace(), text));

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in words {
        *counts.entry(word).or_default() += 1;
    }
    assert_eq!(counts[&"the"], 2);
    assert_eq!(counts.len(), 5);

    let first_seen = collect(
        &HashMapCollector::<DefaultHashBuilder>::default(),
        map(|(i, w)| (w, i), enumerate(counts.keys().copied())),
    );
    assert_eq!(first_seen.get(&"the"), Some(&0));
}

#[test]
fn bulk_loading_from_collections() {
    let pairs = vec![("x", 1), ("y", 2)];
    let mut map = HashMap::from_collection(&pairs);
    map.put_all(&HashMap::of([("z", 3), ("x", 10)]));
    assert_eq!(map.len(), 3);
    assert_eq!(map[&"x"], 10);
    assert_eq!(Collection::count(&map), 3);

    let set = HashSet::from_collection(&std::collections::VecDeque::from(vec![1, 1, 2]));
    assert!(set.contains_all(&[2, 1]));
}

#[test]
fn value_helpers_on_lookups() {
    let map = HashMap::of([(1, "one")]);
    assert_eq!(map.get(&1).value_or_panic(), &"one");
    assert_eq!(map.get(&2).value_or(&"none"), &"none");

    let parsed: Result<u8, _> = "42".parse::<u8>();
    assert_eq!(parsed.value_or_panic(), 42);
}

#[test]
#[should_panic(expected = "empty value")]
fn missing_value_panics_with_fixed_message() {
    let map: HashMap<i32, i32> = HashMap::new();
    let _ = map.get(&7).value_or_panic();
}

#[test]
fn slots_are_reused_after_churn() {
    let mut map: HashMap<u32, u32> = HashMap::new();
    for k in 0..8 {
        map.put(k, k);
    }
    let capacity = map.capacity();
    for k in 0..5 {
        map.remove(&k);
    }
    for k in 100..105 {
        map.put(k, k);
    }
    assert_eq!(map.capacity(), capacity);
    assert_eq!(map.len(), 8);
}
