//! Eager reducers that drain a sequence into a single result.
//!
//! Reducers over a possibly empty input return `Option`; `None` means the
//! input was empty (or, for [`at`], too short).

use alloc::vec::Vec;
use core::hash::Hash;
use core::ops::Add;
use core::ops::Mul;

use crate::hash_map::HashMap;
use crate::hash_set::HashSet;
use crate::hasher::DefaultHashBuilder;
use crate::hasher::KeyHasher;
use crate::pipeline::transform::enumerate;

/// Primitive numbers that [`sum`], [`product`] and [`average`] accept.
pub trait Numeric: Copy + Add<Output = Self> + Mul<Output = Self> {
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;

    /// Converts to `f64`, rounding if needed.
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0 as $t;
                const ONE: Self = 1 as $t;

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Accumulates left to right, starting from `initial`.
pub fn fold<I, R, F>(initial: R, mut op: F, it: I) -> R
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> R,
{
    let mut acc = initial;
    for item in it {
        acc = op(acc, item);
    }
    acc
}

/// Accumulates left to right, seeded with the first element. Returns `None`
/// for an empty input.
pub fn reduce<I, F>(op: F, it: I) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut it = it.into_iter();
    let first = it.next()?;
    Some(fold(first, op, it))
}

/// Adds all elements. Returns zero for an empty input.
pub fn sum<I>(it: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Numeric,
{
    fold(I::Item::ZERO, |acc, x| acc + x, it)
}

/// Multiplies all elements. Returns one for an empty input.
pub fn product<I>(it: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Numeric,
{
    fold(I::Item::ONE, |acc, x| acc * x, it)
}

/// Computes the arithmetic mean as a running average, which does not
/// overflow on long inputs. Returns `0.0` for an empty input.
///
/// ```rust
/// use chain_hash::pipeline::terminal::average;
///
/// assert_eq!(average([1, 2, 3, 4]), 2.5);
/// assert_eq!(average(Vec::<u8>::new()), 0.0);
/// ```
pub fn average<I>(it: I) -> f64
where
    I: IntoIterator,
    I::Item: Numeric,
{
    fold(
        0.0,
        |avg, (i, x): (usize, I::Item)| avg + (x.to_f64() - avg) / (i + 1) as f64,
        enumerate(it),
    )
}

/// Counts the elements.
pub fn count<I: IntoIterator>(it: I) -> usize {
    fold(0, |n, _| n + 1, it)
}

/// Returns the largest element, the first one on ties.
pub fn max<I>(it: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    reduce(|a, b| if b > a { b } else { a }, it)
}

/// Returns the smallest element, the first one on ties.
pub fn min<I>(it: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    reduce(|a, b| if b < a { b } else { a }, it)
}

/// Returns the element that `greater` ranks above all others. `greater(a, b)`
/// keeps `a` when it returns `true`, otherwise `b`.
pub fn max_by<I, F>(mut greater: F, it: I) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    reduce(|a, b| if greater(&a, &b) { a } else { b }, it)
}

/// Returns the element that `less` ranks below all others. `less(a, b)` keeps
/// `a` when it returns `true`, otherwise `b`.
pub fn min_by<I, F>(mut less: F, it: I) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    reduce(|a, b| if less(&a, &b) { a } else { b }, it)
}

/// Calls `action` on every element.
pub fn for_each<I, F>(action: F, it: I)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    it.into_iter().for_each(action);
}

/// Returns `true` if `predicate` holds for every element. Stops at the first
/// failure. Vacuously `true` for an empty input.
pub fn all_match<I, P>(mut predicate: P, it: I) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    for item in it {
        if !predicate(item) {
            return false;
        }
    }
    true
}

/// Returns `true` if `predicate` holds for some element. Stops at the first
/// success.
pub fn any_match<I, P>(mut predicate: P, it: I) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    for item in it {
        if predicate(item) {
            return true;
        }
    }
    false
}

/// Returns `true` if `predicate` holds for no element.
pub fn none_match<I, P>(predicate: P, it: I) -> bool
where
    I: IntoIterator,
    P: FnMut(I::Item) -> bool,
{
    !any_match(predicate, it)
}

/// Returns `true` if some element equals `target`.
pub fn contains<I>(target: &I::Item, it: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    any_match(|item| item == *target, it)
}

/// Returns the zero-based position of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use chain_hash::pipeline::terminal::first_index_of;
///
/// assert_eq!(first_index_of(&'l', "hello".chars()), Some(2));
/// assert_eq!(first_index_of(&'z', "hello".chars()), None);
/// ```
pub fn first_index_of<I>(target: &I::Item, it: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    enumerate(it)
        .find(|(_, item)| item == target)
        .map(|(index, _)| index)
}

/// Returns the first element.
pub fn first<I: IntoIterator>(it: I) -> Option<I::Item> {
    it.into_iter().next()
}

/// Returns the last element, draining the input.
pub fn last<I: IntoIterator>(it: I) -> Option<I::Item> {
    fold(None, |_, item| Some(item), it)
}

/// Returns the element at zero-based `index`, scanning from the start.
pub fn at<I: IntoIterator>(index: usize, it: I) -> Option<I::Item> {
    it.into_iter().nth(index)
}

/// Splits a sequence of pairs into two vectors.
pub fn unzip<I, A, B>(it: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = (A, B)>,
{
    let it = it.into_iter();
    let (lo, _) = it.size_hint();
    let mut left = Vec::with_capacity(lo);
    let mut right = Vec::with_capacity(lo);
    for (a, b) in it {
        left.push(a);
        right.push(b);
    }
    (left, right)
}

/// Accumulates elements into a builder, then converts the builder into the
/// final result.
///
/// ```rust
/// use chain_hash::pipeline::terminal::{collect, Collector};
///
/// struct Joined;
///
/// impl Collector<char> for Joined {
///     type Builder = String;
///     type Output = String;
///
///     fn builder(&self) -> String {
///         String::new()
///     }
///
///     fn append(&self, builder: &mut String, item: char) {
///         builder.push(item);
///     }
///
///     fn finish(&self, builder: String) -> String {
///         builder
///     }
/// }
///
/// assert_eq!(collect(&Joined, "abc".chars()), "abc");
/// ```
pub trait Collector<T> {
    /// Intermediate state.
    type Builder;
    /// Final result.
    type Output;

    /// Creates an empty builder.
    fn builder(&self) -> Self::Builder;

    /// Adds one element to the builder.
    fn append(&self, builder: &mut Self::Builder, item: T);

    /// Converts the builder into the result.
    fn finish(&self, builder: Self::Builder) -> Self::Output;
}

/// Drains `it` into `collector`.
pub fn collect<I, C>(collector: &C, it: I) -> C::Output
where
    I: IntoIterator,
    C: Collector<I::Item>,
{
    let mut builder = collector.builder();
    for item in it {
        collector.append(&mut builder, item);
    }
    collector.finish(builder)
}

/// Collects into a `Vec`.
#[derive(Clone, Copy, Debug, Default)]
pub struct VecCollector;

impl<T> Collector<T> for VecCollector {
    type Builder = Vec<T>;
    type Output = Vec<T>;

    fn builder(&self) -> Vec<T> {
        Vec::new()
    }

    fn append(&self, builder: &mut Vec<T>, item: T) {
        builder.push(item);
    }

    fn finish(&self, builder: Vec<T>) -> Vec<T> {
        builder
    }
}

/// Collects pairs into a [`HashMap`]. Later pairs overwrite earlier ones with
/// the same key.
#[derive(Clone, Debug, Default)]
pub struct HashMapCollector<S = DefaultHashBuilder> {
    hash_builder: S,
}

impl<S> HashMapCollector<S> {
    /// Creates a collector whose maps use `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self { hash_builder }
    }
}

impl<K, V, S> Collector<(K, V)> for HashMapCollector<S>
where
    K: Eq,
    S: KeyHasher<K> + Clone,
{
    type Builder = HashMap<K, V, S>;
    type Output = HashMap<K, V, S>;

    fn builder(&self) -> Self::Builder {
        HashMap::with_hasher(self.hash_builder.clone())
    }

    fn append(&self, builder: &mut Self::Builder, (key, value): (K, V)) {
        builder.put(key, value);
    }

    fn finish(&self, builder: Self::Builder) -> Self::Output {
        builder
    }
}

/// Collects into a [`HashSet`], dropping duplicates.
#[derive(Clone, Debug, Default)]
pub struct HashSetCollector<S = DefaultHashBuilder> {
    hash_builder: S,
}

impl<S> HashSetCollector<S> {
    /// Creates a collector whose sets use `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self { hash_builder }
    }
}

impl<T, S> Collector<T> for HashSetCollector<S>
where
    T: Eq,
    S: KeyHasher<T> + Clone,
{
    type Builder = HashSet<T, S>;
    type Output = HashSet<T, S>;

    fn builder(&self) -> Self::Builder {
        HashSet::with_hasher(self.hash_builder.clone())
    }

    fn append(&self, builder: &mut Self::Builder, item: T) {
        builder.put(item);
    }

    fn finish(&self, builder: Self::Builder) -> Self::Output {
        builder
    }
}

/// Collects into a `Vec`.
pub fn collect_to_vec<I: IntoIterator>(it: I) -> Vec<I::Item> {
    collect(&VecCollector, it)
}

/// Collects pairs into a [`HashMap`] with the default hasher.
pub fn collect_to_hash_map<I, K, V>(it: I) -> HashMap<K, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: Hash + Eq,
{
    collect(&HashMapCollector::<DefaultHashBuilder>::default(), it)
}

/// Collects into a [`HashSet`] with the default hasher.
pub fn collect_to_hash_set<I>(it: I) -> HashSet<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    collect(&HashSetCollector::<DefaultHashBuilder>::default(), it)
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::*;
    use crate::pipeline::transform::map;
    use crate::pipeline::transform::zip;

    #[test]
    fn fold_and_reduce() {
        assert_eq!(fold(10, |acc, x| acc - x, [1, 2, 3]), 4);
        assert_eq!(reduce(|a, b| a * 10 + b, [1, 2, 3]), Some(123));
        assert_eq!(reduce(|a: i32, b| a + b, []), None);
    }

    #[test]
    fn numeric_reducers() {
        assert_eq!(sum([1u8, 2, 3]), 6);
        assert_eq!(sum(Vec::<i64>::new()), 0);
        assert_eq!(product([2.0f32, 0.5, 4.0]), 4.0);
        assert_eq!(product(Vec::<u32>::new()), 1);
        assert_eq!(average([2.0, 4.0, 9.0]), 5.0);
        assert_eq!(average([u64::MAX, u64::MAX]), u64::MAX as f64);
        assert_eq!(count("hello".chars()), 5);
    }

    #[test]
    fn extremes() {
        assert_eq!(max([3, 9, 2]), Some(9));
        assert_eq!(min([3, 9, 2]), Some(2));
        assert_eq!(max(Vec::<i32>::new()), None);

        let words = ["bb", "a", "cc", "ddd"];
        assert_eq!(max_by(|a, b| a.len() >= b.len(), words), Some("ddd"));
        assert_eq!(min_by(|a, b| a.len() <= b.len(), words), Some("a"));
        // Ties keep the first.
        assert_eq!(max_by(|a, b| a.len() >= b.len(), ["bb", "cc"]), Some("bb"));
        let tied = [Ranked(1, 'x'), Ranked(3, 'a'), Ranked(3, 'b'), Ranked(1, 'y')];
        assert_eq!(max(tied).map(|r| r.1), Some('a'));
        assert_eq!(min(tied).map(|r| r.1), Some('x'));
    }

    /// Ordered by the first field only; the second tells equal ranks apart.
    #[derive(Clone, Copy, Debug)]
    struct Ranked(u8, char);

    impl PartialEq for Ranked {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Ranked {
        fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    #[test]
    fn first_index_of_finds_the_earliest_match() {
        assert_eq!(first_index_of(&3, vec![5, 3, 7, 3]), Some(1));
        assert_eq!(first_index_of(&5, vec![5, 3]), Some(0));
        assert_eq!(first_index_of(&9, vec![5, 3]), None);
        assert_eq!(first_index_of(&1, Vec::<i32>::new()), None);

        let mut pulled = 0;
        let source = map(
            |x: i32| {
                pulled += 1;
                x
            },
            0..100,
        );
        assert_eq!(first_index_of(&4, source), Some(4));
        assert_eq!(pulled, 5);
    }

    #[test]
    fn matching_short_circuits() {
        let mut seen = 0;
        assert!(!all_match(
            |x| {
                seen += 1;
                x < 2
            },
            0..10
        ));
        assert_eq!(seen, 3);

        assert!(all_match(|_: i32| false, []));
        assert!(any_match(|x| x == 4, 0..10));
        assert!(none_match(|x| x > 100, 0..10));
        assert!(contains(&3, vec![1, 2, 3]));
        assert!(!contains(&7, vec![1, 2, 3]));
    }

    #[test]
    fn positional() {
        assert_eq!(first(5..8), Some(5));
        assert_eq!(last(5..8), Some(7));
        assert_eq!(at(1, 5..8), Some(6));
        assert_eq!(at(3, 5..8), None);
        assert_eq!(first(0..0), None);
    }

    #[test]
    fn for_each_visits_in_order() {
        let mut out = String::new();
        for_each(|c| out.push(c), "xyz".chars());
        assert_eq!(out, "xyz");
    }

    #[test]
    fn unzip_splits_pairs() {
        let (numbers, letters) = unzip(zip(1..4, "abc".chars()));
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(letters, ['a', 'b', 'c']);
    }

    #[test]
    fn collectors() {
        assert_eq!(collect_to_vec(map(|x| x + 1, [1, 2])), [2, 3]);

        let map = collect_to_hash_map([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"a"), Some(&3));

        let set = collect_to_hash_set([1, 2, 2, 3, 1]);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&2));
    }
}
