use core::fmt::Debug;
use core::hash::Hash;
use core::iter::Chain;
use core::iter::FusedIterator;

use crate::collection::Collection;
use crate::hash_map::HashMap;
use crate::hasher::DefaultHashBuilder;
use crate::hasher::KeyHasher;

/// A hash set implemented as a [`HashMap`] with `()` values.
///
/// Every operation delegates to the map, so the set shares its chained
/// buckets, entry arena and free-list reuse. Iteration follows arena order.
#[derive(Clone)]
pub struct HashSet<T, S = DefaultHashBuilder> {
    map: HashMap<T, (), S>,
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
}

impl<T, S> Debug for HashSet<T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> HashSet<T, S> {
    /// Creates an empty set with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::HashSet;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let set: HashSet<i32, _> = HashSet::with_hasher(SimpleHasher);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            map: HashMap::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set with at least the given capacity and the given
    /// hasher builder.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns a reference to the set's hasher builder.
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of elements the set can hold before its entry
    /// arena has to grow.
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Clears the set, removing all values. Keeps the allocated memory for
    /// reuse.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    /// Keeps only the values for which `f` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashSet;
    /// #
    /// let mut set: HashSet<i32> = (1..=6).collect();
    /// set.retain(|&v| v % 3 == 0);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn retain(&mut self, mut f: impl FnMut(&T) -> bool) {
        self.map.retain(|v, _| f(v));
    }

    /// Returns an iterator over the values of the set, in arena order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashSet;
    /// #
    /// let set = HashSet::of(["a", "b"]);
    /// let values: Vec<_> = set.iter().collect();
    /// assert_eq!(values, [&"a", &"b"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.map.keys(),
        }
    }

    /// Clears the set, returning all values as an iterator.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain {
            inner: self.map.drain(),
        }
    }

    /// Returns statistics about the underlying table.
    ///
    /// Available with the `stats` feature.
    #[cfg(feature = "stats")]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.map.debug_stats()
    }
}

impl<T, S> HashSet<T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was newly added, `false` if an equal value
    /// was already present (the stored value is kept).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashSet;
    /// #
    /// let mut set = HashSet::new();
    /// assert!(set.put(2));
    /// assert!(!set.put(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn put(&mut self, value: T) -> bool {
        self.map.put(value, ()).is_none()
    }

    /// Adds clones of every value of `values`.
    pub fn put_all<C>(&mut self, values: &C)
    where
        C: Collection<Item = T> + ?Sized,
        T: Clone,
    {
        self.reserve(values.count());
        for v in values.cursor() {
            self.put(v.clone());
        }
    }

    /// Returns `true` if the set contains the value.
    pub fn contains(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    /// Returns `true` if the set contains every value of `values`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashSet;
    /// #
    /// let set = HashSet::of([1, 2, 3]);
    /// assert!(set.contains_all(&[3, 1]));
    /// assert!(!set.contains_all(&vec![1, 4]));
    /// ```
    pub fn contains_all<C>(&self, values: &C) -> bool
    where
        C: Collection<Item = T> + ?Sized,
    {
        values.cursor().all(|v| self.contains(v))
    }

    /// Removes a value from the set. Returns `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.map.remove(value).is_some()
    }

    /// Removes and returns the stored value equal to `value`, if any.
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.map.remove_entry(value).map(|(v, _)| v)
    }

    /// Returns a reference to the stored value equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.map.get_key_value(value).map(|(v, _)| v)
    }

    /// Returns `true` if `self` has no values in common with `other`.
    pub fn is_disjoint(&self, other: &HashSet<T, S>) -> bool {
        if self.len() <= other.len() {
            self.iter().all(|v| !other.contains(v))
        } else {
            other.iter().all(|v| !self.contains(v))
        }
    }

    /// Returns `true` if every value of `self` is in `other`.
    pub fn is_subset(&self, other: &HashSet<T, S>) -> bool {
        self.len() <= other.len() && self.iter().all(|v| other.contains(v))
    }

    /// Returns `true` if every value of `other` is in `self`.
    pub fn is_superset(&self, other: &HashSet<T, S>) -> bool {
        other.is_subset(self)
    }

    /// Returns an iterator over the values in `self` or `other`, without
    /// duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashSet;
    /// #
    /// let a = HashSet::of([1, 2]);
    /// let b = HashSet::of([2, 3]);
    /// let union: Vec<_> = a.union(&b).copied().collect();
    /// assert_eq!(union, [1, 2, 3]);
    /// ```
    pub fn union<'a>(&'a self, other: &'a HashSet<T, S>) -> Union<'a, T, S> {
        Union {
            iter: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns an iterator over the values in both `self` and `other`.
    ///
    /// The smaller set is scanned, so the order follows whichever set is
    /// smaller.
    pub fn intersection<'a>(&'a self, other: &'a HashSet<T, S>) -> Intersection<'a, T, S> {
        if self.len() <= other.len() {
            Intersection {
                iter: self.iter(),
                other,
            }
        } else {
            Intersection {
                iter: other.iter(),
                other: self,
            }
        }
    }

    /// Returns an iterator over the values in `self` but not in `other`.
    pub fn difference<'a>(&'a self, other: &'a HashSet<T, S>) -> Difference<'a, T, S> {
        Difference {
            iter: self.iter(),
            other,
        }
    }

    /// Returns an iterator over the values in exactly one of `self` and
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashSet;
    /// #
    /// let a = HashSet::of([1, 2]);
    /// let b = HashSet::of([2, 3]);
    /// let sym_diff: Vec<_> = a.symmetric_difference(&b).copied().collect();
    /// assert_eq!(sym_diff, [1, 3]);
    /// ```
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a HashSet<T, S>,
    ) -> SymmetricDifference<'a, T, S> {
        SymmetricDifference {
            iter: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Builds a set from a collection, cloning each value.
    pub fn from_collection_with_hasher<C>(values: &C, hash_builder: S) -> Self
    where
        C: Collection<Item = T> + ?Sized,
        T: Clone,
    {
        let mut set = Self::with_capacity_and_hasher(values.count(), hash_builder);
        set.put_all(values);
        set
    }
}

impl<T> HashSet<T, DefaultHashBuilder>
where
    T: Eq + Hash,
{
    /// Creates an empty set with the default hasher builder.
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with at least the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Builds a set from an array of values, dropping duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashSet;
    /// #
    /// let set = HashSet::of([1, 1, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn of<const N: usize>(values: [T; N]) -> Self {
        Self::from(values)
    }

    /// Builds a set from a collection, cloning each value.
    pub fn from_collection<C>(values: &C) -> Self
    where
        C: Collection<Item = T> + ?Sized,
        T: Clone,
    {
        Self::from_collection_with_hasher(values, DefaultHashBuilder::default())
    }
}

impl<T, S> Default for HashSet<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S, const N: usize> From<[T; N]> for HashSet<T, S>
where
    T: Eq,
    S: KeyHasher<T> + Default,
{
    fn from(values: [T; N]) -> Self {
        let mut set = Self::with_capacity_and_hasher(N, S::default());
        set.extend(values);
        set
    }
}

impl<T, S> FromIterator<T> for HashSet<T, S>
where
    T: Eq,
    S: KeyHasher<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|v| (v, ())));
    }
}

impl<T, S> Collection for HashSet<T, S> {
    type Item = T;
    type Cursor<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> IntoIterator for HashSet<T, S> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the values of a `HashSet`.
pub struct Iter<'a, T> {
    inner: crate::hash_map::Keys<'a, T, ()>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A draining iterator over the values of a `HashSet`.
pub struct Drain<'a, T> {
    inner: crate::hash_map::Drain<'a, T, ()>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

/// An owning iterator over the values of a `HashSet`.
pub struct IntoIter<T> {
    inner: crate::hash_map::IntoIter<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, _)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// An iterator over the union of two sets.
pub struct Union<'a, T, S> {
    iter: Chain<Iter<'a, T>, Difference<'a, T, S>>,
}

impl<'a, T, S> Iterator for Union<'a, T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<T, S> FusedIterator for Union<'_, T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
}

/// An iterator over the intersection of two sets.
pub struct Intersection<'a, T, S> {
    iter: Iter<'a, T>,
    other: &'a HashSet<T, S>,
}

impl<'a, T, S> Iterator for Intersection<'a, T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.iter.next()?;
            if self.other.contains(v) {
                return Some(v);
            }
        }
    }
}

impl<T, S> FusedIterator for Intersection<'_, T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
}

/// An iterator over the difference of two sets.
pub struct Difference<'a, T, S> {
    iter: Iter<'a, T>,
    other: &'a HashSet<T, S>,
}

impl<'a, T, S> Iterator for Difference<'a, T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.iter.next()?;
            if !self.other.contains(v) {
                return Some(v);
            }
        }
    }
}

impl<T, S> FusedIterator for Difference<'_, T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
}

/// An iterator over the symmetric difference of two sets.
pub struct SymmetricDifference<'a, T, S> {
    iter: Chain<Difference<'a, T, S>, Difference<'a, T, S>>,
}

impl<'a, T, S> Iterator for SymmetricDifference<'a, T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<T, S> FusedIterator for SymmetricDifference<'_, T, S>
where
    T: Eq,
    S: KeyHasher<T>,
{
}
