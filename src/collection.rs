//! Uniform access to containers: a fresh cursor plus an element count.
//!
//! Bulk operations such as [`HashMap::put_all`](crate::HashMap::put_all) and
//! [`HashSet::from_collection`](crate::HashSet::from_collection) accept any
//! [`Collection`], presizing from [`count`](Collection::count) before pulling
//! from the cursor.

use alloc::collections::LinkedList;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// A container that can hand out a cursor over its elements.
///
/// # Examples
///
/// ```rust
/// use chain_hash::collection::Collection;
///
/// fn total<C: Collection<Item = u32> + ?Sized>(c: &C) -> u32 {
///     c.cursor().sum()
/// }
///
/// assert_eq!(total(&vec![1, 2, 3]), 6);
/// assert_eq!(total(&[4u32, 5]), 9);
/// ```
pub trait Collection {
    /// The element type.
    type Item;

    /// The cursor type returned by [`cursor`](Collection::cursor).
    type Cursor<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns a fresh cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Returns the number of elements.
    fn count(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Cursor<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Cursor<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn count(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = core::slice::Iter<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Cursor<'a>
        = alloc::collections::vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for LinkedList<T> {
    type Item = T;
    type Cursor<'a>
        = alloc::collections::linked_list::Iter<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// Returns `true` if both collections hold the same number of elements and
/// their cursors yield equal elements pairwise.
///
/// Counts are compared first, so a size mismatch never touches the cursors.
/// Unordered containers compare in cursor order.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
///
/// use chain_hash::collection::equals;
///
/// assert!(equals(&vec![1, 2, 3], &VecDeque::from([1, 2, 3])));
/// assert!(!equals(&[1, 2], &vec![1, 2, 3]));
/// assert!(!equals(&[1, 2], &[2, 1]));
/// ```
pub fn equals<L, R>(left: &L, right: &R) -> bool
where
    L: Collection + ?Sized,
    R: Collection<Item = L::Item> + ?Sized,
    L::Item: PartialEq,
{
    left.count() == right.count() && left.cursor().zip(right.cursor()).all(|(l, r)| l == r)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn summed<C: Collection<Item = i32> + ?Sized>(c: &C) -> (usize, i32) {
        (c.count(), c.cursor().copied().sum())
    }

    #[test]
    fn equals_checks_count_then_elements() {
        let list: LinkedList<i32> = [4, 5, 6].into_iter().collect();
        assert!(equals(&vec![4, 5, 6], &list));
        assert!(equals(&[4, 5, 6][..], &[4, 5, 6]));
        assert!(equals(&Vec::<i32>::new(), &VecDeque::new()));

        assert!(!equals(&vec![4, 5], &list));
        assert!(!equals(&vec![4, 5, 7], &list));
        assert!(!equals(&vec![6, 5, 4], &list));
    }

    #[test]
    fn std_containers() {
        assert_eq!(summed(&vec![1, 2, 3]), (3, 6));
        assert_eq!(summed(&[1, 2]), (2, 3));
        assert_eq!(summed(&[5][..]), (1, 5));
        assert_eq!(summed(&VecDeque::from(vec![7, 8])), (2, 15));

        let list: LinkedList<i32> = [1, 1, 1].into_iter().collect();
        assert_eq!(summed(&list), (3, 3));
    }

    #[test]
    fn cursors_are_fresh() {
        let values = vec![1, 2, 3];
        let mut first = values.cursor();
        first.next();
        assert_eq!(values.cursor().next(), Some(&1));
        assert!(Collection::is_empty(&Vec::<i32>::new()));
    }
}
