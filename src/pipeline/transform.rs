//! Lazy combinators.
//!
//! Each function wraps its source(s) in an adapter that pulls on demand.
//! Nothing is buffered, and every adapter is fused: once it has returned
//! `None` it keeps returning `None`.
//!
//! ```rust
//! use chain_hash::pipeline::transform::{filter, limit, map};
//!
//! let evens_squared: Vec<u32> = limit(3, map(|x| x * x, filter(|x: &u32| x % 2 == 0, 1..)))
//!     .collect();
//! assert_eq!(evens_squared, [4, 16, 36]);
//! ```

use core::iter::Fuse;
use core::iter::FusedIterator;

use crate::value::Violation;

/// Applies `f` to every element of `src`.
pub fn map<I, R, F>(f: F, src: I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> R,
{
    Map {
        iter: src.into_iter().fuse(),
        f,
    }
}

/// Keeps the elements of `src` for which `predicate` holds, in order.
pub fn filter<I, P>(predicate: P, src: I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        iter: src.into_iter().fuse(),
        predicate,
    }
}

/// Passes through at most `n` elements of `src`. The source is not pulled
/// again once the cap is reached.
pub fn limit<I: IntoIterator>(n: usize, src: I) -> Limit<I::IntoIter> {
    Limit {
        iter: src.into_iter().fuse(),
        remaining: n,
    }
}

/// Discards the first `n` elements of `src` on the first pull, then passes
/// the rest through.
pub fn skip<I: IntoIterator>(n: usize, src: I) -> Skip<I::IntoIter> {
    Skip {
        iter: src.into_iter().fuse(),
        pending: n,
    }
}

/// Yields the first element of `src`, then every `n`-th element after it.
///
/// # Panics
///
/// Panics with [`Violation::OutOfBounds`] if `n` is zero.
///
/// ```rust
/// use chain_hash::pipeline::transform::step;
///
/// let picked: Vec<_> = step(3, 0..10).collect();
/// assert_eq!(picked, [0, 3, 6, 9]);
/// ```
#[track_caller]
pub fn step<I: IntoIterator>(n: usize, src: I) -> Step<I::IntoIter> {
    if n == 0 {
        Violation::OutOfBounds.raise();
    }
    Step {
        iter: src.into_iter().fuse(),
        gap: n - 1,
        first_take: true,
    }
}

/// Yields every element of `first`, then every element of `second`.
pub fn concat<A, B>(first: A, second: B) -> Concat<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Concat {
        first: Some(first.into_iter()),
        second: second.into_iter().fuse(),
    }
}

/// Flattens a sequence of sequences, one inner sequence at a time.
///
/// ```rust
/// use chain_hash::pipeline::transform::flatten;
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// assert_eq!(flatten(nested).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn flatten<I>(outer: I) -> Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Flatten {
        outer: outer.into_iter().fuse(),
        inner: None,
    }
}

/// Pairs up the elements of `first` and `second`. Ends with the shorter
/// source.
pub fn zip<A, B>(first: A, second: B) -> Zip<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Zip {
        first: first.into_iter().fuse(),
        second: second.into_iter().fuse(),
    }
}

/// Pairs every element of `src` with its zero-based position.
pub fn enumerate<I: IntoIterator>(src: I) -> Enumerate<I::IntoIter> {
    Enumerate {
        iter: src.into_iter().fuse(),
        index: 0,
    }
}

/// Iterator returned by [`map`].
#[derive(Clone)]
pub struct Map<I, F> {
    iter: Fuse<I>,
    f: F,
}

impl<I, R, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<R> {
        self.iter.next().map(&mut self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I, R, F> FusedIterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
}

/// Iterator returned by [`filter`].
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: Fuse<I>,
    predicate: P,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.iter.by_ref() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Iterator returned by [`limit`].
#[derive(Clone, Debug)]
pub struct Limit<I> {
    iter: Fuse<I>,
    remaining: usize,
}

impl<I: Iterator> Iterator for Limit<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lo, hi) = self.iter.size_hint();
        let hi = match hi {
            Some(hi) => hi.min(self.remaining),
            None => self.remaining,
        };
        (lo.min(self.remaining), Some(hi))
    }
}

impl<I: Iterator> FusedIterator for Limit<I> {}

/// Iterator returned by [`skip`].
#[derive(Clone, Debug)]
pub struct Skip<I> {
    iter: Fuse<I>,
    pending: usize,
}

impl<I: Iterator> Iterator for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.pending > 0 {
            self.iter.next()?;
            self.pending -= 1;
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.iter.size_hint();
        (
            lo.saturating_sub(self.pending),
            hi.map(|hi| hi.saturating_sub(self.pending)),
        )
    }
}

impl<I: Iterator> FusedIterator for Skip<I> {}

/// Iterator returned by [`step`].
#[derive(Clone, Debug)]
pub struct Step<I> {
    iter: Fuse<I>,
    gap: usize,
    first_take: bool,
}

impl<I: Iterator> Iterator for Step<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.first_take {
            self.first_take = false;
            return self.iter.next();
        }
        self.iter.nth(self.gap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let stride = self.gap + 1;
        let remaining = |n: usize| {
            if self.first_take {
                n.div_ceil(stride)
            } else {
                n / stride
            }
        };
        let (lo, hi) = self.iter.size_hint();
        (remaining(lo), hi.map(remaining))
    }
}

impl<I: Iterator> FusedIterator for Step<I> {}

/// Iterator returned by [`concat`].
#[derive(Clone, Debug)]
pub struct Concat<A, B> {
    // Dropped once exhausted so it is never pulled again.
    first: Option<A>,
    second: Fuse<B>,
}

impl<A, B> Iterator for Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(first) = &mut self.first {
            match first.next() {
                Some(item) => return Some(item),
                None => self.first = None,
            }
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lo, first_hi) = match &self.first {
            Some(first) => first.size_hint(),
            None => (0, Some(0)),
        };
        let (second_lo, second_hi) = self.second.size_hint();
        let hi = match (first_hi, second_hi) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (first_lo.saturating_add(second_lo), hi)
    }
}

impl<A, B> FusedIterator for Concat<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
}

/// Iterator returned by [`flatten`].
pub struct Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    outer: Fuse<I>,
    inner: Option<<I::Item as IntoIterator>::IntoIter>,
}

impl<I> Clone for Flatten<I>
where
    I: Iterator + Clone,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Flatten {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            self.inner = Some(self.outer.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lo = self.inner.as_ref().map_or(0, |inner| inner.size_hint().0);
        (lo, None)
    }
}

impl<I> FusedIterator for Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
}

/// Iterator returned by [`zip`].
#[derive(Clone, Debug)]
pub struct Zip<A, B> {
    first: Fuse<A>,
    second: Fuse<B>,
}

impl<A: Iterator, B: Iterator> Iterator for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.first.next()?;
        let b = self.second.next()?;
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lo, a_hi) = self.first.size_hint();
        let (b_lo, b_hi) = self.second.size_hint();
        let hi = match (a_hi, b_hi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        };
        (a_lo.min(b_lo), hi)
    }
}

impl<A: Iterator, B: Iterator> FusedIterator for Zip<A, B> {}

/// Iterator returned by [`enumerate`].
#[derive(Clone, Debug)]
pub struct Enumerate<I> {
    iter: Fuse<I>,
    index: usize,
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (usize, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: Iterator> FusedIterator for Enumerate<I> {}
