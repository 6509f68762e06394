//! The owning sorted collection.
//!
//! [`SortedList`] collects its items once, sorts them by the full key set and
//! never mutates them again. All searching happens through borrowed
//! [`SortedRange`] views or through the index-range variants, which return
//! positions in the backing store instead of a view.

use crate::algo::Direction;
use crate::core::{KeyPrefix, KeySet};
use crate::error::{self, KeyspanError, Result};
use crate::range::SortedRange;
use std::fmt;
use std::ops::{Index, Range, RangeBounds};
use std::slice;

/// Capacity of the first chunk when the input size is not known up front.
const INITIAL_CHUNK_LEN: usize = 256;

/// An immutable list sorted by a composite key.
///
/// `S` is a tuple of 1 to 16 [`KeyDescriptor`](crate::core::KeyDescriptor)s.
///
/// # Examples
///
/// ```
/// use keyspan::prelude::*;
///
/// struct Event {
///     day: i32,
///     name: String,
/// }
///
/// let events = vec![
///     Event { day: 3, name: "deploy".into() },
///     Event { day: 1, name: "plan".into() },
///     Event { day: 3, name: "announce".into() },
/// ];
///
/// let list = SortedList::new(
///     events,
///     (key(|e: &Event| &e.day), key(|e: &Event| e.name.as_str())),
/// )?;
///
/// let day3: Vec<&str> = list.find_equal((3,)).iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(day3, ["announce", "deploy"]);
/// # Ok::<(), keyspan::KeyspanError>(())
/// ```
pub struct SortedList<T, S> {
    items: Box<[T]>,
    keys: S,
}

impl<T, S: KeySet<T>> SortedList<T, S> {
    /// Builds a list from any finite sequence of items.
    ///
    /// Inputs of known exact size are collected in one allocation; otherwise
    /// items are gathered in geometrically growing chunks and copied once into
    /// an exactly-sized buffer. The items are sorted only if they are not
    /// already in key order.
    ///
    /// # Errors
    ///
    /// [`KeyspanError::CapacityOverflow`] if the collection buffer cannot grow.
    pub fn new<I>(items: I, keys: S) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let items = collect_items(items.into_iter())?;
        Ok(Self::from_vec(items, keys))
    }

    /// Builds a list from an already collected vector.
    pub fn from_vec(mut items: Vec<T>, keys: S) -> Self {
        let order = |a: &T, b: &T| keys.compare_items(a, b);
        let presorted = items.is_sorted_by(|a, b| order(a, b).is_le());
        if !presorted {
            items.sort_unstable_by(order);
        }

        tracing::trace!(
            len = items.len(),
            keys = S::LEN,
            presorted,
            "built sorted list"
        );

        SortedList {
            items: items.into_boxed_slice(),
            keys,
        }
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the item at `index`.
    ///
    /// # Errors
    ///
    /// [`KeyspanError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let index = error::check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// Iterates over all items in sorted order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The backing store.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The key set the list is sorted by.
    pub fn keys(&self) -> &S {
        &self.keys
    }

    /// Consumes the list, returning its sorted items.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }

    /// A view over every item.
    pub fn range(&self) -> SortedRange<'_, T, S> {
        SortedRange::new(&self.items, &self.keys, 0)
    }

    /// A view over the items at `bounds`.
    ///
    /// # Errors
    ///
    /// [`KeyspanError::RangeOutOfBounds`] if the bounds are inverted or extend
    /// past `self.len()`.
    pub fn range_of<R: RangeBounds<usize>>(&self, bounds: R) -> Result<SortedRange<'_, T, S>> {
        let bounds = error::resolve_bounds(bounds, self.items.len())?;
        let items = &self.items[bounds.clone()];
        Ok(SortedRange::new(items, &self.keys, bounds.start))
    }

    /// See [`SortedRange::find`].
    pub fn find<P: KeyPrefix<T, S>>(
        &self,
        direction: Direction,
        target: P,
    ) -> SortedRange<'_, T, S> {
        self.range().find(direction, target)
    }

    /// See [`SortedRange::find_equal`].
    pub fn find_equal<P: KeyPrefix<T, S>>(&self, target: P) -> SortedRange<'_, T, S> {
        self.find(Direction::Equal, target)
    }

    /// See [`SortedRange::find_less_or_equal`].
    pub fn find_less_or_equal<P: KeyPrefix<T, S>>(&self, target: P) -> SortedRange<'_, T, S> {
        self.find(Direction::LessOrEqual, target)
    }

    /// See [`SortedRange::find_less`].
    pub fn find_less<P: KeyPrefix<T, S>>(&self, target: P) -> SortedRange<'_, T, S> {
        self.find(Direction::Less, target)
    }

    /// See [`SortedRange::find_greater_or_equal`].
    pub fn find_greater_or_equal<P: KeyPrefix<T, S>>(&self, target: P) -> SortedRange<'_, T, S> {
        self.find(Direction::GreaterOrEqual, target)
    }

    /// See [`SortedRange::find_greater`].
    pub fn find_greater<P: KeyPrefix<T, S>>(&self, target: P) -> SortedRange<'_, T, S> {
        self.find(Direction::Greater, target)
    }

    /// Searches only the items at `range` and returns the matching positions.
    ///
    /// Both `range` and the result are indices into the backing store, which
    /// lets callers combine searches with their own index bookkeeping.
    ///
    /// # Errors
    ///
    /// [`KeyspanError::RangeOutOfBounds`] if `range` is inverted or extends
    /// past `self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyspan::prelude::*;
    ///
    /// let list = SortedList::from_vec(vec![1, 2, 2, 3, 3, 3], (key(|x: &i32| x),));
    ///
    /// assert_eq!(list.find_in(Direction::Equal, 0..6, (3,))?, 3..6);
    /// assert_eq!(list.find_in(Direction::Equal, 0..4, (3,))?, 3..4);
    /// assert!(list.find_in(Direction::Equal, 4..2, (3,)).is_err());
    /// # Ok::<(), keyspan::KeyspanError>(())
    /// ```
    pub fn find_in<P>(
        &self,
        direction: Direction,
        range: Range<usize>,
        target: P,
    ) -> Result<Range<usize>>
    where
        P: KeyPrefix<T, S>,
    {
        let range = error::check_range(range, self.items.len())?;
        let view = SortedRange::new(&self.items[range.clone()], &self.keys, range.start);
        Ok(view.find(direction, target).bounds())
    }

    /// See [`SortedList::find_in`].
    pub fn find_equal_in<P: KeyPrefix<T, S>>(
        &self,
        range: Range<usize>,
        target: P,
    ) -> Result<Range<usize>> {
        self.find_in(Direction::Equal, range, target)
    }

    /// See [`SortedList::find_in`].
    pub fn find_less_or_equal_in<P: KeyPrefix<T, S>>(
        &self,
        range: Range<usize>,
        target: P,
    ) -> Result<Range<usize>> {
        self.find_in(Direction::LessOrEqual, range, target)
    }

    /// See [`SortedList::find_in`].
    pub fn find_less_in<P: KeyPrefix<T, S>>(
        &self,
        range: Range<usize>,
        target: P,
    ) -> Result<Range<usize>> {
        self.find_in(Direction::Less, range, target)
    }

    /// See [`SortedList::find_in`].
    pub fn find_greater_or_equal_in<P: KeyPrefix<T, S>>(
        &self,
        range: Range<usize>,
        target: P,
    ) -> Result<Range<usize>> {
        self.find_in(Direction::GreaterOrEqual, range, target)
    }

    /// See [`SortedList::find_in`].
    pub fn find_greater_in<P: KeyPrefix<T, S>>(
        &self,
        range: Range<usize>,
        target: P,
    ) -> Result<Range<usize>> {
        self.find_in(Direction::Greater, range, target)
    }
}

/// Gathers `iter` into one exactly-sized vector.
///
/// Unknown-size inputs go through chunks of doubling capacity so no element is
/// moved more than twice. Growth uses checked arithmetic and fallible
/// reservation and fails with [`KeyspanError::CapacityOverflow`].
fn collect_items<T, I: Iterator<Item = T>>(mut iter: I) -> Result<Vec<T>> {
    let (lower, upper) = iter.size_hint();
    if upper == Some(lower) {
        let mut items = Vec::new();
        items
            .try_reserve_exact(lower)
            .map_err(|_| KeyspanError::CapacityOverflow)?;
        items.extend(iter);
        return Ok(items);
    }

    let Some(first) = iter.next() else {
        return Ok(Vec::new());
    };

    let mut chunk_len = INITIAL_CHUNK_LEN;
    let mut current = reserve_chunk(chunk_len)?;
    current.push(first);

    let mut chunks: Vec<Vec<T>> = Vec::new();
    let mut total: usize = 1;

    for item in iter {
        if current.len() == chunk_len {
            chunk_len = chunk_len
                .checked_mul(2)
                .ok_or(KeyspanError::CapacityOverflow)?;
            let next = reserve_chunk(chunk_len)?;
            chunks.push(std::mem::replace(&mut current, next));
        }
        current.push(item);
        total = total.checked_add(1).ok_or(KeyspanError::CapacityOverflow)?;
    }

    if chunks.is_empty() {
        current.shrink_to_fit();
        return Ok(current);
    }

    let mut items = reserve_chunk(total)?;
    for chunk in chunks {
        items.extend(chunk);
    }
    items.extend(current);
    Ok(items)
}

fn reserve_chunk<T>(len: usize) -> Result<Vec<T>> {
    let mut chunk = Vec::new();
    chunk
        .try_reserve_exact(len)
        .map_err(|_| KeyspanError::CapacityOverflow)?;
    Ok(chunk)
}

impl<T, S> Index<usize> for SortedList<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T, S> IntoIterator for &'a SortedList<T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone, S: Clone> Clone for SortedList<T, S> {
    fn clone(&self) -> Self {
        SortedList {
            items: self.items.clone(),
            keys: self.keys.clone(),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for SortedList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_chunk_reports_capacity_overflow() {
        let err = reserve_chunk::<u64>(usize::MAX).unwrap_err();
        assert_eq!(err, KeyspanError::CapacityOverflow);
    }

    #[test]
    fn test_reserve_chunk_starts_empty() {
        let chunk = reserve_chunk::<u64>(INITIAL_CHUNK_LEN).unwrap();
        assert!(chunk.is_empty());
        assert!(chunk.capacity() >= INITIAL_CHUNK_LEN);
    }

    #[test]
    fn test_collect_items_spans_several_chunks() {
        let count = INITIAL_CHUNK_LEN * 5 + 3;
        let items = collect_items((0..count).filter(|x| x % 7 != 0)).unwrap();
        let expected: Vec<usize> = (0..count).filter(|x| x % 7 != 0).collect();
        assert_eq!(items, expected);
    }
}
