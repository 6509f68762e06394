//! Borrowed views over a sorted list.
//!
//! A [`SortedRange`] is a contiguous slice of a [`SortedList`](crate::list::SortedList)
//! together with the key set that ordered it. Searches narrow the slice and
//! return a new view over the same storage; nothing is copied or re-sorted.

use crate::algo::{self, Direction};
use crate::core::{KeyPrefix, KeySet};
use crate::error::{self, Result};
use std::fmt;
use std::ops::{Index, Range, RangeBounds};
use std::slice;

/// A contiguous, sorted view of a list's backing store.
///
/// Cheap to copy. Every search method returns a sub-view of `self`, so
/// searches can be chained in any order and only ever narrow.
///
/// # Examples
///
/// ```
/// use keyspan::prelude::*;
///
/// let list = SortedList::from_vec(
///     vec![(2, "b"), (1, "a"), (2, "a"), (3, "a"), (1, "b")],
///     (key(|p: &(i32, &str)| &p.0), key(|p: &(i32, &str)| p.1)),
/// );
///
/// let twos = list.range().find_equal((2,));
/// assert_eq!(twos.as_slice(), [(2, "a"), (2, "b")]);
///
/// let up_to_2a = twos.find_less_or_equal((2, "a"));
/// assert_eq!(up_to_2a.as_slice(), [(2, "a")]);
/// assert_eq!(up_to_2a.bounds(), 2..3);
/// ```
pub struct SortedRange<'a, T, S> {
    items: &'a [T],
    keys: &'a S,
    offset: usize,
}

impl<T, S> Clone for SortedRange<'_, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for SortedRange<'_, T, S> {}

impl<'a, T, S: KeySet<T>> SortedRange<'a, T, S> {
    /// Creates a view over `items`, which start at `offset` in the backing store.
    pub(crate) fn new(items: &'a [T], keys: &'a S, offset: usize) -> Self {
        SortedRange {
            items,
            keys,
            offset,
        }
    }

    /// Number of items in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the view holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index` within the view, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }

    /// Returns the item at `index` within the view.
    ///
    /// # Errors
    ///
    /// [`KeyspanError::IndexOutOfRange`](crate::KeyspanError::IndexOutOfRange)
    /// if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&'a T> {
        let index = error::check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    /// First item of the view.
    pub fn first(&self) -> Option<&'a T> {
        self.items.first()
    }

    /// Last item of the view.
    pub fn last(&self) -> Option<&'a T> {
        self.items.last()
    }

    /// Iterates over the view in sorted order.
    ///
    /// Each call starts over from the beginning of the view.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.items.iter()
    }

    /// The items of the view as a slice of the backing store.
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// The key set shared with the owning list.
    pub fn keys(&self) -> &'a S {
        self.keys
    }

    /// Position of this view within the backing store.
    pub fn bounds(&self) -> Range<usize> {
        self.offset..self.offset + self.items.len()
    }

    /// A sub-view selected by position, relative to this view.
    ///
    /// # Errors
    ///
    /// [`KeyspanError::RangeOutOfBounds`](crate::KeyspanError::RangeOutOfBounds)
    /// if the bounds are inverted or extend past `self.len()`.
    pub fn slice<R: RangeBounds<usize>>(&self, bounds: R) -> Result<Self> {
        let bounds = error::resolve_bounds(bounds, self.items.len())?;
        Ok(self.narrow(bounds))
    }

    /// Narrows the view to the items satisfying `direction` against `target`.
    ///
    /// `target` is a tuple fixing the leading keys, e.g. `(k1,)` or `(k1, k2)`.
    /// Keys beyond the target are ignored, so `find(Equal, (k1,))` selects every
    /// item whose first key equals `k1`.
    pub fn find<P>(&self, direction: Direction, target: P) -> Self
    where
        P: KeyPrefix<T, S>,
    {
        let keys = self.keys;
        let compare = |item: &T| target.compare_to(keys, item);
        let found = algo::search(self.items, direction, compare);
        self.narrow(found)
    }

    /// Items whose leading keys equal `target`.
    pub fn find_equal<P: KeyPrefix<T, S>>(&self, target: P) -> Self {
        self.find(Direction::Equal, target)
    }

    /// Items whose leading keys are less than or equal to `target`.
    pub fn find_less_or_equal<P: KeyPrefix<T, S>>(&self, target: P) -> Self {
        self.find(Direction::LessOrEqual, target)
    }

    /// Items whose leading keys are strictly less than `target`.
    pub fn find_less<P: KeyPrefix<T, S>>(&self, target: P) -> Self {
        self.find(Direction::Less, target)
    }

    /// Items whose leading keys are greater than or equal to `target`.
    pub fn find_greater_or_equal<P: KeyPrefix<T, S>>(&self, target: P) -> Self {
        self.find(Direction::GreaterOrEqual, target)
    }

    /// Items whose leading keys are strictly greater than `target`.
    pub fn find_greater<P: KeyPrefix<T, S>>(&self, target: P) -> Self {
        self.find(Direction::Greater, target)
    }

    // `bounds` is relative to this view and already checked.
    fn narrow(&self, bounds: Range<usize>) -> Self {
        SortedRange {
            items: &self.items[bounds.clone()],
            keys: self.keys,
            offset: self.offset + bounds.start,
        }
    }
}

impl<T, S> Index<usize> for SortedRange<'_, T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T, S> IntoIterator for SortedRange<'a, T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T, S> IntoIterator for &SortedRange<'a, T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug, S> fmt::Debug for SortedRange<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedRange")
            .field("bounds", &(self.offset..self.offset + self.items.len()))
            .field("items", &self.items)
            .finish()
    }
}
