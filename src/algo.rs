//! Directional binary-search primitives.
//!
//! Every function here works on a sorted slice and a comparison closure that
//! reports how the (fixed) search target relates to a given element:
//!
//! - `Ordering::Less`: the target sorts before the element.
//! - `Ordering::Equal`: the target matches the element.
//! - `Ordering::Greater`: the target sorts after the element.
//!
//! This is the reverse of the closure expected by [`slice::binary_search_by`],
//! which compares the element against the target.
//!
//! Each search returns the maximal contiguous part of the slice satisfying its
//! predicate. Nothing is copied: the result always borrows from the input.
//!
//! The main entry points are [`search`] (positions) and [`find`] (sub-slice),
//! plus the five named wrappers.

use std::cmp::Ordering;
use std::ops::Range;

/// Predicate direction of a search, relative to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Elements strictly less than the target.
    Less,
    /// Elements less than or equal to the target.
    LessOrEqual,
    /// Elements equal to the target.
    Equal,
    /// Elements greater than or equal to the target.
    GreaterOrEqual,
    /// Elements strictly greater than the target.
    Greater,
}

impl Direction {
    /// All directions, in left-to-right partition order of the slice.
    pub const ALL: [Direction; 5] = [
        Direction::Less,
        Direction::LessOrEqual,
        Direction::Equal,
        Direction::GreaterOrEqual,
        Direction::Greater,
    ];
}

/// Returns the positions within `items` whose elements satisfy `direction`.
///
/// When nothing matches, the returned range is empty and sits at the boundary
/// where matching elements would have been (`len..len` for the greater family,
/// `0..0` for the less family, the lower bound for [`Direction::Equal`]).
///
/// # Examples
///
/// ```
/// use keyspan::algo::{search, Direction};
///
/// let data = [1, 2, 2, 2, 5];
/// assert_eq!(search(&data, Direction::Equal, |x| 2.cmp(x)), 1..4);
/// assert_eq!(search(&data, Direction::Greater, |x| 2.cmp(x)), 4..5);
/// assert_eq!(search(&data, Direction::Less, |x| 0.cmp(x)), 0..0);
/// ```
pub fn search<T, F>(items: &[T], direction: Direction, mut cmp: F) -> Range<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let len = items.len();
    match direction {
        Direction::GreaterOrEqual => first_kept(items, &mut cmp, false)..len,
        Direction::Greater => first_kept(items, &mut cmp, true)..len,
        Direction::LessOrEqual => 0..end_of_kept(items, &mut cmp, false),
        Direction::Less => 0..end_of_kept(items, &mut cmp, true),
        Direction::Equal => {
            // Second pass only looks at the suffix found by the first.
            let start = first_kept(items, &mut cmp, false);
            let end = start + end_of_kept(&items[start..], &mut cmp, false);
            start..end
        }
    }
}

/// Returns the sub-slice of `items` whose elements satisfy `direction`.
///
/// # Examples
///
/// ```
/// use keyspan::algo::{find, Direction};
///
/// let data = ["apple", "banana", "banana", "cherry"];
/// let found = find(&data, Direction::LessOrEqual, |x| "banana".cmp(x));
/// assert_eq!(found, ["apple", "banana", "banana"]);
/// ```
pub fn find<T, F>(items: &[T], direction: Direction, cmp: F) -> &[T]
where
    F: FnMut(&T) -> Ordering,
{
    &items[search(items, direction, cmp)]
}

/// Elements equal to the target.
pub fn find_equal<T, F>(items: &[T], cmp: F) -> &[T]
where
    F: FnMut(&T) -> Ordering,
{
    find(items, Direction::Equal, cmp)
}

/// Elements less than or equal to the target (a prefix of `items`).
pub fn find_less_or_equal<T, F>(items: &[T], cmp: F) -> &[T]
where
    F: FnMut(&T) -> Ordering,
{
    find(items, Direction::LessOrEqual, cmp)
}

/// Elements strictly less than the target (a prefix of `items`).
pub fn find_less<T, F>(items: &[T], cmp: F) -> &[T]
where
    F: FnMut(&T) -> Ordering,
{
    find(items, Direction::Less, cmp)
}

/// Elements greater than or equal to the target (a suffix of `items`).
pub fn find_greater_or_equal<T, F>(items: &[T], cmp: F) -> &[T]
where
    F: FnMut(&T) -> Ordering,
{
    find(items, Direction::GreaterOrEqual, cmp)
}

/// Elements strictly greater than the target (a suffix of `items`).
pub fn find_greater<T, F>(items: &[T], cmp: F) -> &[T]
where
    F: FnMut(&T) -> Ordering,
{
    find(items, Direction::Greater, cmp)
}

/// Index of the first element kept by the greater family, or `items.len()`.
///
/// An element is kept when the target is less than it (`strict`) or not
/// greater than it. When a kept element is found at `mid`, its left neighbour
/// decides whether `mid` is the first one or the search continues leftwards.
#[inline]
fn first_kept<T, F>(items: &[T], cmp: &mut F, strict: bool) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    let keep = |ord: Ordering| {
        if strict {
            ord == Ordering::Less
        } else {
            ord != Ordering::Greater
        }
    };

    // Half-open window; the first kept index always lies inside it.
    let mut left = 0;
    let mut right = items.len();

    while left < right {
        let mid = left + (right - left) / 2;
        if !keep(cmp(&items[mid])) {
            left = mid + 1;
        } else if mid == 0 || !keep(cmp(&items[mid - 1])) {
            return mid;
        } else {
            right = mid;
        }
    }

    items.len()
}

/// One past the index of the last element kept by the less family, or `0`.
///
/// Mirror of [`first_kept`]: an element is kept when the target is greater
/// than it (`strict`) or not less than it, and the right neighbour decides.
#[inline]
fn end_of_kept<T, F>(items: &[T], cmp: &mut F, strict: bool) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    let keep = |ord: Ordering| {
        if strict {
            ord == Ordering::Greater
        } else {
            ord != Ordering::Less
        }
    };

    let len = items.len();
    let mut left = 0;
    let mut right = len;

    while left < right {
        let mid = left + (right - left) / 2;
        if !keep(cmp(&items[mid])) {
            right = mid;
        } else if mid + 1 >= len || !keep(cmp(&items[mid + 1])) {
            return mid + 1;
        } else {
            left = mid + 1;
        }
    }

    0
}
