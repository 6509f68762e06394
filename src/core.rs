//! Core traits and types for composite keys.
//!
//! This module defines:
//! - [`KeyDescriptor`]: one key level (projection plus three-way comparison).
//! - [`KeySet`]: a composite comparator, implemented for tuples of 1 to 16
//!   descriptors.
//! - [`KeyPrefix`]: a search target fixing the first `k` keys of a key set,
//!   implemented for tuples of up to as many values as the key set has keys.
//! - [`Key`] and [`DerivedKey`]: ready-made descriptors built from closures.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Maximum number of keys in a [`KeySet`].
pub const MAX_KEYS: usize = 16;

/// A single key level of a composite ordering.
///
/// Implementors project a key out of an item and compare keys three-way.
/// Library code never looks inside `Key` values; it only calls these methods.
///
/// # Examples
///
/// Implementing for a custom descriptor:
///
/// ```
/// use keyspan::core::KeyDescriptor;
/// use std::cmp::Ordering;
///
/// struct ByLength;
///
/// impl KeyDescriptor<String> for ByLength {
///     type Key = usize;
///
///     fn compare_to(&self, target: &usize, item: &String) -> Ordering {
///         target.cmp(&item.len())
///     }
///
///     fn compare_items(&self, a: &String, b: &String) -> Ordering {
///         a.len().cmp(&b.len())
///     }
/// }
/// ```
pub trait KeyDescriptor<T> {
    /// The projected key type.
    type Key: ?Sized;

    /// Compares the search `target` against the key of `item`.
    fn compare_to(&self, target: &Self::Key, item: &T) -> Ordering;

    /// Compares the keys of two items.
    fn compare_items(&self, a: &T, b: &T) -> Ordering;
}

/// A composite comparator: an ordered sequence of key descriptors.
///
/// Items compare by the first key, then, only when equal, by the second key,
/// and so on.
pub trait KeySet<T> {
    /// Number of key levels.
    const LEN: usize;

    /// Compares two items by all key levels.
    fn compare_items(&self, a: &T, b: &T) -> Ordering;
}

/// A search target fixing the leading keys of a [`KeySet`].
///
/// Implemented for tuples `(Q1, ..., Qk)` where `Qi: Borrow<Di::Key>` and `k`
/// does not exceed the number of keys, so a target with too many values is
/// rejected at compile time.
///
/// ```
/// use keyspan::prelude::*;
///
/// let list = SortedList::from_vec(vec![(1, 2), (1, 3)], (key(|p: &(i32, i32)| &p.0),));
/// assert_eq!(list.find_equal((1i32,)).len(), 2);
/// ```
///
/// One key, two values:
///
/// ```compile_fail
/// use keyspan::prelude::*;
///
/// let list = SortedList::from_vec(vec![1i32], (key(|x: &i32| x),));
/// let _ = list.find_equal((1i32, 2i32));
/// ```
///
/// A value that does not borrow as the key type:
///
/// ```compile_fail
/// use keyspan::prelude::*;
///
/// let list = SortedList::from_vec(vec![1i32], (key(|x: &i32| x),));
/// let _ = list.find_equal(("one",));
/// ```
pub trait KeyPrefix<T, S: KeySet<T>> {
    /// Number of leading keys this target fixes.
    const LEN: usize;

    /// Compares the target against `item` along the fixed prefix.
    fn compare_to(&self, keys: &S, item: &T) -> Ordering;
}

/// A key descriptor whose projection borrows from the item.
///
/// Built with [`key`], [`key_desc`] or [`key_by`].
pub struct Key<T, K: ?Sized, P, C = fn(&K, &K) -> Ordering> {
    project: P,
    compare: C,
    _marker: PhantomData<fn(&T) -> &K>,
}

impl<T, K, P, C> KeyDescriptor<T> for Key<T, K, P, C>
where
    K: ?Sized,
    P: Fn(&T) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    type Key = K;

    #[inline]
    fn compare_to(&self, target: &K, item: &T) -> Ordering {
        (self.compare)(target, (self.project)(item))
    }

    #[inline]
    fn compare_items(&self, a: &T, b: &T) -> Ordering {
        (self.compare)((self.project)(a), (self.project)(b))
    }
}

impl<T, K: ?Sized, P: Clone, C: Clone> Clone for Key<T, K, P, C> {
    fn clone(&self) -> Self {
        Key {
            project: self.project.clone(),
            compare: self.compare.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, K: ?Sized, P, C> fmt::Debug for Key<T, K, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("key", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

/// A key descriptor whose projection computes an owned value.
///
/// Use this when the key is not stored in the item (for example a length or
/// a lowercased name). Built with [`derived_key`] or [`derived_key_by`].
pub struct DerivedKey<T, K, P, C = fn(&K, &K) -> Ordering> {
    project: P,
    compare: C,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T, K, P, C> KeyDescriptor<T> for DerivedKey<T, K, P, C>
where
    P: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    type Key = K;

    #[inline]
    fn compare_to(&self, target: &K, item: &T) -> Ordering {
        (self.compare)(target, &(self.project)(item))
    }

    #[inline]
    fn compare_items(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(&(self.project)(a), &(self.project)(b))
    }
}

impl<T, K, P: Clone, C: Clone> Clone for DerivedKey<T, K, P, C> {
    fn clone(&self) -> Self {
        DerivedKey {
            project: self.project.clone(),
            compare: self.compare.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, K, P, C> fmt::Debug for DerivedKey<T, K, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &std::any::type_name::<K>())
            .finish_non_exhaustive()
    }
}

fn ascending<K: Ord + ?Sized>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

fn descending<K: Ord + ?Sized>(a: &K, b: &K) -> Ordering {
    b.cmp(a)
}

/// Ascending key on a borrowed projection.
///
/// ```
/// use keyspan::core::key;
///
/// struct User {
///     name: String,
/// }
///
/// let by_name = key(|u: &User| u.name.as_str());
/// # let _ = by_name;
/// ```
pub fn key<T, K, P>(project: P) -> Key<T, K, P>
where
    K: Ord + ?Sized,
    P: Fn(&T) -> &K,
{
    Key {
        project,
        compare: ascending::<K>,
        _marker: PhantomData,
    }
}

/// Descending key on a borrowed projection.
pub fn key_desc<T, K, P>(project: P) -> Key<T, K, P>
where
    K: Ord + ?Sized,
    P: Fn(&T) -> &K,
{
    Key {
        project,
        compare: descending::<K>,
        _marker: PhantomData,
    }
}

/// Key on a borrowed projection with a custom three-way comparison.
pub fn key_by<T, K, P, C>(project: P, compare: C) -> Key<T, K, P, C>
where
    K: ?Sized,
    P: Fn(&T) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    Key {
        project,
        compare,
        _marker: PhantomData,
    }
}

/// Ascending key on a computed projection.
pub fn derived_key<T, K, P>(project: P) -> DerivedKey<T, K, P>
where
    K: Ord,
    P: Fn(&T) -> K,
{
    DerivedKey {
        project,
        compare: ascending::<K>,
        _marker: PhantomData,
    }
}

/// Key on a computed projection with a custom three-way comparison.
pub fn derived_key_by<T, K, P, C>(project: P, compare: C) -> DerivedKey<T, K, P, C>
where
    P: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    DerivedKey {
        project,
        compare,
        _marker: PhantomData,
    }
}

macro_rules! one {
    ($x:tt) => {
        1
    };
}

// `KeyPrefix` for a target of the given descriptors against the full key set.
macro_rules! prefix_impl {
    ([$($All:ident),+]; $(($D:ident, $Q:ident, $i:tt))+) => {
        impl<T, $($All,)+ $($Q,)+> KeyPrefix<T, ($($All,)+)> for ($($Q,)+)
        where
            $($All: KeyDescriptor<T>,)+
            $($Q: Borrow< <$D as KeyDescriptor<T>>::Key >,)+
        {
            const LEN: usize = 0 $(+ one!($Q))+;

            #[inline]
            fn compare_to(&self, keys: &($($All,)+), item: &T) -> Ordering {
                $(
                    match keys.$i.compare_to(
                        Borrow::< <$D as KeyDescriptor<T>>::Key >::borrow(&self.$i),
                        item,
                    ) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                )+
                Ordering::Equal
            }
        }
    };
}

// Walks every non-empty prefix of the descriptor list.
macro_rules! prefix_impls {
    ($all:tt; [$($acc:tt)*];) => {};
    ($all:tt; [$($acc:tt)*]; $head:tt $($rest:tt)*) => {
        prefix_impl!($all; $($acc)* $head);
        prefix_impls!($all; [$($acc)* $head]; $($rest)*);
    };
}

macro_rules! key_set_impl {
    ($(($D:ident, $Q:ident, $i:tt))+) => {
        impl<T, $($D,)+> KeySet<T> for ($($D,)+)
        where
            $($D: KeyDescriptor<T>,)+
        {
            const LEN: usize = 0 $(+ one!($D))+;

            #[inline]
            fn compare_items(&self, a: &T, b: &T) -> Ordering {
                $(
                    match self.$i.compare_items(a, b) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                )+
                Ordering::Equal
            }
        }

        prefix_impls!([$($D),+]; []; $(($D, $Q, $i))+);
    };
}

// Walks every non-empty prefix of the full 16-key list.
macro_rules! key_set_impls {
    ([$($acc:tt)*];) => {};
    ([$($acc:tt)*]; $head:tt $($rest:tt)*) => {
        key_set_impl!($($acc)* $head);
        key_set_impls!([$($acc)* $head]; $($rest)*);
    };
}

key_set_impls!([];
    (D1, Q1, 0) (D2, Q2, 1) (D3, Q3, 2) (D4, Q4, 3)
    (D5, Q5, 4) (D6, Q6, 5) (D7, Q7, 6) (D8, Q8, 7)
    (D9, Q9, 8) (D10, Q10, 9) (D11, Q11, 10) (D12, Q12, 11)
    (D13, Q13, 12) (D14, Q14, 13) (D15, Q15, 14) (D16, Q16, 15)
);
