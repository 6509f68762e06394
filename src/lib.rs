//! # Keyspan
//!
//! `keyspan` provides immutable sorted collections keyed by up to sixteen
//! composite keys, with directional binary-search range queries.
//!
//! A [`SortedList`] is built once and sorted by its key set. Searches carve out
//! contiguous sub-ranges whose leading keys are equal, less, less-or-equal,
//! greater or greater-or-equal to a target. Keys compare left to right: a later
//! key only matters when all earlier keys are equal.
//!
//! ## Key Features
//!
//! - **Zero-copy ranges**: every search returns a [`SortedRange`] borrowing a
//!   sub-slice of the list's single backing store. Nothing is copied or re-sorted.
//! - **Chained narrowing**: ranges search within themselves, so queries compose in
//!   O(log n) per step.
//! - **Prefix targets**: a target may fix any number of leading keys, from one up
//!   to the full key set. Supplying more values than there are keys does not
//!   compile.
//! - **Index ranges**: [`SortedList::find_in`] works on explicit positions of the
//!   backing store and returns positions, for callers doing their own index
//!   bookkeeping.
//! - **Slice primitives**: the [`algo`] module exposes the underlying searches on
//!   plain slices.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use keyspan::prelude::*;
//!
//! let list = SortedList::from_vec(
//!     vec![(2, 'b'), (1, 'a'), (3, 'a'), (2, 'a'), (1, 'b')],
//!     (key(|p: &(i32, char)| &p.0), key(|p: &(i32, char)| &p.1)),
//! );
//!
//! assert_eq!(list.find_equal((2,)).as_slice(), [(2, 'a'), (2, 'b')]);
//! assert_eq!(list.find_equal((2, 'b')).as_slice(), [(2, 'b')]);
//! assert_eq!(list.find_less((2,)).as_slice(), [(1, 'a'), (1, 'b')]);
//! assert!(list.find_equal((5,)).is_empty());
//! ```
//!
//! ### Chained Narrowing
//!
//! ```rust
//! use keyspan::prelude::*;
//!
//! let list = SortedList::from_vec(
//!     vec![(1, 10), (1, 20), (1, 30), (2, 10)],
//!     (key(|p: &(i32, i32)| &p.0), key(|p: &(i32, i32)| &p.1)),
//! );
//!
//! let ones = list.find_greater_or_equal((1,)).find_less_or_equal((1, 20));
//! assert_eq!(ones.as_slice(), [(1, 10), (1, 20)]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Construction**: O(n log n), or O(n) when the input is already sorted.
//! - **Searches**: O(log n) comparisons; `Equal` runs two passes, the second over
//!   the suffix found by the first.
//! - **Memory**: one boxed slice; searches never allocate.
//!
//! Lists are never mutated after construction, so any number of threads may
//! search them concurrently.

pub mod algo;
pub mod core;
pub mod error;
pub mod list;
pub mod range;

pub use crate::algo::Direction;
pub use crate::core::{
    DerivedKey, Key, KeyDescriptor, KeyPrefix, KeySet, derived_key, derived_key_by, key, key_by,
    key_desc,
};
pub use crate::error::{KeyspanError, Result};
pub use crate::list::SortedList;
pub use crate::range::SortedRange;

pub mod prelude {
    pub use crate::algo::Direction;
    pub use crate::core::{
        KeyDescriptor, KeyPrefix, KeySet, derived_key, derived_key_by, key, key_by, key_desc,
    };
    pub use crate::error::KeyspanError;
    pub use crate::list::SortedList;
    pub use crate::range::SortedRange;
}
