//! Error types for sorted list and range operations.
//!
//! A search that matches nothing is not an error: it yields an empty range.
//! Errors only arise from explicit positions supplied by the caller and from
//! construction running out of capacity.

use std::ops::{Bound, Range, RangeBounds};
use thiserror::Error;

/// Errors returned by `keyspan` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyspanError {
    /// Element access outside `[0, len)`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the list or range that was accessed.
        len: usize,
    },

    /// An explicit range is inverted or extends past the end.
    #[error("range {start}..{end} is out of bounds for length {len}")]
    RangeOutOfBounds {
        /// Requested start (inclusive).
        start: usize,
        /// Requested end (exclusive).
        end: usize,
        /// Length of the list or range the bounds apply to.
        len: usize,
    },

    /// The construction buffer could not grow any further.
    #[error("capacity overflow while collecting items")]
    CapacityOverflow,
}

/// Result type for `keyspan` operations.
pub type Result<T> = std::result::Result<T, KeyspanError>;

/// Converts arbitrary range bounds into a checked `start..end` within `len`.
pub(crate) fn resolve_bounds<R>(bounds: R, len: usize) -> Result<Range<usize>>
where
    R: RangeBounds<usize>,
{
    let invalid = |start, end| KeyspanError::RangeOutOfBounds { start, end, len };
    let start = match bounds.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or_else(|| invalid(start, len))?,
        Bound::Unbounded => 0,
    };
    let end = match bounds.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or_else(|| invalid(start, end))?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    check_range(start..end, len)
}

/// Fails unless `start <= end <= len`.
pub(crate) fn check_range(range: Range<usize>, len: usize) -> Result<Range<usize>> {
    if range.start > range.end || range.end > len {
        return Err(KeyspanError::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(range)
}

/// Fails unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize> {
    if index >= len {
        return Err(KeyspanError::IndexOutOfRange { index, len });
    }
    Ok(index)
}
