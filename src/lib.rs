//! Stable bottom-up merge sort driven by a fallible comparison callback.
//!
//! The callback may fail instead of producing an ordering, and it may not describe a consistent
//! total order. Either way the slice keeps holding values from the original input and the scratch
//! buffer is released before the call returns.

mod buffer;

pub mod error;
pub mod merge;
pub mod ordering;
pub mod sort;

pub use error::SortError;
pub use ordering::ComparisonOutcome;
pub use sort::{sort, sort_by, sort_by_ordering, sort_with};
