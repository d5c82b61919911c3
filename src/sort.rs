use std::cmp::{self, Ordering};
use std::convert::Infallible;

use tracing::{debug, trace};

use crate::buffer::PingPong;
use crate::error::SortError;
use crate::merge::merge_runs;
use crate::ordering::ComparisonOutcome;

/// Sorts `v` with a comparison callback that may fail.
///
/// The sort is stable. Slices shorter than two elements are returned as is, without allocating
/// and without calling `compare`.
///
/// If `compare` fails, the remaining merges are abandoned and the error is returned as
/// [`SortError::Comparator`]. `v` then holds an unspecified arrangement of values taken from the
/// original input. The scratch buffer is released in all cases.
pub fn sort_by<T, O, E, F>(v: &mut [T], mut compare: F) -> Result<(), SortError<E>>
where
    T: Clone,
    O: ComparisonOutcome,
    F: FnMut(&T, &T) -> Result<O, E>,
{
    let len = v.len();
    if len < 2 {
        // These inputs are always sorted.
        return Ok(());
    }

    let mut buffers = PingPong::new(v).map_err(|_| {
        debug!(len, "scratch buffer allocation failed");
        SortError::Allocation { len }
    })?;

    let mut failure = None;
    let mut width = 1;

    while width < len {
        trace!(width, len, "merge pass");

        let (src, dst) = buffers.split();
        let mut start = 0;
        while start < len {
            let mid = cmp::min(start.saturating_add(width), len);
            let limit = cmp::min(mid.saturating_add(width), len);

            if let Err(err) = merge_runs(src, dst, start, mid, limit, &mut compare) {
                debug!(width, start, "comparison callback failed, abandoning sort");
                failure = Some(err);
                break;
            }

            start = limit;
        }

        // The aborted pass swaps too, the partially written buffer counts as the current one.
        buffers.swap_roles();

        if failure.is_some() {
            break;
        }

        width = width.saturating_mul(2);
    }

    buffers.finish();

    match failure {
        Some(err) => Err(SortError::Comparator(err)),
        None => Ok(()),
    }
}

/// Like [`sort_by`], for callbacks that receive the user's compare function as a separate
/// argument.
pub fn sort_with<T, C, O, E, F>(v: &mut [T], ctx: &C, mut callback: F) -> Result<(), SortError<E>>
where
    T: Clone,
    C: ?Sized,
    O: ComparisonOutcome,
    F: FnMut(&T, &T, &C) -> Result<O, E>,
{
    sort_by(v, |a, b| callback(a, b, ctx))
}

/// Sorts `v` by [`Ord`]. Panics if the scratch buffer can not be allocated.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Clone + Ord,
{
    sort_by_ordering(v, |a, b| a.cmp(b));
}

/// Sorts `v` with a comparison that can not fail.
///
/// # Panics
///
/// Panics if the scratch buffer can not be allocated.
#[inline]
pub fn sort_by_ordering<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    match sort_by(v, |a, b| Ok::<_, Infallible>(compare(a, b))) {
        Ok(()) => {}
        Err(SortError::Comparator(never)) => match never {},
        Err(SortError::Allocation { len }) => {
            panic!("failed to allocate a scratch buffer of {len} elements")
        }
    }
}
