use crate::ordering::ComparisonOutcome;

/// Merges the sorted runs `src[begin..mid]` and `src[mid..limit]` into `dst[begin..limit]`.
///
/// The callback is only consulted while both runs still have elements left. The left element is
/// taken whenever the outcome [precedes](ComparisonOutcome::precedes), which keeps equal elements
/// in their original order. `src` is never modified.
///
/// If the callback fails the merge stops right away and returns its error. Output positions
/// before the failing one are written, the rest of `dst[begin..limit]` is left untouched.
///
/// # Panics
///
/// Panics if `begin <= mid <= limit <= src.len()` does not hold, or if `dst` is shorter than
/// `limit`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn merge_runs<T, O, E, F>(
    src: &[T],
    dst: &mut [T],
    begin: usize,
    mid: usize,
    limit: usize,
    compare: &mut F,
) -> Result<(), E>
where
    T: Clone,
    O: ComparisonOutcome,
    F: FnMut(&T, &T) -> Result<O, E>,
{
    assert!(begin <= mid && mid <= limit && limit <= src.len());
    assert!(limit <= dst.len());

    let mut left = begin;
    let mut right = mid;

    for out in &mut dst[begin..limit] {
        let take_left = if left == mid {
            false
        } else if right == limit {
            true
        } else {
            compare(&src[left], &src[right])?.precedes()
        };

        let next = if take_left {
            left += 1;
            &src[left - 1]
        } else {
            right += 1;
            &src[right - 1]
        };

        out.clone_from(next);
    }

    debug_assert!(left == mid && right == limit);

    Ok(())
}
