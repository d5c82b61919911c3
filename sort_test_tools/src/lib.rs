use std::cmp::Ordering;

/// A stable sort whose comparison callback is allowed to fail.
///
/// Implementations map the callback's failure to `Err` unchanged, any other kind of failure is
/// expected to panic.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;

    fn try_sort_by<T, E, F>(arr: &mut [T], compare: F) -> Result<(), E>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Result<Ordering, E>;
}

pub mod patterns;
pub mod values;
