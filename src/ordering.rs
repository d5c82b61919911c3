use std::cmp::Ordering;

/// The ordering signal produced by a successful call of the comparison callback.
///
/// Follows the numeric convention of script-level comparators: `a` is placed before `b` iff the
/// signal is less than or equal to zero. A signal that does not compare to zero at all, such as
/// `NaN`, places `b` first.
pub trait ComparisonOutcome {
    fn precedes(&self) -> bool;
}

impl ComparisonOutcome for Ordering {
    #[inline]
    fn precedes(&self) -> bool {
        *self != Ordering::Greater
    }
}

macro_rules! numeric_outcome_impl {
    ($($t:ty),*) => {
        $(
            impl ComparisonOutcome for $t {
                #[inline]
                fn precedes(&self) -> bool {
                    *self <= (0 as $t)
                }
            }
        )*
    };
}

numeric_outcome_impl!(i8, i16, i32, i64, i128, isize, f32, f64);
