use thiserror::Error;

/// Reasons a sort can stop before producing a fully ordered slice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError<E> {
    /// The comparison callback reported a failure instead of an ordering.
    #[error("comparison callback failed")]
    Comparator(#[source] E),

    /// The scratch buffer could not be reserved. The callback was never invoked.
    #[error("failed to allocate a scratch buffer of {len} elements")]
    Allocation { len: usize },
}

impl<E> SortError<E> {
    /// True when the scratch buffer could not be allocated.
    pub fn is_allocation(&self) -> bool {
        matches!(self, SortError::Allocation { .. })
    }

    /// Borrows the callback's own error, if that is what stopped the sort.
    pub fn comparator_error(&self) -> Option<&E> {
        match self {
            SortError::Comparator(err) => Some(err),
            SortError::Allocation { .. } => None,
        }
    }

    /// Returns the callback's own error, dropping allocation failures.
    pub fn into_comparator_error(self) -> Option<E> {
        match self {
            SortError::Comparator(err) => Some(err),
            SortError::Allocation { .. } => None,
        }
    }
}
