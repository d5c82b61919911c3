use std::collections::TryReserveError;

/// Identifies one of the two equally sized buffers a sort alternates between.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Buffer {
    /// The slice handed in by the caller.
    Working,
    /// The temporary copy owned by the sort.
    Scratch,
}

impl Buffer {
    #[inline]
    fn other(self) -> Self {
        match self {
            Buffer::Working => Buffer::Scratch,
            Buffer::Scratch => Buffer::Working,
        }
    }
}

/// Owns the scratch buffer for the duration of a sort and tracks which buffer each pass reads
/// from.
///
/// Dropping the value releases the scratch buffer and every value it still holds, no matter how
/// the sort ended.
pub(crate) struct PingPong<'a, T> {
    working: &'a mut [T],
    scratch: Vec<T>,
    src: Buffer,
}

impl<'a, T: Clone> PingPong<'a, T> {
    /// Reserves the scratch buffer and fills it with a copy of `working`.
    pub(crate) fn new(working: &'a mut [T]) -> Result<Self, TryReserveError> {
        let mut scratch = Vec::new();
        scratch.try_reserve_exact(working.len())?;
        scratch.extend_from_slice(working);

        Ok(Self {
            working,
            scratch,
            src: Buffer::Working,
        })
    }
}

impl<'a, T> PingPong<'a, T> {
    /// Returns `(source, destination)` for the current pass.
    #[inline]
    pub(crate) fn split(&mut self) -> (&[T], &mut [T]) {
        match self.src {
            Buffer::Working => (&*self.working, self.scratch.as_mut_slice()),
            Buffer::Scratch => (self.scratch.as_slice(), &mut *self.working),
        }
    }

    #[inline]
    pub(crate) fn swap_roles(&mut self) {
        self.src = self.src.other();
    }

    /// The buffer written by the most recent pass.
    ///
    /// Roles are swapped after every pass, so this is whatever currently plays the source role.
    #[inline]
    pub(crate) fn current(&self) -> Buffer {
        self.src
    }

    /// Makes the result of the last pass visible in the caller's slice and releases the scratch
    /// buffer.
    pub(crate) fn finish(self) {
        let current = self.current();
        let PingPong {
            working,
            mut scratch,
            ..
        } = self;

        if current == Buffer::Scratch {
            // Element-wise ownership transfer, the stale values end up in `scratch` and are
            // dropped with it.
            working.swap_with_slice(&mut scratch);
        }
    }
}
