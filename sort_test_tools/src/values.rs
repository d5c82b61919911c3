use std::rc::Rc;

/// A reference counted value with a stable identity.
///
/// Cloning bumps the reference count, the way a script engine handles its values. A test can
/// therefore check that a sort neither leaked nor released values by comparing counts before and
/// after.
#[derive(Clone, Debug)]
pub struct Tracked {
    inner: Rc<TrackedInner>,
}

#[derive(Debug)]
struct TrackedInner {
    key: i32,
    id: usize,
}

impl Tracked {
    pub fn key(&self) -> i32 {
        self.inner.key
    }

    /// Position of the value in the input it was created for.
    pub fn id(&self) -> usize {
        self.inner.id
    }

    pub fn is_same(&self, other: &Tracked) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Owns one reference to each value of a test input.
pub struct TrackedSet {
    originals: Vec<Tracked>,
}

impl TrackedSet {
    pub fn new(keys: &[i32]) -> Self {
        let originals = keys
            .iter()
            .enumerate()
            .map(|(id, &key)| Tracked {
                inner: Rc::new(TrackedInner { key, id }),
            })
            .collect();

        Self { originals }
    }

    /// Fresh references to every value, in input order.
    pub fn values(&self) -> Vec<Tracked> {
        self.originals.clone()
    }

    /// Number of references held outside of this set.
    pub fn outstanding(&self) -> usize {
        self.originals
            .iter()
            .map(|val| Rc::strong_count(&val.inner) - 1)
            .sum()
    }

    pub fn contains(&self, val: &Tracked) -> bool {
        self.originals
            .get(val.id())
            .map_or(false, |orig| orig.is_same(val))
    }
}
