use std::cmp::Ordering;

/// A priority/value pair stored in the heap.
///
/// The ordering of an `Entry` is the ordering of its priority alone; the
/// value never participates in comparisons, so it carries no trait bounds.
#[derive(Debug, Clone)]
pub struct Entry<P, V> {
    pub priority: P,
    pub value: V,
}

impl<P, V> Entry<P, V> {
    pub fn new(priority: P, value: V) -> Self {
        Self { priority, value }
    }
}

impl<P: PartialEq, V> PartialEq for Entry<P, V> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority)
    }
}

impl<P: Eq, V> Eq for Entry<P, V> {}

impl<P: Ord, V> PartialOrd for Entry<P, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, V> Ord for Entry<P, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}
