use std::iter::FromIterator;

use smallvec::SmallVec;
use thiserror::Error;

use crate::entry::Entry;
use crate::merge::merge;
use crate::node::LeftistTree;

/// The error returned when a query operation is called on an empty queue.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("empty priority queue")]
pub struct EmptyQueueError;

/// A minimum-priority queue backed by a leftist heap.
///
/// Every mutation is a merge: `add` melds a singleton into the root and
/// `remove_minimum_priority` melds the root's two children, so both run in
/// O(log n) via the short-rightmost-spine guarantee.
///
/// It is a logic error for `P`'s ordering to change while an element is in
/// the queue, or for `Ord` not to be a total order; the queue may then
/// return elements in an unspecified order, but stays memory-safe.
/// Elements with equal priorities come back in an unspecified relative
/// order, not insertion order.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<P, V> {
    root: Option<Box<LeftistTree<Entry<P, V>>>>,
    count: usize,
}

impl<P, V> MinPriorityQueue<P, V> {
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// The number of elements in the queue.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Visits the stored `(priority, value)` pairs in an unspecified
    /// order.
    pub fn iter(&self) -> Iter<'_, P, V> {
        let mut stack = SmallVec::new();
        if let Some(root) = &self.root {
            stack.push(&**root);
        }
        Iter { stack }
    }
}

impl<P: Ord, V> MinPriorityQueue<P, V> {
    /// Adds `value` with the given priority.
    pub fn add(&mut self, priority: P, value: V) {
        let node = LeftistTree::singleton(Entry::new(priority, value));
        self.root = merge(self.root.take(), Some(node));
        self.count += 1;
    }

    /// The smallest priority in the queue.
    pub fn minimum_priority(&self) -> Result<&P, EmptyQueueError> {
        match &self.root {
            Some(root) => Ok(&root.payload().priority),
            None => Err(EmptyQueueError),
        }
    }

    /// Removes the element with the smallest priority and returns its
    /// value; the priority is discarded.
    pub fn remove_minimum_priority(&mut self) -> Result<V, EmptyQueueError> {
        let root = self.root.take().ok_or(EmptyQueueError)?;
        let (payload, left, right) = root.into_parts();
        self.root = merge(left, right);
        self.count -= 1;
        Ok(payload.value)
    }

    /// Melds two queues into one in O(log n).
    pub fn merge(self, other: Self) -> Self {
        Self {
            root: merge(self.root, other.root),
            count: self.count + other.count,
        }
    }

    pub fn check_invariants(&self)
    where
        P: std::fmt::Debug,
        V: std::fmt::Debug,
    {
        match &self.root {
            Some(root) => {
                assert_eq!(
                    self.count,
                    root.check_invariants(),
                    "count out of sync with reachable nodes"
                );
            }
            None => assert_eq!(self.count, 0, "empty root but count={}", self.count),
        }
    }
}

impl<P, V> Default for MinPriorityQueue<P, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, V> Extend<(P, V)> for MinPriorityQueue<P, V> {
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (priority, value) in iter {
            self.add(priority, value);
        }
    }
}

impl<P: Ord, V> FromIterator<(P, V)> for MinPriorityQueue<P, V> {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Borrowing iterator over a queue's elements in traversal order.
pub struct Iter<'a, P, V> {
    stack: SmallVec<[&'a LeftistTree<Entry<P, V>>; 16]>,
}

impl<'a, P, V> Iterator for Iter<'a, P, V> {
    type Item = (&'a P, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(left) = node.left_child() {
            self.stack.push(left);
        }
        if let Some(right) = node.right_child() {
            self.stack.push(right);
        }
        let entry = node.payload();
        Some((&entry.priority, &entry.value))
    }
}

impl<'a, P, V> IntoIterator for &'a MinPriorityQueue<P, V> {
    type Item = (&'a P, &'a V);
    type IntoIter = Iter<'a, P, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
