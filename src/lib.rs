//! A generic minimum-priority queue backed by a leftist heap.
//!
//! Insert and extract-minimum are both implemented in terms of heap merge,
//! which runs along the rightmost spines only; the leftist property keeps
//! those spines at most `log2(n + 1)` long.

pub mod entry;
pub mod merge;
pub mod node;
pub mod queue;

pub use entry::Entry;
pub use node::LeftistTree;
pub use queue::{EmptyQueueError, MinPriorityQueue};
