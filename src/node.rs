use std::cmp;

/// One node of a leftist heap.
///
/// A node owns its payload and both subtrees and never mutates after
/// construction; merging consumes nodes along the rightmost spine and
/// rebuilds them, moving unchanged subtrees into the new nodes.
#[derive(Debug, Clone)]
pub struct LeftistTree<T> {
    payload: T,
    left: Option<Box<LeftistTree<T>>>,
    right: Option<Box<LeftistTree<T>>>,
    null_path_length: usize,
}

impl<T> LeftistTree<T> {
    /// Builds a node over the given children, deriving its null-path
    /// length. Child ordering and root selection are the caller's job;
    /// construction enforces neither the leftist nor the heap-order
    /// property.
    pub fn new(
        payload: T,
        left: Option<Box<LeftistTree<T>>>,
        right: Option<Box<LeftistTree<T>>>,
    ) -> Self {
        let null_path_length = 1 + cmp::min(
            Self::null_path_length_of(left.as_deref()),
            Self::null_path_length_of(right.as_deref()),
        );
        Self {
            payload,
            left,
            right,
            null_path_length,
        }
    }

    /// A single-node heap, both children absent.
    pub fn singleton(payload: T) -> Box<Self> {
        Box::new(Self::new(payload, None, None))
    }

    /// The null-path length of a possibly-absent tree; 0 for an absent one.
    pub fn null_path_length_of(tree: Option<&LeftistTree<T>>) -> usize {
        tree.map_or(0, |t| t.null_path_length)
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn left_child(&self) -> Option<&LeftistTree<T>> {
        self.left.as_deref()
    }

    pub fn right_child(&self) -> Option<&LeftistTree<T>> {
        self.right.as_deref()
    }

    pub fn null_path_length(&self) -> usize {
        self.null_path_length
    }

    /// Destructures the node into its payload and children.
    pub fn into_parts(
        self,
    ) -> (
        T,
        Option<Box<LeftistTree<T>>>,
        Option<Box<LeftistTree<T>>>,
    ) {
        (self.payload, self.left, self.right)
    }

    pub fn check_invariants(&self) -> usize
    where
        T: Ord + std::fmt::Debug,
    {
        let left_npl = Self::null_path_length_of(self.left.as_deref());
        let right_npl = Self::null_path_length_of(self.right.as_deref());

        assert!(
            left_npl >= right_npl,
            "leftist property violated: left npl {} < right npl {} at {:?}",
            left_npl,
            right_npl,
            self.payload
        );
        assert_eq!(
            self.null_path_length,
            1 + cmp::min(left_npl, right_npl),
            "stale null-path length at {:?}",
            self.payload
        );

        let mut size = 1;
        for child in [self.left.as_deref(), self.right.as_deref()].iter().flatten() {
            assert!(
                self.payload <= child.payload,
                "heap order violated: {:?} above {:?}",
                self.payload,
                child.payload
            );
            size += child.check_invariants();
        }
        size
    }
}
