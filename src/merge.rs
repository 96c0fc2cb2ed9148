use crate::node::LeftistTree;

/// Merges two leftist heaps into one, preserving heap order and the
/// leftist property. Runs in time proportional to the two rightmost-path
/// lengths, not the tree sizes.
///
/// The root with the smaller payload becomes the new root; when the
/// payloads compare equal, `h2`'s root wins. The loser is merged into the
/// winner's right subtree, and the rebuilt node puts whichever child has
/// the larger null-path length on the left.
pub fn merge<T: Ord>(
    h1: Option<Box<LeftistTree<T>>>,
    h2: Option<Box<LeftistTree<T>>>,
) -> Option<Box<LeftistTree<T>>> {
    let (h1, h2) = match (h1, h2) {
        (None, h2) => return h2,
        (h1, None) => return h1,
        (Some(h1), Some(h2)) => (h1, h2),
    };

    let (winner, loser) = if h1.payload() < h2.payload() {
        (h1, h2)
    } else {
        (h2, h1)
    };

    let (payload, left, right) = winner.into_parts();
    let merged = merge(Some(loser), right);

    // The merged subtree may have outgrown the winner's left child, so
    // re-order the children before rebuilding.
    let node = if LeftistTree::null_path_length_of(left.as_deref())
        >= LeftistTree::null_path_length_of(merged.as_deref())
    {
        LeftistTree::new(payload, left, merged)
    } else {
        LeftistTree::new(payload, merged, left)
    };
    Some(Box::new(node))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_with_absent_is_identity() {
        assert!(merge::<i32>(None, None).is_none());

        let h = merge(Some(LeftistTree::singleton(2)), None).unwrap();
        assert_eq!(*h.payload(), 2);

        let h = merge(None, Some(h)).unwrap();
        assert_eq!(*h.payload(), 2);
        assert!(h.left_child().is_none());
        assert!(h.right_child().is_none());
    }

    #[test]
    fn equal_roots_favor_second_heap() {
        use crate::entry::Entry;

        let h1 = LeftistTree::singleton(Entry::new(1, "first"));
        let h2 = LeftistTree::singleton(Entry::new(1, "second"));

        let merged = merge(Some(h1), Some(h2)).unwrap();
        assert_eq!(merged.payload().value, "second");
    }

    #[test]
    fn merge_repairs_the_leftist_property() {
        let mut h = None;
        for k in [4, 2, 6, 1, 3, 5, 7].iter() {
            h = merge(h, Some(LeftistTree::singleton(*k)));
        }
        let root = h.unwrap();
        assert_eq!(*root.payload(), 1);
        assert_eq!(root.check_invariants(), 7);
    }
}
