//! N-ary to binary conversion.
//!
//! The canonical first-child/next-sibling transform: the binary left child
//! of a node is its first n-ary child, and each converted child's binary
//! right child is its next n-ary sibling. Parent/child topology and sibling
//! order are both preserved exactly.

use crate::arena::NodeId;
use crate::tree::binary::BinaryTree;
use crate::tree::nary::NaryTree;

impl NaryTree {
    /// Converts this tree to a binary tree via first-child/next-sibling.
    ///
    /// The result is a plain binary structure, not a search tree: traversal
    /// and metric queries apply, the ordering-based mutations do not.
    #[must_use]
    pub fn to_binary(&self) -> BinaryTree {
        let mut binary = BinaryTree::new();
        let root = self.root_id().map(|id| self.convert(id, &mut binary));
        binary.set_root(root);
        binary
    }

    fn convert(&self, id: NodeId, binary: &mut BinaryTree) -> NodeId {
        let node = self.node(id);
        let converted = binary.alloc(node.value);
        if let Some((&first, rest)) = node.children.split_first() {
            let left = self.convert(first, binary);
            binary.set_left(converted, Some(left));
            let mut sibling = left;
            for &child in rest {
                let next = self.convert(child, binary);
                binary.set_right(sibling, Some(next));
                sibling = next;
            }
        }
        converted
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::binary::TraversalOrder;
    use crate::tree::nary::{NaryTraversal, NaryTree};

    #[test]
    fn test_root_with_three_children() {
        // R with children [A, B, C]: A becomes R.left, B becomes A.right,
        // C becomes B.right.
        let mut nary = NaryTree::new();
        nary.insert(1, 0); // R
        nary.insert(2, 1); // A
        nary.insert(3, 1); // B
        nary.insert(4, 1); // C

        let binary = nary.to_binary();
        assert_eq!(binary.len(), 4);
        // Pre-order of the converted shape: R, A (left), then the sibling
        // chain hanging off A's right spine.
        assert_eq!(
            binary.traverse(TraversalOrder::PreOrder),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            binary.traverse(TraversalOrder::InOrder),
            vec![2, 3, 4, 1]
        );
        // The sibling chain makes a deep right spine under the left child.
        assert_eq!(binary.height(), 4);
    }

    #[test]
    fn test_empty_tree() {
        let binary = NaryTree::new().to_binary();
        assert!(binary.is_empty());
        assert_eq!(binary.height(), 0);
    }

    #[test]
    fn test_single_node() {
        let mut nary = NaryTree::new();
        nary.insert(7, 0);
        let binary = nary.to_binary();
        assert_eq!(binary.traverse(TraversalOrder::PreOrder), vec![7]);
        assert_eq!(binary.height(), 1);
    }

    #[test]
    fn test_nested_tree() {
        //   1
        //  / \
        // 2   3
        // |
        // 4
        let mut nary = NaryTree::new();
        nary.insert(1, 0);
        nary.insert(2, 1);
        nary.insert(3, 1);
        nary.insert(4, 2);
        assert_eq!(nary.traverse(NaryTraversal::PreOrder), vec![1, 2, 4, 3]);

        let binary = nary.to_binary();
        // left(1) = 2, left(2) = 4, right(2) = 3.
        assert_eq!(
            binary.traverse(TraversalOrder::PreOrder),
            vec![1, 2, 4, 3]
        );
        assert_eq!(binary.len(), nary.len());
    }

    #[test]
    fn test_conversion_preserves_node_count() {
        let mut nary = NaryTree::new();
        nary.insert(10, 0);
        for v in 11..20 {
            nary.insert(v, 10);
        }
        nary.insert(30, 15);
        let binary = nary.to_binary();
        assert_eq!(binary.len(), nary.len());
    }
}
