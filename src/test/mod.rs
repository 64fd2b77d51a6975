
use crate::tree::Tree;

/// Walks every node reachable from the root and checks the links and ordering around it,
/// then checks that the length matches and that in-order iteration never goes backwards.
pub(crate) fn assert_invariants<T>(tree: &Tree<T>)
where
    T: Ord + std::fmt::Debug,
{
    if let Some(root) = tree.root {
        assert_eq!(tree.nodes[root].parent, None, "root has a parent");
    }

    let mut reachable = 0;
    let mut pending: Vec<_> = tree.root.into_iter().collect();
    while let Some(idx) = pending.pop() {
        reachable += 1;
        let node = &tree.nodes[idx];
        if let Some(left) = node.left {
            let child = &tree.nodes[left];
            assert_eq!(child.parent, Some(idx), "left child of {:?}", node.value);
            assert!(child.value < node.value);
            pending.push(left);
        }
        if let Some(right) = node.right {
            let child = &tree.nodes[right];
            assert_eq!(child.parent, Some(idx), "right child of {:?}", node.value);
            assert!(child.value >= node.value);
            pending.push(right);
        }
    }
    assert_eq!(reachable, tree.len());
    assert_eq!(tree.is_empty(), tree.len() == 0);

    let values: Vec<_> = tree.iter().collect();
    assert_eq!(values.len(), tree.len());
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]), "{values:?}");
}
