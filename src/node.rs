//! Nodes of a [`Tree`][crate::tree::Tree] and the link surgery performed on them.
//!
//! Nodes live in a generational arena instead of behind raw pointers. A node's `left` and
//! `right` indices own their subtrees while `parent` is only a back-reference, so releasing a
//! subtree never follows `parent`. Every function here that rewires a child slot also
//! rewires the child's `parent` to match.

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::trace;

/// The storage every node of one tree is allocated in.
pub(crate) type Nodes<T> = Arena<Node<T>>;

/// One of the two child slots of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
    pub(crate) parent: Option<Index>,
    /// Colour bit for red-black balancing. Nothing rebalances yet so it stays black.
    red: bool,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("red", &self.red)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("parent", &self.parent)
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent: None,
            red: false,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Points the `side` slot of `parent` at `child` and points `child` back at `parent`.
///
/// Whatever used to hang in that slot is not released. The caller either re-homes it or has
/// already moved it elsewhere.
pub(crate) fn attach<T>(nodes: &mut Nodes<T>, parent: Index, side: Side, child: Option<Index>) {
    *nodes[parent].child_mut(side) = child;
    if let Some(child) = child {
        nodes[child].parent = Some(parent);
    }
}

/// Allocates a node holding `value` in the empty `side` slot of `parent`.
pub(crate) fn attach_value<T>(nodes: &mut Nodes<T>, parent: Index, side: Side, value: T) -> Index {
    debug_assert!(
        nodes[parent].child(side).is_none(),
        "attaching a value over an occupied slot would leak its subtree"
    );
    let mut node = Node::new(value);
    node.parent = Some(parent);
    let child = nodes.insert(node);
    *nodes[parent].child_mut(side) = Some(child);
    child
}

/// Releases every node in the subtree hanging from `link` and empties `link`. If the subtree
/// root still sits in a parent's child slot, that slot is emptied too.
///
/// Returns how many nodes were released. Releasing an absent link does nothing.
pub(crate) fn release_subtree<T>(nodes: &mut Nodes<T>, link: &mut Option<Index>) -> usize {
    let Some(top) = link.take() else {
        return 0;
    };

    if let Some(parent) = nodes.get(top).and_then(|node| node.parent) {
        if let Some(parent) = nodes.get_mut(parent) {
            if parent.left == Some(top) {
                parent.left = None;
            } else if parent.right == Some(top) {
                parent.right = None;
            }
        }
    }

    let mut released = 0;
    let mut pending = vec![top];
    while let Some(idx) = pending.pop() {
        if let Some(node) = nodes.remove(idx) {
            // Right is pushed first so the left subtree goes before it.
            pending.extend(node.right);
            pending.extend(node.left);
            released += 1;
        }
    }

    trace!(released, "released subtree");
    released
}

/// Makes the subtree at `dest_link` (inside `dest`) a deep copy of the subtree at `src`
/// (inside `source`).
///
/// Destination nodes already present where the source has a node are reused and get their
/// value assigned in place. Missing ones are allocated, surplus ones are released. Each
/// child's `parent` is pointed at its new or reused parent in the destination.
pub(crate) fn copy_subtree<T>(
    dest: &mut Nodes<T>,
    dest_link: &mut Option<Index>,
    source: &Nodes<T>,
    src: Option<Index>,
) where
    T: Clone,
{
    // Each entry is a source subtree, the destination subtree currently in the matching slot
    // and the slot itself (`None` is `dest_link`).
    let mut pending = vec![(src, *dest_link, None)];

    while let Some((from, to, slot)) = pending.pop() {
        let Some(from) = from else {
            let mut surplus = to;
            release_subtree(dest, &mut surplus);
            if slot.is_none() {
                *dest_link = None;
            }
            continue;
        };

        let from = &source[from];
        let to = match to.filter(|&idx| dest.contains(idx)) {
            Some(idx) => {
                dest[idx].value.clone_from(&from.value);
                idx
            }
            None => dest.insert(Node::new(from.value.clone())),
        };

        match slot {
            Some((parent, side)) => attach(dest, parent, side, Some(to)),
            None => {
                dest[to].parent = None;
                *dest_link = Some(to);
            }
        }

        let copied = &dest[to];
        pending.push((from.right, copied.right, Some((to, Side::Right))));
        pending.push((from.left, copied.left, Some((to, Side::Left))));
    }
}

/// Follows `side` children from `idx` as far as they go. `Side::Left` gives the minimum of the
/// subtree, `Side::Right` the maximum.
pub(crate) fn extreme<T>(nodes: &Nodes<T>, mut idx: Index, side: Side) -> Index {
    while let Some(next) = nodes[idx].child(side) {
        idx = next;
    }
    idx
}

/// The in-order neighbour of `idx` in direction `side`: `Side::Right` is the successor and
/// `Side::Left` the predecessor. `None` once we walk off the end of the tree.
pub(crate) fn step<T>(nodes: &Nodes<T>, idx: Index, side: Side) -> Option<Index> {
    if let Some(child) = nodes[idx].child(side) {
        return Some(extreme(nodes, child, side.opposite()));
    }

    // Climb while we are the `side` child. The first ancestor we reach from the other side is
    // the neighbour.
    let mut current = idx;
    loop {
        let parent = nodes[current].parent?;
        if nodes[parent].child(side) != Some(current) {
            return Some(parent);
        }
        current = parent;
    }
}
