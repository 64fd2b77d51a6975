//! A plain (unbalanced) BST that stores its nodes in an arena and keeps parent links so it can
//! be walked in both directions. It is meant as the storage underneath ordered set and map
//! types: duplicates are allowed or rejected per insert, and [`Cursor`]s give stable handles
//! to individual elements.
//!
//! # Examples
//!
//! ```
//! use arena_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! let (_, inserted) = tree.insert(1, true);
//! assert!(inserted);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // A unique insert of an equal value is refused.
//! let (_, inserted) = tree.insert(1, true);
//! assert!(!inserted);
//! assert_eq!(tree.len(), 1);
//!
//! // Without uniqueness it's kept next to the first one.
//! tree.insert(1, false);
//! assert_eq!(tree.len(), 2);
//!
//! // Erasing removes one of them at a time.
//! assert!(tree.erase(&1));
//! assert!(tree.erase(&1));
//! assert!(!tree.erase(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use generational_arena::Index;
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::node::{self, Node, Nodes, Side};

/// An unbalanced Binary Search Tree of `T`s. This can be used for inserting, finding and
/// erasing values and for walking them in sorted order.
///
/// Values that compare equal are ordered by insertion: a later one always lands in the right
/// subtree of the earlier ones.
pub struct Tree<T> {
    // Only nodes reachable from `root` are ever in here, so its length is the tree's length.
    pub(crate) nodes: Nodes<T>,
    pub(crate) root: Option<Index>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut tree = Self::new();
        tree.clone_from(self);
        tree
    }

    /// Turns `self` into a deep copy of `source`, reusing `self`'s nodes where both trees have
    /// a node in the same position.
    fn clone_from(&mut self, source: &Self) {
        node::copy_subtree(&mut self.nodes, &mut self.root, &source.nodes, source.root);
        trace!(len = self.len(), "copied tree");
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    /// Trees are equal when they hold equal values in the same order, whatever their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts the values in order, keeping duplicates.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter, false)
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts the values in order, keeping duplicates.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value, false);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Tree<T>
where
    T: Ord,
{
    fn from(values: [T; N]) -> Self {
        Self::from_values(values, false)
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Nodes::new(),
            root: None,
        }
    }

    /// Builds a tree by inserting `values` in order. With `unique`, values equal to one already
    /// inserted are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let unique = Tree::from_values([2, 1, 2], true);
    /// assert_eq!(unique.len(), 2);
    ///
    /// let all = Tree::from_values([2, 1, 2], false);
    /// assert_eq!(all.len(), 3);
    /// ```
    pub fn from_values<I>(values: I, unique: bool) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        tree.assign_values(values, unique);
        tree
    }

    /// Replaces the contents of the tree with `values`, inserted in order.
    pub fn assign_values<I>(&mut self, values: I, unique: bool)
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        self.clear();
        for value in values {
            self.insert(value, unique);
        }
    }

    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        trace!(released = self.len(), "clearing tree");
        self.nodes.clear();
        self.root = None;
    }

    /// Exchanges the contents of two trees without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Moves the contents out into a new tree, leaving `self` empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree = Tree::from([1, 2, 3]);
    /// let moved = tree.take();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(moved.len(), 3);
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Releases `self`'s elements and moves `other`'s into it, leaving `other` empty.
    pub fn assign(&mut self, other: &mut Self) {
        self.clear();
        self.swap(other);
    }

    /// Inserts `value`, returning a cursor to it and `true`.
    ///
    /// If `unique` is set and an equal value is already present, nothing changes and the
    /// cursor points at the existing value with `false`. Otherwise equal values are kept and
    /// the new one goes after them in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let (first, inserted) = tree.insert(7, true);
    /// assert!(inserted);
    ///
    /// let (again, inserted) = tree.insert(7, true);
    /// assert!(!inserted);
    /// assert_eq!(first, again);
    /// assert_eq!(tree.get(again), Some(&7));
    /// ```
    pub fn insert(&mut self, value: T, unique: bool) -> (Cursor, bool)
    where
        T: Ord,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            side = match value.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Equal if unique => return (Cursor::at(idx), false),
                Ordering::Equal | Ordering::Greater => Side::Right,
            };
            parent = Some(idx);
            current = node.child(side);
        }

        let inserted = match parent {
            Some(parent) => node::attach_value(&mut self.nodes, parent, side, value),
            None => {
                let root = self.nodes.insert(Node::new(value));
                self.root = Some(root);
                root
            }
        };

        if cfg!(debug_assertions) {
            if let Some(parent) = parent {
                let parent = &self.nodes[parent].value;
                let inserted = &self.nodes[inserted].value;
                match side {
                    Side::Left => assert!(inserted < parent),
                    Side::Right => assert!(inserted >= parent),
                }
            }
        }

        trace!(len = self.len(), "inserted value");
        (Cursor::at(inserted), true)
    }

    /// Potentially finds a value equal to `value` in this tree. If no element compares equal,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree = Tree::from([1]);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.locate(value).map(|idx| &self.nodes[idx].value)
    }

    /// Like [`Tree::find`] but the value may be changed in place.
    ///
    /// The change must not alter how the value compares to the others. Map types use this to
    /// update the payload stored next to a key.
    pub fn find_mut(&mut self, value: &T) -> Option<&mut T>
    where
        T: Ord,
    {
        let idx = self.locate(value)?;
        Some(&mut self.nodes[idx].value)
    }

    /// A cursor to a value equal to `value`, or [`Tree::end`] if there is none.
    pub fn position(&self, value: &T) -> Cursor
    where
        T: Ord,
    {
        self.locate(value).map_or(Cursor::END, Cursor::at)
    }

    /// Whether some element compares equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.locate(value).is_some()
    }

    /// The smallest element.
    pub fn first(&self) -> Option<&T> {
        self.get(self.begin())
    }

    /// The largest element.
    pub fn last(&self) -> Option<&T> {
        self.get(self.back())
    }

    /// Removes one element equal to `value` and returns it. If the tree holds no such element,
    /// nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let mut tree = Tree::from([1]);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let idx = self.locate(value)?;
        Some(self.unlink(idx))
    }

    /// Erases one element equal to `value`, reporting whether there was one.
    pub fn erase(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.remove(value).is_some()
    }

    /// Erases the element at `cursor` and returns a cursor to the element that followed it.
    ///
    /// Cursors to other elements stay valid.
    ///
    /// # Errors
    ///
    /// [`Error::EndCursor`] for the end position and [`Error::StaleCursor`] if the element was
    /// already removed. The tree is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::from([1, 2, 3]);
    ///
    /// let two = tree.position(&2);
    /// let three = tree.erase_at(two).unwrap();
    /// assert_eq!(tree.get(three), Some(&3));
    ///
    /// assert_eq!(tree.erase_at(two), Err(Error::StaleCursor));
    /// assert_eq!(tree.erase_at(tree.end()), Err(Error::EndCursor));
    /// ```
    pub fn erase_at(&mut self, cursor: Cursor) -> Result<Cursor> {
        let idx = cursor.index().ok_or(Error::EndCursor)?;
        if !self.nodes.contains(idx) {
            return Err(Error::StaleCursor);
        }

        // The successor node survives the erase (it may move, but keeps its index).
        let next = self.successor(cursor);
        self.unlink(idx);
        Ok(next)
    }

    fn locate(&self, value: &T) -> Option<Index>
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(idx),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Puts `new` wherever `old` hangs below `parent` (or at the root) and points `new` back
    /// at `parent`. The slot is picked by identity, never by comparing values.
    fn replace_child(&mut self, parent: Option<Index>, old: Index, new: Option<Index>) {
        match parent {
            Some(parent) => {
                let side = if self.nodes[parent].left == Some(old) {
                    Side::Left
                } else {
                    Side::Right
                };
                node::attach(&mut self.nodes, parent, side, new);
            }
            None => {
                self.root = new;
                if let Some(new) = new {
                    self.nodes[new].parent = None;
                }
            }
        }
    }

    /// Takes the node at `idx` out of the tree, closes the gap and returns its value.
    fn unlink(&mut self, idx: Index) -> T {
        let (left, right, parent) = {
            let node = &self.nodes[idx];
            (node.left, node.right, node.parent)
        };

        match (left, right) {
            (None, None) => {
                trace!("erasing leaf");
                self.replace_child(parent, idx, None);
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("erasing node with one child");
                self.replace_child(parent, idx, Some(child));
            }
            (Some(left), Some(right)) => {
                trace!("erasing node with two children");
                let successor = node::extreme(&self.nodes, right, Side::Left);
                if successor != right {
                    // Splice the successor out. It has no left child, so its right subtree
                    // takes its place.
                    let (successor_parent, successor_right) = {
                        let node = &self.nodes[successor];
                        (node.parent, node.right)
                    };
                    self.replace_child(successor_parent, successor, successor_right);
                    node::attach(&mut self.nodes, successor, Side::Right, Some(right));
                }
                node::attach(&mut self.nodes, successor, Side::Left, Some(left));
                self.replace_child(parent, idx, Some(successor));
            }
        }

        self.nodes
            .remove(idx)
            .expect("Unlinking a node implies it is in the arena")
            .value
    }
}
