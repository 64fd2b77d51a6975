//! Positions inside a [`Tree`] and in-order stepping between them.
//!
//! A [`Cursor`] is a small `Copy` handle naming one element of a tree, or the end position.
//! It holds no borrow, so a cursor can be kept across mutations and handed back to
//! [`Tree::erase_at`]. Everything a cursor can do goes through the tree that produced it:
//! [`Tree::get`] reads the element, [`Tree::successor`] and [`Tree::predecessor`] step.
//!
//! The end position sits one past the last element in both directions. Stepping from it, or
//! from a cursor whose element has been removed, stays at the end.
//!
//! # Examples
//!
//! ```
//! use arena_bst::Tree;
//!
//! let tree = Tree::from([2, 1, 3]);
//!
//! let mut forwards = Vec::new();
//! let mut cursor = tree.begin();
//! while cursor != tree.end() {
//!     forwards.push(*tree.get(cursor).unwrap());
//!     cursor = tree.successor(cursor);
//! }
//! assert_eq!(forwards, [1, 2, 3]);
//!
//! let mut cursor = tree.back();
//! assert_eq!(tree.get(cursor), Some(&3));
//! cursor = tree.predecessor(cursor);
//! assert_eq!(tree.get(cursor), Some(&2));
//! ```

use generational_arena::Index;

use crate::node::{self, Side};
use crate::tree::Tree;

/// A position in a [`Tree`]: either one element or the end.
///
/// Two cursors are equal when they name the same node (or are both the end), regardless of
/// the values stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor(Option<Index>);

impl Default for Cursor {
    fn default() -> Self {
        Self::END
    }
}

impl Cursor {
    /// The end position of every tree.
    pub const END: Cursor = Cursor(None);

    pub(crate) fn at(idx: Index) -> Self {
        Self(Some(idx))
    }

    pub(crate) fn index(self) -> Option<Index> {
        self.0
    }

    /// Whether this is the end position.
    pub fn is_end(&self) -> bool {
        self.0.is_none()
    }
}

impl<T> Tree<T> {
    /// A cursor to the smallest element, or [`Tree::end`] if the tree is empty.
    pub fn begin(&self) -> Cursor {
        self.extreme(Side::Left)
    }

    /// The end position. Same as [`Cursor::END`].
    pub fn end(&self) -> Cursor {
        Cursor::END
    }

    /// A cursor to the largest element, or [`Tree::end`] if the tree is empty.
    pub fn back(&self) -> Cursor {
        self.extreme(Side::Right)
    }

    /// The element at `cursor`. `None` for the end position or a removed element.
    pub fn get(&self, cursor: Cursor) -> Option<&T> {
        cursor
            .index()
            .and_then(|idx| self.nodes.get(idx))
            .map(|node| &node.value)
    }

    /// The position after `cursor` in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree = Tree::from([1, 2]);
    /// let second = tree.successor(tree.begin());
    ///
    /// assert_eq!(tree.get(second), Some(&2));
    /// assert!(tree.successor(second).is_end());
    /// assert!(tree.successor(tree.end()).is_end());
    /// ```
    pub fn successor(&self, cursor: Cursor) -> Cursor {
        self.step(cursor, Side::Right)
    }

    /// The position before `cursor` in sorted order.
    pub fn predecessor(&self, cursor: Cursor) -> Cursor {
        self.step(cursor, Side::Left)
    }

    fn step(&self, cursor: Cursor, side: Side) -> Cursor {
        match cursor.index().filter(|&idx| self.nodes.contains(idx)) {
            Some(idx) => Cursor(node::step(&self.nodes, idx, side)),
            None => Cursor::END,
        }
    }

    fn extreme(&self, side: Side) -> Cursor {
        Cursor(self.root.map(|root| node::extreme(&self.nodes, root, side)))
    }
}
