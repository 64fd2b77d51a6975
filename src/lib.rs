//! This crate exposes a Binary Search Tree (BST) meant to be the storage engine underneath
//! ordered set and ordered map types.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than (or, when duplicates are allowed, equal to) its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). The [`Tree`] here does no
//! rebalancing, so inserting already sorted values gives it a height of `N`. Every operation
//! walks the tree with loops rather than recursion so that even such a tree can be copied and
//! dropped without running out of stack.
//!
//! ## Storage
//!
//! Nodes live in a [generational arena][generational_arena] and refer to each other by
//! index. Each node owns its children through their indices and keeps a plain index to its
//! parent, which is what lets a [`Cursor`] step to the in-order successor or predecessor
//! without a stack. Because indices carry a generation, a cursor to a removed element is
//! recognised as stale instead of silently pointing at whatever reused its slot.
//!
//! # Examples
//!
//! ```
//! use arena_bst::Tree;
//!
//! let mut tree = Tree::from_values([5, 3, 8, 1, 4, 7, 9], true);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! // 5 has two children so its successor, 7, takes its place.
//! assert!(tree.erase(&5));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 7, 8, 9]);
//! assert_eq!(tree.find(&5), None);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod cursor;
pub mod error;
pub mod iter;
mod node;
pub mod tree;

#[cfg(test)]
mod test;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use iter::Iter;
pub use tree::Tree;
