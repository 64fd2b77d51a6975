//! Borrowing in-order iteration over a [`Tree`].

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::tree::Tree;

/// An iterator over the elements of a [`Tree`] in sorted order, created by [`Tree::iter`].
///
/// Both ends step with the tree's own cursor primitives, so iterating from the back costs the
/// same as from the front.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    front: Cursor,
    back: Cursor,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let value = tree.get(self.front)?;
        self.front = tree.successor(self.front);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let value = tree.get(self.back)?;
        self.back = tree.predecessor(self.back);
        self.remaining -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Iterates over the elements in sorted order. Equal elements come out in the order they
    /// were inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree = Tree::from([5, 3, 8]);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 8]);
    /// assert_eq!(tree.iter().rev().copied().collect::<Vec<_>>(), [8, 5, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            front: self.begin(),
            back: self.back(),
            remaining: self.len(),
        }
    }
}
