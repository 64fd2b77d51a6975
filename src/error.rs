//! Errors for the few operations that can be handed a cursor they cannot act on.

use thiserror::Error;

/// Why a cursor-based operation was refused. The tree is left untouched in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The cursor is at the end position, which refers to no element.
    #[error("cursor is at the end position and refers to no element")]
    EndCursor,

    /// The element the cursor referred to has since been removed from the tree.
    #[error("cursor refers to an element that has been removed")]
    StaleCursor,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
