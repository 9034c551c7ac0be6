//! Error types shared by all successor-delete structures.

use thiserror::Error;

/// Error variants for successor-delete operations.
///
/// All variants are local precondition violations detected at the call
/// boundary before any mutation: an operation either fully succeeds or
/// fails without observable side effects, and the structure remains valid
/// and usable afterwards.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A size parameter (universe size or block width) was outside its
    /// valid range.
    #[error("size must be at least 1, but got {0}")]
    InvalidSize(usize),

    /// An index outside the universe `[1, n]` was given.
    #[error("index must be in [1, {n}], but got {i}")]
    OutOfRange {
        /// The offending index.
        i: usize,
        /// The universe size of the structure.
        n: usize,
    },

    /// An already-deleted slot was deleted again (strict mode only).
    #[error("slot {0} is already deleted")]
    RedundantDeletion(usize),

    /// A trace contained an operation the structure cannot answer.
    #[error("structure does not support {0} queries")]
    UnsupportedOperation(&'static str),
}

/// A specialized Result type for successor-delete operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Rejects indices outside the universe `[1, n]`.
#[inline(always)]
pub(crate) fn check_index(i: usize, n: usize) -> Result<()> {
    if i == 0 || n < i {
        return Err(Error::OutOfRange { i, n });
    }
    Ok(())
}

/// Rejects universe sizes smaller than 1.
#[inline(always)]
pub(crate) fn check_size(n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidSize(n));
    }
    Ok(())
}
