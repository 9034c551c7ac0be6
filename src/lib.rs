//! # `succdel`: Successor-delete data structures in Rust
//!
//! `succdel` implements a family of dynamic order-query structures over a
//! finite integer universe `{1..n}` that support one-time element deletion
//! and successor/predecessor queries. All members answer the same query
//! contract; they differ only in their path-compression discipline, and
//! hence in their time behavior.
//!
//! # Operations
//!
//! Let $`S \subseteq \{ 1,\dots,n \}`$ be the set of alive slots, with
//! $`S = \{ 1,\dots,n \}`$ initially.
//!
//! - $`\textrm{Delete}(i)`$ removes $`i`$ from $`S`$ (one-time; slots never
//!   come back).
//! - $`\textrm{Successor}(i)`$ returns $`\min \{ x \in S \mid x \geq i \}`$,
//!   or [`None`] if no such slot exists.
//! - $`\textrm{Predecessor}(i)`$ returns $`\max \{ x \in S \mid x < i \}`$,
//!   or [`None`] if no such slot exists (dual structures only). Note the
//!   asymmetry: a successor query may answer $`i`$ itself, a predecessor
//!   query never does.
//!
//! # Data structures
//!
//! The strategies provided in this crate are summarized below, where $`n`$
//! is the universe size and bounds are amortized over a sequence of
//! deletions and queries:
//!
//! | Implementations | Delete | Successor | Predecessor |
//! | --- | :-: | :-: | :-: |
//! | [`NoCompression`] | $`O(1)`$ | $`O(n)`$ | -- |
//! | [`Recursive`] | $`O(1)`$ | near-$`O(1)`$ | -- |
//! | [`TwoPass`] | $`O(1)`$ | near-$`O(1)`$ | -- |
//! | [`TwoPassChecked`] | $`O(1)`$ | near-$`O(1)`$ | -- |
//! | [`PathHalving`] | $`O(1)`$ | near-$`O(1)`$ | -- |
//! | [`UnionFind`] | near-$`O(1)`$ | near-$`O(1)`$ | -- |
//! | [`QuickFind`] | $`O(n)`$ | $`O(1)`$ | -- |
//! | [`SuccPredArray`] | $`O(1)`$ | near-$`O(1)`$ | near-$`O(1)`$ |
//! | [`Microset`] | $`O(1)`$ + outer | $`O(1)`$ + outer | $`O(1)`$ + outer |
//!
//! [`Microset`] wraps any of the above as its outer strategy and resolves
//! queries inside a machine-word-wide block with bit operations, reserving
//! the outer structure for cross-block navigation.
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use succdel::{SuccessorDelete, TwoPass};
//!
//! let mut set = TwoPass::new(5)?;
//! set.delete(2)?;
//! set.delete(3)?;
//!
//! assert_eq!(set.successor(1)?, Some(1));
//! assert_eq!(set.successor(2)?, Some(4));
//! assert_eq!(set.successor(5)?, Some(5));
//! # Ok(())
//! # }
//! ```
//!
//! # Limitation
//!
//! Queries take `&mut self`: path compression rewrites forwarding links even
//! on reads, so no structure here is safe for shared concurrent access
//! without an external exclusive lock.
#![deny(missing_docs)]

pub mod broadword;
pub mod error;
pub mod microset;
pub mod strategies;
pub mod succ_pred;
pub mod trace;

pub use error::{Error, Result};
pub use microset::Microset;
pub use strategies::no_compression::NoCompression;
pub use strategies::path_halving::PathHalving;
pub use strategies::quick_find::QuickFind;
pub use strategies::recursive::Recursive;
pub use strategies::two_pass::{TwoPass, TwoPassChecked};
pub use strategies::union_find::UnionFind;
pub use succ_pred::{CompressionKind, SuccPredArray};

/// Interface for structures over a fixed universe `{1..n}` supporting
/// one-time deletion and successor queries.
///
/// Queries take `&mut self` because compression strategies rewrite
/// forwarding links as a side effect of resolving a query.
pub trait SuccessorDelete {
    /// Creates a fully-alive universe of size `n`.
    ///
    /// # Errors
    ///
    /// An error is returned if `n == 0`.
    fn new(n: usize) -> Result<Self>
    where
        Self: Sized;

    /// Returns the universe size `n`.
    fn universe(&self) -> usize;

    /// Marks slot `i` as deleted.
    ///
    /// Deleting an already-deleted slot is a no-op by default, or reported
    /// as [`Error::RedundantDeletion`] in strict mode.
    ///
    /// # Errors
    ///
    /// An error is returned if `i` is outside `[1, n]`.
    fn delete(&mut self, i: usize) -> Result<()>;

    /// Returns the smallest alive slot `>= i` (including `i` itself if
    /// alive), or [`None`] if no such slot exists.
    ///
    /// # Errors
    ///
    /// An error is returned if `i` is outside `[1, n]`.
    fn successor(&mut self, i: usize) -> Result<Option<usize>>;
}

/// Interface for dual structures that also answer predecessor queries.
pub trait PredecessorSupport: SuccessorDelete {
    /// Returns the largest alive slot strictly below `i`, or [`None`] if
    /// no alive slot lies below `i`.
    ///
    /// # Errors
    ///
    /// An error is returned if `i` is outside `[1, n]`.
    fn predecessor(&mut self, i: usize) -> Result<Option<usize>>;
}
