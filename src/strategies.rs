//! Top module for successor-only strategies.
//!
//! # Introduction
//!
//! Every strategy here maintains the same conceptual state: an array of
//! forwarding links over `{1..n+1}`, where slot `n+1` is a sentinel that is
//! never deleted. A slot `i` is alive iff its link points at itself;
//! otherwise the link forwards, in zero or more hops, to the nearest alive
//! slot above `i`. Deleting `i` forwards it to `i + 1`; a successor query
//! walks the chain to its end.
//!
//! The strategies differ only in how aggressively a query rewrites the
//! links it traverses, so that later queries over the same range take fewer
//! hops. For any interleaving of deletions and queries, all strategies
//! return identical successor answers.
//!
//! # Strategies
//!
//! | Implementations | Compression discipline |
//! | --- | --- |
//! | [`NoCompression`] | none; queries never mutate |
//! | [`Recursive`] | full; chain recorded on an explicit stack, then collapsed |
//! | [`TwoPass`] | full; resolve pass followed by a rewrite pass |
//! | [`TwoPassChecked`] | full; two-pass with debug-mode invariant assertions |
//! | [`PathHalving`] | partial; every visited link skips one hop |
//! | [`UnionFind`] | full find-compression plus union by weight |
//! | [`QuickFind`] | eager; deletion relabels the smaller merged run |
//!
//! # Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use succdel::{PathHalving, SuccessorDelete};
//!
//! let mut set = PathHalving::new(8)?;
//! set.delete(4)?;
//! set.delete(5)?;
//!
//! assert_eq!(set.successor(4)?, Some(6));
//! assert_eq!(set.successor(8)?, Some(8));
//! set.delete(8)?;
//! assert_eq!(set.successor(8)?, None);
//! # Ok(())
//! # }
//! ```
pub mod no_compression;
pub mod path_halving;
pub mod quick_find;
pub mod recursive;
pub mod two_pass;
pub mod union_find;

pub use no_compression::NoCompression;
pub use path_halving::PathHalving;
pub use quick_find::QuickFind;
pub use recursive::Recursive;
pub use two_pass::{TwoPass, TwoPassChecked};
pub use union_find::UnionFind;

use crate::error::Result;

/// Forwarding-link array shared by the link-based strategies.
///
/// Slots are `1..=n`, with `link[n + 1]` the always-alive sentinel.
/// Index 0 is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LinkArray {
    link: Vec<usize>,
    n: usize,
    strict: bool,
}

impl LinkArray {
    pub(crate) fn new(n: usize) -> Result<Self> {
        crate::error::check_size(n)?;
        Ok(Self {
            link: (0..n + 2).collect(),
            n,
            strict: false,
        })
    }

    #[inline(always)]
    pub(crate) fn universe(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub(crate) fn get(&self, i: usize) -> usize {
        self.link[i]
    }

    #[inline(always)]
    pub(crate) fn set(&mut self, i: usize, v: usize) {
        self.link[i] = v;
    }

    #[inline(always)]
    pub(crate) fn is_alive(&self, i: usize) -> bool {
        self.link[i] == i
    }

    pub(crate) fn set_strict(&mut self) {
        self.strict = true;
    }

    /// Forwards `i` to `i + 1` if alive. Returns an error for an
    /// already-deleted slot in strict mode, and is a no-op otherwise.
    pub(crate) fn delete(&mut self, i: usize) -> Result<()> {
        crate::error::check_index(i, self.n)?;
        if !self.is_alive(i) {
            if self.strict {
                return Err(crate::error::Error::RedundantDeletion(i));
            }
            return Ok(());
        }
        self.link[i] = i + 1;
        Ok(())
    }

    /// Maps an internal representative to the public answer: the sentinel
    /// `n + 1` means no alive slot remains at or above the query point.
    #[inline(always)]
    pub(crate) fn answer(&self, r: usize) -> Option<usize> {
        if r <= self.n {
            Some(r)
        } else {
            None
        }
    }
}
