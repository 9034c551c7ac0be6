//! Dual structure answering both successor and predecessor queries.

use crate::error::{Error, Result};
use crate::{PredecessorSupport, SuccessorDelete};

/// Compression discipline applied by [`SuccPredArray`] when resolving a
/// forwarding chain.
///
/// Predecessor caching is orthogonal to compression, so any discipline
/// yields the same answers; only the time behavior differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionKind {
    /// Walk chains without rewriting them.
    None,
    /// Collapse the whole traversed chain onto its representative
    /// (resolve pass followed by a rewrite pass).
    #[default]
    Full,
    /// Rewrite every visited slot to skip one hop.
    Halving,
}

/// One slot of the dual structure.
///
/// The classic formulation overloads a single integer cell by sign relative
/// to its own index; this is the same state as an explicit tagged value, so
/// no numeric comparison tricks are needed to recover the interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// The slot is alive and heads a block of deleted slots below it. The
    /// payload caches the largest alive slot below that block, or [`None`]
    /// if the block reaches the bottom of the universe.
    Representative(Option<usize>),
    /// The slot is deleted and forwards toward its representative.
    Forward(usize),
}

/// Dual structure answering both successor and predecessor queries.
///
/// On top of the forwarding links of the successor-only strategies, every
/// representative additionally caches the predecessor of the block of
/// deleted slots it absorbs. Deleting `i` re-threads `i`'s cached value to
/// the representative that absorbs `i`'s range, so the cache is always
/// attached to the current representative of each alive block and a
/// predecessor query costs one successor resolution plus one lookup.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use succdel::{PredecessorSupport, SuccPredArray, SuccessorDelete};
///
/// let mut set = SuccPredArray::new(5)?;
/// set.delete(2)?;
/// set.delete(3)?;
///
/// assert_eq!(set.successor(2)?, Some(4));
/// assert_eq!(set.predecessor(4)?, Some(1));
/// assert_eq!(set.predecessor(3)?, Some(1));
/// assert_eq!(set.predecessor(1)?, None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccPredArray {
    slots: Vec<Slot>,
    compression: CompressionKind,
    n: usize,
    strict: bool,
}

impl SuccPredArray {
    /// Creates a fully-alive universe of size `n` with the given
    /// compression discipline.
    ///
    /// # Errors
    ///
    /// An error is returned if `n == 0`.
    pub fn with_compression(n: usize, compression: CompressionKind) -> Result<Self> {
        crate::error::check_size(n)?;
        // Slot i starts as its own representative with everything below it
        // alive, so its cached predecessor is i - 1 (none for slot 1).
        // The sentinel n + 1 is a representative that is never deleted.
        let slots = (0..n + 2)
            .map(|i| Slot::Representative(if i >= 2 { Some(i - 1) } else { None }))
            .collect();
        Ok(Self {
            slots,
            compression,
            n,
            strict: false,
        })
    }

    /// Switches redundant deletions from silent no-ops to
    /// [`Error::RedundantDeletion`](crate::Error::RedundantDeletion) errors.
    #[must_use]
    pub fn strict_deletes(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Resolves the representative of `i`, compressing the traversed chain
    /// per the configured discipline. The result is in `i..=n + 1`.
    fn find_rep(&mut self, i: usize) -> usize {
        let mut r = i;
        while let Slot::Forward(t) = self.slots[r] {
            r = t;
        }
        match self.compression {
            CompressionKind::None => {}
            CompressionKind::Full => {
                let mut j = i;
                while let Slot::Forward(t) = self.slots[j] {
                    self.slots[j] = Slot::Forward(r);
                    j = t;
                }
            }
            CompressionKind::Halving => {
                let mut j = i;
                while let Slot::Forward(t) = self.slots[j] {
                    if let Slot::Forward(tt) = self.slots[t] {
                        self.slots[j] = Slot::Forward(tt);
                    }
                    j = t;
                }
            }
        }
        r
    }
}

impl SuccessorDelete for SuccPredArray {
    fn new(n: usize) -> Result<Self> {
        Self::with_compression(n, CompressionKind::default())
    }

    fn universe(&self) -> usize {
        self.n
    }

    fn delete(&mut self, i: usize) -> Result<()> {
        crate::error::check_index(i, self.n)?;
        let Slot::Representative(cached) = self.slots[i] else {
            if self.strict {
                return Err(Error::RedundantDeletion(i));
            }
            return Ok(());
        };
        // The representative absorbing i's range inherits i's cached
        // predecessor; i then joins the forwarding chain toward it.
        let s = self.find_rep(i + 1);
        self.slots[s] = Slot::Representative(cached);
        self.slots[i] = Slot::Forward(i + 1);
        Ok(())
    }

    fn successor(&mut self, i: usize) -> Result<Option<usize>> {
        crate::error::check_index(i, self.n)?;
        let r = self.find_rep(i);
        Ok(if r <= self.n { Some(r) } else { None })
    }
}

impl PredecessorSupport for SuccPredArray {
    fn predecessor(&mut self, i: usize) -> Result<Option<usize>> {
        crate::error::check_index(i, self.n)?;
        let r = self.find_rep(i);
        match self.slots[r] {
            Slot::Representative(cached) => Ok(cached),
            Slot::Forward(_) => unreachable!("find_rep resolves to a representative"),
        }
    }
}
