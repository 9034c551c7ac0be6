//! Eager quick-find strategy that pays at delete time.

use crate::error::{Error, Result};
use crate::SuccessorDelete;

/// Eager quick-find strategy that pays at delete time.
///
/// Every slot stores the root of its run directly, so a successor query is
/// a single lookup through the root's cached successor. Deleting `i` merges
/// the runs around `i` and relabels the lighter side, in the weighted
/// manner of McIlroy and Morris. That makes a single delete cost up to the
/// length of the shorter run, the classic eager trade-off against the
/// query-time compression strategies.
///
/// [`Self::relabel_count()`] reports how many root cells deletions have
/// rewritten so far, so the cumulative eager cost can be checked without
/// wall-clock timing.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use succdel::{QuickFind, SuccessorDelete};
///
/// let mut set = QuickFind::new(5)?;
/// set.delete(2)?;
/// set.delete(3)?;
///
/// assert_eq!(set.successor(2)?, Some(4));
/// assert!(set.relabel_count() >= 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFind {
    root: Vec<usize>,
    weight: Vec<usize>,
    succ: Vec<usize>,
    relabels: u64,
    n: usize,
    strict: bool,
}

impl QuickFind {
    /// Switches redundant deletions from silent no-ops to
    /// [`Error::RedundantDeletion`](crate::Error::RedundantDeletion) errors.
    #[must_use]
    pub fn strict_deletes(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Returns the number of root cells rewritten by deletions so far.
    pub fn relabel_count(&self) -> u64 {
        self.relabels
    }
}

impl SuccessorDelete for QuickFind {
    fn new(n: usize) -> Result<Self> {
        crate::error::check_size(n)?;
        Ok(Self {
            root: (0..n + 2).collect(),
            weight: vec![1; n + 2],
            succ: (0..n + 2).collect(),
            relabels: 0,
            n,
            strict: false,
        })
    }

    fn universe(&self) -> usize {
        self.n
    }

    fn delete(&mut self, i: usize) -> Result<()> {
        crate::error::check_index(i, self.n)?;
        if self.succ[self.root[i]] != i {
            if self.strict {
                return Err(Error::RedundantDeletion(i));
            }
            return Ok(());
        }
        let r1 = self.root[i];
        let r2 = self.root[i + 1];
        if self.weight[r1] <= self.weight[r2] {
            self.weight[r2] += self.weight[r1];
            let mut r = i;
            while self.root[r] == r1 {
                self.root[r] = r2;
                self.relabels += 1;
                if r == 0 {
                    break;
                }
                r -= 1;
            }
        } else {
            self.succ[r1] = self.succ[r2];
            self.weight[r1] += self.weight[r2];
            let mut r = i + 1;
            while r <= self.n + 1 && self.root[r] == r2 {
                self.root[r] = r1;
                self.relabels += 1;
                r += 1;
            }
        }
        Ok(())
    }

    fn successor(&mut self, i: usize) -> Result<Option<usize>> {
        crate::error::check_index(i, self.n)?;
        let s = self.succ[self.root[i]];
        Ok(if s <= self.n { Some(s) } else { None })
    }
}
