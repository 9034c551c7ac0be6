//! Classic union-find bookkeeping as a successor-delete baseline.

use crate::error::{Error, Result};
use crate::SuccessorDelete;

/// Classic union-find bookkeeping as a successor-delete baseline.
///
/// Each maximal run of consecutive deleted slots forms a disjoint-set
/// component together with the alive slot just above it; deleting `i`
/// unions the components of `i` and `i + 1`. Components are merged by
/// weight, finds use two-pass path compression, and every root caches the
/// successor of its run. Answers match the link-based strategies exactly;
/// this variant exists as a performance baseline with the full disjoint-set
/// bookkeeping (parent, weight, and cached successor per slot).
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use succdel::{SuccessorDelete, UnionFind};
///
/// let mut set = UnionFind::new(5)?;
/// set.delete(2)?;
/// set.delete(3)?;
///
/// assert_eq!(set.successor(2)?, Some(4));
/// assert_eq!(set.successor(4)?, Some(4));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    weight: Vec<usize>,
    succ: Vec<usize>,
    n: usize,
    strict: bool,
}

impl UnionFind {
    /// Switches redundant deletions from silent no-ops to
    /// [`Error::RedundantDeletion`](crate::Error::RedundantDeletion) errors.
    #[must_use]
    pub fn strict_deletes(mut self) -> Self {
        self.strict = true;
        self
    }

    fn find(&mut self, i: usize) -> usize {
        let mut r = i;
        while self.parent[r] != r {
            r = self.parent[r];
        }
        let mut j = i;
        while j != r {
            let p = self.parent[j];
            self.parent[j] = r;
            j = p;
        }
        r
    }

    fn union(&mut self, i: usize, j: usize) {
        let r1 = self.find(i);
        let r2 = self.find(j);
        if r1 == r2 {
            return;
        }
        if self.weight[r1] <= self.weight[r2] {
            self.weight[r2] += self.weight[r1];
            self.parent[r1] = r2;
        } else {
            self.weight[r1] += self.weight[r2];
            self.parent[r2] = r1;
            self.succ[r1] = self.succ[r2];
        }
    }
}

impl SuccessorDelete for UnionFind {
    fn new(n: usize) -> Result<Self> {
        crate::error::check_size(n)?;
        Ok(Self {
            parent: (0..n + 2).collect(),
            weight: vec![1; n + 2],
            succ: (0..n + 2).collect(),
            n,
            strict: false,
        })
    }

    fn universe(&self) -> usize {
        self.n
    }

    fn delete(&mut self, i: usize) -> Result<()> {
        crate::error::check_index(i, self.n)?;
        let r = self.find(i);
        if self.succ[r] != i {
            if self.strict {
                return Err(Error::RedundantDeletion(i));
            }
            return Ok(());
        }
        self.union(i, i + 1);
        Ok(())
    }

    fn successor(&mut self, i: usize) -> Result<Option<usize>> {
        crate::error::check_index(i, self.n)?;
        let r = self.find(i);
        let s = self.succ[r];
        Ok(if s <= self.n { Some(s) } else { None })
    }
}
