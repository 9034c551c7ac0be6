//! Baseline strategy that never rewrites forwarding links.

use crate::error::Result;
use crate::strategies::LinkArray;
use crate::SuccessorDelete;

/// Baseline strategy that never rewrites forwarding links.
///
/// A successor query walks the deletion chain hop by hop without mutation,
/// so a query costs the full length of the deleted run below its answer.
/// This is the reference implementation the compressed strategies are
/// checked against; it is not intended for large workloads.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use succdel::{NoCompression, SuccessorDelete};
///
/// let mut set = NoCompression::new(5)?;
/// set.delete(2)?;
/// set.delete(3)?;
///
/// assert_eq!(set.successor(2)?, Some(4));
/// assert_eq!(set.successor(1)?, Some(1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoCompression {
    links: LinkArray,
}

impl NoCompression {
    /// Switches redundant deletions from silent no-ops to
    /// [`Error::RedundantDeletion`](crate::Error::RedundantDeletion) errors.
    #[must_use]
    pub fn strict_deletes(mut self) -> Self {
        self.links.set_strict();
        self
    }
}

impl SuccessorDelete for NoCompression {
    fn new(n: usize) -> Result<Self> {
        Ok(Self {
            links: LinkArray::new(n)?,
        })
    }

    fn universe(&self) -> usize {
        self.links.universe()
    }

    fn delete(&mut self, i: usize) -> Result<()> {
        self.links.delete(i)
    }

    fn successor(&mut self, i: usize) -> Result<Option<usize>> {
        crate::error::check_index(i, self.links.universe())?;
        let mut r = i;
        while r < self.links.get(r) {
            r = self.links.get(r);
        }
        Ok(self.links.answer(r))
    }
}
