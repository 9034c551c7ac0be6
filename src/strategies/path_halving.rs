//! One-pass path halving.

use crate::error::Result;
use crate::strategies::LinkArray;
use crate::SuccessorDelete;

/// One-pass path halving.
///
/// While walking a deletion chain, every visited link is rewritten to skip
/// one hop (`link[i] = link[link[i]]`). Compression is weaker than the
/// full-collapse strategies, but each step is cheaper and a single pass
/// suffices, which keeps the amortized bound while halving chain length on
/// every traversal.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use succdel::{PathHalving, SuccessorDelete};
///
/// let mut set = PathHalving::new(5)?;
/// set.delete(2)?;
/// set.delete(3)?;
///
/// assert_eq!(set.successor(2)?, Some(4));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHalving {
    links: LinkArray,
}

impl PathHalving {
    /// Switches redundant deletions from silent no-ops to
    /// [`Error::RedundantDeletion`](crate::Error::RedundantDeletion) errors.
    #[must_use]
    pub fn strict_deletes(mut self) -> Self {
        self.links.set_strict();
        self
    }
}

impl SuccessorDelete for PathHalving {
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
            let skipped = self.links.get(self.links.get(r));
            self.links.set(r, skipped);
            r = skipped;
        }
        Ok(self.links.answer(r))
    }
}
