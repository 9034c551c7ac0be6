//! Full path compression with the recursion made explicit.

use crate::error::Result;
use crate::strategies::LinkArray;
use crate::SuccessorDelete;

/// Full path compression with the recursion made explicit.
///
/// The classic formulation resolves `link[i]` recursively and overwrites
/// every link on the way back up, collapsing the whole traversed chain onto
/// its representative. Expressed literally, that recursion is as deep as the
/// chain is long, which overflows the call stack for adversarial deletion
/// orders on large universes. This variant records the chain on an explicit
/// stack and collapses it on the way back down, giving the same end state
/// with bounded call depth.
///
/// Kept as a named variant for benchmarking parity with the classic
/// formulation; prefer [`TwoPass`](crate::TwoPass), which reaches the same
/// end state without the scratch stack.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use succdel::{Recursive, SuccessorDelete};
///
/// let mut set = Recursive::new(5)?;
/// set.delete(2)?;
/// set.delete(3)?;
///
/// assert_eq!(set.successor(2)?, Some(4));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recursive {
    links: LinkArray,
    stack: Vec<usize>,
}

impl Recursive {
    /// Switches redundant deletions from silent no-ops to
    /// [`Error::RedundantDeletion`](crate::Error::RedundantDeletion) errors.
    #[must_use]
    pub fn strict_deletes(mut self) -> Self {
        self.links.set_strict();
        self
    }
}

impl SuccessorDelete for Recursive {
    fn new(n: usize) -> Result<Self> {
        Ok(Self {
            links: LinkArray::new(n)?,
            stack: Vec::new(),
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
        // Descend, recording the chain like recursion frames would.
        let mut r = i;
        while r < self.links.get(r) {
            self.stack.push(r);
            r = self.links.get(r);
        }
        // Unwind, collapsing every recorded link onto the representative.
        while let Some(j) = self.stack.pop() {
            self.links.set(j, r);
        }
        Ok(self.links.answer(r))
    }
}
