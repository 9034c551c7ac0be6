//! Two-pass full path compression, with and without invariant assertions.

use crate::error::Result;
use crate::strategies::LinkArray;
use crate::SuccessorDelete;

/// Two-pass full path compression.
///
/// A successor query first resolves the representative by plain iteration,
/// then makes a second pass rewriting every visited link directly to it.
/// The end state equals full recursive compression without any extra call
/// depth or scratch space, which makes this the recommended default for
/// large universes.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use succdel::{SuccessorDelete, TwoPass};
///
/// let mut set = TwoPass::new(5)?;
/// set.delete(2)?;
/// set.delete(3)?;
///
/// assert_eq!(set.successor(2)?, Some(4));
/// assert_eq!(set.successor(5)?, Some(5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoPass {
    links: LinkArray,
}

impl TwoPass {
    /// Switches redundant deletions from silent no-ops to
    /// [`Error::RedundantDeletion`](crate::Error::RedundantDeletion) errors.
    #[must_use]
    pub fn strict_deletes(mut self) -> Self {
        self.links.set_strict();
        self
    }
}

/// Resolves the representative of `i`, then rewrites the traversed chain.
#[inline(always)]
pub(crate) fn resolve_two_pass(links: &mut LinkArray, i: usize) -> usize {
    let mut r = i;
    while r < links.get(r) {
        r = links.get(r);
    }
    let mut j = i;
    while links.get(j) < r {
        let next = links.get(j);
        links.set(j, r);
        j = next;
    }
    r
}

impl SuccessorDelete for TwoPass {
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
        let r = resolve_two_pass(&mut self.links, i);
        Ok(self.links.answer(r))
    }
}

/// Two-pass compression instrumented with invariant assertions.
///
/// Identical to [`TwoPass`] except that both passes carry `debug_assert!`
/// checks for monotonic progress and sentinel bounds. The assertions are
/// compiled out in release builds, so the two variants are behaviorally
/// identical there; this one exists for correctness testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoPassChecked {
    links: LinkArray,
}

impl TwoPassChecked {
    /// Switches redundant deletions from silent no-ops to
    /// [`Error::RedundantDeletion`](crate::Error::RedundantDeletion) errors.
    #[must_use]
    pub fn strict_deletes(mut self) -> Self {
        self.links.set_strict();
        self
    }
}

impl SuccessorDelete for TwoPassChecked {
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
        let n = self.links.universe();
        crate::error::check_index(i, n)?;
        let mut r = i;
        while r < self.links.get(r) {
            let next = self.links.get(r);
            debug_assert!(r < next, "forwarding links must strictly increase");
            debug_assert!(next <= n + 1, "forwarding links must stay within the sentinel");
            r = next;
        }
        debug_assert!(self.links.is_alive(r), "a representative must be alive");
        let mut j = i;
        while self.links.get(j) < r {
            let next = self.links.get(j);
            debug_assert!(j < next, "rewrite pass must strictly advance");
            self.links.set(j, r);
            j = next;
        }
        Ok(self.links.answer(r))
    }
}
