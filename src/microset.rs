//! Two-level wrapper answering intra-block queries with bit operations.

use crate::broadword;
use crate::error::{Error, Result};
use crate::{PredecessorSupport, SuccessorDelete};

/// Two-level wrapper answering intra-block queries with bit operations.
///
/// The universe is partitioned into fixed-width blocks, each represented by
/// one bitmask word of alive slots. Queries first scan the query point's own
/// block with find-lowest/highest-set-bit operations; only cross-block
/// navigation is delegated to the outer strategy `S`, which runs over one
/// representative per block. A block is alive in the outer strategy iff its
/// mask is nonzero, so the common case never touches a forwarding chain.
///
/// The default block width is 64 (one machine word); widths down to 1 are
/// accepted, where width 1 degenerates to the unwrapped outer strategy.
/// Predecessor queries are available whenever `S` answers them.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use succdel::{Microset, SuccessorDelete, TwoPass};
///
/// let mut set = Microset::<TwoPass>::new(200)?;
/// set.delete(2)?;
/// set.delete(3)?;
///
/// assert_eq!(set.successor(2)?, Some(4));
/// assert_eq!(set.successor(130)?, Some(130));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Microset<S> {
    outer: S,
    masks: Vec<u64>,
    width: usize,
    n: usize,
    strict: bool,
}

impl<S: SuccessorDelete> Microset<S> {
    /// Creates a fully-alive universe of size `n` partitioned into blocks
    /// of the given width.
    ///
    /// # Errors
    ///
    /// An error is returned if `n == 0` or if `width` is outside `[1, 64]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// use succdel::{Microset, PathHalving, SuccessorDelete};
    ///
    /// let mut set = Microset::<PathHalving>::with_block_width(10, 4)?;
    /// set.delete(7)?;
    /// assert_eq!(set.successor(7)?, Some(8));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_block_width(n: usize, width: usize) -> Result<Self> {
        crate::error::check_size(n)?;
        if width == 0 || 64 < width {
            return Err(Error::InvalidSize(width));
        }
        let n_blocks = n.div_ceil(width);
        let mut masks = vec![Self::full_mask(width); n_blocks];
        // The last block only covers slots up to n.
        let rem = n - (n_blocks - 1) * width;
        masks[n_blocks - 1] = Self::full_mask(rem);
        Ok(Self {
            outer: S::new(n_blocks)?,
            masks,
            width,
            n,
            strict: false,
        })
    }

    /// Switches redundant deletions from silent no-ops to
    /// [`Error::RedundantDeletion`] errors.
    #[must_use]
    pub fn strict_deletes(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Returns the block width.
    pub fn block_width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    fn full_mask(width: usize) -> u64 {
        if width == 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        }
    }

    /// Maps a slot to its block index and bit position within the block.
    #[inline(always)]
    fn locate(&self, i: usize) -> (usize, usize) {
        ((i - 1) / self.width, (i - 1) % self.width)
    }

    /// Maps a block index and bit position back to a slot.
    #[inline(always)]
    fn slot(&self, block: usize, bit: usize) -> usize {
        block * self.width + bit + 1
    }
}

impl<S: SuccessorDelete> SuccessorDelete for Microset<S> {
    fn new(n: usize) -> Result<Self> {
        Self::with_block_width(n, 64)
    }

    fn universe(&self) -> usize {
        self.n
    }

    fn delete(&mut self, i: usize) -> Result<()> {
        crate::error::check_index(i, self.n)?;
        let (block, bit) = self.locate(i);
        let mask = 1u64 << bit;
        if self.masks[block] & mask == 0 {
            if self.strict {
                return Err(Error::RedundantDeletion(i));
            }
            return Ok(());
        }
        self.masks[block] ^= mask;
        // A block is alive in the outer strategy iff its mask is nonzero.
        if self.masks[block] == 0 {
            self.outer.delete(block + 1)?;
        }
        Ok(())
    }

    fn successor(&mut self, i: usize) -> Result<Option<usize>> {
        crate::error::check_index(i, self.n)?;
        let (block, bit) = self.locate(i);
        if let Some(b) = broadword::lsb(broadword::mask_from(self.masks[block], bit)) {
            return Ok(Some(self.slot(block, b)));
        }
        if block + 1 == self.masks.len() {
            return Ok(None);
        }
        match self.outer.successor(block + 2)? {
            Some(next) => {
                let b = broadword::lsb(self.masks[next - 1])
                    .expect("an alive block has a nonzero mask");
                Ok(Some(self.slot(next - 1, b)))
            }
            None => Ok(None),
        }
    }
}

impl<S: PredecessorSupport> PredecessorSupport for Microset<S> {
    fn predecessor(&mut self, i: usize) -> Result<Option<usize>> {
        crate::error::check_index(i, self.n)?;
        let (block, bit) = self.locate(i);
        if bit > 0 {
            if let Some(b) = broadword::msb(broadword::mask_through(self.masks[block], bit - 1)) {
                return Ok(Some(self.slot(block, b)));
            }
        }
        if block == 0 {
            return Ok(None);
        }
        match self.outer.predecessor(block + 1)? {
            Some(prev) => {
                let b = broadword::msb(self.masks[prev - 1])
                    .expect("an alive block has a nonzero mask");
                Ok(Some(self.slot(prev - 1, b)))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SuccPredArray, TwoPass};

    #[test]
    fn test_scenario_n5() {
        let mut set = Microset::<TwoPass>::new(5).unwrap();
        set.delete(2).unwrap();
        set.delete(3).unwrap();
        assert_eq!(set.successor(1).unwrap(), Some(1));
        assert_eq!(set.successor(2).unwrap(), Some(4));
        assert_eq!(set.successor(3).unwrap(), Some(4));
        assert_eq!(set.successor(4).unwrap(), Some(4));
        assert_eq!(set.successor(5).unwrap(), Some(5));
    }

    #[test]
    fn test_cross_block_navigation() {
        let mut set = Microset::<TwoPass>::with_block_width(20, 4).unwrap();
        // Empty out blocks 2 and 3 (slots 5..=12).
        for i in 5..=12 {
            set.delete(i).unwrap();
        }
        assert_eq!(set.successor(5).unwrap(), Some(13));
        assert_eq!(set.successor(4).unwrap(), Some(4));
        set.delete(4).unwrap();
        assert_eq!(set.successor(2).unwrap(), Some(2));
        assert_eq!(set.successor(4).unwrap(), Some(13));
    }

    #[test]
    fn test_predecessor_cross_block() {
        let mut set = Microset::<SuccPredArray>::with_block_width(20, 4).unwrap();
        for i in 5..=12 {
            set.delete(i).unwrap();
        }
        assert_eq!(set.predecessor(13).unwrap(), Some(4));
        assert_eq!(set.predecessor(12).unwrap(), Some(4));
        assert_eq!(set.predecessor(5).unwrap(), Some(4));
        assert_eq!(set.predecessor(4).unwrap(), Some(3));
        assert_eq!(set.predecessor(1).unwrap(), None);
        set.delete(4).unwrap();
        set.delete(3).unwrap();
        set.delete(2).unwrap();
        set.delete(1).unwrap();
        assert_eq!(set.predecessor(13).unwrap(), None);
    }

    #[test]
    fn test_partial_last_block() {
        let mut set = Microset::<TwoPass>::with_block_width(10, 4).unwrap();
        set.delete(9).unwrap();
        set.delete(10).unwrap();
        assert_eq!(set.successor(9).unwrap(), None);
        assert_eq!(set.successor(8).unwrap(), Some(8));
    }

    #[test]
    fn test_invalid_block_width() {
        assert_eq!(
            Microset::<TwoPass>::with_block_width(10, 0).unwrap_err(),
            Error::InvalidSize(0)
        );
        assert_eq!(
            Microset::<TwoPass>::with_block_width(10, 65).unwrap_err(),
            Error::InvalidSize(65)
        );
    }

    #[test]
    fn test_strict_mode() {
        let mut set = Microset::<TwoPass>::new(8).unwrap().strict_deletes();
        set.delete(3).unwrap();
        assert_eq!(set.delete(3).unwrap_err(), Error::RedundantDeletion(3));
        assert_eq!(set.successor(3).unwrap(), Some(4));
    }
}
