//! Word-level bit primitives used by the microset layer.

/// Returns the position of the least significant set bit in `x`,
/// or [`None`] if `x == 0`.
///
/// # Examples
///
/// ```
/// use succdel::broadword::lsb;
///
/// assert_eq!(lsb(0b1010), Some(1));
/// assert_eq!(lsb(0), None);
/// ```
#[inline(always)]
pub const fn lsb(x: u64) -> Option<usize> {
    if x != 0 {
        Some(x.trailing_zeros() as usize)
    } else {
        None
    }
}

/// Returns the position of the most significant set bit in `x`,
/// or [`None`] if `x == 0`.
///
/// # Examples
///
/// ```
/// use succdel::broadword::msb;
///
/// assert_eq!(msb(0b1010), Some(3));
/// assert_eq!(msb(0), None);
/// ```
#[inline(always)]
pub const fn msb(x: u64) -> Option<usize> {
    if x != 0 {
        Some(63 - x.leading_zeros() as usize)
    } else {
        None
    }
}

/// Returns `x` with all bits below position `pos` cleared.
#[inline(always)]
pub(crate) const fn mask_from(x: u64, pos: usize) -> u64 {
    x & (u64::MAX << pos)
}

/// Returns `x` with all bits above position `pos` cleared.
#[inline(always)]
pub(crate) const fn mask_through(x: u64, pos: usize) -> u64 {
    if pos == 63 {
        x
    } else {
        x & ((1u64 << (pos + 1)) - 1)
    }
}
