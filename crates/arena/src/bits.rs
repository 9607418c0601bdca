//! Bit-position helpers shared by every power-of-two-indexed structure in the
//! workspace.
//!
//! Perfect trees, split tables, and the tree stack all address their parts by
//! bit position of a length, so these two helpers show up everywhere.

/// Returns a `usize` with only the `b`-th bit (from the least significant end)
/// set.
#[inline]
pub const fn bit(b: usize) -> usize {
    1 << b
}

/// Returns the number of bits needed to represent `n`: `0` for `n == 0`,
/// otherwise `floor(log2(n)) + 1`.
#[inline]
pub const fn bit_width(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}
