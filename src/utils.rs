/// Reverse the low `bits` bits of `value`.
///
/// Bits above position `bits` are dropped, so the result is always
/// below `2^bits`. Reversing zero bits yields `0`.
///
/// # Example
///
/// ```
/// use inplace_ntt::bit_reverse;
///
/// assert_eq!(bit_reverse(0b001, 3), 0b100);
/// assert_eq!(bit_reverse(0b110, 3), 0b011);
/// ```
#[inline]
pub const fn bit_reverse(value: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    value.reverse_bits() >> (usize::BITS - bits)
}

/// Ceiling of `log2(n)`: `1 -> 0`, `2 -> 1`, `3..=4 -> 2`, `5..=8 -> 3`.
///
/// Computed as the index of the highest set bit, plus one when any lower
/// bit is also set. `ceil_lg(0)` is `0`.
pub const fn ceil_lg(n: usize) -> u32 {
    if n == 0 {
        return 0;
    }
    let highest = usize::BITS - 1 - n.leading_zeros();
    if n.count_ones() > 1 {
        highest + 1
    } else {
        highest
    }
}

/// True iff exactly one bit of `n` is set.
pub const fn is_2pow(n: usize) -> bool {
    n.count_ones() == 1
}
