// Number of significant bits in `c`
#[inline]
pub(crate) fn bit_length(c: u128) -> usize {
    (u128::BITS - c.leading_zeros()) as usize
}

// Shifts right accumulating a sticky bit that is 1
// when at least one the bits shifted off was 1
// and 0 otherwise
#[inline]
pub(crate) fn shift_right_accum(c: u128, by: usize) -> (u128, bool) {
    if by == 0 {
        (c, false)
    } else if by >= u128::BITS as usize {
        (0, c != 0)
    } else {
        (c >> by, c & ((1 << by) - 1) != 0)
    }
}
