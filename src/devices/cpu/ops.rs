use core::ops::Add;

/// Adds `lhs` and `rhs` element-wise into `out`.
/// Only the common prefix of the three slices is written.
/// # Example
/// ```
/// use cl_vecadd::cpu::add_into;
///
/// let mut out = [0; 4];
/// add_into(&[1, 2, 3, 4], &[4, 3, 2, 1], &mut out);
/// assert_eq!(out, [5; 4]);
/// ```
#[inline]
pub fn add_into<T>(lhs: &[T], rhs: &[T], out: &mut [T])
where
    T: Add<Output = T> + Copy,
{
    for ((lhs, rhs), out) in lhs.iter().zip(rhs).zip(out) {
        *out = *lhs + *rhs;
    }
}
