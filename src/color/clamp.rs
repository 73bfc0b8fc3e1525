/// Restrict `n` to the closed interval `[lower, upper]`.
///
/// Equivalent to `max(lower, min(n, upper))`, but only needs [`PartialOrd`]
/// so it works for floats as well as integers. The caller guarantees
/// `lower <= upper`.
///
/// # Example
/// ```
/// use graytone::clamp;
///
/// assert_eq!(clamp(260, 0, 255), 255);
/// assert_eq!(clamp(-5, 0, 255), 0);
/// assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(n: T, lower: T, upper: T) -> T {
    if n < lower {
        lower
    } else if n > upper {
        upper
    } else {
        n
    }
}
