//! Numeric clamping.

/// Bound `value` to the inclusive range `[lo, hi]`.
///
/// Values below `lo` become `lo`, values above `hi` become `hi`. Unlike
/// [`Ord::clamp`] this never panics; with `lo > hi` the lower bound wins.
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    let capped = if value > hi { hi } else { value };
    if capped < lo { lo } else { capped }
}
