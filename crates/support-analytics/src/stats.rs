//! Shared numeric helpers for the report modules.
//!
//! Every mean over zero samples yields 0 rather than NaN, and rounding is
//! round-half-away-from-zero (`f64::round` semantics) throughout.

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean, 0.0 when there are no samples.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `part / total` as a whole percentage, 0 when the total is zero.
pub(crate) fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

/// `total / groups` rounded to the nearest whole count, 0 when there are no
/// groups.
pub(crate) fn mean_count(total: usize, groups: usize) -> u64 {
    if groups == 0 {
        return 0;
    }
    (total as f64 / groups as f64).round() as u64
}
