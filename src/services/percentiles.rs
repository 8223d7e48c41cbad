//! Order-statistic helpers for already-sorted slices.
//!
//! - Empty input => `None` (or `0.0` for the f64 convenience wrapper).
//! - The element at index `floor(len * fraction)` is returned, clamped to
//!   the last index. The median (`fraction = 0.5`) is therefore the upper
//!   median for even lengths, never an average of the two middle elements.

/// Returns the order statistic for `fraction` in [0, 1] from a slice sorted
/// in ascending order.
pub fn value_sorted<T: Copy>(sorted_values: &[T], fraction: f64) -> Option<T> {
    if sorted_values.is_empty() {
        return None;
    }

    let position = (sorted_values.len() as f64 * fraction).floor() as usize;
    let index = position.min(sorted_values.len() - 1);
    sorted_values.get(index).copied()
}

/// Convenience wrapper for `f64` results.
pub fn value_f64_sorted(sorted_values: &[f64], fraction: f64) -> f64 {
    value_sorted(sorted_values, fraction).unwrap_or(0.0)
}
