//! Uniform axes with the final sample pinned to the domain end.

use std::ops::Range;

use rh_core::Real;

/// Build `n` samples `i * step`, then overwrite the last one with `extent`
/// exactly. `n` is `floor(extent / step) + 1` as validated by `RodParams`.
///
/// With `n == 1` the axis degenerates to the single sample `[extent]`.
pub fn pinned_axis(n: usize, step: Real, extent: Real) -> Vec<Real> {
    let mut axis: Vec<Real> = (0..n).map(|i| i as Real * step).collect();
    if let Some(last) = axis.last_mut() {
        *last = extent;
    }
    axis
}

/// Row indices strictly between the two boundary rows.
///
/// Empty when the axis has fewer than three samples.
pub fn interior_range(n: usize) -> Range<usize> {
    1..n.saturating_sub(1).max(1)
}
