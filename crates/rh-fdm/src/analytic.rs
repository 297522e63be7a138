//! Exact solution for a single-mode initial profile.
//!
//! With `u(x, 0) = A sin(pi x / L)` and zero ends, `u_t = u_xx` has the
//! closed form `A exp(-pi^2 t / L^2) sin(pi x / L)`.

use std::f64::consts::PI;

use rh_core::Real;

use crate::error::FdmResult;
use crate::heat::HeatEquation;

/// `A exp(-pi^2 t / L^2) sin(pi x / L)`.
pub fn sine_mode(x: Real, t: Real, length: Real, amplitude: Real) -> Real {
    let k = PI / length;
    amplitude * (-k * k * t).exp() * (k * x).sin()
}

/// Largest pointwise gap between column `j` and [`sine_mode`] at the same time.
pub fn max_abs_error(heat: &HeatEquation, j: usize, amplitude: Real) -> FdmResult<Real> {
    let snapshot = heat.snapshot_at(j)?;
    let t = heat.grid().time_at(j)?;
    let length = heat.length();
    Ok(heat
        .x()
        .iter()
        .zip(snapshot.iter())
        .map(|(&x, &u)| (u - sine_mode(x, t, length, amplitude)).abs())
        .fold(0.0, Real::max))
}
