//! Initial temperature profiles.
//!
//! An initial condition is vectorized: it receives every interior
//! coordinate at once and returns one temperature per coordinate.

use std::f64::consts::PI;

use rh_core::Real;

/// Maps interior coordinates to initial temperatures.
pub trait InitialCondition {
    /// Evaluate at all `x`. Must return exactly `x.len()` values.
    fn evaluate(&self, x: &[Real]) -> Vec<Real>;
}

impl<F> InitialCondition for F
where
    F: Fn(&[Real]) -> Vec<Real>,
{
    fn evaluate(&self, x: &[Real]) -> Vec<Real> {
        self(x)
    }
}

/// Lifts a scalar profile `u0(x)` to a vectorized initial condition.
#[derive(Clone, Copy, Debug)]
pub struct Pointwise<F>(pub F);

impl<F> InitialCondition for Pointwise<F>
where
    F: Fn(Real) -> Real,
{
    fn evaluate(&self, x: &[Real]) -> Vec<Real> {
        x.iter().map(|&xi| (self.0)(xi)).collect()
    }
}

/// Half sine wave `amplitude * sin(pi * x / length)`, the rod's first mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SineProfile {
    pub amplitude: Real,
    pub length: Real,
}

impl SineProfile {
    pub fn new(amplitude: Real, length: Real) -> Self {
        Self { amplitude, length }
    }
}

impl InitialCondition for SineProfile {
    fn evaluate(&self, x: &[Real]) -> Vec<Real> {
        x.iter()
            .map(|&xi| self.amplitude * (PI * xi / self.length).sin())
            .collect()
    }
}
