//! Explicit finite-difference solver for the 1-D heat equation.
//!
//! Solves `u_t = u_xx` on a rod `[0, L]` with both ends held at zero
//! temperature, using the forward-time centered-space scheme:
//!
//! ```text
//! u[i, j+1] = α·u[i-1, j] + (1 - 2α)·u[i, j] + α·u[i+1, j],   α = dt / dx²
//! ```
//!
//! Provides:
//! - Parameter validation and the rounded diffusion number ([`RodParams`])
//! - Space/time axes and the seeded solution field ([`Grid`])
//! - A sparse tridiagonal update operator ([`Tridiagonal`])
//! - The time-marching loop ([`ExplicitEuler`])
//! - The solver facade tying them together ([`HeatEquation`])
//! - The exact single-mode solution for verification ([`analytic`])

pub mod analytic;
pub mod axis;
pub mod error;
pub mod grid;
pub mod heat;
pub mod initial;
pub mod operator;
pub mod params;
pub mod stepper;

pub use error::{FdmError, FdmResult};
pub use grid::Grid;
pub use heat::HeatEquation;
pub use initial::{InitialCondition, Pointwise, SineProfile};
pub use operator::{PAR_THRESHOLD, Tridiagonal};
pub use params::{ALPHA_DIGITS, BOUNDARY_VALUE, RodParams, STABILITY_LIMIT};
pub use stepper::{ExplicitEuler, SolveProgress};

pub use rh_core::Real;
