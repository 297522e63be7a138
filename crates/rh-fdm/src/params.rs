//! Physical and discretization parameters.

use rh_core::{Real, ensure_positive, round_to_digits, sample_count};

use crate::error::{FdmError, FdmResult};

/// Decimal digits kept when rounding the diffusion number.
pub const ALPHA_DIGITS: i32 = 5;

/// Largest diffusion number for which the explicit scheme is stable.
pub const STABILITY_LIMIT: Real = 0.5;

/// Temperature held at both ends of the rod.
pub const BOUNDARY_VALUE: Real = 0.0;

/// Validated rod parameters. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RodParams {
    /// Rod length L
    length: Real,
    /// Stopping time T
    stop_time: Real,
    /// Spatial step dx
    dx: Real,
    /// Time step dt
    dt: Real,
    /// Diffusion number dt / dx², rounded to [`ALPHA_DIGITS`]
    alpha: Real,
    /// Spatial samples, floor(L / dx) + 1
    n_x: usize,
    /// Time levels, floor(T / dt) + 1
    n_t: usize,
}

impl RodParams {
    /// Validate the four inputs and derive the diffusion number.
    ///
    /// Steps are checked before lengths, so `dt` is reported first when
    /// several inputs are bad. A step so small that the sample count (or the
    /// `n_x · n_t` field size) overflows `usize` is rejected as well.
    pub fn new(length: Real, stop_time: Real, dx: Real, dt: Real) -> FdmResult<Self> {
        let dt = ensure_positive(dt, "dt")?;
        let dx = ensure_positive(dx, "dx")?;
        let length = ensure_positive(length, "L")?;
        let stop_time = ensure_positive(stop_time, "T")?;

        let n_x = sample_count(length, dx, "dx")?;
        let n_t = sample_count(stop_time, dt, "dt")?;
        if n_x.checked_mul(n_t).is_none() {
            return Err(FdmError::InvalidParameter {
                name: "dt",
                value: dt,
            });
        }

        Ok(Self {
            length,
            stop_time,
            dx,
            dt,
            alpha: round_to_digits(dt / (dx * dx), ALPHA_DIGITS),
            n_x,
            n_t,
        })
    }

    pub fn length(&self) -> Real {
        self.length
    }

    pub fn stop_time(&self) -> Real {
        self.stop_time
    }

    pub fn dx(&self) -> Real {
        self.dx
    }

    pub fn dt(&self) -> Real {
        self.dt
    }

    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// Number of spatial samples, `floor(L / dx) + 1`.
    pub fn n_x(&self) -> usize {
        self.n_x
    }

    /// Number of time levels, `floor(T / dt) + 1`.
    pub fn n_t(&self) -> usize {
        self.n_t
    }

    /// Whether α is within the explicit scheme's stability limit.
    pub fn is_stable(&self) -> bool {
        self.alpha <= STABILITY_LIMIT
    }
}

impl Default for RodParams {
    fn default() -> Self {
        Self {
            length: 1.0,
            stop_time: 1.0,
            dx: 0.1,
            dt: 0.00025,
            alpha: 0.025,
            n_x: 11,
            n_t: 4001,
        }
    }
}
