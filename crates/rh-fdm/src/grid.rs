//! Space-time grid and the seeded solution field.

use nalgebra::{DMatrix, DVector};
use rh_core::{Real, check_index};

use crate::axis::{interior_range, pinned_axis};
use crate::error::{FdmError, FdmResult};
use crate::initial::InitialCondition;
use crate::params::{BOUNDARY_VALUE, RodParams};

/// Discretized rod: axes plus an `n_x × n_t` field.
///
/// Rows index space, columns index time. The field is column-major, so each
/// time level is one contiguous run of `n_x` values.
#[derive(Clone, Debug)]
pub struct Grid {
    params: RodParams,
    x: Vec<Real>,
    t: Vec<Real>,
    field: DMatrix<Real>,
}

impl Grid {
    /// Build the axes, allocate the field and seed boundary and initial values.
    pub fn build<F: InitialCondition + ?Sized>(params: RodParams, f: &F) -> FdmResult<Self> {
        let x = pinned_axis(params.n_x(), params.dx(), params.length());
        let t = pinned_axis(params.n_t(), params.dt(), params.stop_time());
        let (n_x, n_t) = (x.len(), t.len());

        let interior = interior_range(n_x);
        let u0 = f.evaluate(&x[interior.clone()]);
        if u0.len() != interior.len() {
            return Err(FdmError::InitialCondition {
                expected: interior.len(),
                got: u0.len(),
            });
        }

        let mut field = DMatrix::<Real>::zeros(n_x, n_t);
        field.row_mut(0).fill(BOUNDARY_VALUE);
        field.row_mut(n_x - 1).fill(BOUNDARY_VALUE);
        for (row, value) in interior.zip(u0) {
            field[(row, 0)] = value;
        }

        tracing::debug!(n_x, n_t, alpha = params.alpha(), "grid seeded");

        Ok(Self {
            params,
            x,
            t,
            field,
        })
    }

    pub fn params(&self) -> &RodParams {
        &self.params
    }

    /// Spatial axis, `n_x` samples from 0 to L.
    pub fn x(&self) -> &[Real] {
        &self.x
    }

    /// Temporal axis, `n_t` samples from 0 to T.
    pub fn t(&self) -> &[Real] {
        &self.t
    }

    pub fn n_x(&self) -> usize {
        self.x.len()
    }

    pub fn n_t(&self) -> usize {
        self.t.len()
    }

    /// Spatial coordinates excluding both boundary points.
    pub fn interior_x(&self) -> &[Real] {
        &self.x[interior_range(self.n_x())]
    }

    pub fn field(&self) -> &DMatrix<Real> {
        &self.field
    }

    /// Mutable field alongside the time axis it is indexed by.
    pub(crate) fn field_and_times_mut(&mut self) -> (&mut DMatrix<Real>, &[Real]) {
        (&mut self.field, &self.t)
    }

    /// Time at column `j`.
    pub fn time_at(&self, j: usize) -> FdmResult<Real> {
        let j = check_index(j, self.n_t(), "time column")?;
        Ok(self.t[j])
    }

    /// Copy of the spatial profile at time column `j`.
    pub fn snapshot_at(&self, j: usize) -> FdmResult<DVector<Real>> {
        let j = check_index(j, self.n_t(), "time column")?;
        Ok(self.field.column(j).into_owned())
    }

    /// Largest `|u|` over the interior at time column `j`.
    pub fn max_abs_interior(&self, j: usize) -> FdmResult<Real> {
        let j = check_index(j, self.n_t(), "time column")?;
        let column = self.field.column(j);
        Ok(interior_range(self.n_x())
            .map(|i| column[i].abs())
            .fold(0.0, Real::max))
    }
}
