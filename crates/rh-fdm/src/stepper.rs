//! Forward-Euler time marching.

use nalgebra::DMatrix;
use rh_core::Real;

use crate::axis::interior_range;
use crate::grid::Grid;
use crate::operator::Tridiagonal;

/// Progress of a running solve, reported after each completed step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveProgress {
    /// Steps completed so far (1-based)
    pub step: usize,
    /// Total steps in this solve, `n_t - 1`
    pub total_steps: usize,
    /// Time of the column just written
    pub time: Real,
}

impl SolveProgress {
    pub fn fraction(&self) -> Real {
        if self.total_steps == 0 {
            1.0
        } else {
            self.step as Real / self.total_steps as Real
        }
    }
}

/// Explicit Euler stepper over the interior rows of a field.
#[derive(Clone, Debug)]
pub struct ExplicitEuler {
    operator: Tridiagonal,
}

impl ExplicitEuler {
    /// Build the interior operator for diffusion number `alpha`.
    pub fn new(alpha: Real, n_interior: usize) -> Self {
        Self {
            operator: Tridiagonal::explicit_heat(n_interior, alpha),
        }
    }

    /// Stepper sized for `grid`'s interior.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.params().alpha(), interior_range(grid.n_x()).len())
    }

    pub fn operator(&self) -> &Tridiagonal {
        &self.operator
    }

    pub fn into_operator(self) -> Tridiagonal {
        self.operator
    }

    /// Write interior rows of column `i + 1` from column `i`.
    ///
    /// Boundary rows of column `i + 1` are left untouched.
    ///
    /// # Panics
    /// If `i + 1` is not a column of `field`, or the field's interior size
    /// differs from the operator's.
    pub fn step(&self, field: &mut DMatrix<Real>, i: usize) {
        let n_x = field.nrows();
        let interior = interior_range(n_x);
        if interior.is_empty() {
            return;
        }

        // Column-major: column j lives at [j * n_x, (j + 1) * n_x).
        let (head, tail) = field.as_mut_slice().split_at_mut((i + 1) * n_x);
        let current = &head[i * n_x..];
        let next = &mut tail[..n_x];
        self.operator
            .apply_auto_into(&current[interior.clone()], &mut next[interior]);
    }

    /// Advance every column after the first, in increasing time order.
    ///
    /// `times` supplies the time of each column for progress reporting.
    pub fn march(
        &self,
        field: &mut DMatrix<Real>,
        times: &[Real],
        mut on_progress: Option<&mut dyn FnMut(&SolveProgress)>,
    ) {
        let total_steps = field.ncols().saturating_sub(1);
        for i in 0..total_steps {
            self.step(field, i);

            let progress = SolveProgress {
                step: i + 1,
                total_steps,
                time: times.get(i + 1).copied().unwrap_or(Real::NAN),
            };
            tracing::trace!(step = progress.step, time = progress.time, "step");
            if let Some(cb) = on_progress.as_deref_mut() {
                cb(&progress);
            }
        }
    }

    /// Solve on a copy of `grid`'s seeded field and return the full solution.
    pub fn run(grid: &Grid) -> DMatrix<Real> {
        let mut field = grid.field().clone();
        Self::for_grid(grid).march(&mut field, grid.t(), None);
        field
    }
}
