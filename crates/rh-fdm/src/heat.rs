//! Solver facade: construct, solve, inspect.

use nalgebra::{DMatrix, DVector};
use rh_core::Real;
use rh_core::timing::Timer;

use crate::error::FdmResult;
use crate::grid::Grid;
use crate::initial::InitialCondition;
use crate::operator::Tridiagonal;
use crate::params::{RodParams, STABILITY_LIMIT};
use crate::stepper::{ExplicitEuler, SolveProgress};

/// Heat equation on a rod with both ends held at zero.
///
/// Construction validates the parameters and seeds the field; [`solve`]
/// fills in every later time level.
///
/// [`solve`]: HeatEquation::solve
#[derive(Clone, Debug)]
pub struct HeatEquation {
    grid: Grid,
    operator: Option<Tridiagonal>,
    solved: bool,
}

impl HeatEquation {
    /// Validate `L, T, dx, dt`, build the grid and seed it with `f`.
    pub fn new<F: InitialCondition + ?Sized>(
        f: &F,
        length: Real,
        stop_time: Real,
        dx: Real,
        dt: Real,
    ) -> FdmResult<Self> {
        let params = RodParams::new(length, stop_time, dx, dt)?;
        Self::from_params(params, f)
    }

    pub fn from_params<F: InitialCondition + ?Sized>(params: RodParams, f: &F) -> FdmResult<Self> {
        Ok(Self {
            grid: Grid::build(params, f)?,
            operator: None,
            solved: false,
        })
    }

    /// Run the explicit Euler scheme over all time levels.
    pub fn solve(&mut self) {
        self.solve_with_progress(None);
    }

    /// As [`Self::solve`], reporting after every step.
    pub fn solve_with_progress(&mut self, on_progress: Option<&mut dyn FnMut(&SolveProgress)>) {
        let params = *self.grid.params();
        if !params.is_stable() {
            tracing::warn!(
                alpha = params.alpha(),
                limit = STABILITY_LIMIT,
                "diffusion number above stability limit; solution may diverge"
            );
        }
        tracing::info!(
            n_x = self.grid.n_x(),
            n_t = self.grid.n_t(),
            alpha = params.alpha(),
            "solving"
        );

        let timer = Timer::start("explicit_euler");
        let stepper = ExplicitEuler::for_grid(&self.grid);
        let (field, t) = self.grid.field_and_times_mut();
        stepper.march(field, t, on_progress);
        timer.stop_and_report();

        self.operator = Some(stepper.into_operator());
        self.solved = true;
        tracing::info!("solve finished");
    }

    /// Spatial profile at time column `j`.
    pub fn snapshot_at(&self, j: usize) -> FdmResult<DVector<Real>> {
        self.grid.snapshot_at(j)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn params(&self) -> &RodParams {
        self.grid.params()
    }

    pub fn length(&self) -> Real {
        self.params().length()
    }

    pub fn stop_time(&self) -> Real {
        self.params().stop_time()
    }

    pub fn dx(&self) -> Real {
        self.params().dx()
    }

    pub fn dt(&self) -> Real {
        self.params().dt()
    }

    pub fn alpha(&self) -> Real {
        self.params().alpha()
    }

    pub fn is_stable(&self) -> bool {
        self.params().is_stable()
    }

    pub fn x(&self) -> &[Real] {
        self.grid.x()
    }

    pub fn t(&self) -> &[Real] {
        self.grid.t()
    }

    pub fn field(&self) -> &DMatrix<Real> {
        self.grid.field()
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Operator from the most recent solve; `None` before the first one.
    pub fn operator(&self) -> Option<&Tridiagonal> {
        self.operator.as_ref()
    }

    pub fn max_abs_interior(&self, j: usize) -> FdmResult<Real> {
        self.grid.max_abs_interior(j)
    }
}
