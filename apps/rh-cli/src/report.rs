//! Solve summaries and CSV export.

use rh_fdm::{HeatEquation, Real, RodParams, analytic};
use serde::Serialize;

use crate::error::{CliError, CliResult};

/// Numbers printed after a solve.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SolveSummary {
    pub params: RodParams,
    pub n_x: usize,
    pub n_t: usize,
    pub stable: bool,
    pub peak_initial: Real,
    pub peak_final: Real,
    /// Largest gap to the exact single-mode solution at T
    pub analytic_error: Real,
    pub solve_time_s: Option<Real>,
}

impl SolveSummary {
    pub fn from_solved(
        heat: &HeatEquation,
        amplitude: Real,
        solve_time_s: Option<Real>,
    ) -> CliResult<Self> {
        let last = heat.t().len() - 1;
        Ok(Self {
            params: *heat.params(),
            n_x: heat.x().len(),
            n_t: heat.t().len(),
            stable: heat.is_stable(),
            peak_initial: heat.max_abs_interior(0)?,
            peak_final: heat.max_abs_interior(last)?,
            analytic_error: analytic::max_abs_error(heat, last, amplitude)?,
            solve_time_s,
        })
    }

    pub fn print(&self) {
        let p = &self.params;
        println!("Grid: {} x {} (space x time)", self.n_x, self.n_t);
        println!("  L = {}, T = {}, dx = {}, dt = {}", p.length(), p.stop_time(), p.dx(), p.dt());
        let note = if self.stable { "" } else { "  (UNSTABLE: > 0.5)" };
        println!("  alpha = {}{}", p.alpha(), note);
        println!("Peak |u|: {:.6e} -> {:.6e}", self.peak_initial, self.peak_final);
        println!("Max error vs exact sine mode at T: {:.3e}", self.analytic_error);
        if let Some(s) = self.solve_time_s {
            println!("Solve time: {:.3}s", s);
        }
    }
}

/// Time columns written by [`snapshots_csv`]: every `every`-th one, plus the last.
pub fn export_columns(n_t: usize, every: usize) -> CliResult<Vec<usize>> {
    if every == 0 {
        return Err(CliError::InvalidOption {
            what: "--every must be at least 1".to_string(),
        });
    }
    let mut cols: Vec<usize> = (0..n_t).step_by(every).collect();
    if let Some(&last) = cols.last() {
        if last + 1 != n_t {
            cols.push(n_t - 1);
        }
    }
    Ok(cols)
}

/// One row per spatial sample: `x` followed by `u` at each exported time.
pub fn snapshots_csv(heat: &HeatEquation, every: usize) -> CliResult<String> {
    let cols = export_columns(heat.t().len(), every)?;

    let mut csv = String::from("x");
    for &j in &cols {
        csv.push_str(&format!(",t={}", heat.t()[j]));
    }
    csv.push('\n');

    let field = heat.field();
    for (i, x) in heat.x().iter().enumerate() {
        csv.push_str(&x.to_string());
        for &j in &cols {
            csv.push_str(&format!(",{}", field[(i, j)]));
        }
        csv.push('\n');
    }
    Ok(csv)
}

/// Two-column `x,u` listing of one time level.
pub fn snapshot_csv(heat: &HeatEquation, j: usize) -> CliResult<String> {
    let column = heat.snapshot_at(j)?;
    let mut csv = String::from("x,u\n");
    for (x, u) in heat.x().iter().zip(column.iter()) {
        csv.push_str(&format!("{},{}\n", x, u));
    }
    Ok(csv)
}
