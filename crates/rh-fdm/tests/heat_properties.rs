//! End-to-end checks of the explicit heat solver.

use std::f64::consts::PI;

use rh_core::{Real, Tolerances, nearly_equal};
use rh_fdm::{ExplicitEuler, FdmError, HeatEquation, Pointwise, SineProfile};

fn sine_rod() -> HeatEquation {
    HeatEquation::new(&SineProfile::new(1.0, 1.0), 1.0, 1.0, 0.1, 0.00025).unwrap()
}

#[test]
fn reference_configuration_grid() {
    let heat = sine_rod();
    assert_eq!(heat.alpha(), 0.025);
    assert_eq!(heat.x().len(), 11);
    assert_eq!(heat.t().len(), 4001);
    assert_eq!(*heat.x().last().unwrap(), 1.0);
    assert_eq!(*heat.t().last().unwrap(), 1.0);
    assert_eq!(heat.field().shape(), (11, 4001));
}

#[test]
fn non_positive_parameters_fail_construction() {
    let f = SineProfile::new(1.0, 1.0);
    for (l, t, dx, dt) in [
        (0.0, 1.0, 0.1, 0.001),
        (1.0, 0.0, 0.1, 0.001),
        (1.0, 1.0, -0.1, 0.001),
        (1.0, 1.0, 0.1, 0.0),
    ] {
        let err = HeatEquation::new(&f, l, t, dx, dt).unwrap_err();
        assert!(
            matches!(err, FdmError::InvalidParameter { .. }),
            "unexpected error {err:?}"
        );
    }
}

#[test]
fn initial_condition_is_seeded_before_solving() {
    let f = |x: &[Real]| x.iter().map(|v| (PI * v).sin()).collect::<Vec<_>>();
    let heat = HeatEquation::new(&f, 1.0, 0.01, 0.1, 0.001).unwrap();

    let n_x = heat.x().len();
    let expected = f(&heat.x()[1..n_x - 1]);
    let column = heat.field().column(0);
    for (k, e) in expected.iter().enumerate() {
        assert_eq!(column[k + 1], *e);
    }
}

#[test]
fn boundaries_stay_zero_before_and_after_solve() {
    let mut heat = sine_rod();
    let check = |heat: &HeatEquation| {
        let n_x = heat.x().len();
        for j in 0..heat.t().len() {
            assert_eq!(heat.field()[(0, j)], 0.0);
            assert_eq!(heat.field()[(n_x - 1, j)], 0.0);
        }
    };
    check(&heat);
    heat.solve();
    check(&heat);
}

#[test]
fn diffusion_dissipates_initial_peak() {
    let mut heat = sine_rod();
    heat.solve();

    let last = heat.t().len() - 1;
    let peak_0 = heat.max_abs_interior(0).unwrap();
    let peak_end = heat.max_abs_interior(last).unwrap();
    assert!(peak_end < peak_0, "{peak_end} !< {peak_0}");
    // First mode decays like exp(-pi^2 t): about 5e-5 of the peak by t = 1
    assert!(peak_end < 1e-3 * peak_0);
}

#[test]
fn solving_twice_is_idempotent() {
    let mut heat = sine_rod();
    heat.solve();
    let once = heat.field().clone();
    heat.solve();
    assert_eq!(&once, heat.field());
    assert!(heat.is_solved());
}

#[test]
fn pure_run_matches_in_place_solve() {
    let mut heat = sine_rod();
    let pure = ExplicitEuler::run(heat.grid());
    heat.solve();
    assert_eq!(&pure, heat.field());
}

#[test]
fn half_alpha_averages_neighbors() {
    // 5 interior points on dyadic steps: alpha = 0.0078125 / 0.125^2 = 0.5
    let u0 = [0.3, -1.2, 2.5, 0.75, 4.0];
    let f = Pointwise(|x: Real| {
        let k = (x * 8.0).round() as usize;
        if (1..=5).contains(&k) { u0[k - 1] } else { 0.0 }
    });
    let mut heat = HeatEquation::new(&f, 0.75, 0.0078125, 0.125, 0.0078125).unwrap();
    assert_eq!(heat.alpha(), 0.5);
    assert_eq!(heat.x().len(), 7);
    assert_eq!(heat.t().len(), 2);

    heat.solve();
    assert_eq!(heat.operator().unwrap().diag(), 0.0);

    let before = heat.snapshot_at(0).unwrap();
    let after = heat.snapshot_at(1).unwrap();
    assert_eq!(&before.as_slice()[1..6], &u0);

    let tol = Tolerances::default();
    for i in 1..6 {
        let mean = 0.5 * (before[i - 1] + before[i + 1]);
        assert!(
            nearly_equal(after[i], mean, tol),
            "row {i}: {} vs {mean}",
            after[i]
        );
    }
}

#[test]
fn floor_division_drops_a_sample_on_inexact_ratio() {
    // 0.6 / 0.1 evaluates to 5.999..., so floor + 1 gives 6 samples, not 7
    let heat = HeatEquation::new(&SineProfile::new(1.0, 0.6), 0.6, 0.01, 0.1, 0.001).unwrap();
    assert_eq!(heat.x().len(), 6);
    assert_eq!(*heat.x().last().unwrap(), 0.6);
    assert_eq!(heat.x()[4], 4.0 * 0.1);
}

#[test]
fn unstable_ratio_runs_without_error() {
    // alpha = 0.6 > 0.5: the solve still completes; the output just diverges
    let mut heat = HeatEquation::new(&SineProfile::new(1.0, 1.0), 1.0, 0.3, 0.1, 0.006).unwrap();
    assert!(!heat.is_stable());
    heat.solve();
    assert!(heat.is_solved());
}

#[test]
fn snapshot_accessor_bounds() {
    let heat = sine_rod();
    let n_t = heat.t().len();

    let s0 = heat.snapshot_at(0).unwrap();
    assert_eq!(s0, heat.field().column(0).into_owned());

    assert_eq!(
        heat.snapshot_at(n_t).unwrap_err(),
        FdmError::IndexOutOfBounds {
            index: n_t,
            len: n_t
        }
    );
}

#[test]
fn progress_callback_sees_each_step_in_order() {
    let mut heat = HeatEquation::new(&SineProfile::new(1.0, 1.0), 1.0, 0.01, 0.1, 0.001).unwrap();
    let mut steps = Vec::new();
    let mut cb = |p: &rh_fdm::SolveProgress| steps.push(p.step);
    heat.solve_with_progress(Some(&mut cb));

    let expected: Vec<usize> = (1..heat.t().len()).collect();
    assert_eq!(steps, expected);
}
