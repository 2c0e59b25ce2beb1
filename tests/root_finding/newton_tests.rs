//! tests for the Newton-Raphson refiner
use approx::assert_abs_diff_eq;
use rootscan::root_finding::algorithms::{Algorithm, NewtonSeed};
use rootscan::root_finding::config::RootScanCfg;
use rootscan::root_finding::errors::RefinementFailure;
use rootscan::root_finding::interval::Interval;
use rootscan::root_finding::newton::{newton, NewtonRaphson};
use rootscan::root_finding::refine::Refine;
use test_log::test;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn cfg(tolerance: f64, max_iterations: usize) -> RootScanCfg {
    RootScanCfg::new()
        .with_tolerance(tolerance)
        .with_max_iterations(max_iterations)
}

#[test]
fn finds_sqrt_2_with_analytic_derivative() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let res = newton(f, df, 1.0, &cfg(1e-12, 50))?;

    assert_abs_diff_eq!(res.value, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert!(res.iterations > 1);
    assert!(res.residual < 1e-12);
    Ok(())
}

#[test]
fn linear_function_converges_on_second_step() -> TestResult {
    // first step lands on the root, second step measures zero
    let f  = |x: f64| 2.0 * x - 6.0;
    let df = |_x: f64| 2.0;

    let res = newton(f, df, 10.0, &cfg(1e-9, 20))?;

    assert_eq!(res.value, 3.0);
    assert_eq!(res.iterations, 2);
    assert_eq!(res.residual, 0.0);
    Ok(())
}

#[test]
fn zero_derivative_on_first_iteration() {
    let f  = |x: f64| x - 1.0;
    let df = |_x: f64| 0.0;

    let err = newton(f, df, 0.25, &cfg(1e-9, 20)).unwrap_err();

    assert_eq!(err, RefinementFailure::DerivativeZero { x: 0.25, iteration: 1 });
}

#[test]
fn zero_derivative_reached_mid_iteration() {
    let f  = |x: f64| x - 2.0;
    let df = |x: f64| if x == 2.0 { 0.0 } else { 1.0 };

    let err = newton(f, df, 0.0, &cfg(1e-9, 20)).unwrap_err();

    assert_eq!(err, RefinementFailure::DerivativeZero { x: 2.0, iteration: 2 });
    assert_eq!(err.iteration(), 2);
}

#[test]
fn two_cycle_runs_out_of_iterations() {
    // x^3 - 2x + 2 from 0 alternates 0 -> 1 -> 0 exactly
    let f  = |x: f64| x * x * x - 2.0 * x + 2.0;
    let df = |x: f64| 3.0 * x * x - 2.0;

    let err = newton(f, df, 0.0, &cfg(1e-9, 50)).unwrap_err();

    assert_eq!(err, RefinementFailure::DidNotConverge { iterations: 50, residual: 1.0 });
}

#[test]
fn vanishing_derivative_gives_non_finite_iterate() {
    let f  = |_x: f64| 1.0;
    let df = |_x: f64| 1e-320;

    let err = newton(f, df, 0.5, &cfg(1e-9, 20)).unwrap_err();

    assert_eq!(err, RefinementFailure::NonFiniteIterate { x: 0.5, iteration: 1 });
}

#[test]
fn seed_policies() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;
    let bracket = Interval::new(1.0, 2.0)?;

    assert_eq!(NewtonSeed::default(), NewtonSeed::Midpoint);
    assert_eq!(NewtonSeed::Midpoint.seed(1.0, 2.0), 1.5);
    assert_eq!(NewtonSeed::UpperBound.seed(1.0, 2.0), 2.0);

    let midpoint = NewtonRaphson::new(df);
    let upper    = NewtonRaphson::new(df).with_seed(NewtonSeed::UpperBound);
    assert_eq!(midpoint.seed(), NewtonSeed::Midpoint);
    assert_eq!(upper.algorithm(), Algorithm::NewtonRaphson);

    let from_mid   = midpoint.refine(&f, bracket, &cfg(1e-12, 50))?;
    let from_upper = upper.refine(&f, bracket, &cfg(1e-12, 50))?;
    let direct     = newton(f, df, 2.0, &cfg(1e-12, 50))?;

    assert_abs_diff_eq!(from_mid.value,   2.0_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(from_upper.value, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(from_upper.value, direct.value);
    assert_eq!(from_upper.iterations, direct.iterations);
    Ok(())
}
