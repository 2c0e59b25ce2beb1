//! tests for the secant refiner
use approx::assert_abs_diff_eq;
use rootscan::root_finding::algorithms::Algorithm;
use rootscan::root_finding::config::RootScanCfg;
use rootscan::root_finding::errors::RefinementFailure;
use rootscan::root_finding::interval::Interval;
use rootscan::root_finding::refine::Refine;
use rootscan::root_finding::secant::{secant, Secant};
use test_log::test;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn cfg(tolerance: f64, max_iterations: usize) -> RootScanCfg {
    RootScanCfg::new()
        .with_tolerance(tolerance)
        .with_max_iterations(max_iterations)
}

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;

    let res = secant(f, 1.0, 2.0, &cfg(1e-12, 60))?;

    assert_abs_diff_eq!(res.value, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert!(res.iterations > 1);
    assert!(res.residual < 1e-12);
    Ok(())
}

#[test]
fn one_new_evaluation_per_iteration() -> TestResult {
    let mut evals = 0;
    let res = secant(|x: f64| { evals += 1; x * x * x - x - 2.0 }, 1.0, 2.0, &cfg(1e-10, 60))?;

    // two seeds, then one per non-terminal iteration
    assert_eq!(evals, res.iterations + 1);
    assert_abs_diff_eq!(res.value, 1.5213797068045676, epsilon = 1e-9);
    Ok(())
}

#[test]
fn constant_function_is_degenerate_immediately() {
    let f = |_x: f64| 3.0;

    let err = secant(f, 0.0, 1.0, &cfg(1e-7, 100)).unwrap_err();

    assert_eq!(err, RefinementFailure::DegenerateSecant { x0: 0.0, x1: 1.0, iteration: 1 });
}

#[test]
fn flat_chord_mid_iteration_is_degenerate() {
    // x2 = 0 and f(0) == f(1)
    let f = |x: f64| if x < 0.0 { -1.0 } else { 1.0 };

    let err = secant(f, -1.0, 1.0, &cfg(1e-7, 100)).unwrap_err();

    assert_eq!(err, RefinementFailure::DegenerateSecant { x0: 1.0, x1: 0.0, iteration: 2 });
}

#[test]
fn iteration_limit_is_a_failure() {
    let f = |x: f64| x * x - 2.0;

    let err = secant(f, 1.0, 2.0, &cfg(1e-12, 2)).unwrap_err();

    match err {
        RefinementFailure::DidNotConverge { iterations, residual } => {
            assert_eq!(iterations, 2);
            assert_abs_diff_eq!(residual, 1.0 / 15.0, epsilon = 1e-12);
        }
        other => panic!("unexpected failure: {other}"),
    }
}

#[test]
fn refiner_starts_from_bracket_ends() -> TestResult {
    let f = |x: f64| x * x - 5.0 * x - 2.0;
    let bracket = Interval::new(5.3, 5.4)?;

    let via_trait = Secant.refine(&f, bracket, &cfg(1e-7, 100))?;
    let direct    = secant(f, 5.3, 5.4, &cfg(1e-7, 100))?;

    assert_eq!(Secant.algorithm(), Algorithm::Secant);
    assert_eq!(via_trait.value, direct.value);
    assert_eq!(via_trait.iterations, direct.iterations);
    Ok(())
}
