//! Run orchestration: scan once, then refine every bracket.
//!
//! - [`find_roots`]      : sequential
//! - [`find_roots_par`]  : refinements spread over the `rayon` pool
//! - [`bisection_roots`], [`newton_roots`], [`secant_roots`] : one-call
//!   shortcuts for each method

use rayon::prelude::*;
use tracing::debug;

use super::algorithms::{Algorithm, NewtonSeed};
use super::bisection::Bisection;
use super::config::RootScanCfg;
use super::errors::{RefinementFailure, RootFindingError};
use super::interval::Interval;
use super::newton::NewtonRaphson;
use super::refine::Refine;
use super::report::{DroppedBracket, RootEstimate, RootFindingOutcome, RootFindingRun};
use super::scan::scan;
use super::secant::Secant;


/// Scans `func` over the configured range and refines each bracket with `refiner`.
///
/// # Returns
/// - [`RootFindingRun::NoBracketsFound`] when the scan finds no sign change
/// - [`RootFindingRun::Completed`] otherwise; brackets that fail to refine are
///   left out of `outcomes` and listed in `dropped`
///
/// # Errors
/// Only configuration errors from [`RootScanCfg::validate`]; nothing is
/// evaluated in that case. A failed refinement never aborts the run.
pub fn find_roots<F, R>(
    func: F,
    refiner: &R,
    cfg: &RootScanCfg,
) -> Result<RootFindingRun, RootFindingError>
where
    F: Fn(f64) -> f64,
    R: Refine,
{
    let cfg = cfg.validate()?;
    let brackets = scan(&func, &cfg);
    if brackets.is_empty() {
        debug!(algorithm = %refiner.algorithm(), "no brackets found");
        return Ok(RootFindingRun::NoBracketsFound);
    }

    let results: Vec<_> = brackets
        .iter()
        .map(|&interval| refiner.refine(&func, interval, &cfg))
        .collect();

    Ok(assemble(refiner.algorithm(), brackets, results))
}


/// Same as [`find_roots`], with refinements run on the `rayon` pool.
///
/// Results come back in scan order and match [`find_roots`] apart from
/// `elapsed`. The scan itself stays sequential.
pub fn find_roots_par<F, R>(
    func: F,
    refiner: &R,
    cfg: &RootScanCfg,
) -> Result<RootFindingRun, RootFindingError>
where
    F: Fn(f64) -> f64 + Sync,
    R: Refine + Sync,
{
    let cfg = cfg.validate()?;
    let brackets = scan(&func, &cfg);
    if brackets.is_empty() {
        debug!(algorithm = %refiner.algorithm(), "no brackets found");
        return Ok(RootFindingRun::NoBracketsFound);
    }

    let results: Vec<_> = brackets
        .par_iter()
        .map(|&interval| refiner.refine(&func, interval, &cfg))
        .collect();

    Ok(assemble(refiner.algorithm(), brackets, results))
}


/// Splits per-bracket results into outcomes and dropped brackets, keeping scan order.
fn assemble(
    algorithm: Algorithm,
    brackets: Vec<Interval>,
    results: Vec<Result<RootEstimate, RefinementFailure>>,
) -> RootFindingRun {
    let mut outcomes = Vec::with_capacity(brackets.len());
    let mut dropped  = Vec::new();

    for (&interval, result) in brackets.iter().zip(results) {
        match result {
            Ok(estimate) => outcomes.push(RootFindingOutcome { interval, algorithm, estimate }),
            Err(failure) => {
                debug!(%algorithm, %interval, %failure, "bracket dropped");
                dropped.push(DroppedBracket { interval, failure });
            }
        }
    }

    debug!(
        %algorithm,
        brackets = brackets.len(),
        roots = outcomes.len(),
        dropped = dropped.len(),
        "run finished"
    );

    RootFindingRun::Completed { algorithm, brackets, outcomes, dropped }
}


/// [`find_roots`] with [`Bisection`] using its default sign rule.
pub fn bisection_roots<F>(func: F, cfg: &RootScanCfg) -> Result<RootFindingRun, RootFindingError>
where F: Fn(f64) -> f64 {
    find_roots(func, &Bisection::new(), cfg)
}

/// [`find_roots`] with [`NewtonRaphson`] seeded per `seed`.
pub fn newton_roots<F, D>(
    func: F,
    derivative: D,
    seed: NewtonSeed,
    cfg: &RootScanCfg,
) -> Result<RootFindingRun, RootFindingError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    find_roots(func, &NewtonRaphson::new(derivative).with_seed(seed), cfg)
}

/// [`find_roots`] with [`Secant`].
pub fn secant_roots<F>(func: F, cfg: &RootScanCfg) -> Result<RootFindingRun, RootFindingError>
where F: Fn(f64) -> f64 {
    find_roots(func, &Secant, cfg)
}
