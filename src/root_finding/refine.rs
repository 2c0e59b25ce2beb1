//! Shared refinement contract.
//!
//! Every method runs at most `max_iterations` iterations and converges on the
//! first iteration whose step magnitude is `< tolerance`, reporting
//! `iterations = index + 1` and that step magnitude as the residual.
//! Running out of iterations is [`RefinementFailure::DidNotConverge`].

use std::time::Instant;

use super::algorithms::Algorithm;
use super::config::RootScanCfg;
use super::errors::RefinementFailure;
use super::interval::Interval;
use super::report::RootEstimate;


/// Turns a bracket into a root estimate.
///
/// Implemented by [`Bisection`](super::bisection::Bisection),
/// [`NewtonRaphson`](super::newton::NewtonRaphson) and
/// [`Secant`](super::secant::Secant). Implementors hold no mutable state, so
/// one value can refine many brackets, concurrently if it is `Sync`.
pub trait Refine {
    fn algorithm(&self) -> Algorithm;

    /// Refines `interval` using `cfg.tolerance()` and `cfg.max_iterations()`.
    fn refine<F>(
        &self,
        func: &F,
        interval: Interval,
        cfg: &RootScanCfg,
    ) -> Result<RootEstimate, RefinementFailure>
    where F: Fn(f64) -> f64;
}


/// Times a refinement loop; the reading never affects control flow.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Stopwatch(Instant);

impl Stopwatch {
    #[inline]
    pub(crate) fn start() -> Self {
        Stopwatch(Instant::now())
    }

    /// Builds the estimate for a loop converging at 0-based `index`.
    #[inline]
    pub(crate) fn converged(self, value: f64, index: usize, residual: f64) -> RootEstimate {
        RootEstimate {
            value,
            iterations: index + 1,
            residual,
            elapsed: self.0.elapsed(),
        }
    }
}
