//! Newton-Raphson method

use super::algorithms::{Algorithm, NewtonSeed};
use super::config::RootScanCfg;
use super::errors::RefinementFailure;
use super::interval::Interval;
use super::refine::{Refine, Stopwatch};
use super::report::RootEstimate;
use tracing::trace;

const ALGORITHM: &str = Algorithm::NewtonRaphson.algorithm_name();


/// Newton-Raphson refiner.
///
/// # Fields
/// - `derivative` : analytic `f'`, supplied by the caller
/// - `seed`       : where inside each bracket to start, see [`NewtonSeed`]
///
/// # Construction
/// - [`NewtonRaphson::new`] starts from the bracket midpoint;
///   [`NewtonRaphson::with_seed`] changes that.
#[derive(Debug, Copy, Clone)]
pub struct NewtonRaphson<D> {
    derivative: D,
    seed: NewtonSeed,
}
impl<D> NewtonRaphson<D>
where D: Fn(f64) -> f64 {
    #[must_use]
    pub fn new(derivative: D) -> Self {
        Self { derivative, seed: NewtonSeed::default() }
    }

    pub fn with_seed(mut self, v: NewtonSeed) -> Self { self.seed = v; self }

    #[inline] #[must_use] pub fn seed(&self) -> NewtonSeed { self.seed }
}

impl<D> Refine for NewtonRaphson<D>
where D: Fn(f64) -> f64 {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NewtonRaphson
    }

    fn refine<F>(
        &self,
        func: &F,
        interval: Interval,
        cfg: &RootScanCfg,
    ) -> Result<RootEstimate, RefinementFailure>
    where F: Fn(f64) -> f64 {
        let x0 = self.seed.seed(interval.low(), interval.high());
        newton(func, &self.derivative, x0, cfg)
    }
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method)
/// from a single starting estimate.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic derivative of `func`
/// - `x0`    : starting estimate
/// - `cfg`   : `tolerance` and `max_iterations` are used
///
/// # Returns
/// [`RootEstimate`] with
/// - `value`      : `x_{n+1}` from the converging step
/// - `iterations` : Newton steps taken
/// - `residual`   : `|x_{n+1} - x_n|` of the converging step
///
/// # Errors
/// - [`RefinementFailure::DerivativeZero`]   : `f'(x_n) == 0`
/// - [`RefinementFailure::NonFiniteIterate`] : `x_{n+1}` is NaN/inf
/// - [`RefinementFailure::DidNotConverge`]   : no step under `tolerance`
///   within `max_iterations`
///
/// # Notes
/// - Convergence is *local only*: the iterate may leave the bracket the seed
///   came from, cycle, or diverge.
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: &RootScanCfg,
) -> Result<RootEstimate, RefinementFailure>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let tolerance = cfg.tolerance();
    let max_iter  = cfg.max_iterations();

    let clock = Stopwatch::start();
    let mut x    = x0;
    let mut step = f64::INFINITY;
    for iter in 0..max_iter {
        let dfx = dfunc(x);
        if dfx == 0.0 {
            return Err(RefinementFailure::DerivativeZero { x, iteration: iter + 1 });
        }

        let x_next = x - func(x) / dfx;
        if !x_next.is_finite() {
            return Err(RefinementFailure::NonFiniteIterate { x, iteration: iter + 1 });
        }

        // check step tolerance
        step = (x_next - x).abs();
        if step < tolerance {
            let estimate = clock.converged(x_next, iter, step);
            trace!(
                algorithm = ALGORITHM,
                x0,
                root = estimate.value,
                iterations = estimate.iterations,
                residual = estimate.residual,
                "converged"
            );
            return Ok(estimate);
        }

        x = x_next;
    }

    Err(RefinementFailure::DidNotConverge { iterations: max_iter, residual: step })
}
