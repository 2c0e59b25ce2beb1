use super::algorithms::Algorithm;
use super::config::RootScanCfg;
use super::errors::RefinementFailure;
use super::interval::Interval;
use super::refine::{Refine, Stopwatch};
use super::report::RootEstimate;
use tracing::trace;

const ALGORITHM: &str = Algorithm::Secant.algorithm_name();


/// Secant refiner. Starts from the two ends of each bracket.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Secant;

impl Refine for Secant {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Secant
    }

    fn refine<F>(
        &self,
        func: &F,
        interval: Interval,
        cfg: &RootScanCfg,
    ) -> Result<RootEstimate, RefinementFailure>
    where F: Fn(f64) -> f64 {
        secant(func, interval.low(), interval.high(), cfg)
    }
}


/// Calculates the secant x-intercept for the line
/// connecting `(x0, fx0)` and `(x1, fx1)`
///
/// # Returns
/// - `Some(x2)` : `x1 - fx1 * (x1 - x0) / (fx1 - fx0)`
/// - `None`     : `fx1 == fx0`, the chord is flat
#[inline]
fn calculate_secant_x_intercept(
    (x0, fx0): (f64, f64),
    (x1, fx1): (f64, f64),
) -> Option<f64> {
    let denom = fx1 - fx0;
    if denom == 0.0 {
        return None;
    }

    Some(x1 - fx1 * (x1 - x0) / denom)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess (bracket `low`)
/// - `x1`   : Second initial guess (bracket `high`)
/// - `cfg`  : `tolerance` and `max_iterations` are used
///
/// # Returns
/// [`RootEstimate`] with
/// - `value`      : `x_{n+1}` from the converging step
/// - `iterations` : secant steps taken
/// - `residual`   : `|x_{n+1} - x_n|` of the converging step
///
/// # Errors
/// - [`RefinementFailure::DegenerateSecant`] : `f(x_n) == f(x_{n-1})`; reported
///   on the iteration it occurs, nothing further is attempted
/// - [`RefinementFailure::NonFiniteIterate`] : `x_{n+1}` is NaN/inf
/// - [`RefinementFailure::DidNotConverge`]   : no step under `tolerance`
///   within `max_iterations`
///
/// # Behavior
/// - Update:
///       x_{n+1} = x_n - f(x_n) * (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))
/// - `(x_{n-1}, x_n) <- (x_n, x_{n+1})` after each non-terminal step, with the
///   function values carried along; one new evaluation per iteration.
///
/// # Warning
/// - Iterates are not confined to the starting bracket.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: &RootScanCfg,
) -> Result<RootEstimate, RefinementFailure>
where F: FnMut(f64) -> f64 {

    let tolerance = cfg.tolerance();
    let max_iter  = cfg.max_iterations();

    let clock = Stopwatch::start();
    let mut x_parent2 = x0;
    let mut x_parent1 = x1;
    let mut f_parent2 = func(x0);
    let mut f_parent1 = func(x1);
    let mut step = f64::INFINITY;
    for iter in 0..max_iter {
        let Some(x_next) = calculate_secant_x_intercept(
            (x_parent2, f_parent2), (x_parent1, f_parent1)
        ) else {
            return Err(RefinementFailure::DegenerateSecant {
                x0: x_parent2,
                x1: x_parent1,
                iteration: iter + 1,
            });
        };
        if !x_next.is_finite() {
            return Err(RefinementFailure::NonFiniteIterate { x: x_parent1, iteration: iter + 1 });
        }

        // check step tolerance
        step = (x_next - x_parent1).abs();
        if step < tolerance {
            let estimate = clock.converged(x_next, iter, step);
            trace!(
                algorithm = ALGORITHM,
                root = estimate.value,
                iterations = estimate.iterations,
                residual = estimate.residual,
                "converged"
            );
            return Ok(estimate);
        }

        x_parent2 = x_parent1;
        f_parent2 = f_parent1;
        x_parent1 = x_next;
        f_parent1 = func(x_next);
    }

    Err(RefinementFailure::DidNotConverge { iterations: max_iter, residual: step })
}
