use super::algorithms::{Algorithm, BisectionSign};
use super::config::RootScanCfg;
use super::errors::RefinementFailure;
use super::interval::Interval;
use super::refine::{Refine, Stopwatch};
use super::report::RootEstimate;
use super::signs::same_sign;
use tracing::trace;

const ALGORITHM: &str = Algorithm::Bisection.algorithm_name();


/// Bisection refiner.
///
/// Holds only the [`BisectionSign`] policy; defaults to
/// [`BisectionSign::Bracketed`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Bisection {
    sign: BisectionSign,
}
impl Bisection {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_sign(mut self, v: BisectionSign) -> Self { self.sign = v; self }

    #[inline] #[must_use] pub fn sign(&self) -> BisectionSign { self.sign }
}

impl Refine for Bisection {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bisection
    }

    fn refine<F>(
        &self,
        func: &F,
        interval: Interval,
        cfg: &RootScanCfg,
    ) -> Result<RootEstimate, RefinementFailure>
    where F: Fn(f64) -> f64 {
        bisection(func, interval, self.sign, cfg)
    }
}


/// Midpoint of [a, b]
#[inline]
fn calculate_bisection(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}


/// Finds a root inside `interval` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func`     - The function whose root is to be found.
/// ├ `interval` - Starting bracket `[low, high]`.
/// ├ `sign`     - Which half to keep after each update, see [`BisectionSign`].
/// └ `cfg`      - `tolerance` and `max_iterations` are used.
///
/// # Returns
///
/// [`RootEstimate`] with
/// ├ `value`      : midpoint evaluated on the converging iteration
/// ├ `iterations` : number of halvings performed
/// └ `residual`   : `|b - a|` after the last halving
///
/// # Errors
///
/// └ [`RefinementFailure::DidNotConverge`] - `|b - a|` still >= `tolerance`
///   after `max_iterations` halvings.
///
/// # Notes
/// ├ The width halves every iteration, so convergence takes
/// │ `ceil(log2((high - low) / tolerance))` iterations whatever `f` looks like.
/// ├ [`BisectionSign::Bracketed`] evaluates `f(low)` once up front; `f(low)`
/// │ should be nonzero.
/// └ [`BisectionSign::AssumeIncreasing`] never evaluates the endpoints.
pub fn bisection<F>(
    mut func: F,
    interval: Interval,
    sign: BisectionSign,
    cfg: &RootScanCfg,
) -> Result<RootEstimate, RefinementFailure>
where F: FnMut(f64) -> f64 {

    let tolerance = cfg.tolerance();
    let max_iter  = cfg.max_iterations();

    let mut a = interval.low();
    let mut b = interval.high();

    // reference sign for the bracketed rule
    let mut fa = match sign {
        BisectionSign::Bracketed        => func(a),
        BisectionSign::AssumeIncreasing => f64::NAN,
    };

    let clock = Stopwatch::start();
    for iter in 0..max_iter {
        let midpoint = calculate_bisection(a, b);
        let fm       = func(midpoint);

        // shrink interval
        match sign {
            BisectionSign::AssumeIncreasing => {
                if fm > 0.0 { b = midpoint; } else { a = midpoint; }
            }
            BisectionSign::Bracketed => {
                if fm != 0.0 && same_sign(fa, fm) {
                    a  = midpoint;
                    fa = fm;
                } else {
                    b = midpoint;
                }
            }
        }

        // check width tolerance
        let width = (b - a).abs();
        if width < tolerance {
            let estimate = clock.converged(midpoint, iter, width);
            trace!(
                algorithm = ALGORITHM,
                root = estimate.value,
                iterations = estimate.iterations,
                residual = estimate.residual,
                "converged"
            );
            return Ok(estimate);
        }
    }

    Err(RefinementFailure::DidNotConverge {
        iterations: max_iter,
        residual:   (b - a).abs(),
    })
}
