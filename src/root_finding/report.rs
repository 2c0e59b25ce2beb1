//! Result types returned by refinement and by a full root-finding run.
//!
//! - [`RootEstimate`]       : one converged refinement
//! - [`RootFindingOutcome`] : a bracket paired with its estimate
//! - [`DroppedBracket`]     : a bracket whose refinement failed
//! - [`RootFindingRun`]     : everything one run produced

use std::time::Duration;

use super::algorithms::Algorithm;
use super::errors::RefinementFailure;
use super::interval::Interval;


/// Converged root estimate.
///
/// [`RootEstimate`]
/// - `value`      : root approximation
/// - `iterations` : completed iterations, 1-based (>= 1)
/// - `residual`   : step magnitude measured at convergence (>= 0);
///                  the interval width for bisection, `|x_n - x_{n-1}|` otherwise.
///                  Not `|f(value)|`.
/// - `elapsed`    : wall-clock time of the refinement loop, informational only
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootEstimate {
    pub value      : f64,
    pub iterations : usize,
    pub residual   : f64,
    pub elapsed    : Duration,
}

impl RootEstimate {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}


/// A bracket found by the scan and the estimate refined from it.
///
/// For [`Algorithm::NewtonRaphson`] the interval is the bracket the seed
/// was taken from; the root may lie outside it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootFindingOutcome {
    pub interval  : Interval,
    pub algorithm : Algorithm,
    pub estimate  : RootEstimate,
}

impl RootFindingOutcome {
    #[inline] pub fn root(&self) -> f64 { self.estimate.value }
    #[inline] pub fn iterations(&self) -> usize { self.estimate.iterations }
    #[inline] pub fn residual(&self) -> f64 { self.estimate.residual }
}


/// A bracket left out of the outcomes, with the reason.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DroppedBracket {
    pub interval : Interval,
    pub failure  : RefinementFailure,
}


/// Result of one root-finding run.
///
/// Variants:
/// ├ [`RootFindingRun::NoBracketsFound`]
/// │   The scan saw no sign change in range; no roots are locatable there.
/// │
/// └ [`RootFindingRun::Completed`]
///     ├ `algorithm` : refinement method used
///     ├ `brackets`  : every bracket the scan found, ascending
///     ├ `outcomes`  : converged brackets, in scan order
///     └ `dropped`   : brackets whose refinement failed, in scan order
///
/// `outcomes.len() + dropped.len() == brackets.len()`.
///
/// # Warning
/// `Completed` with empty `outcomes` is possible: brackets were found but
/// none converged. That is distinct from `NoBracketsFound`.
#[derive(Debug, Clone, PartialEq)]
pub enum RootFindingRun {
    NoBracketsFound,

    Completed {
        algorithm : Algorithm,
        brackets  : Vec<Interval>,
        outcomes  : Vec<RootFindingOutcome>,
        dropped   : Vec<DroppedBracket>,
    },
}

impl RootFindingRun {
    #[inline]
    pub fn no_brackets_found(&self) -> bool {
        matches!(self, RootFindingRun::NoBracketsFound)
    }

    /// `true` when there is no converged outcome at all.
    pub fn is_empty(&self) -> bool {
        self.outcomes().is_empty()
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            RootFindingRun::NoBracketsFound => None,
            RootFindingRun::Completed { algorithm, .. } => Some(*algorithm),
        }
    }

    pub fn brackets(&self) -> &[Interval] {
        match self {
            RootFindingRun::NoBracketsFound => &[],
            RootFindingRun::Completed { brackets, .. } => brackets,
        }
    }

    pub fn outcomes(&self) -> &[RootFindingOutcome] {
        match self {
            RootFindingRun::NoBracketsFound => &[],
            RootFindingRun::Completed { outcomes, .. } => outcomes,
        }
    }

    pub fn dropped(&self) -> &[DroppedBracket] {
        match self {
            RootFindingRun::NoBracketsFound => &[],
            RootFindingRun::Completed { dropped, .. } => dropped,
        }
    }

    /// Root values in scan order.
    pub fn roots(&self) -> Vec<f64> {
        self.outcomes().iter().map(RootFindingOutcome::root).collect()
    }

    /// Consumes the run; `None` for [`RootFindingRun::NoBracketsFound`].
    pub fn into_outcomes(self) -> Option<Vec<RootFindingOutcome>> {
        match self {
            RootFindingRun::NoBracketsFound => None,
            RootFindingRun::Completed { outcomes, .. } => Some(outcomes),
        }
    }
}
