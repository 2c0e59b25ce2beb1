//! Root-finding error types.
//!
//! ┌ [`RootFindingError`]  : invalid input, rejected before any work is done
//! │   ├ invalid scan parameters (start, step)
//! │   ├ invalid refinement parameters (tolerance, max_iterations)
//! │   └ invalid interval bounds
//! │
//! └ [`RefinementFailure`] : one bracket could not be refined
//!     ├ iteration budget exhausted
//!     ├ degenerate secant (flat chord)
//!     ├ zero derivative (Newton-Raphson)
//!     └ non-finite iterate
//!
//! A [`RefinementFailure`] never aborts a run; the bracket is dropped from
//! the outcomes and kept as a [`DroppedBracket`](super::report::DroppedBracket).


use thiserror::Error;


/// Configuration and input errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RootFindingError {
    #[error("invalid scan start: must be finite. got {got}")]
    InvalidScanStart { got: f64 },

    #[error("invalid scan step: must be finite and > 0. got {got}")]
    InvalidScanStep { got: f64 },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iterations: must be >= 1. got max_iterations={got}")]
    InvalidMaxIterations { got: usize },

    #[error("invalid interval: bounds must be finite with low <= high. got [{low}, {high}]")]
    InvalidInterval { low: f64, high: f64 },
}


/// Why refining a single bracket produced no estimate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RefinementFailure {
    #[error("no convergence after {iterations} iterations, last step={residual}")]
    DidNotConverge { iterations: usize, residual: f64 },

    #[error("degenerate secant at iteration {iteration}: f({x0}) == f({x1})")]
    DegenerateSecant { x0: f64, x1: f64, iteration: usize },

    #[error("zero derivative at iteration {iteration}: f'({x}) == 0")]
    DerivativeZero { x: f64, iteration: usize },

    #[error("non-finite iterate at iteration {iteration}, stepping from x={x}")]
    NonFiniteIterate { x: f64, iteration: usize },
}

impl RefinementFailure {
    /// 1-based iteration the failure was detected on.
    pub fn iteration(&self) -> usize {
        match *self {
            RefinementFailure::DidNotConverge { iterations, .. } => iterations,
            RefinementFailure::DegenerateSecant { iteration, .. }
            | RefinementFailure::DerivativeZero { iteration, .. }
            | RefinementFailure::NonFiniteIterate { iteration, .. } => iteration,
        }
    }
}
