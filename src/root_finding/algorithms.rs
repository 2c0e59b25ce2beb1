//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates the refinement methods,
//! along with the explicit seed/sign policies some of them take.
//! - [`NewtonSeed`]    : where Newton-Raphson starts inside a bracket
//! - [`BisectionSign`] : which half bisection keeps after each update


/// Refinement methods applied to each bracket found by the scan.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bisection,
    NewtonRaphson,
    Secant,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Bisection,
        Algorithm::NewtonRaphson,
        Algorithm::Secant,
    ];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection     => "bisection",
            Algorithm::NewtonRaphson => "newton_raphson",
            Algorithm::Secant        => "secant",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}


/// Starting estimate for Newton-Raphson, derived from a bracket `[low, high]`.
/// - [`NewtonSeed::Midpoint`]   : `(low + high) / 2`
/// - [`NewtonSeed::UpperBound`] : `high`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum NewtonSeed {
    #[default]
    Midpoint,
    UpperBound,
}

impl NewtonSeed {
    #[inline]
    pub fn seed(self, low: f64, high: f64) -> f64 {
        match self {
            NewtonSeed::Midpoint   => (low + high) / 2.0,
            NewtonSeed::UpperBound => high,
        }
    }
}


/// Rule bisection uses to decide which half of `[a, b]` to keep.
///
/// - [`BisectionSign::Bracketed`]
///     - keeps the half whose endpoints still change sign,
///       using the sign of `f(low)` as reference
///     - converges to the bracketed root whether `f` rises or falls
/// - [`BisectionSign::AssumeIncreasing`]
///     - `f(mid) > 0` keeps `[a, mid]`, otherwise `[mid, b]`
///     - only correct when `f` increases through the root; on a falling
///       bracket it keeps the wrong half and converges to `high`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BisectionSign {
    #[default]
    Bracketed,
    AssumeIncreasing,
}
