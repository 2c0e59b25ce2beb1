//! Run configuration shared by the scan and every refinement method.
//!
//! [`RootScanCfg`]
//! ├ `scan_start`     : first sample point
//! ├ `scan_step`      : distance between sample points (> 0)
//! ├ `scan_max_steps` : number of adjacent pairs tested
//! ├ `tolerance`      : step-size tolerance for refinement (> 0)
//! └ `max_iterations` : iteration cap per bracket (>= 1)
//!
//! Setters never fail; [`RootScanCfg::validate`] checks everything at once and
//! is called by [`find_roots`](super::finder::find_roots) before any
//! function evaluation.


use super::errors::RootFindingError;


/// Root scan configuration.
///
/// # Defaults
///
/// ┌ DEFAULT_SCAN_START     - `0.0`
/// ├ DEFAULT_SCAN_STEP      - `1.0`
/// ├ DEFAULT_SCAN_MAX_STEPS - `1000`
/// ├ DEFAULT_TOLERANCE      - `1e-7`
/// └ DEFAULT_MAX_ITERATIONS - `1000`
///
/// The scan covers `[scan_start, scan_start + scan_max_steps * scan_step]`.
///
/// # Validation
///
///    ├ `scan_start`     finite
///    ├ `scan_step`      finite and > 0
///    ├ `tolerance`      finite and > 0
///    └ `max_iterations` >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootScanCfg {
    scan_start:     f64,
    scan_step:      f64,
    scan_max_steps: usize,
    tolerance:      f64,
    max_iterations: usize,
}
impl RootScanCfg {
    pub const DEFAULT_SCAN_START:     f64   = 0.0;
    pub const DEFAULT_SCAN_STEP:      f64   = 1.0;
    pub const DEFAULT_SCAN_MAX_STEPS: usize = 1000;
    pub const DEFAULT_TOLERANCE:      f64   = 1e-7;
    pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_scan_start    (mut self, v: f64)   -> Self { self.scan_start     = v; self }
    pub fn with_scan_step     (mut self, v: f64)   -> Self { self.scan_step      = v; self }
    pub fn with_scan_max_steps(mut self, v: usize) -> Self { self.scan_max_steps = v; self }
    pub fn with_tolerance     (mut self, v: f64)   -> Self { self.tolerance      = v; self }
    pub fn with_max_iterations(mut self, v: usize) -> Self { self.max_iterations = v; self }

    #[inline] #[must_use] pub fn scan_start    (&self) -> f64   { self.scan_start }
    #[inline] #[must_use] pub fn scan_step     (&self) -> f64   { self.scan_step }
    #[inline] #[must_use] pub fn scan_max_steps(&self) -> usize { self.scan_max_steps }
    #[inline] #[must_use] pub fn tolerance     (&self) -> f64   { self.tolerance }
    #[inline] #[must_use] pub fn max_iterations(&self) -> usize { self.max_iterations }

    /// Upper end of the scanned range.
    #[must_use]
    pub fn scan_end(&self) -> f64 {
        self.sample_point(self.scan_max_steps)
    }

    /// `i`-th sample point, `scan_start + i * scan_step`.
    #[inline]
    pub(crate) fn sample_point(&self, i: usize) -> f64 {
        self.scan_start + i as f64 * self.scan_step
    }

    pub fn validate(&self) -> Result<RootScanCfg, RootFindingError> {
        if !self.scan_start.is_finite() {
            return Err(RootFindingError::InvalidScanStart { got: self.scan_start });
        }
        if !(self.scan_step.is_finite() && self.scan_step > 0.0) {
            return Err(RootFindingError::InvalidScanStep { got: self.scan_step });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RootFindingError::InvalidTolerance { got: self.tolerance });
        }
        if self.max_iterations == 0 {
            return Err(RootFindingError::InvalidMaxIterations { got: self.max_iterations });
        }

        Ok(*self)
    }
}

impl Default for RootScanCfg {
    fn default() -> Self {
        Self {
            scan_start:     Self::DEFAULT_SCAN_START,
            scan_step:      Self::DEFAULT_SCAN_STEP,
            scan_max_steps: Self::DEFAULT_SCAN_MAX_STEPS,
            tolerance:      Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}
