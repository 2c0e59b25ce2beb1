//! Bracket scanner.
//!
//! Walks `[scan_start, scan_start + scan_max_steps * scan_step]` in fixed
//! steps and records every adjacent pair of sample points where the function
//! changes sign.

use super::config::RootScanCfg;
use super::interval::Interval;
use super::signs::strict_sign_change;
use tracing::debug;


/// Finds every sign-change bracket over the configured range.
///
/// # Arguments
/// - `func` : function to scan; must be defined at every sample point
/// - `cfg`  : [`RootScanCfg`]; only the `scan_*` fields are used. Expected to be
///            validated already (see [`RootScanCfg::validate`]).
///
/// # Returns
/// Brackets `[x_i, x_{i+1}]` with `x_i = scan_start + i * scan_step` and
/// `f(x_i) * f(x_{i+1}) < 0`, in ascending order. Empty when no sign change
/// occurs in range, which means no roots are locatable there.
///
/// # Behavior
/// - Exactly `scan_max_steps + 1` evaluations; each sample value is reused as
///   the lower value of the next pair.
/// - A sample point where `f` is exactly zero does not form a bracket with
///   either neighbour, so a root sitting on a sample point is not reported.
/// - Adjacent or overlapping brackets are reported as they are found.
pub fn scan<F>(mut func: F, cfg: &RootScanCfg) -> Vec<Interval>
where F: FnMut(f64) -> f64 {
    let steps = cfg.scan_max_steps();
    let mut brackets = Vec::new();

    let mut low = cfg.sample_point(0);
    let mut f_low = func(low);
    for i in 0..steps {
        let high = cfg.sample_point(i + 1);
        let f_high = func(high);

        if strict_sign_change(f_low, f_high) {
            brackets.push(Interval::from_samples(low, high));
        }

        low = high;
        f_low = f_high;
    }

    debug!(
        start = cfg.scan_start(),
        end = cfg.scan_end(),
        steps,
        brackets = brackets.len(),
        "scan finished"
    );

    brackets
}
