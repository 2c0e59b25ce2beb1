//! Root finding for continuous scalar functions.
//!
//! A fixed-step scan locates sign-change brackets, then each bracket is
//! refined with bisection, Newton-Raphson or the secant method.
//!
//! ```ignore
//! use rootscan::root_finding::config::RootScanCfg;
//! use rootscan::root_finding::finder::secant_roots;
//!
//! let cfg = RootScanCfg::new()
//!     .with_scan_start(-200.0)
//!     .with_scan_step(0.1)
//!     .with_scan_max_steps(60_000);
//! let run = secant_roots(|x: f64| x * x - 5.0 * x - 2.0, &cfg)?;
//! print!("{run}");
//! ```

pub mod root_finding;
