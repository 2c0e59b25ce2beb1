// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod interval;
pub mod refine;
pub mod report;
pub mod table;
pub(crate) mod signs;

// scan + orchestration
pub mod scan;
pub mod finder;

// refinement methods
pub mod bisection;
pub mod newton;
pub mod secant;
