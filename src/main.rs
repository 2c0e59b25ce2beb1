extern crate rootscan;

use clap::{Parser, ValueEnum};
use rootscan::root_finding::algorithms::{Algorithm, BisectionSign, NewtonSeed};
use rootscan::root_finding::bisection::Bisection;
use rootscan::root_finding::config::RootScanCfg;
use rootscan::root_finding::errors::RootFindingError;
use rootscan::root_finding::finder::{find_roots, find_roots_par};
use rootscan::root_finding::newton::NewtonRaphson;
use rootscan::root_finding::refine::Refine;
use rootscan::root_finding::report::RootFindingRun;
use rootscan::root_finding::secant::Secant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Finds the roots of x^2 - 5x - 2 by scanning for sign changes and refining each bracket.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ScanArgs {
    #[arg(long, short, value_enum, default_value_t = MethodChoice::All)]
    method: MethodChoice,
    /// Newton-Raphson starting point inside each bracket
    #[arg(long, value_enum, default_value_t = SeedChoice::Midpoint)]
    seed: SeedChoice,
    #[arg(long, value_enum, default_value_t = SignChoice::Bracketed)]
    bisection_sign: SignChoice,
    #[arg(long, default_value_t = -200.0, allow_negative_numbers = true)]
    start: f64,
    #[arg(long, default_value_t = 0.1)]
    step: f64,
    #[arg(long, default_value_t = 60_000)]
    steps: usize,
    #[arg(long, default_value_t = 1e-7)]
    tolerance: f64,
    #[arg(long, default_value_t = 10_000)]
    max_iterations: usize,
    /// Refine brackets on all cores
    #[arg(long, default_value_t = false)]
    parallel: bool,
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MethodChoice {
    Bisection,
    Newton,
    Secant,
    All,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SeedChoice {
    Midpoint,
    Upper,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SignChoice {
    Bracketed,
    Increasing,
}

fn example(x: f64) -> f64 {
    x * x - 5.0 * x - 2.0
}

fn example_derivative(x: f64) -> f64 {
    2.0 * x - 5.0
}

fn run<R>(refiner: &R, cfg: &RootScanCfg, parallel: bool) -> Result<RootFindingRun, RootFindingError>
where R: Refine + Sync {
    if parallel {
        find_roots_par(example, refiner, cfg)
    } else {
        find_roots(example, refiner, cfg)
    }
}

fn main() -> Result<(), RootFindingError> {
    let args = ScanArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = RootScanCfg::new()
        .with_scan_start(args.start)
        .with_scan_step(args.step)
        .with_scan_max_steps(args.steps)
        .with_tolerance(args.tolerance)
        .with_max_iterations(args.max_iterations)
        .validate()?;

    let seed = match args.seed {
        SeedChoice::Midpoint => NewtonSeed::Midpoint,
        SeedChoice::Upper    => NewtonSeed::UpperBound,
    };
    let sign = match args.bisection_sign {
        SignChoice::Bracketed  => BisectionSign::Bracketed,
        SignChoice::Increasing => BisectionSign::AssumeIncreasing,
    };

    let algorithms: &[Algorithm] = match args.method {
        MethodChoice::Bisection => &[Algorithm::Bisection],
        MethodChoice::Newton    => &[Algorithm::NewtonRaphson],
        MethodChoice::Secant    => &[Algorithm::Secant],
        MethodChoice::All       => &Algorithm::ALL,
    };

    info!(
        start = cfg.scan_start(),
        end = cfg.scan_end(),
        step = cfg.scan_step(),
        "scanning x^2 - 5x - 2"
    );

    for &algorithm in algorithms {
        let result = match algorithm {
            Algorithm::Bisection => run(&Bisection::new().with_sign(sign), &cfg, args.parallel)?,
            Algorithm::NewtonRaphson => run(
                &NewtonRaphson::new(example_derivative).with_seed(seed),
                &cfg,
                args.parallel,
            )?,
            Algorithm::Secant => run(&Secant, &cfg, args.parallel)?,
        };

        println!("{algorithm}");
        println!("{result}");
    }

    Ok(())
}
