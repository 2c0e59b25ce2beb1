//! tests for result table rendering
use std::time::Duration;

use rootscan::root_finding::algorithms::Algorithm;
use rootscan::root_finding::config::RootScanCfg;
use rootscan::root_finding::errors::RootFindingError;
use rootscan::root_finding::finder::secant_roots;
use rootscan::root_finding::interval::Interval;
use rootscan::root_finding::report::{RootEstimate, RootFindingOutcome, RootFindingRun};
use rootscan::root_finding::table::{render_outcomes, HEADERS};
use test_log::test;

type TestResult = Result<(), RootFindingError>;

fn outcome() -> Result<RootFindingOutcome, RootFindingError> {
    Ok(RootFindingOutcome {
        interval:  Interval::new(1.0, 2.0)?,
        algorithm: Algorithm::Secant,
        estimate:  RootEstimate {
            value:      1.5,
            iterations: 3,
            residual:   1e-8,
            elapsed:    Duration::from_micros(1500),
        },
    })
}

#[test]
fn renders_header_rule_and_rows() -> TestResult {
    let table = render_outcomes(&[outcome()?]);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Interval  Root (x)  Iterations     Error  Time (milliseconds)");
    assert_eq!(lines[1], "--------  --------  ----------  --------  -------------------");
    assert_eq!(lines[2], "[1, 2]         1.5           3  1.000e-8               1.5000");
    Ok(())
}

#[test]
fn columns_widen_to_fit_cells() -> TestResult {
    let mut wide = outcome()?;
    wide.interval = Interval::new(-0.39999999999997726, -0.29999999999998295)?;
    wide.estimate.value = -0.3722813232690141;

    let table = render_outcomes(&[outcome()?, wide]);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[3].starts_with("[-0.39999999999997726, -0.29999999999998295]  -0.3722813232690141"));
    let width = lines[0].len();
    assert!(lines.iter().all(|line| line.len() == width));
    Ok(())
}

#[test]
fn empty_outcomes_render_header_only() {
    let table = render_outcomes(&[]);

    assert_eq!(table.lines().count(), 2);
    for header in HEADERS {
        assert!(table.contains(header));
    }
}

#[test]
fn run_display() -> TestResult {
    assert_eq!(RootFindingRun::NoBracketsFound.to_string(), "No roots found\n");

    let cfg = RootScanCfg::new()
        .with_scan_start(-200.0)
        .with_scan_step(0.1)
        .with_scan_max_steps(60_000);
    let run = secant_roots(|x: f64| x * x - 5.0 * x - 2.0, &cfg)?;
    let shown = run.to_string();

    assert!(shown.starts_with("Interval"));
    assert_eq!(shown.lines().count(), 2 + run.outcomes().len());
    Ok(())
}
