//! Plain-text result table.
//!
//! One row per [`RootFindingOutcome`], five columns:
//!
//! ```text
//! Interval  Root (x)  Iterations     Error  Time (milliseconds)
//! --------  --------  ----------  --------  -------------------
//! [1, 2]         1.5           3  1.000e-8               1.5000
//! ```
//!
//! Text columns are left aligned, numeric columns right aligned; widths fit
//! the longest cell of each column.

use std::fmt;

use super::report::{RootFindingOutcome, RootFindingRun};

pub const HEADERS: [&str; 5] = ["Interval", "Root (x)", "Iterations", "Error", "Time (milliseconds)"];

const NO_ROOTS: &str = "No roots found";


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

const ALIGN: [Align; 5] = [Align::Left, Align::Right, Align::Right, Align::Right, Align::Right];


fn row(outcome: &RootFindingOutcome) -> [String; 5] {
    [
        outcome.interval.to_string(),
        outcome.estimate.value.to_string(),
        outcome.estimate.iterations.to_string(),
        format!("{:.3e}", outcome.estimate.residual),
        format!("{:.4}", outcome.estimate.elapsed_ms()),
    ]
}


fn write_row<W: fmt::Write>(out: &mut W, cells: &[String; 5], widths: &[usize; 5]) -> fmt::Result {
    for (col, cell) in cells.iter().enumerate() {
        if col > 0 {
            out.write_str("  ")?;
        }
        let width = widths[col];
        match ALIGN[col] {
            Align::Left  => write!(out, "{cell:<width$}")?,
            Align::Right => write!(out, "{cell:>width$}")?,
        }
    }
    out.write_char('\n')
}


/// Writes the header, a dashed rule and one row per outcome.
pub fn write_outcomes<W: fmt::Write>(out: &mut W, outcomes: &[RootFindingOutcome]) -> fmt::Result {
    let rows: Vec<[String; 5]> = outcomes.iter().map(row).collect();
    let headers = HEADERS.map(String::from);

    let mut widths = HEADERS.map(str::len);
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    write_row(out, &headers, &widths)?;
    let rule = widths.map(|w| "-".repeat(w));
    write_row(out, &rule, &widths)?;
    for cells in &rows {
        write_row(out, cells, &widths)?;
    }
    Ok(())
}


/// Renders `outcomes` as a table; see the module docs for the layout.
pub fn render_outcomes(outcomes: &[RootFindingOutcome]) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_outcomes(&mut out, outcomes);
    out
}


impl fmt::Display for RootFindingRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootFindingRun::NoBracketsFound => writeln!(f, "{NO_ROOTS}"),
            RootFindingRun::Completed { outcomes, .. } => write_outcomes(f, outcomes),
        }
    }
}
