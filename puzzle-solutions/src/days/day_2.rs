//! Day 2: reactor report safety with the problem dampener

use anyhow::anyhow;
use itertools::Itertools;
use puzzle_solver::{
    ParseError, PartSolver, PuzzleParser, SolveError, SolverPlugin, impl_solver_parts,
};

pub struct Day2;

#[derive(Debug)]
pub struct SharedData {
    reports: Vec<Vec<i64>>,
}

impl PuzzleParser for Day2 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(|field| {
                        field
                            .parse()
                            .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
                    })
                    .collect::<Result<Vec<i64>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|reports| SharedData { reports })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// A report is safe when the levels are strictly monotone and every
/// adjacent step has magnitude 1..=3.
fn is_safe(report: &[i64]) -> bool {
    if report.len() < 2 {
        return true;
    }
    let mut ascending = true;
    let mut descending = true;
    for (a, b) in report.iter().tuple_windows() {
        let diff = b - a;
        if !(1..=3).contains(&diff.abs()) {
            return false;
        }
        if diff > 0 {
            descending = false;
        } else {
            ascending = false;
        }
    }
    ascending || descending
}

/// Safe as-is, or safe after deleting a single level.
fn is_safe_dampened(report: &[i64]) -> bool {
    is_safe(report)
        || (0..report.len()).any(|skip| {
            let shortened: Vec<i64> = report
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &level)| level)
                .collect();
            is_safe(&shortened)
        })
}

impl PartSolver<1> for Day2 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.reports.iter().filter(|r| is_safe(r)).count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Day2 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared
            .reports
            .iter()
            .filter(|r| is_safe_dampened(r))
            .count();
        Ok(count.to_string())
    }
}

impl_solver_parts!(Day2 { 1, 2 });

inventory::submit! {
    SolverPlugin {
        day: 2,
        solver: &Day2,
        tags: &["reports"],
    }
}
