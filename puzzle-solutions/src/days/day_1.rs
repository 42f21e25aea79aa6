//! Day 1: distance and similarity of two location lists

use anyhow::anyhow;
use puzzle_solver::{
    ParseError, PartSolver, PuzzleParser, SolveError, SolverPlugin, impl_solver_parts,
};
use std::collections::HashMap;

pub struct Day1;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
    common_result: Option<CommonResult>,
}

#[derive(Debug)]
struct CommonResult {
    total_distance: u64,
    similarity_score: i64,
}

impl PuzzleParser for Day1 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut left = Vec::new();
        let mut right = Vec::new();
        input
            .trim()
            .lines()
            .enumerate()
            .try_for_each(|(line_idx, line)| -> Result<(), anyhow::Error> {
                let mut fields = line.split_whitespace();
                let (Some(a), Some(b), None) = (fields.next(), fields.next(), fields.next())
                else {
                    return Err(anyhow!("(line {}) expected two columns", line_idx + 1));
                };
                left.push(
                    a.parse()
                        .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?,
                );
                right.push(
                    b.parse()
                        .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?,
                );
                Ok(())
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(SharedData {
            left,
            right,
            common_result: None,
        })
    }
}

impl PartSolver<1> for Day1 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).total_distance.to_string())
    }
}

impl PartSolver<2> for Day1 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared).similarity_score.to_string())
    }
}

impl_solver_parts!(Day1 { 1, 2 });

inventory::submit! {
    SolverPlugin {
        day: 1,
        solver: &Day1,
        tags: &["lists"],
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> &CommonResult {
    shared.common_result.get_or_insert_with(|| {
        let mut left = shared.left.clone();
        let mut right = shared.right.clone();
        left.sort_unstable();
        right.sort_unstable();
        let total_distance = left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r)).sum();

        let mut counts: HashMap<i64, i64> = HashMap::new();
        for &value in &shared.right {
            *counts.entry(value).or_default() += 1;
        }
        let similarity_score = shared
            .left
            .iter()
            .map(|value| value * counts.get(value).copied().unwrap_or(0))
            .sum();

        CommonResult {
            total_distance,
            similarity_score,
        }
    })
}
