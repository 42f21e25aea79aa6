//! Day 3: corrupted memory token scan

use puzzle_solver::{
    ParseError, PartSolver, PuzzleParser, SolveError, SolverPlugin, impl_solver_parts,
};
use regex::Regex;
use std::cell::OnceCell;

pub struct Day3;

/// Zero-copy over the input; the token regex is compiled on first use.
pub struct SharedData<'a> {
    memory: &'a str,
    token_regex: OnceCell<Regex>,
}

impl SharedData<'_> {
    /// Get or compile the token regex: `mul(x,y)` with captured operands,
    /// plus the two control tokens.
    fn token_regex(&self) -> &Regex {
        self.token_regex
            .get_or_init(|| Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)").unwrap())
    }
}

impl PuzzleParser for Day3 {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let memory = input.trim();
        if memory.is_empty() {
            return Err(ParseError::MissingData("empty memory dump".to_string()));
        }
        Ok(SharedData {
            memory,
            token_regex: OnceCell::new(),
        })
    }
}

fn operand(text: &str) -> Result<u64, SolveError> {
    text.parse()
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))
}

impl PartSolver<1> for Day3 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut product_sum = 0u64;
        for captures in shared.token_regex().captures_iter(shared.memory) {
            if let (Some(x), Some(y)) = (captures.get(1), captures.get(2)) {
                product_sum += operand(x.as_str())? * operand(y.as_str())?;
            }
        }
        Ok(product_sum.to_string())
    }
}

impl PartSolver<2> for Day3 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut enabled = true;
        let mut product_sum = 0u64;
        for captures in shared.token_regex().captures_iter(shared.memory) {
            match &captures[0] {
                "do()" => enabled = true,
                "don't()" => enabled = false,
                _ if enabled => {
                    product_sum += operand(&captures[1])? * operand(&captures[2])?;
                }
                _ => {}
            }
        }
        Ok(product_sum.to_string())
    }
}

impl_solver_parts!(Day3 { 1, 2 });

inventory::submit! {
    SolverPlugin {
        day: 3,
        solver: &Day3,
        tags: &["regex"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_solver::Solver;

    const SAMPLE_ONE: &str =
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const SAMPLE_TWO: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn sample_product_sum() {
        let mut shared = Day3::parse(SAMPLE_ONE).unwrap();
        assert_eq!(Day3::solve_part(&mut shared, 1).unwrap(), "161");
    }

    #[test]
    fn sample_controlled_product_sum() {
        let mut shared = Day3::parse(SAMPLE_TWO).unwrap();
        assert_eq!(Day3::solve_part(&mut shared, 2).unwrap(), "48");
    }

    #[test]
    fn malformed_tokens_are_ignored() {
        let mut shared = Day3::parse("mul(4*mul(6,9!?(12,34)mul ( 2 , 4 )x").unwrap();
        assert_eq!(Day3::solve_part(&mut shared, 1).unwrap(), "0");
    }

    #[test]
    fn controls_gate_following_muls_only() {
        let mut shared = Day3::parse("don't()mul(2,3)do()mul(3,4)").unwrap();
        assert_eq!(Day3::solve_part(&mut shared, 2).unwrap(), "12");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(Day3::parse("  \n ").is_err());
    }
}
