//! Day 5: page ordering constraints
//!
//! Part two is deliberately unimplemented: the source logic only ever
//! collected the badly ordered updates without reordering them, so there
//! is no trustworthy behavior to reproduce.

use anyhow::anyhow;
use puzzle_solver::{
    ParseError, PartSolver, PuzzleParser, SolveError, SolverPlugin, impl_solver_parts,
};
use std::collections::{HashMap, HashSet};

pub struct Day5;

#[derive(Debug)]
pub struct SharedData {
    /// page -> pages that must come after it
    must_precede: HashMap<u32, HashSet<u32>>,
    updates: Vec<Vec<u32>>,
}

impl PuzzleParser for Day5 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (rules_text, updates_text) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected rules, blank line, updates".into()))?;

        let mut must_precede: HashMap<u32, HashSet<u32>> = HashMap::new();
        for line in rules_text.lines() {
            let parsed = line
                .trim()
                .split_once('|')
                .ok_or_else(|| anyhow!("rule {line:?} is not of the form a|b"))
                .and_then(|(before, after)| Ok((before.parse()?, after.parse()?)));
            let (before, after): (u32, u32) =
                parsed.map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
            must_precede.entry(before).or_default().insert(after);
        }

        let updates = updates_text
            .lines()
            .map(|line| {
                line.trim()
                    .split(',')
                    .map(|page| page.parse().map_err(|e| anyhow!("update {line:?}: {e}")))
                    .collect::<Result<Vec<u32>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Ok(SharedData {
            must_precede,
            updates,
        })
    }
}

/// An update is well ordered when no page is preceded by a page its rule
/// set says it must precede.
fn is_well_ordered(update: &[u32], must_precede: &HashMap<u32, HashSet<u32>>) -> bool {
    update.iter().enumerate().all(|(index, page)| {
        must_precede
            .get(page)
            .is_none_or(|later| update[..index].iter().all(|seen| !later.contains(seen)))
    })
}

impl PartSolver<1> for Day5 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let middle_sum: u32 = shared
            .updates
            .iter()
            .filter(|update| is_well_ordered(update, &shared.must_precede))
            .map(|update| update[update.len() / 2])
            .sum();
        Ok(middle_sum.to_string())
    }
}

impl PartSolver<2> for Day5 {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Err(SolveError::PartNotImplemented(2))
    }
}

impl_solver_parts!(Day5 { 1, 2 });

inventory::submit! {
    SolverPlugin {
        day: 5,
        solver: &Day5,
        tags: &["ordering"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_solver::Solver;

    const SAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47";

    #[test]
    fn sample_middle_sum_of_well_ordered_updates() {
        let mut shared = Day5::parse(SAMPLE).unwrap();
        assert_eq!(Day5::solve_part(&mut shared, 1).unwrap(), "143");
    }

    #[test]
    fn part_two_is_not_implemented() {
        let mut shared = Day5::parse(SAMPLE).unwrap();
        assert!(matches!(
            Day5::solve_part(&mut shared, 2),
            Err(SolveError::PartNotImplemented(2))
        ));
    }

    #[test]
    fn update_without_rules_is_well_ordered() {
        let mut shared = Day5::parse("1|2\n\n5,6,7").unwrap();
        assert_eq!(Day5::solve_part(&mut shared, 1).unwrap(), "6");
    }

    #[test]
    fn missing_blank_line_is_a_parse_error() {
        assert!(Day5::parse("1|2\n1,2,3").is_err());
    }
}
