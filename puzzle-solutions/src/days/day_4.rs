//! Day 4: word search over a character grid
//!
//! The caller side of the `grid-scanner` core: part one counts every
//! directional occurrence of the 4-letter word, part two reduces the grid
//! to cells claimed by 3-letter matches and counts X shapes among them.

use grid_scanner::{Grid, GridScanner, ReadOptions};
use puzzle_solver::{
    ParseError, PartSolver, PuzzleParser, SolveError, SolverPlugin, impl_solver_parts,
};

pub struct Day4;

const FORWARD_WORD: &str = "XMAS";
const CROSS_WORD: &str = "MAS";

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
}

impl PuzzleParser for Day4 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(SharedData { grid })
    }
}

/// Scan every cell for `target` in all eight directions, claiming matched
/// cells in the scanner's mask. Returns the number of distinct matches.
fn scan_for_word(scanner: &mut GridScanner, target: &str) -> usize {
    let cells: Vec<_> = scanner.grid().positions().collect();
    let mut occurrences = 0;
    for pos in cells {
        let reads = scanner.read_all(pos, ReadOptions::with_max_len(target.len()));
        let matches = GridScanner::extract_matching_word_positions(&reads, target);
        occurrences += matches.len();
        scanner.bulk_update_mask(&matches);
    }
    occurrences
}

impl PartSolver<1> for Day4 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut scanner = GridScanner::new(shared.grid.clone());
        let occurrences = scan_for_word(&mut scanner, FORWARD_WORD);
        Ok(occurrences.to_string())
    }
}

impl PartSolver<2> for Day4 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // claim the cells of every straight-line MAS, then look for X
        // shapes only among the claimed cells
        let mut scanner = GridScanner::new(shared.grid.clone());
        scan_for_word(&mut scanner, CROSS_WORD);
        let reduced = scanner.masked_grid('.');

        let mut overlay = GridScanner::new(reduced);
        let cells: Vec<_> = overlay.grid().positions().collect();
        let mut occurrences = 0;
        for pos in cells {
            if let Some(found) = overlay.is_x_pattern(pos, None) {
                overlay.update_mask(&found.rows, &found.cols);
                occurrences += 1;
            }
        }
        Ok(occurrences.to_string())
    }
}

impl_solver_parts!(Day4 { 1, 2 });

inventory::submit! {
    SolverPlugin {
        day: 4,
        solver: &Day4,
        tags: &["grid", "word-search"],
    }
}
