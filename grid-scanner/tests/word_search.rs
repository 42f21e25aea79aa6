//! End-to-end scan over the standard 10x10 word-search fixture

use grid_scanner::{Grid, GridScanner, MatchPositions, ReadOptions};
use std::collections::HashSet;

const FIXTURE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

fn full_scan(scanner: &mut GridScanner, target: &str, max_len: usize) -> Vec<MatchPositions> {
    let cells: Vec<_> = scanner.grid().positions().collect();
    let mut all = Vec::new();
    for pos in cells {
        let reads = scanner.read_all(pos, ReadOptions::with_max_len(max_len));
        let matches = GridScanner::extract_matching_word_positions(&reads, target);
        scanner.bulk_update_mask(&matches);
        all.extend(matches);
    }
    all
}

#[test]
fn fixture_contains_eighteen_xmas() {
    let grid: Grid = FIXTURE.parse().unwrap();
    let mut scanner = GridScanner::new(grid);
    let matches = full_scan(&mut scanner, "XMAS", 4);
    assert_eq!(matches.len(), 18);
}

#[test]
fn mask_marks_exactly_the_union_of_matched_cells() {
    let grid: Grid = FIXTURE.parse().unwrap();
    let mut scanner = GridScanner::new(grid);
    let matches = full_scan(&mut scanner, "XMAS", 4);

    let union: HashSet<_> = matches.iter().flat_map(|m| m.positions()).collect();
    assert_eq!(scanner.mask().count_set(), union.len());
    for pos in scanner.grid().positions() {
        assert_eq!(scanner.mask().is_set(pos), union.contains(&pos), "{pos:?}");
    }
}

#[test]
fn fixture_contains_nine_mas_x_patterns() {
    let grid: Grid = FIXTURE.parse().unwrap();

    // claim the cells of every 3-letter MAS first, then only look for
    // X shapes among the claimed cells
    let mut scanner = GridScanner::new(grid);
    full_scan(&mut scanner, "MAS", 3);
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
    assert_eq!(occurrences, 9);
}

#[test]
fn no_duplicate_position_lists_survive_extraction() {
    let grid: Grid = FIXTURE.parse().unwrap();
    let mut scanner = GridScanner::new(grid);
    let matches = full_scan(&mut scanner, "XMAS", 4);
    let distinct: HashSet<_> = matches.iter().cloned().collect();
    assert_eq!(distinct.len(), matches.len());
}
