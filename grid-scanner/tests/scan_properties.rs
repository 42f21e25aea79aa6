//! Property-based tests for the directional read and mask laws

use grid_scanner::{Direction, Grid, GridScanner, ReadOptions};
use proptest::prelude::*;

/// Strategy: a random uppercase grid plus one in-bounds position.
fn grid_and_pos() -> impl Strategy<Value = (Grid, (usize, usize))> {
    (1usize..=10, 1usize..=10)
        .prop_flat_map(|(rows, cols)| {
            (
                proptest::collection::vec(proptest::char::range('A', 'Z'), rows * cols),
                Just(rows),
                Just(cols),
                0..rows,
                0..cols,
            )
        })
        .prop_map(|(chars, rows, cols, row, col)| {
            let text: String = chars
                .chunks(cols)
                .map(|line| line.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");
            let grid = text.parse::<Grid>().expect("constructed grid is rectangular");
            (grid, (row, col))
        })
}

fn any_direction() -> impl Strategy<Value = Direction> {
    proptest::sample::select(&Direction::ALL[..])
}

/// Cells available from `pos` along `direction`, start included.
fn ray_capacity(grid: &Grid, pos: (usize, usize), direction: Direction) -> usize {
    let (dr, dc) = direction.delta();
    let row_room = match dr {
        -1 => pos.0,
        1 => grid.rows() - 1 - pos.0,
        _ => usize::MAX,
    };
    let col_room = match dc {
        -1 => pos.1,
        1 => grid.cols() - 1 - pos.1,
        _ => usize::MAX,
    };
    row_room.min(col_room) + 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Boundary truncation law: a read never exceeds its bound, and
    /// reaches the bound exactly when the ray does not exit the grid.
    #[test]
    fn read_length_is_bound_or_edge_limited(
        (grid, pos) in grid_and_pos(),
        direction in any_direction(),
        max_len in 1usize..=8,
    ) {
        let scanner = GridScanner::new(grid);
        let read = scanner.read(pos, direction, ReadOptions::with_max_len(max_len));
        let capacity = ray_capacity(scanner.grid(), pos, direction);
        prop_assert!(read.len() <= max_len);
        prop_assert_eq!(read.len(), max_len.min(capacity));
    }

    /// An inclusive read always starts with the character at the start
    /// cell, and its recorded positions are all in bounds.
    #[test]
    fn read_starts_at_pos_and_stays_in_bounds(
        (grid, pos) in grid_and_pos(),
        direction in any_direction(),
    ) {
        let scanner = GridScanner::new(grid);
        let read = scanner.read(pos, direction, ReadOptions::default());
        prop_assert_eq!(read.chars()[0], scanner.grid().get(pos));
        for cell in read.positions() {
            prop_assert!(scanner.grid().contains(cell));
        }
    }

    /// Direction symmetry: reading back from the far endpoint along the
    /// opposite direction visits exactly the reversed cells.
    #[test]
    fn opposite_read_from_endpoint_reverses_positions(
        (grid, pos) in grid_and_pos(),
        direction in any_direction(),
        max_len in 1usize..=8,
    ) {
        let scanner = GridScanner::new(grid);
        let forward = scanner.read(pos, direction, ReadOptions::with_max_len(max_len));
        let endpoint = (
            *forward.rows().last().unwrap(),
            *forward.cols().last().unwrap(),
        );
        let backward = scanner.read(
            endpoint,
            direction.opposite(),
            ReadOptions::with_max_len(forward.len()),
        );
        let mut reversed: Vec<_> = forward.positions().collect();
        reversed.reverse();
        prop_assert_eq!(backward.positions().collect::<Vec<_>>(), reversed);
    }

    /// Mask updates are idempotent and count exactly the position union.
    #[test]
    fn mask_counts_the_union_of_updates(
        (grid, _) in grid_and_pos(),
        seed_cells in proptest::collection::vec((0usize..10, 0usize..10), 0..20),
    ) {
        let mut scanner = GridScanner::new(grid);
        let cells: Vec<_> = seed_cells
            .into_iter()
            .map(|(r, c)| (r % scanner.grid().rows(), c % scanner.grid().cols()))
            .collect();
        let rows: Vec<_> = cells.iter().map(|&(r, _)| r).collect();
        let cols: Vec<_> = cells.iter().map(|&(_, c)| c).collect();

        scanner.update_mask(&rows, &cols);
        let unique: std::collections::HashSet<_> = cells.iter().collect();
        prop_assert_eq!(scanner.mask().count_set(), unique.len());

        // applying the identical update again changes nothing
        let before = scanner.mask().clone();
        scanner.update_mask(&rows, &cols);
        prop_assert_eq!(scanner.mask(), &before);
    }
}
