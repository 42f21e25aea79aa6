//! Direction-bounded reads, match extraction and the 3x3 X-pattern test

use crate::direction::Direction;
use crate::grid::{Grid, Mask, Position};
use std::collections::HashSet;

/// Corner templates (top-left, top-right, bottom-left, bottom-right) that
/// make two crossing 3-letter diagonal words around the fixed center.
const X_CORNER_TEMPLATES: [[char; 4]; 4] = [
    ['M', 'M', 'S', 'S'],
    ['M', 'S', 'M', 'S'],
    ['S', 'M', 'S', 'M'],
    ['S', 'S', 'M', 'M'],
];

/// Center symbol shared by all four X-pattern templates.
const X_CENTER: char = 'A';

/// Options for a single directional read.
///
/// The defaults mirror the common case: include the start cell and read
/// up to 4 characters. `override_grid` substitutes the array characters
/// are read from without touching the scanner's own grid or mask, which
/// lets a caller re-scan a derived grid without building a new scanner.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions<'g> {
    /// Whether the start position contributes the first character.
    pub include_pos: bool,
    /// Upper bound on the number of characters collected.
    pub max_len: usize,
    /// Alternate same-shape grid to read characters from.
    pub override_grid: Option<&'g Grid>,
}

impl Default for ReadOptions<'_> {
    fn default() -> Self {
        Self {
            include_pos: true,
            max_len: 4,
            override_grid: None,
        }
    }
}

impl<'g> ReadOptions<'g> {
    /// Default options with a different length bound.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len,
            ..Self::default()
        }
    }
}

/// The outcome of one bounded directional read: the characters collected
/// and the parallel row/column index lists of the cells they came from.
///
/// A result shorter than the requested bound means the ray left the grid;
/// that is a definite answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResult {
    chars: Vec<char>,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl ReadResult {
    /// Number of characters collected.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when nothing was collected (exclusive read from a cell whose
    /// first step already leaves the grid).
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The collected characters in read order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Row indices visited, parallel to [`chars`](ReadResult::chars).
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Column indices visited, parallel to [`chars`](ReadResult::chars).
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    /// The collected characters as one string.
    pub fn word(&self) -> String {
        self.chars.iter().collect()
    }

    /// The visited cells as `(row, col)` pairs in read order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }
}

/// The cells of one confirmed match, as parallel row/column index lists.
///
/// Equality and hashing are by the literal index lists, which is exactly
/// the identity [`GridScanner::extract_matching_word_positions`]
/// deduplicates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchPositions {
    /// Row index of each matched cell, in match order.
    pub rows: Vec<usize>,
    /// Column index of each matched cell, in match order.
    pub cols: Vec<usize>,
}

impl MatchPositions {
    /// The matched cells as `(row, col)` pairs.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }
}

/// Scanner over an immutable rectangular character grid.
///
/// Wraps a [`Grid`] together with a same-shape visited [`Mask`] and
/// provides the three scan primitives word-search callers need:
/// direction-bounded reads, value-deduplicated word match extraction, and
/// the 3x3 X-pattern test. The grid is never mutated; the mask is the
/// only mutable state and is updated explicitly by the caller.
///
/// # Example
///
/// ```
/// use grid_scanner::{Grid, GridScanner, ReadOptions};
///
/// // the two occurrences share the central 'S'
/// let grid: Grid = "XMASAMX".parse().unwrap();
/// let mut scanner = GridScanner::new(grid);
///
/// let mut found = 0;
/// for pos in scanner.grid().positions().collect::<Vec<_>>() {
///     let reads = scanner.read_all(pos, ReadOptions::default());
///     let matches = GridScanner::extract_matching_word_positions(&reads, "XMAS");
///     found += matches.len();
///     scanner.bulk_update_mask(&matches);
/// }
/// assert_eq!(found, 2);
/// assert_eq!(scanner.mask().count_set(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct GridScanner {
    grid: Grid,
    mask: Mask,
}

impl GridScanner {
    /// Wrap a grid, allocating an all-false mask of matching shape.
    pub fn new(grid: Grid) -> Self {
        let mask = Mask::new(grid.rows(), grid.cols());
        Self { grid, mask }
    }

    /// The wrapped grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The visited mask, for aggregation or diagnostic rendering.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Read up to `opts.max_len` characters from `pos` along `direction`.
    ///
    /// The start cell contributes the first character when
    /// `opts.include_pos` is set. Stepping stops before the first step
    /// that would leave the grid, so the result is simply shorter when
    /// the ray exits early. `pos` itself must be in bounds; that is the
    /// caller's contract and is not rechecked here beyond the panic of
    /// the initial cell access.
    pub fn read(&self, pos: Position, direction: Direction, opts: ReadOptions<'_>) -> ReadResult {
        let grid = opts.override_grid.unwrap_or(&self.grid);
        let mut chars = Vec::with_capacity(opts.max_len);
        let mut rows = Vec::with_capacity(opts.max_len);
        let mut cols = Vec::with_capacity(opts.max_len);

        if opts.include_pos {
            chars.push(grid.get(pos));
            rows.push(pos.0);
            cols.push(pos.1);
        }

        let mut current = pos;
        while chars.len() < opts.max_len {
            let Some(next) = grid.step(current, direction) else {
                break;
            };
            chars.push(grid.get(next));
            rows.push(next.0);
            cols.push(next.1);
            current = next;
        }

        ReadResult { chars, rows, cols }
    }

    /// [`read`](GridScanner::read) in all eight directions from `pos`
    /// with identical options, in [`Direction::ALL`] order.
    pub fn read_all(&self, pos: Position, opts: ReadOptions<'_>) -> Vec<(Direction, ReadResult)> {
        Direction::ALL
            .into_iter()
            .map(|direction| (direction, self.read(pos, direction, opts)))
            .collect()
    }

    /// Keep the position lists of every read whose characters spell
    /// `target_word`, compared ASCII case-insensitively.
    ///
    /// Deduplicated by the literal (row-list, col-list) value: opposite
    /// direction reads launched from the two ends of the same physical
    /// cell run rediscover the same match and must count once.
    pub fn extract_matching_word_positions(
        reads: &[(Direction, ReadResult)],
        target_word: &str,
    ) -> HashSet<MatchPositions> {
        reads
            .iter()
            .filter(|(_, read)| read.word().eq_ignore_ascii_case(target_word))
            .map(|(_, read)| MatchPositions {
                rows: read.rows.clone(),
                cols: read.cols.clone(),
            })
            .collect()
    }

    /// Mark every zipped `(row, col)` pair from the two parallel lists as
    /// visited. Already-marked cells stay marked.
    pub fn update_mask(&mut self, rows: &[usize], cols: &[usize]) {
        for (&row, &col) in rows.iter().zip(cols) {
            self.mask.set((row, col));
        }
    }

    /// [`update_mask`](GridScanner::update_mask) for each match in turn.
    pub fn bulk_update_mask<'m, I>(&mut self, matches: I)
    where
        I: IntoIterator<Item = &'m MatchPositions>,
    {
        for positions in matches {
            self.update_mask(&positions.rows, &positions.cols);
        }
    }

    /// A copy of the grid with every unmasked cell replaced by `fill`.
    ///
    /// Used to re-scan only the cells that earlier matches claimed, e.g.
    /// searching X-patterns among confirmed 3-letter word cells.
    pub fn masked_grid(&self, fill: char) -> Grid {
        let cells = self
            .grid
            .cells
            .iter()
            .zip(&self.mask.bits)
            .map(|(&ch, &kept)| if kept { ch } else { fill })
            .collect();
        Grid::from_cells(cells, self.grid.rows(), self.grid.cols())
    }

    /// Test the 3x3 neighborhood centered at `pos` against the four
    /// X-pattern corner templates, edge midpoints wildcarded.
    ///
    /// Border cells have no full neighborhood and answer `None`
    /// immediately. On a match the five involved cells are returned in
    /// top-left, top-right, center, bottom-left, bottom-right order.
    pub fn is_x_pattern(
        &self,
        pos: Position,
        override_grid: Option<&Grid>,
    ) -> Option<MatchPositions> {
        let grid = override_grid.unwrap_or(&self.grid);
        let (row, col) = pos;
        if row == 0 || row + 1 == grid.rows() || col == 0 || col + 1 == grid.cols() {
            return None;
        }
        if grid.get(pos) != X_CENTER {
            return None;
        }
        let corners = [
            grid.get((row - 1, col - 1)),
            grid.get((row - 1, col + 1)),
            grid.get((row + 1, col - 1)),
            grid.get((row + 1, col + 1)),
        ];
        if !X_CORNER_TEMPLATES.contains(&corners) {
            return None;
        }
        Some(MatchPositions {
            rows: vec![row - 1, row - 1, row, row + 1, row + 1],
            cols: vec![col - 1, col + 1, col, col - 1, col + 1],
        })
    }
}
