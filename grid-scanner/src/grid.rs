//! Rectangular character grids and the parallel visited mask

use crate::direction::Direction;
use crate::error::GridError;
use std::fmt;
use std::str::FromStr;

/// A `(row, column)` cell coordinate, 0-indexed.
pub type Position = (usize, usize);

/// An immutable rectangular 2-D array of characters, row-major.
///
/// Rectangularity is enforced at construction; afterwards every cell
/// access within `rows() x cols()` is valid.
///
/// # Example
///
/// ```
/// use grid_scanner::Grid;
///
/// let grid: Grid = "ABC\nDEF".parse().unwrap();
/// assert_eq!(grid.shape(), (2, 3));
/// assert_eq!(grid.get((1, 2)), 'F');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from trimmed input text, one row per line.
    ///
    /// # Errors
    ///
    /// Fails with [`GridError`] if the input has no rows, an empty row, or
    /// rows of unequal length. Ragged input must be rejected here; the
    /// scanner assumes rectangularity.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;
        for (row, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                return Err(GridError::EmptyRow(row));
            }
            let before = cells.len();
            cells.extend(line.chars());
            let width = cells.len() - before;
            if row == 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    actual: width,
                });
            }
            rows += 1;
        }
        if rows == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self { cells, rows, cols })
    }

    pub(crate) fn from_cells(cells: Vec<char>, rows: usize, cols: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { cells, rows, cols }
    }

    /// Number of rows, always >= 1.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, always >= 1.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether `pos` indexes a cell of this grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.0 < self.rows && pos.1 < self.cols
    }

    /// The character at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds; callers are expected to only hand
    /// in positions produced by [`Grid::positions`] or [`Grid::step`].
    pub fn get(&self, pos: Position) -> char {
        assert!(self.contains(pos), "position {pos:?} out of {:?}", self.shape());
        self.cells[pos.0 * self.cols + pos.1]
    }

    /// One bounds-checked step from `pos` along `direction`, or `None`
    /// when the step would leave the grid.
    pub fn step(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = pos.0.checked_add_signed(dr)?;
        let col = pos.1.checked_add_signed(dc)?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// All cell positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cells[row * self.cols + col])?;
            }
            if row + 1 < self.rows {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// A boolean array parallel to a [`Grid`], recording which cells have
/// been claimed by at least one confirmed match.
///
/// Bits are only ever set, never cleared, for the owning scanner's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pub(crate) bits: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Mask {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows; always equals the paired grid's.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns; always equals the paired grid's.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at `pos` has been marked.
    pub fn is_set(&self, pos: Position) -> bool {
        self.bits[pos.0 * self.cols + pos.1]
    }

    pub(crate) fn set(&mut self, pos: Position) {
        self.bits[pos.0 * self.cols + pos.1] = true;
    }

    /// Count of marked cells.
    pub fn count_set(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                f.write_str(if self.bits[row * self.cols + col] { "#" } else { "." })?;
            }
            if row + 1 < self.rows {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_rectangular_input() {
        let grid = Grid::parse("AB\nCD\nEF").unwrap();
        assert_eq!(grid.shape(), (3, 2));
        assert_eq!(grid.get((0, 0)), 'A');
        assert_eq!(grid.get((2, 1)), 'F');
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let grid = Grid::parse("\nXY\nZW\n\n").unwrap();
        assert_eq!(grid.shape(), (2, 2));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(Grid::parse(""), Err(GridError::Empty));
        assert_eq!(Grid::parse("   \n  "), Err(GridError::Empty));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            Grid::parse("ABC\nDE"),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn step_stops_at_every_edge() {
        let grid = Grid::parse("AB\nCD").unwrap();
        assert_eq!(grid.step((0, 0), Direction::Up), None);
        assert_eq!(grid.step((0, 0), Direction::Left), None);
        assert_eq!(grid.step((1, 1), Direction::Down), None);
        assert_eq!(grid.step((1, 1), Direction::Right), None);
        assert_eq!(grid.step((0, 0), Direction::DiagDownRight), Some((1, 1)));
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::parse("AB\nCD").unwrap();
        let all: Vec<_> = grid.positions().collect();
        assert_eq!(all, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn mask_display_uses_hash_and_dot() {
        let mut mask = Mask::new(2, 2);
        mask.set((0, 1));
        assert_eq!(mask.to_string(), ".#\n..");
    }
}
