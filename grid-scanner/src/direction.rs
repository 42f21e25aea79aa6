//! The eight unit directions of a grid scan

/// One of the eight unit step vectors over a grid: the four axis
/// directions plus the four diagonals.
///
/// Row deltas grow downward, so [`Direction::Up`] is `(-1, 0)` and
/// [`Direction::DiagDownRight`] is `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    DiagUpRight,
    DiagUpLeft,
    DiagDownRight,
    DiagDownLeft,
}

impl Direction {
    /// All eight directions, in the order
    /// [`read_all`](crate::GridScanner::read_all) reports them.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::DiagUpRight,
        Direction::DiagUpLeft,
        Direction::DiagDownRight,
        Direction::DiagDownLeft,
    ];

    /// The `(row delta, column delta)` step for this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::DiagUpRight => (-1, 1),
            Direction::DiagUpLeft => (-1, -1),
            Direction::DiagDownRight => (1, 1),
            Direction::DiagDownLeft => (1, -1),
        }
    }

    /// Stable snake_case name, useful for keyed diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::DiagUpRight => "diag_up_right",
            Direction::DiagUpLeft => "diag_up_left",
            Direction::DiagDownRight => "diag_down_right",
            Direction::DiagDownLeft => "diag_down_left",
        }
    }

    /// The direction with the negated step vector.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::DiagUpRight => Direction::DiagDownLeft,
            Direction::DiagUpLeft => Direction::DiagDownRight,
            Direction::DiagDownRight => Direction::DiagUpLeft,
            Direction::DiagDownLeft => Direction::DiagUpRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_negates_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr, dc), (-or, -oc), "{}", dir.name());
        }
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn names_are_unique() {
        let names: std::collections::HashSet<_> =
            Direction::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names.len(), 8);
    }
}
