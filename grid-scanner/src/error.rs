//! Error types for grid construction

use thiserror::Error;

/// Error type for building a [`Grid`](crate::Grid) from text.
///
/// Construction is the only fallible surface of this crate: once a grid
/// exists it is rectangular by construction and every scan operation is
/// total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input contained no rows at all
    #[error("grid input contains no rows")]
    Empty,
    /// A row contained no characters
    #[error("row {0} is empty")]
    EmptyRow(usize),
    /// A row's length disagrees with the first row's length
    #[error("row {row} has {actual} columns, expected {expected}")]
    Ragged {
        /// 0-indexed row that disagreed
        row: usize,
        /// Column count established by the first row
        expected: usize,
        /// Column count actually found
        actual: usize,
    },
}
