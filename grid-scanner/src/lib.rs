//! 2-D grid word-search engine
//!
//! This crate is the scanning core behind the grid word-search puzzles:
//! it wraps an immutable rectangular character [`Grid`] and offers
//! direction-bounded reads, value-deduplicated word match extraction, a
//! parallel visited [`Mask`], and the fixed 3x3 X-pattern test.
//!
//! # Overview
//!
//! The intended control flow is caller-driven and single-threaded:
//!
//! 1. Parse the input into a [`Grid`] (ragged input is rejected here and
//!    nowhere else).
//! 2. Wrap it in a [`GridScanner`].
//! 3. For each cell in row-major order, [`read_all`](GridScanner::read_all)
//!    the eight directions or test [`is_x_pattern`](GridScanner::is_x_pattern).
//! 4. Reduce matches with
//!    [`extract_matching_word_positions`](GridScanner::extract_matching_word_positions)
//!    and claim their cells via the mask update methods.
//! 5. Aggregate counts; render the [`Mask`] for diagnostics if wanted.
//!
//! Every scan operation is total: rays truncate at the grid edge and
//! border cells answer "no pattern" rather than erroring. The word length
//! and target are caller parameters, so the same scanner serves a
//! 4-letter forward search and a 3-letter overlay search alike.

mod direction;
mod error;
mod grid;
mod scanner;

pub use direction::Direction;
pub use error::GridError;
pub use grid::{Grid, Mask, Position};
pub use scanner::{GridScanner, MatchPositions, ReadOptions, ReadResult};
