//! Core solver traits and the part-dispatch glue macro

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// This trait defines the shared data type and parsing logic for a solver,
/// providing clean separation between parsing and solving concerns.
/// Parsing happens exactly once per instance; anything the parts want to
/// share afterwards lives in the shared data (commonly behind an
/// `Option<T>` field filled with `get_or_insert_with`).
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, PuzzleParser};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `&'a str` for zero-copy borrowed data when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` represents the part number (1, 2, etc.).
/// One `impl PartSolver<N>` per implemented part keeps the parts separate
/// at the type level; [`impl_solver_parts!`](crate::impl_solver_parts)
/// dispatches them behind the uniform [`Solver`] interface.
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Solve this part of the puzzle.
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that every registered solver must implement.
///
/// Extends `PuzzleParser` to inherit `SharedData` and `parse()`. A part
/// that is inside `1..=PARTS` but deliberately unimplemented answers
/// `SolveError::PartNotImplemented`; range checking itself lives in
/// [`SolverExt`]. Most implementations come from
/// [`impl_solver_parts!`](crate::impl_solver_parts) rather than being
/// written by hand.
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked dispatch on top of [`Solver`].
pub trait SolverExt: Solver {
    /// [`Solver::solve_part`] with the part validated against `PARTS`.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

/// Implement [`Solver`] for a type by dispatching to its
/// [`PartSolver`] impls.
///
/// `PARTS` becomes the largest listed part number; listed parts dispatch
/// to `PartSolver<N>::solve` and any other part answers
/// `PartNotImplemented`.
///
/// ```ignore
/// impl_solver_parts!(Day4 { 1, 2 });
/// ```
#[macro_export]
macro_rules! impl_solver_parts {
    ($solver:ty { $($part:literal),+ $(,)? }) => {
        impl $crate::Solver for $solver {
            const PARTS: u8 = {
                let parts: &[u8] = &[$($part),+];
                let mut max = 0u8;
                let mut i = 0;
                while i < parts.len() {
                    if parts[i] > max {
                        max = parts[i];
                    }
                    i += 1;
                }
                max
            };

            fn solve_part(
                shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, $crate::SolveError> {
                match part {
                    $($part => <Self as $crate::PartSolver<$part>>::solve(shared),)+
                    other => ::std::result::Result::Err(
                        $crate::SolveError::PartNotImplemented(other),
                    ),
                }
            }
        }
    };
}
