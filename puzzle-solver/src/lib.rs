//! Daily puzzle solver framework
//!
//! A flexible and type-safe framework for Advent-of-Code-style daily
//! solvers: each day parses its own input into shared data once and
//! answers one or more parts against it.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`PuzzleParser`],
//!   [`PartSolver`], [`Solver`])
//! - Type-safe parsing and result handling with explicit error kinds
//! - Parse and solve timing on every instance ([`DynSolver`])
//! - A day-keyed registry with `inventory`-based plugin collection
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{
//!     impl_solver_parts, ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError,
//! };
//!
//! // Define a solver
//! pub struct Day1;
//!
//! impl PuzzleParser for Day1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.trim()
//!                     .parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl_solver_parts!(Day1 { 1 });
//!
//! // Register and run it
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Day1>(1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Parsing and shared data
//!
//! [`PuzzleParser::parse`] runs exactly once per instance, at
//! construction. Intermediate results both parts want are fields of the
//! shared data, typically an `Option<T>` filled with
//! `get_or_insert_with` by whichever part runs first.
//!
//! ## Parts
//!
//! Each implemented part is one `impl PartSolver<N>`; the
//! [`impl_solver_parts!`] macro derives the uniform [`Solver`] dispatch
//! from the list of implemented parts. Parts inside `1..=PARTS` without
//! an implementation answer [`SolveError::PartNotImplemented`], parts
//! outside the range [`SolveError::PartOutOfRange`].
//!
//! ## Plugin System
//!
//! Solver modules self-register by submitting a [`SolverPlugin`]:
//!
//! ```ignore
//! inventory::submit! {
//!     SolverPlugin { day: 4, solver: &Day4, tags: &["grid"] }
//! }
//! ```

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by solver crates
pub use inventory;
