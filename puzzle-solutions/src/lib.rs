//! Daily puzzle solutions with automatic registration
//!
//! This crate contains the actual puzzle solutions, one module per day.
//! Each module implements the `puzzle-solver` traits and submits a
//! [`SolverPlugin`](puzzle_solver::SolverPlugin) via `inventory::submit!`
//! so that [`full_registry`] can collect everything without a central
//! list. Day 4 is the caller of the `grid-scanner` crate.

use puzzle_solver::{RegistrationError, RegistryBuilder, SolverRegistry};

pub mod days;

/// Build a registry containing every solver this crate registers.
pub fn full_registry() -> Result<SolverRegistry, RegistrationError> {
    Ok(RegistryBuilder::new().register_all_plugins()?.build())
}
