//! Solver registry for managing and creating solver instances
//!
//! Storage is a flat `Vec` indexed by day (one event, days 1-25), built
//! once by a consuming builder and immutable afterwards. Solvers reach
//! the builder either through explicit registration or through
//! [`SolverPlugin`] entries collected with `inventory`.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// Days per event (1-25)
pub const DAYS: usize = 25;

/// Flat index for a day, `None` when out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    (1..=DAYS as u8).contains(&day).then(|| usize::from(day) - 1)
}

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Factory entry with metadata
struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`] with a fluent API
///
/// The builder pattern allows for method chaining and ensures the
/// registry is immutable after construction. Duplicate and out-of-range
/// registrations are rejected here, not discovered at lookup time.
///
/// # Example
///
/// ```no_run
/// # use puzzle_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS).map(|_| None).collect(),
        }
    }

    /// Register a raw factory function for a specific day
    ///
    /// # Arguments
    /// * `day` - The day number (1-25)
    /// * `parts` - Number of parts the produced solvers support
    /// * `factory` - A function that parses input into a boxed [`DynSolver`]
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - The day is taken or out of range
    pub fn register<F>(mut self, day: u8, parts: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }
        self.entries[index] = Some(FactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type for a specific day
    ///
    /// The factory parses the input and wraps it in a
    /// [`SolverInstance`]; the parts count comes from `S::PARTS`.
    pub fn register_solver<S>(self, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through every plugin submitted via `inventory::submit!`
    /// and registers each one with the builder.
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with all plugins registered
    /// * `Err(RegistrationError)` - Duplicate or out-of-range day found
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter returns `true`, which
    /// allows selective registration based on day or tags.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use puzzle_solver::RegistryBuilder;
    /// // Register only solvers tagged as grid problems
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Maps days to factory functions that create solver instances. Once
/// built, it cannot be modified.
pub struct SolverRegistry {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific day
    ///
    /// # Arguments
    /// * `day` - The day number (1-25)
    /// * `input` - The input string for the problem
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Unknown day or parsing failed
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Get metadata for a specific day's factory
    pub fn get_info(&self, day: u8) -> Option<FactoryInfo> {
        let index = calc_index(day)?;
        self.entries[index].as_ref().map(|e| FactoryInfo {
            day,
            parts: e.parts,
        })
    }

    /// Check if a solver exists for `day`
    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    /// Iterate over metadata for all registered days
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| FactoryInfo {
                day: i as u8 + 1,
                parts: e.parts,
            })
        })
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// This trait provides a type-erased interface for solvers to
/// self-register: unlike [`Solver`] it has no associated types, so
/// different solver types can share one plugin container.
///
/// Any type implementing [`Solver`] gets a `RegisterableSolver`
/// implementation through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

/// Blanket implementation of RegisterableSolver for all Solver types
impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Each daily solver module submits one of these with
/// `inventory::submit!`; the builder collects them via
/// [`RegistryBuilder::register_all_plugins`] or a filtered variant.
///
/// # Example
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         day: 4,
///         solver: &Day4,
///         tags: &["grid", "word-search"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "grid", "regex")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
