//! Registry construction and lookup behavior

use puzzle_solver::{
    impl_solver_parts, ParseError, PartSolver, PuzzleParser, RegistrationError, RegistryBuilder,
    SolveError, SolverError,
};

struct Doubler;

impl PuzzleParser for Doubler {
    type SharedData<'a> = i64;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat("expected one integer".to_string()))
    }
}

impl PartSolver<1> for Doubler {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((*shared * 2).to_string())
    }
}

impl_solver_parts!(Doubler { 1 });

/// Zero-copy solver whose shared data borrows the input
struct Echo;

impl PuzzleParser for Echo {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for Echo {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

impl_solver_parts!(Echo { 1 });

#[test]
fn registered_solver_round_trips() {
    let registry = RegistryBuilder::new()
        .register_solver::<Doubler>(7)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(7, "21").unwrap();
    assert_eq!(solver.day(), 7);
    assert_eq!(solver.parts(), 1);
    assert_eq!(solver.solve(1).unwrap().answer, "42");
}

#[test]
fn borrowed_shared_data_works_through_the_registry() {
    let registry = RegistryBuilder::new()
        .register_solver::<Echo>(3)
        .unwrap()
        .build();

    let input = String::from("  hello  ");
    let mut solver = registry.create_solver(3, &input).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "hello");
}

#[test]
fn duplicate_day_is_rejected() {
    let result = RegistryBuilder::new()
        .register_solver::<Doubler>(7)
        .unwrap()
        .register_solver::<Echo>(7);
    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(7))));
}

#[test]
fn out_of_range_day_is_rejected() {
    for day in [0, 26, 255] {
        let result = RegistryBuilder::new().register_solver::<Doubler>(day);
        assert!(
            matches!(result, Err(RegistrationError::InvalidDay(d)) if d == day),
            "day {day}"
        );
    }
}

#[test]
fn unknown_day_lookup_fails() {
    let registry = RegistryBuilder::new().build();
    assert!(registry.is_empty());
    assert!(matches!(
        registry.create_solver(5, ""),
        Err(SolverError::NotFound(5))
    ));
    assert!(matches!(
        registry.create_solver(0, ""),
        Err(SolverError::InvalidDay(0))
    ));
}

#[test]
fn parse_failure_surfaces_as_parse_error() {
    let registry = RegistryBuilder::new()
        .register_solver::<Doubler>(1)
        .unwrap()
        .build();
    assert!(matches!(
        registry.create_solver(1, "not a number"),
        Err(SolverError::ParseError(_))
    ));
}

#[test]
fn info_reports_registered_days() {
    let registry = RegistryBuilder::new()
        .register_solver::<Doubler>(2)
        .unwrap()
        .register_solver::<Echo>(9)
        .unwrap()
        .build();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains(2));
    assert!(!registry.contains(3));

    let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![2, 9]);
    assert_eq!(registry.get_info(9).unwrap().parts, 1);
}

/// Declares two parts but only implements the first
struct Gap;

impl PuzzleParser for Gap {
    type SharedData<'a> = ();

    fn parse<'a>(_input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(())
    }
}

impl puzzle_solver::Solver for Gap {
    const PARTS: u8 = 2;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok("one".to_string()),
            other => Err(SolveError::PartNotImplemented(other)),
        }
    }
}

#[test]
fn unimplemented_part_inside_range_answers_not_implemented() {
    let registry = RegistryBuilder::new()
        .register_solver::<Gap>(1)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(1, "").unwrap();
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "one");
    // part 2 is within the declared range but has no implementation
    assert!(matches!(
        solver.solve(2),
        Err(SolveError::PartNotImplemented(2))
    ));
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}
