use crate::datastructures::Assignment;
use crate::formulas::{Formula, Variable};
use crate::operations::functions::{variables, MAX_TRUTH_TABLE_VARIABLES};

/// Predicate to test whether two formulas are equivalent, i.e. whether they
/// evaluate to the same value under every assignment of the variables of both
/// formulas.
///
/// The test enumerates all assignments, so it is only feasible for formulas
/// with few variables.
///
/// # Panics
///
/// The function panics if the formulas have more than
/// [`MAX_TRUTH_TABLE_VARIABLES`] variables in total.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::predicates::is_equivalent;
/// let formula1 = "a -> b".to_formula();
/// let formula2 = "~b -> ~a".to_formula();
/// let formula3 = "b -> a".to_formula();
///
/// assert!(is_equivalent(&formula1, &formula2));
/// assert!(!is_equivalent(&formula1, &formula3));
/// ```
pub fn is_equivalent(formula1: &Formula, formula2: &Formula) -> bool {
    let mut vars = variables(formula1);
    vars.append(&mut variables(formula2));
    let vars: Vec<Variable> = vars.into_iter().collect();
    all_assignments(&vars, |assignment| formula1.evaluate(assignment) == formula2.evaluate(assignment))
}

/// Predicate to test whether `formula` evaluates to `true` under every
/// assignment of its variables.
///
/// # Panics
///
/// The function panics if the formula has more than
/// [`MAX_TRUTH_TABLE_VARIABLES`] variables.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::predicates::is_tautology;
/// assert!(is_tautology(&"p | ~p".to_formula()));
/// assert!(is_tautology(&"(p -> q) <-> (~p | q)".to_formula()));
/// assert!(!is_tautology(&"p -> q".to_formula()));
/// ```
pub fn is_tautology(formula: &Formula) -> bool {
    let vars: Vec<Variable> = variables(formula).into_iter().collect();
    all_assignments(&vars, |assignment| formula.evaluate(assignment))
}

fn all_assignments<P>(vars: &[Variable], predicate: P) -> bool
where P: Fn(&Assignment) -> bool {
    assert!(vars.len() <= MAX_TRUTH_TABLE_VARIABLES, "Too many variables for an exhaustive test: {}", vars.len());
    (0..1_u64 << vars.len()).all(|bits| predicate(&Assignment::from_bits(vars, bits)))
}
