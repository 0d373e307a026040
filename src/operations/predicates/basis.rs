use std::collections::HashSet;
use std::ptr;

use crate::formulas::Formula;
use crate::operations::transformations::Basis;

/// Predicate to test whether `formula` only contains variables and the
/// operators and constants of `basis`.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::predicates::is_in_basis;
/// # use logicng_basis::operations::transformations::Basis;
/// let formula = "~(a & ~b)".to_formula();
///
/// assert!(is_in_basis(&formula, Basis::NotAnd));
/// assert!(is_in_basis(&formula, Basis::NotAndOr));
/// assert!(!is_in_basis(&formula, Basis::Nand));
/// ```
pub fn is_in_basis(formula: &Formula, basis: Basis) -> bool {
    let mut seen = HashSet::new();
    let mut stack = vec![formula];
    seen.insert(ptr::from_ref(formula));

    while let Some(current) = stack.pop() {
        if !basis.contains(current.formula_type()) {
            return false;
        }
        for op in current.operands() {
            if seen.insert(ptr::from_ref(op)) {
                stack.push(op);
            }
        }
    }
    true
}
