use std::collections::{BTreeSet, HashSet};
use std::ptr;

use crate::formulas::{Formula, Variable};

/// Returns all variables occurring in `formula`, in alphabetical order.
///
/// Sub-formulas which are shared within `formula` are only visited once.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::{ToFormula, Variable};
/// # use logicng_basis::operations::functions::variables;
/// let formula = "(b -> a) & ~c | T".to_formula();
///
/// let names: Vec<_> = variables(&formula).iter().map(Variable::to_string).collect();
///
/// assert_eq!(names, vec!["a", "b", "c"]);
/// ```
pub fn variables(formula: &Formula) -> BTreeSet<Variable> {
    let mut result = BTreeSet::new();
    let mut seen = HashSet::new();
    let mut stack = vec![formula];
    seen.insert(ptr::from_ref(formula));

    while let Some(current) = stack.pop() {
        if let Some(var) = current.as_variable() {
            result.insert(var.clone());
        }
        for op in current.operands() {
            if seen.insert(ptr::from_ref(op)) {
                stack.push(op);
            }
        }
    }
    result
}
