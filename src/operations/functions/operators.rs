use std::collections::{BTreeSet, HashSet};
use std::ptr;

use crate::formulas::{Formula, FormulaType};

/// Returns the types of all nodes of `formula` which are not variables, i.e.
/// the operators and constants the formula uses.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::{FormulaType, ToFormula};
/// # use logicng_basis::operations::functions::operators;
/// let formula = "~(a -> F) + b".to_formula();
///
/// let expected = [FormulaType::False, FormulaType::Not, FormulaType::Impl, FormulaType::Xor];
/// assert!(operators(&formula).iter().eq(expected.iter()));
/// ```
pub fn operators(formula: &Formula) -> BTreeSet<FormulaType> {
    let mut result = BTreeSet::new();
    let mut seen = HashSet::new();
    let mut stack = vec![formula];
    seen.insert(ptr::from_ref(formula));

    while let Some(current) = stack.pop() {
        if !current.is_variable() {
            result.insert(current.formula_type());
        }
        for op in current.operands() {
            if seen.insert(ptr::from_ref(op)) {
                stack.push(op);
            }
        }
    }
    result
}
