use std::sync::Arc;

use crate::formulas::{BinaryOperator, Formula};

use super::implies_not::implication_detour;
use super::{convert_iteratively, Basis, Converted, Converter};

/// Converts `formula` into an equivalent formula which only contains
/// variables, the operator `->`, and the constant `F`.
///
/// A negation `~a` becomes `a -> F`, `T` becomes `F -> F`, and `F` stays as
/// it is. Since the basis contains a constant, no placeholder variable is
/// needed.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::transformations::convert_to_implies_false;
/// let formula = "~p | T".to_formula();
///
/// let converted = convert_to_implies_false(&formula);
///
/// assert_eq!(converted.to_string(), "(((p->F)->F)->(F->F))");
/// ```
pub fn convert_to_implies_false(formula: &Formula) -> Formula {
    convert_iteratively(formula, &ImpliesFalse)
}

struct ImpliesFalse;

fn negate(op: Arc<Formula>) -> Formula {
    Formula::implication(op, Formula::False)
}

impl Converter for ImpliesFalse {
    const BASIS: Basis = Basis::ImpliesFalse;

    fn detour(&self, formula: &Formula) -> Option<Formula> {
        implication_detour(formula)
    }

    fn rewrite(&self, node: Converted<'_>) -> Formula {
        match node {
            Converted::Atom(Formula::True) => Formula::implication(Formula::False, Formula::False),
            Converted::Atom(atom) => atom.clone(),
            Converted::Not(op) => negate(op),
            Converted::Binary(BinaryOperator::Impl, a, b) => Formula::implication(a, b),
            Converted::Binary(BinaryOperator::And, a, b) => {
                negate(Arc::new(Formula::implication(a, negate(b))))
            }
            Converted::Binary(BinaryOperator::Or, a, b) => Formula::implication(negate(a), b),
            Converted::Binary(op, _, _) => unreachable!("{op} is converted with a detour"),
        }
    }
}
