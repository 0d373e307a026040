use std::sync::Arc;

use crate::formulas::{BinaryOperator, Formula, Variable};

use super::{convert_iteratively, Basis, BasisConfig, Converted, Converter};

/// Converts `formula` into an equivalent formula which only contains
/// variables and the operators `->` and `~`.
///
/// `a & b` becomes `~(a -> ~b)` and `a | b` becomes `~a -> b`. `T` becomes
/// `p -> p` and `F` becomes `~(p -> p)`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::transformations::convert_to_implies_not;
/// let formula = "p & q".to_formula();
///
/// let converted = convert_to_implies_not(&formula);
///
/// assert_eq!(converted.to_string(), "~(p->~q)");
/// ```
pub fn convert_to_implies_not(formula: &Formula) -> Formula {
    convert_to_implies_not_with(formula, &BasisConfig::default())
}

/// Converts `formula` into an equivalent formula which only contains
/// variables and the operators `->` and `~`, using the placeholder of
/// `config` to express constants.
pub fn convert_to_implies_not_with(formula: &Formula, config: &BasisConfig) -> Formula {
    convert_iteratively(formula, &ImpliesNot { placeholder: &config.placeholder })
}

struct ImpliesNot<'a> {
    placeholder: &'a Variable,
}

/// Detours of the operators which neither `{->, ~}` nor `{->, F}` express
/// directly.
pub(super) fn implication_detour(formula: &Formula) -> Option<Formula> {
    match formula {
        Formula::Xor(left, right) => Some(Formula::or(
            Formula::and(left.clone(), Formula::not(right.clone())),
            Formula::and(Formula::not(left.clone()), right.clone()),
        )),
        Formula::Equiv(left, right) => Some(Formula::or(
            Formula::and(left.clone(), right.clone()),
            Formula::and(Formula::not(left.clone()), Formula::not(right.clone())),
        )),
        Formula::Nand(left, right) => Some(Formula::not(Formula::and(left.clone(), right.clone()))),
        Formula::Nor(left, right) => Some(Formula::not(Formula::or(left.clone(), right.clone()))),
        _ => None,
    }
}

impl Converter for ImpliesNot<'_> {
    const BASIS: Basis = Basis::ImpliesNot;

    fn detour(&self, formula: &Formula) -> Option<Formula> {
        implication_detour(formula)
    }

    fn rewrite(&self, node: Converted<'_>) -> Formula {
        match node {
            Converted::Atom(Formula::True) => {
                let p = Arc::new(Formula::var(self.placeholder));
                Formula::implication(p.clone(), p)
            }
            Converted::Atom(Formula::False) => {
                let p = Arc::new(Formula::var(self.placeholder));
                Formula::not(Formula::implication(p.clone(), p))
            }
            Converted::Atom(atom) => atom.clone(),
            Converted::Not(op) => Formula::not(op),
            Converted::Binary(BinaryOperator::Impl, a, b) => Formula::implication(a, b),
            Converted::Binary(BinaryOperator::And, a, b) => Formula::not(Formula::implication(a, Formula::not(b))),
            Converted::Binary(BinaryOperator::Or, a, b) => Formula::implication(Formula::not(a), b),
            Converted::Binary(op, _, _) => unreachable!("{op} is converted with a detour"),
        }
    }
}
