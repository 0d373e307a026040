use std::sync::Arc;

use crate::formulas::{BinaryOperator, Formula, Variable};

use super::{convert_iteratively, Basis, BasisConfig, Converted, Converter};

/// Converts `formula` into an equivalent formula which only contains
/// variables and the operators `~` and `&`.
///
/// Disjunctions are eliminated with De Morgan's law, `a | b` becomes
/// `~(~a & ~b)`. Implications, exclusive disjunctions, equivalences, and
/// negated disjunctions are first rewritten with disjunctions over their
/// original operands, which are then converted in their place. `T` becomes
/// `~(p & ~p)` and `F` becomes `p & ~p`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::transformations::convert_to_not_and;
/// let formula = "p | q".to_formula();
///
/// let converted = convert_to_not_and(&formula);
///
/// assert_eq!(converted.to_string(), "~(~p&~q)");
/// ```
pub fn convert_to_not_and(formula: &Formula) -> Formula {
    convert_to_not_and_with(formula, &BasisConfig::default())
}

/// Converts `formula` into an equivalent formula which only contains
/// variables and the operators `~` and `&`, using the placeholder of `config`
/// to express constants.
pub fn convert_to_not_and_with(formula: &Formula, config: &BasisConfig) -> Formula {
    convert_iteratively(formula, &NotAnd { placeholder: &config.placeholder })
}

struct NotAnd<'a> {
    placeholder: &'a Variable,
}

impl Converter for NotAnd<'_> {
    const BASIS: Basis = Basis::NotAnd;

    fn detour(&self, formula: &Formula) -> Option<Formula> {
        match formula {
            Formula::Impl(left, right) => Some(Formula::or(Formula::not(left.clone()), right.clone())),
            Formula::Xor(left, right) => Some(Formula::or(
                Formula::and(left.clone(), Formula::not(right.clone())),
                Formula::and(Formula::not(left.clone()), right.clone()),
            )),
            Formula::Equiv(left, right) => Some(Formula::or(
                Formula::and(left.clone(), right.clone()),
                Formula::and(Formula::not(left.clone()), Formula::not(right.clone())),
            )),
            Formula::Nor(left, right) => Some(Formula::not(Formula::or(left.clone(), right.clone()))),
            _ => None,
        }
    }

    fn rewrite(&self, node: Converted<'_>) -> Formula {
        match node {
            Converted::Atom(Formula::True) => {
                let p = Arc::new(Formula::var(self.placeholder));
                Formula::not(Formula::and(p.clone(), Formula::not(p)))
            }
            Converted::Atom(Formula::False) => {
                let p = Arc::new(Formula::var(self.placeholder));
                Formula::and(p.clone(), Formula::not(p))
            }
            Converted::Atom(atom) => atom.clone(),
            Converted::Not(op) => Formula::not(op),
            Converted::Binary(BinaryOperator::And, a, b) => Formula::and(a, b),
            Converted::Binary(BinaryOperator::Or, a, b) => {
                Formula::not(Formula::and(Formula::not(a), Formula::not(b)))
            }
            Converted::Binary(BinaryOperator::Nand, a, b) => Formula::not(Formula::and(a, b)),
            Converted::Binary(op, _, _) => unreachable!("{op} is converted with a detour"),
        }
    }
}
