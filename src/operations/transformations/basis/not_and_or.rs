use std::sync::Arc;

use crate::formulas::{BinaryOperator, Formula, Variable};

use super::{convert_iteratively, Basis, BasisConfig, Converted, Converter};

/// Converts `formula` into an equivalent formula which only contains
/// variables and the operators `~`, `&`, and `|`.
///
/// The constants are expressed with the placeholder variable `p`: `T` becomes
/// `p | ~p` and `F` becomes `p & ~p`.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::transformations::convert_to_not_and_or;
/// let formula = "p + q".to_formula();
///
/// let converted = convert_to_not_and_or(&formula);
///
/// assert_eq!(converted.to_string(), "((p&~q)|(~p&q))");
/// ```
pub fn convert_to_not_and_or(formula: &Formula) -> Formula {
    convert_to_not_and_or_with(formula, &BasisConfig::default())
}

/// Converts `formula` into an equivalent formula which only contains
/// variables and the operators `~`, `&`, and `|`, using the placeholder of
/// `config` to express constants.
pub fn convert_to_not_and_or_with(formula: &Formula, config: &BasisConfig) -> Formula {
    convert_iteratively(formula, &NotAndOr { placeholder: &config.placeholder })
}

struct NotAndOr<'a> {
    placeholder: &'a Variable,
}

impl Converter for NotAndOr<'_> {
    const BASIS: Basis = Basis::NotAndOr;

    fn detour(&self, _: &Formula) -> Option<Formula> {
        None
    }

    fn rewrite(&self, node: Converted<'_>) -> Formula {
        match node {
            Converted::Atom(Formula::True) => {
                let p = Arc::new(Formula::var(self.placeholder));
                Formula::or(p.clone(), Formula::not(p))
            }
            Converted::Atom(Formula::False) => {
                let p = Arc::new(Formula::var(self.placeholder));
                Formula::and(p.clone(), Formula::not(p))
            }
            Converted::Atom(atom) => atom.clone(),
            Converted::Not(op) => Formula::not(op),
            Converted::Binary(op, a, b) => match op {
                BinaryOperator::And => Formula::and(a, b),
                BinaryOperator::Or => Formula::or(a, b),
                BinaryOperator::Impl => Formula::or(Formula::not(a), b),
                BinaryOperator::Xor => {
                    Formula::or(Formula::and(a.clone(), Formula::not(b.clone())), Formula::and(Formula::not(a), b))
                }
                BinaryOperator::Equiv => {
                    Formula::or(Formula::and(a.clone(), b.clone()), Formula::and(Formula::not(a), Formula::not(b)))
                }
                BinaryOperator::Nand => Formula::not(Formula::and(a, b)),
                BinaryOperator::Nor => Formula::not(Formula::or(a, b)),
            },
        }
    }
}
