use std::sync::Arc;

use crate::formulas::{BinaryOperator, Formula, Variable};

use super::{convert_iteratively, Basis, BasisConfig, Converted, Converter};

/// Converts `formula` into an equivalent formula which only contains
/// variables and the operator `-&`.
///
/// A negation `~a` becomes `a -& a`, `T` becomes `(p -& p) -& (p -& p)` and
/// `F` becomes `p -& (p -& p)`. Operands which occur twice in an encoding are
/// shared, not copied. Exclusive disjunctions and equivalences are converted
/// via a detour over the other operators.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::transformations::convert_to_nand;
/// let formula = "~p & q".to_formula();
///
/// let converted = convert_to_nand(&formula);
///
/// assert_eq!(converted.to_string(), "(((p-&p)-&q)-&((p-&p)-&q))");
/// ```
pub fn convert_to_nand(formula: &Formula) -> Formula {
    convert_to_nand_with(formula, &BasisConfig::default())
}

/// Converts `formula` into an equivalent formula which only contains
/// variables and the operator `-&`, using the placeholder of `config` to
/// express constants.
pub fn convert_to_nand_with(formula: &Formula, config: &BasisConfig) -> Formula {
    convert_iteratively(formula, &Nand { placeholder: &config.placeholder })
}

struct Nand<'a> {
    placeholder: &'a Variable,
}

impl Converter for Nand<'_> {
    const BASIS: Basis = Basis::Nand;

    fn detour(&self, formula: &Formula) -> Option<Formula> {
        match formula {
            Formula::Nor(left, right) => Some(Formula::not(Formula::or(left.clone(), right.clone()))),
            Formula::Xor(left, right) => Some(Formula::and(
                Formula::or(left.clone(), right.clone()),
                Formula::not(Formula::and(left.clone(), right.clone())),
            )),
            Formula::Equiv(left, right) => Some(Formula::not(Formula::xor(left.clone(), right.clone()))),
            _ => None,
        }
    }

    fn rewrite(&self, node: Converted<'_>) -> Formula {
        match node {
            Converted::Atom(Formula::True) => {
                let p = Arc::new(Formula::var(self.placeholder));
                let np = Arc::new(Formula::nand(p.clone(), p));
                Formula::nand(np.clone(), np)
            }
            Converted::Atom(Formula::False) => {
                let p = Arc::new(Formula::var(self.placeholder));
                Formula::nand(p.clone(), Formula::nand(p.clone(), p))
            }
            Converted::Atom(atom) => atom.clone(),
            Converted::Not(x) => Formula::nand(x.clone(), x),
            Converted::Binary(BinaryOperator::And, a, b) => {
                let n = Arc::new(Formula::nand(a, b));
                Formula::nand(n.clone(), n)
            }
            Converted::Binary(BinaryOperator::Or, a, b) => {
                Formula::nand(Formula::nand(a.clone(), a), Formula::nand(b.clone(), b))
            }
            Converted::Binary(BinaryOperator::Impl, a, b) => Formula::nand(a, Formula::nand(b.clone(), b)),
            Converted::Binary(BinaryOperator::Nand, a, b) => Formula::nand(a, b),
            Converted::Binary(op, _, _) => unreachable!("{op} is converted with a detour"),
        }
    }
}
