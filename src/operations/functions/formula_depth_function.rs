use crate::formulas::Formula;

/// A function that returns the depth of a formula's abstract syntax tree. The
/// depth of a formula indicates how many levels of nested sub-formulas a
/// formula has. For example,
///
/// - `a` and `T` have depth zero,
/// - `~a` and `a & b` have depth one,
/// - `(a & b) | c` has depth two,
/// - `(a & b) | c & (e -& f)` has depth three.
///
/// Unlike in formula representations with literals, a negation is a node of
/// its own and adds one level. The formula is traversed with an explicit
/// stack, and shared sub-formulas are visited once.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::functions::formula_depth;
/// let formula1 = "a".to_formula();
/// let formula2 = "a & b".to_formula();
/// let formula3 = "(a & b) | c".to_formula();
/// let formula4 = "(a & b) | c & (e -& f)".to_formula();
///
/// assert_eq!(formula_depth(&formula1), 0);
/// assert_eq!(formula_depth(&formula2), 1);
/// assert_eq!(formula_depth(&formula3), 2);
/// assert_eq!(formula_depth(&formula4), 3);
/// ```
pub fn formula_depth(formula: &Formula) -> u64 {
    formula.fold(|_, depths: &[u64]| depths.iter().max().map_or(0, |depth| depth + 1))
}
