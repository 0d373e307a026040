use crate::datastructures::Assignment;
use crate::formulas::{Formula, Variable};

/// The maximum number of variables of a truth table.
pub const MAX_TRUTH_TABLE_VARIABLES: usize = 32;

/// Computes the truth table of `formula` over `variables`.
///
/// The rows are in binary counting order with the first variable as the most
/// significant bit, so the first row assigns all variables to `false` and the
/// last row assigns all variables to `true`. Variables of `formula` which are
/// not in `variables` are unassigned and hence evaluate to `false`.
///
/// # Panics
///
/// The function panics if more than [`MAX_TRUTH_TABLE_VARIABLES`] variables
/// are passed.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::{ToFormula, Variable};
/// # use logicng_basis::operations::functions::truth_table;
/// let p = Variable::new("p").unwrap();
/// let q = Variable::new("q").unwrap();
///
/// let table = truth_table(&"p -> q".to_formula(), &[p, q]);
///
/// let values: Vec<bool> = table.iter().map(|(_, value)| *value).collect();
/// assert_eq!(values, vec![true, true, false, true]);
/// assert_eq!(table[2].0.to_string(), "[p, ~q]");
/// ```
pub fn truth_table(formula: &Formula, variables: &[Variable]) -> Vec<(Assignment, bool)> {
    assert!(
        variables.len() <= MAX_TRUTH_TABLE_VARIABLES,
        "Too many variables for a truth table: {}",
        variables.len()
    );
    (0..1_u64 << variables.len())
        .map(|bits| {
            let assignment = Assignment::from_bits(variables, bits);
            let value = formula.evaluate(&assignment);
            (assignment, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::truth_table;
    use crate::formulas::{Formula, ToFormula};
    use crate::util::test_util::vars_list;

    fn values(formula: &Formula, variables: &str) -> Vec<bool> {
        truth_table(formula, &vars_list(variables)).into_iter().map(|(_, value)| value).collect()
    }

    #[test]
    fn test_constants() {
        assert_eq!(truth_table(&Formula::True, &[]).len(), 1);
        assert!(truth_table(&Formula::True, &[])[0].1);
        assert!(!truth_table(&Formula::False, &[])[0].1);
        assert_eq!(values(&Formula::False, "a b"), vec![false; 4]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(values(&"a & b".to_formula(), "a b"), vec![false, false, false, true]);
        assert_eq!(values(&"a | b".to_formula(), "a b"), vec![false, true, true, true]);
        assert_eq!(values(&"a -> b".to_formula(), "a b"), vec![true, true, false, true]);
        assert_eq!(values(&"a + b".to_formula(), "a b"), vec![false, true, true, false]);
        assert_eq!(values(&"a <-> b".to_formula(), "a b"), vec![true, false, false, true]);
        assert_eq!(values(&"a -& b".to_formula(), "a b"), vec![true, true, true, false]);
        assert_eq!(values(&"a -| b".to_formula(), "a b"), vec![true, false, false, false]);
        assert_eq!(values(&"~a".to_formula(), "a"), vec![true, false]);
    }

    #[test]
    fn test_row_order() {
        let table = truth_table(&"a".to_formula(), &vars_list("a b c"));
        assert_eq!(table.len(), 8);
        assert_eq!(table[0].0.to_string(), "[~a, ~b, ~c]");
        assert_eq!(table[3].0.to_string(), "[~a, b, c]");
        assert_eq!(table[4].0.to_string(), "[a, ~b, ~c]");
        assert_eq!(values(&"a".to_formula(), "a b c"), vec![false, false, false, false, true, true, true, true]);
    }

    #[test]
    fn test_missing_variables() {
        assert_eq!(values(&"a | b".to_formula(), "a"), vec![false, true]);
        assert_eq!(values(&"~b".to_formula(), "a"), vec![true, true]);
    }

    #[test]
    #[should_panic(expected = "Too many variables")]
    fn test_too_many_variables() {
        let names = (0..33).map(|i| format!("v{i}")).collect::<Vec<_>>().join(" ");
        truth_table(&Formula::True, &vars_list(&names));
    }
}
