use crate::formulas::Formula;

/// Returns the number of nodes of the syntax tree of `formula`, i.e. the number
/// of variables, constants, and operators in its textual representation.
///
/// A sub-formula which is shared within `formula` is counted at each of its
/// occurrences.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::ToFormula;
/// # use logicng_basis::operations::functions::number_of_nodes;
/// assert_eq!(number_of_nodes(&"a".to_formula()), 1);
/// assert_eq!(number_of_nodes(&"~a & (b -> T)".to_formula()), 6);
/// ```
pub fn number_of_nodes(formula: &Formula) -> u64 {
    let mut count = 0;
    let mut stack = vec![formula];
    while let Some(current) = stack.pop() {
        count += 1;
        stack.extend(current.operands());
    }
    count
}

#[cfg(test)]
mod tests {
    use super::number_of_nodes;
    use crate::formulas::ToFormula;
    use crate::operations::transformations::convert_to_nand;
    use crate::util::test_util::F;

    #[test]
    fn test_fixtures() {
        let ff = F::new();
        assert_eq!(number_of_nodes(&ff.TRUE), 1);
        assert_eq!(number_of_nodes(&ff.A), 1);
        assert_eq!(number_of_nodes(&ff.NA), 2);
        assert_eq!(number_of_nodes(&ff.AND1), 3);
        assert_eq!(number_of_nodes(&ff.OR3), 9);
        assert_eq!(number_of_nodes(&ff.IMP4), 9);
        assert_eq!(number_of_nodes(&ff.NOT1), 4);
    }

    #[test]
    fn test_shared_nodes() {
        let converted = convert_to_nand(&"~(a | b)".to_formula());
        assert_eq!(converted.to_string(), "(((a-&a)-&(b-&b))-&((a-&a)-&(b-&b)))");
        assert_eq!(number_of_nodes(&converted), 15);
    }
}
