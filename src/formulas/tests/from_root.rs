mod from_root_test {
    use crate::formulas::{Formula, FormulaError, FormulaType};
    use crate::util::test_util::F;

    #[test]
    fn test_atoms() {
        let ff = F::new();
        assert_eq!(Formula::from_root("a", None, None).unwrap(), ff.A);
        assert_eq!(Formula::from_root("T", None, None).unwrap(), ff.TRUE);
        assert_eq!(Formula::from_root("F", None, None).unwrap(), ff.FALSE);
    }

    #[test]
    fn test_operators() {
        let ff = F::new();
        assert_eq!(Formula::from_root("~", Some(ff.AND1.clone()), None).unwrap(), ff.NOT1);
        assert_eq!(Formula::from_root("&", Some(ff.A.clone()), Some(ff.B.clone())).unwrap(), ff.AND1);
        assert_eq!(Formula::from_root("|", Some(ff.X.clone()), Some(ff.Y.clone())).unwrap(), ff.OR1);
        assert_eq!(Formula::from_root("->", Some(ff.A.clone()), Some(ff.B.clone())).unwrap(), ff.IMP1);
        assert_eq!(Formula::from_root("+", Some(ff.A.clone()), Some(ff.B.clone())).unwrap(), ff.XOR1);
        assert_eq!(Formula::from_root("<->", Some(ff.A.clone()), Some(ff.B.clone())).unwrap(), ff.EQ1);
        assert_eq!(Formula::from_root("-&", Some(ff.A.clone()), Some(ff.B.clone())).unwrap(), ff.NAND1);
        assert_eq!(Formula::from_root("-|", Some(ff.A.clone()), Some(ff.B.clone())).unwrap(), ff.NOR1);
    }

    #[test]
    fn test_rebuild() {
        let ff = F::new();
        for formula in ff.all() {
            let first = formula.first().cloned();
            let second = formula.second().cloned();
            assert_eq!(&Formula::from_root(&formula.root(), first, second).unwrap(), formula);
        }
    }

    #[test]
    fn test_errors() {
        let ff = F::new();
        assert!(matches!(Formula::from_root("=>", None, None), Err(FormulaError::UnknownRoot(r)) if r == "=>"));
        assert!(matches!(Formula::from_root("A", None, None), Err(FormulaError::UnknownRoot(_))));
        assert!(matches!(
            Formula::from_root("&", Some(ff.A.clone()), None),
            Err(FormulaError::OperandMismatch { expected: 2, found: 1, .. })
        ));
        assert!(matches!(
            Formula::from_root("~", Some(ff.A.clone()), Some(ff.B.clone())),
            Err(FormulaError::OperandMismatch { expected: 1, found: 2, .. })
        ));
        assert!(matches!(
            Formula::from_root("a", Some(ff.A.clone()), None),
            Err(FormulaError::OperandMismatch { expected: 0, found: 1, .. })
        ));
        assert!(matches!(
            Formula::from_root("F", Some(ff.A.clone()), Some(ff.B.clone())),
            Err(FormulaError::OperandMismatch { expected: 0, found: 2, .. })
        ));
        let error = Formula::from_root("->", None, Some(ff.B.clone())).unwrap_err();
        assert_eq!(error.to_string(), "root \"->\" expects 2 operand(s), but got 1");
        assert_eq!(FormulaType::Impl.arity(), 2);
    }
}
