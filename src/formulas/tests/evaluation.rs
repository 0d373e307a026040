mod evaluation_tests {
    use crate::datastructures::Assignment;
    use crate::formulas::ToFormula;
    use crate::util::test_util::F;

    fn ass(ff: &F) -> Assignment {
        Assignment::from_variables(
            &[
                ff.A.as_variable().unwrap().clone(),
                ff.B.as_variable().unwrap().clone(),
                ff.C.as_variable().unwrap().clone(),
            ],
            &[ff.X.as_variable().unwrap().clone(), ff.Y.as_variable().unwrap().clone()],
        )
    }

    #[test]
    fn test_constant_eval() {
        let ff = F::new();
        assert!(ff.TRUE.evaluate(&ass(&ff)));
        assert!(!ff.FALSE.evaluate(&ass(&ff)));
    }

    #[test]
    fn test_literal_eval() {
        let ff = F::new();
        assert!(ff.A.evaluate(&ass(&ff)));
        assert!(!ff.NA.evaluate(&ass(&ff)));
        assert!(!ff.X.evaluate(&ass(&ff)));
        assert!(ff.NX.evaluate(&ass(&ff)));
    }

    #[test]
    fn test_not_eval() {
        let ff = F::new();
        assert!(!ff.NOT1.evaluate(&ass(&ff)));
        assert!(ff.NOT2.evaluate(&ass(&ff)));
    }

    #[test]
    fn test_binary_eval() {
        let ff = F::new();
        assert!(ff.AND1.evaluate(&ass(&ff)));
        assert!(!ff.AND2.evaluate(&ass(&ff)));
        assert!(!ff.AND3.evaluate(&ass(&ff)));
        assert!(!ff.OR1.evaluate(&ass(&ff)));
        assert!(ff.OR2.evaluate(&ass(&ff)));
        assert!(ff.OR3.evaluate(&ass(&ff)));

        assert!(ff.IMP1.evaluate(&ass(&ff)));
        assert!(ff.IMP2.evaluate(&ass(&ff)));
        assert!(!ff.IMP3.evaluate(&ass(&ff)));
        assert!(ff.IMP4.evaluate(&ass(&ff)));

        assert!(ff.EQ1.evaluate(&ass(&ff)));
        assert!(ff.EQ2.evaluate(&ass(&ff)));
        assert!(!ff.EQ3.evaluate(&ass(&ff)));
        assert!(ff.EQ4.evaluate(&ass(&ff)));

        assert!(!ff.XOR1.evaluate(&ass(&ff)));
        assert!(!ff.XOR2.evaluate(&ass(&ff)));
        assert!(!ff.NAND1.evaluate(&ass(&ff)));
        assert!(ff.NAND2.evaluate(&ass(&ff)));
        assert!(!ff.NOR1.evaluate(&ass(&ff)));
        assert!(!ff.NOR2.evaluate(&ass(&ff)));
    }

    #[test]
    fn test_unassigned_variables() {
        let ff = F::new();
        let empty = Assignment::default();
        assert!(!ff.A.evaluate(&empty));
        assert!(ff.NA.evaluate(&empty));
        assert!(ff.NOR1.evaluate(&empty));
        assert!("a | d".to_formula().evaluate(&ass(&ff)));
        assert!(!"d".to_formula().evaluate(&ass(&ff)));
        assert!("~d -> c".to_formula().evaluate(&ass(&ff)));
    }

    #[test]
    fn test_nested_eval() {
        let ff = F::new();
        assert!("(a -& x) + (b -| y)".to_formula().evaluate(&ass(&ff)));
        assert!("~(a & b) <-> (x | y)".to_formula().evaluate(&ass(&ff)));
        assert!("(c -> x) -> F".to_formula().evaluate(&ass(&ff)));
        assert!(!"~~(c -> x)".to_formula().evaluate(&ass(&ff)));
    }
}
