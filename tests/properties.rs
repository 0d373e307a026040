use logicng_basis::formulas::{BinaryOperator, Formula};
use logicng_basis::operations::predicates::{is_equivalent, is_in_basis};
use logicng_basis::operations::transformations::Basis;
use proptest::prelude::*;

const OPERATORS: [BinaryOperator; 7] = [
    BinaryOperator::And,
    BinaryOperator::Or,
    BinaryOperator::Impl,
    BinaryOperator::Xor,
    BinaryOperator::Equiv,
    BinaryOperator::Nand,
    BinaryOperator::Nor,
];

fn arb_atom() -> BoxedStrategy<Formula> {
    prop_oneof![
        4 => prop::sample::select(vec!["a", "b", "c", "d"])
            .prop_map(|name| Formula::variable(name).expect("valid variable name")),
        1 => Just(Formula::True),
        1 => Just(Formula::False),
    ]
    .boxed()
}

fn arb_formula(max_depth: u32) -> BoxedStrategy<Formula> {
    if max_depth == 0 {
        return arb_atom();
    }
    prop_oneof![
        2 => arb_atom(),
        1 => arb_formula(max_depth - 1).prop_map(Formula::not),
        4 => (prop::sample::select(OPERATORS.to_vec()), arb_formula(max_depth - 1), arb_formula(max_depth - 1))
            .prop_map(|(op, left, right)| Formula::binary(op, left, right)),
    ]
    .boxed()
}

fn arb_basis() -> impl Strategy<Value = Basis> {
    prop::sample::select(Basis::ALL.to_vec())
}

proptest! {
    #[test]
    fn conversion_is_equivalent(formula in arb_formula(4), basis in arb_basis()) {
        let converted = basis.convert(&formula);
        prop_assert!(is_equivalent(&formula, &converted), "{} vs {}", formula, converted);
    }

    #[test]
    fn conversion_is_in_basis(formula in arb_formula(4), basis in arb_basis()) {
        let converted = basis.convert(&formula);
        prop_assert!(is_in_basis(&converted, basis), "{}: {}", basis, converted);
    }

    #[test]
    fn conversion_is_stable(formula in arb_formula(3), basis in arb_basis()) {
        let converted = basis.convert(&formula);
        prop_assert_eq!(basis.convert(&converted), converted);
    }

    #[test]
    fn display_parses_back(formula in arb_formula(4)) {
        let parsed = Formula::parse(formula.to_string());
        prop_assert_eq!(parsed.ok(), Some(formula));
    }

    #[test]
    fn variables_pass_through(name in "[a-z][0-9]{0,3}", basis in arb_basis()) {
        let var = Formula::variable(&name).expect("valid variable name");
        prop_assert_eq!(basis.convert(&var), var);
    }
}
