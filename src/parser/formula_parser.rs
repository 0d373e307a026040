use itertools::Itertools;
use pest::iterators::Pair;
use pest::Parser;
use tracing::debug;

use crate::formulas::{BinaryOperator, Formula, FormulaError, Variable};

#[derive(Parser)]
#[grammar = "parser/formula.pest"]
struct FormulaParser;

/// Parses a formula.
///
/// The syntax consists of variables (a lowercase letter followed by digits),
/// the constants `T` and `F`, and the operators below, listed from the
/// weakest to the strongest binding:
///
/// | Operator | Meaning | Associativity |
/// |---|---|---|
/// | `<->` | equivalence | right |
/// | `->` | implication | right |
/// | `\|`, `-\|`, `+` | or, nor, xor | left |
/// | `&`, `-&` | and, nand | left |
/// | `~` | not | prefix |
///
/// Parentheses can be used to group sub-formulas and whitespace is ignored.
/// The output of [`Formula`]'s `Display` implementation is always accepted.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use logicng_basis::formulas::Formula;
/// # use logicng_basis::parser::parse;
/// let formula = parse("~p & q -> r").unwrap();
/// assert_eq!(formula.to_string(), "((~p&q)->r)");
///
/// assert!(parse("p &").is_err());
/// ```
pub fn parse<I: AsRef<str>>(input: I) -> Result<Formula, FormulaError> {
    let input = input.as_ref();
    let parsed = FormulaParser::parse(Rule::formula, input).map_err(Box::new)?.next().unwrap();
    let formula = parse_equivalence(parsed.into_inner().next().unwrap());
    debug!(input, %formula, "parsed formula");
    Ok(formula)
}

fn parse_equivalence(equivalence: Pair<Rule>) -> Formula {
    let mut implications = equivalence.into_inner().rev();
    let mut form = parse_implication(implications.next().unwrap());

    for implication in implications {
        let form_left = parse_implication(implication);
        form = Formula::equivalence(form_left, form);
    }
    form
}

fn parse_implication(implication: Pair<Rule>) -> Formula {
    let mut disjunctions = implication.into_inner().rev();
    let mut form = parse_disjunction(disjunctions.next().unwrap());

    for disjunction in disjunctions {
        let form_left = parse_disjunction(disjunction);
        form = Formula::implication(form_left, form);
    }
    form
}

fn parse_disjunction(disjunction: Pair<Rule>) -> Formula {
    let mut tokens = disjunction.into_inner();
    let mut form = parse_conjunction(tokens.next().unwrap());

    for (operator, conjunction) in tokens.tuples() {
        form = Formula::binary(parse_operator(operator), form, parse_conjunction(conjunction));
    }
    form
}

fn parse_conjunction(conjunction: Pair<Rule>) -> Formula {
    let mut tokens = conjunction.into_inner();
    let mut form = parse_simp(tokens.next().unwrap());

    for (operator, simp) in tokens.tuples() {
        form = Formula::binary(parse_operator(operator), form, parse_simp(simp));
    }
    form
}

fn parse_operator(operator: Pair<Rule>) -> BinaryOperator {
    match operator.into_inner().next().unwrap().as_rule() {
        Rule::or => BinaryOperator::Or,
        Rule::nor => BinaryOperator::Nor,
        Rule::xor => BinaryOperator::Xor,
        Rule::and => BinaryOperator::And,
        Rule::nand => BinaryOperator::Nand,
        _ => unreachable!(),
    }
}

fn parse_simp(simp: Pair<Rule>) -> Formula {
    let mut tokens = simp.into_inner();
    let mut negations = 0;
    let mut x = tokens.next().unwrap();
    while x.as_rule() == Rule::not {
        negations += 1;
        x = tokens.next().unwrap();
    }

    let mut form = match x.as_rule() {
        Rule::variable => Formula::Var(Variable::parsed(x.as_str())),
        Rule::constant => parse_constant(x),
        Rule::equivalence => parse_equivalence(x),
        _ => unreachable!(),
    };

    for _ in 0..negations {
        form = Formula::not(form);
    }
    form
}

fn parse_constant(constant: Pair<Rule>) -> Formula {
    match constant.into_inner().next().unwrap().as_rule() {
        Rule::verum => Formula::True,
        Rule::falsum => Formula::False,
        _ => unreachable!(),
    }
}
