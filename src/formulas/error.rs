use thiserror::Error;

use crate::parser::Rule;

/// Errors which can occur when formulas are built from untrusted input.
///
/// The conversions themselves are total and never produce an error. Only the
/// constructors which take names or labels as strings, and the parser, can
/// fail.
#[derive(Error, Debug)]
pub enum FormulaError {
    /// A variable name which does not match the variable syntax (a lowercase
    /// letter followed by digits).
    #[error("invalid variable name: {0:?}")]
    InvalidVariable(String),

    /// A root label which is neither a variable name, a constant, nor one of
    /// the operators.
    #[error("unknown root label: {0:?}")]
    UnknownRoot(String),

    /// A root label which got the wrong number of operands.
    #[error("root {root:?} expects {expected} operand(s), but got {found}")]
    OperandMismatch {
        /// The label of the root.
        root: String,
        /// The number of operands the root requires.
        expected: usize,
        /// The number of operands which were given.
        found: usize,
    },

    /// A name which is not one of the operator bases.
    #[error("unknown operator basis: {0:?}")]
    UnknownBasis(String),

    /// The input could not be parsed as formula.
    #[error("parse error: {0}")]
    Parse(#[from] Box<pest::error::Error<Rule>>),
}
