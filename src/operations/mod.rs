/// A transformation takes a formula as input and returns another formula, thus
/// transforming the input formula. Here these are the conversions into the
/// operator bases.
pub mod transformations;

/// A predicate takes a formula as input and computes a truth value on that
/// formula, e.g. whether a formula only uses the operators of a basis, or if it
/// is equivalent to another formula.
pub mod predicates;

/// A function takes a formula as input and computes some value on that formula.
/// This value can be a simple integer e.g. the depth of a formula, or a more
/// complex result type, like the truth table.
pub mod functions;
