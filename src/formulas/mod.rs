mod error;
mod formula;
mod formula_type;
mod variable;

/// We deviate from the convention of putting unit tests in the source file in this case,
/// s.t. the files don't become too large
#[cfg(test)]
mod tests;

pub use error::*;
pub use formula::*;
pub use formula_type::*;
pub use variable::*;
