mod formula_parser;

pub use formula_parser::{parse, Rule};
