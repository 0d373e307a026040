mod formula_depth_function;
mod number_of_nodes;
mod operators;
mod truth_table;
mod variables;

pub use formula_depth_function::*;
pub use number_of_nodes::*;
pub use operators::*;
pub use truth_table::*;
pub use variables::*;
