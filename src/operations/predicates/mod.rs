mod basis;
mod equivalence;

pub use basis::*;
pub use equivalence::*;
