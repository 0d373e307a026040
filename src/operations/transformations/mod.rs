mod basis;

pub use basis::*;
