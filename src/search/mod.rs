pub mod eval;
pub mod shuffle;
pub mod unimax;
