//! Strategy implementations.

pub mod minimax;
pub mod parallel;
pub mod random;
mod util;
