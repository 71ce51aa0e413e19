//! Yield computation and report output

pub mod display;
pub mod runner;
pub mod yield_calc;

pub use runner::*;
pub use yield_calc::*;
