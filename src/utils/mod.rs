//! Utility functions and helpers

pub mod math;
pub mod logging;
pub mod time;

pub use math::*;
pub use logging::*;
pub use time::*;
