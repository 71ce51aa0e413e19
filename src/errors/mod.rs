//! Error types for chain reads and report generation

pub mod query_error;
pub mod yield_error;

pub use query_error::*;
pub use yield_error::*;
