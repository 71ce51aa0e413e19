//! Pool contract bindings and historical state reads

pub mod bindings;
pub mod reader;
#[cfg(test)]
pub mod scripted;

pub use reader::*;
