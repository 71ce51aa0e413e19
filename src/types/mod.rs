//! Core data types and structures

pub mod addresses;
pub mod pools;
pub mod sample;

pub use addresses::*;
pub use pools::*;
pub use sample::*;
