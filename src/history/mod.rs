//! Historical position sampling

pub mod sampler;

pub use sampler::*;
