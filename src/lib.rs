//! Yield Basis historical yield report
//! 
//! Walks each depositor's pool position backward through chain history in
//! daily strides, valuing shares through the pool's redemption preview, and
//! reports gains against the original deposit with a realized APR.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod pools;
pub mod history;
pub mod report;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{QueryError, YieldError, YieldResult};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
