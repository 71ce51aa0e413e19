//! Network providers, RPC error classification and retry

pub mod classify;
pub mod providers;
pub mod retry;

pub use classify::*;
pub use providers::*;
pub use retry::*;
