//! Single-attempt failures of a remote chain read

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("rate limited by provider: {0}")]
    RateLimited(String),

    #[error("could not decode contract function output: {0}")]
    Undecodable(String),

    #[error("historical state unavailable (code {code}): {message}")]
    StateUnavailable {
        code: i64,
        message: String,
    },

    #[error("block {0} not found")]
    BlockNotFound(u64),

    #[error("rpc request failed: {0}")]
    Rpc(String),
}

impl QueryError {
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, QueryError::RateLimited(_))
    }
}
