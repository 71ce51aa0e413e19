//! Report-level error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum YieldError {
    #[error("oldest sampled value is zero, APR is undefined")]
    ZeroBaseline,

    #[error("no time elapsed between oldest sample and head (timestamp {timestamp}), APR is undefined")]
    ZeroElapsed {
        timestamp: u64,
    },

    #[error("amount does not fit a decimal: {context}")]
    AmountOverflow {
        context: String,
    },

    #[error("failed to read depositors file {path}")]
    DepositorsFile {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("depositors file is not valid TOML")]
    DepositorsSyntax(#[source] toml::de::Error),

    #[error("invalid depositor entry [{pool}] {entry}: {reason}")]
    InvalidDepositor {
        pool: String,
        entry: String,
        reason: String,
    },

    #[error("could not resolve chain head: {0}")]
    ChainHead(String),
}

pub type YieldResult<T> = Result<T, YieldError>;
