//! Report configuration settings and environment variable handling

use std::env;
use std::path::PathBuf;
use std::time::Duration;

// Configuration constants
// https://chainlist.org/chain/1
pub const DEFAULT_RPC_URL: &str = "https://eth-mainnet.nodereal.io/v1/1659dfb40aa24bbb8153a677b98064d7";
pub const DEFAULT_DEPOSITORS_FILE: &str = "addresses_to_check.toml";
pub const DEFAULT_QUERY_COOLDOWN_MS: u64 = 500;
pub const DEFAULT_BLOCK_TIME_SECS: u64 = 12; // eth mainnet
pub const MAX_BLOCK_TIME_SECS: u64 = 60;
pub const DEFAULT_RATE_LIMIT_BACKOFF_SECS: u64 = 30;
pub const DEFAULT_MAX_QUERY_ATTEMPTS: u32 = 3;
pub const MAX_QUERY_ATTEMPTS: u32 = 10;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub depositors_file: PathBuf,
    /// Lookback limit in days, 0 walks back until data runs out
    pub max_days_to_parse: u64,
    pub query_cooldown_ms: u64,
    pub block_time_secs: u64,
    pub rate_limit_backoff_secs: u64,
    pub max_query_attempts: u32,
}

impl Config {
    pub fn load() -> Self {
        Self {
            rpc_url: env::var("RPC_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            depositors_file: env::var("DEPOSITORS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DEPOSITORS_FILE)),
            max_days_to_parse: env::var("MAX_DAYS_TO_PARSE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            query_cooldown_ms: env::var("QUERY_COOLDOWN_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_QUERY_COOLDOWN_MS),
            block_time_secs: env::var("BLOCK_TIME_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_BLOCK_TIME_SECS)
                .max(1)
                .min(MAX_BLOCK_TIME_SECS),
            rate_limit_backoff_secs: env::var("RATE_LIMIT_BACKOFF_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RATE_LIMIT_BACKOFF_SECS),
            max_query_attempts: env::var("MAX_QUERY_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_QUERY_ATTEMPTS)
                .max(1)
                .min(MAX_QUERY_ATTEMPTS),
        }
    }

    /// Blocks produced in one day at the configured block time
    pub fn blocks_per_day(&self) -> u64 {
        SECONDS_PER_DAY / self.block_time_secs
    }

    pub fn query_cooldown(&self) -> Duration {
        Duration::from_millis(self.query_cooldown_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_block_time(block_time_secs: u64) -> Config {
        Config {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            depositors_file: PathBuf::from(DEFAULT_DEPOSITORS_FILE),
            max_days_to_parse: 0,
            query_cooldown_ms: DEFAULT_QUERY_COOLDOWN_MS,
            block_time_secs,
            rate_limit_backoff_secs: DEFAULT_RATE_LIMIT_BACKOFF_SECS,
            max_query_attempts: DEFAULT_MAX_QUERY_ATTEMPTS,
        }
    }

    #[test]
    fn mainnet_block_time_gives_7200_blocks_per_day() {
        assert_eq!(config_with_block_time(12).blocks_per_day(), 7200);
    }

    #[test]
    fn cooldown_is_in_milliseconds() {
        assert_eq!(config_with_block_time(12).query_cooldown(), Duration::from_millis(500));
    }
}
