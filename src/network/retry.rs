//! Bounded retry for chain reads with linear rate-limit backoff

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};
use crate::{
    config::{Config, DEFAULT_MAX_QUERY_ATTEMPTS, DEFAULT_QUERY_COOLDOWN_MS, DEFAULT_RATE_LIMIT_BACKOFF_SECS},
    errors::QueryError,
};

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub backoff_step: Duration,
    pub cooldown: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_QUERY_ATTEMPTS,
            backoff_step: Duration::from_secs(DEFAULT_RATE_LIMIT_BACKOFF_SECS),
            cooldown: Duration::from_millis(DEFAULT_QUERY_COOLDOWN_MS),
        }
    }
}

impl RetryConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_attempts: config.max_query_attempts,
            backoff_step: Duration::from_secs(config.rate_limit_backoff_secs),
            cooldown: config.query_cooldown(),
        }
    }

    /// Delay after a rate-limited attempt (1-based): `attempt × step + cooldown`
    pub fn rate_limit_delay(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt + self.cooldown
    }
}

/// Result of a chain read after retries.
///
/// A legitimate zero is a `Value`; the other variants are the distinct
/// reasons a read produced nothing usable.
#[derive(Debug)]
pub enum ReadOutcome<T> {
    Value(T),
    /// Contract has no code or no position at that height
    NoPosition,
    /// Node no longer has (or never had) state for that height
    NoHistoricalData { code: i64, message: String },
    Failed { attempts: u32, error: QueryError },
}

impl<T> ReadOutcome<T> {
    pub fn value(self) -> Option<T> {
        match self {
            ReadOutcome::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_no_historical_data(&self) -> bool {
        matches!(self, ReadOutcome::NoHistoricalData { .. })
    }
}

pub async fn read_with_retry<F, Fut, T>(
    operation: F,
    config: &RetryConfig,
    context: &str,
) -> ReadOutcome<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, QueryError>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        let error = match operation().await {
            Ok(result) => return ReadOutcome::Value(result),
            Err(e) => e,
        };
        debug!("{} attempt {}/{} failed: {}", context, attempt, max_attempts, error);

        match error {
            QueryError::Undecodable(_) => return ReadOutcome::NoPosition,
            QueryError::StateUnavailable { code, message } => {
                return ReadOutcome::NoHistoricalData { code, message };
            }
            QueryError::RateLimited(_) if attempt < max_attempts => {
                let delay = config.rate_limit_delay(attempt);
                warn!(
                    "⏳ Rate limited on {} (attempt {}/{}). Retrying in {:?}...",
                    context, attempt, max_attempts, delay
                );
                tokio::time::sleep(delay).await;
            }
            error => {
                warn!("{} failed after {} attempts: {}", context, attempt, error);
                return ReadOutcome::Failed { attempts: attempt, error };
            }
        }
    }
}
