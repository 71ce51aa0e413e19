//! Backward walk over a depositor's position history

use alloy::primitives::{Address, U256};
use std::time::Duration;
use tracing::{debug, info, warn};
use crate::{
    config::{Config, SECONDS_PER_DAY},
    errors::QueryError,
    network::{read_with_retry, ReadOutcome, RetryConfig},
    pools::ChainReader,
    types::{ChainHead, Pool, Sample},
    utils::timestamp_to_date,
};

/// Slack on top of the lookback window so the last whole day is still sampled
const LOOKBACK_SLACK_SECS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct SamplerSettings {
    /// Blocks between consecutive samples
    pub stride: u64,
    /// 0 walks until data runs out
    pub max_days: u64,
    pub cooldown: Duration,
    pub retry: RetryConfig,
}

impl SamplerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            stride: config.blocks_per_day(),
            max_days: config.max_days_to_parse,
            cooldown: config.query_cooldown(),
            retry: RetryConfig::from_config(config),
        }
    }

    fn beyond_lookback(&self, head: &ChainHead, timestamp: u64) -> bool {
        self.max_days > 0
            && head.timestamp.saturating_sub(timestamp)
                >= (self.max_days + 1) * SECONDS_PER_DAY + LOOKBACK_SLACK_SECS
    }
}

#[derive(Debug)]
pub enum StopReason {
    ReachedGenesis,
    LookbackLimit { block: u64 },
    /// Zero balance or value, or no contract code at that height
    NoPosition { block: u64 },
    NoHistoricalData { block: u64, timestamp: u64 },
    ReadFailed { block: u64, timestamp: u64, error: QueryError },
}

/// Samples newest first, and why the walk ended
#[derive(Debug)]
pub struct SampleWalk {
    pub samples: Vec<Sample>,
    pub stop: StopReason,
}

impl SampleWalk {
    /// Most recent sample, the position's present value
    pub fn current(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.last()
    }
}

/// Walks back from `head`, handing each sample to `on_sample` as soon as it is taken.
pub async fn walk_history<R, F>(
    reader: &R,
    pool: &Pool,
    owner: Address,
    head: ChainHead,
    settings: &SamplerSettings,
    mut on_sample: F,
) -> SampleWalk
where
    R: ChainReader,
    F: FnMut(&Sample),
{
    let stride = usize::try_from(settings.stride.max(1)).unwrap_or(usize::MAX);
    let mut samples = Vec::new();

    for block in (1..=head.number).rev().step_by(stride) {
        match sample_block(reader, pool, owner, &head, block, settings).await {
            Ok(sample) => {
                info!(
                    "[{}] {} block {} ({}): {} shares => {} raw",
                    pool.name, owner, block, timestamp_to_date(sample.timestamp), sample.shares, sample.value
                );
                on_sample(&sample);
                samples.push(sample);
                tokio::time::sleep(settings.cooldown).await;
            }
            Err(stop) => {
                match &stop {
                    StopReason::NoHistoricalData { block, .. } => {
                        info!("[{}] {} provider has no state at block {}", pool.name, owner, block);
                    }
                    StopReason::ReadFailed { block, error, .. } => {
                        warn!("[{}] {} read failed at block {}: {}", pool.name, owner, block, error);
                    }
                    other => debug!("[{}] {} walk stopped: {:?}", pool.name, owner, other),
                }
                return SampleWalk { samples, stop };
            }
        }
    }

    SampleWalk {
        samples,
        stop: StopReason::ReachedGenesis,
    }
}

async fn sample_block<R: ChainReader>(
    reader: &R,
    pool: &Pool,
    owner: Address,
    head: &ChainHead,
    block: u64,
    settings: &SamplerSettings,
) -> Result<Sample, StopReason> {
    let retry = &settings.retry;

    let timestamp = read_with_retry(|| reader.block_timestamp(block), retry, "block timestamp").await;
    let timestamp = stop_unless_value(timestamp, block, 0)?;

    if settings.beyond_lookback(head, timestamp) {
        return Err(StopReason::LookbackLimit { block });
    }

    let shares = read_with_retry(|| reader.share_balance(pool.address, owner, block), retry, "balanceOf").await;
    let shares = stop_unless_positive(shares, block, timestamp)?;

    let value = read_with_retry(|| reader.preview_withdraw(pool.address, shares, block), retry, "preview_withdraw").await;
    let value = stop_unless_positive(value, block, timestamp)?;

    Ok(Sample {
        block,
        timestamp,
        shares,
        value,
    })
}

fn stop_unless_value<T>(outcome: ReadOutcome<T>, block: u64, timestamp: u64) -> Result<T, StopReason> {
    match outcome {
        ReadOutcome::Value(v) => Ok(v),
        ReadOutcome::NoPosition => Err(StopReason::NoPosition { block }),
        ReadOutcome::NoHistoricalData { .. } => Err(StopReason::NoHistoricalData { block, timestamp }),
        ReadOutcome::Failed { error, .. } => Err(StopReason::ReadFailed { block, timestamp, error }),
    }
}

fn stop_unless_positive(outcome: ReadOutcome<U256>, block: u64, timestamp: u64) -> Result<U256, StopReason> {
    match stop_unless_value(outcome, block, timestamp)? {
        v if v.is_zero() => Err(StopReason::NoPosition { block }),
        v => Ok(v),
    }
}
