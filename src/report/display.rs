//! Report line formatting

use alloy::primitives::{Address, U256};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use crate::{
    errors::{YieldError, YieldResult},
    history::StopReason,
    report::YieldSummary,
    types::{ChainHead, Pool, Sample, SHARE_DECIMALS},
    utils::{scale_raw, scale_unsigned, signed_delta, timestamp_to_date},
};

/// Half-away-from-zero at `dp` places; `{:.N}` alone would truncate
fn rounded(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn block_label(block: u64, timestamp: u64) -> String {
    format!("{} {}", block, timestamp_to_date(timestamp))
}

pub fn format_head(head: &ChainHead) -> String {
    format!("the latest block is {}", block_label(head.number, head.timestamp))
}

pub fn format_depositor(pool: &Pool, address: Address) -> String {
    format!("[{}] {}", pool.name, address)
}

pub fn format_unknown_pool(name: &str) -> String {
    format!("{} not found in the built-in pool table", name)
}

pub fn format_sample(pool: &Pool, sample: &Sample, current_value: U256, deposited: U256) -> YieldResult<String> {
    let decimals = pool.asset_decimals;
    let shares = scale_unsigned(sample.shares, SHARE_DECIMALS)?;
    let value = scale_unsigned(sample.value, decimals)?;
    let vs_current = scale_raw(signed_delta(sample.value, current_value)?, decimals)?;
    let vs_deposited = scale_raw(signed_delta(sample.value, deposited)?, decimals)?;

    Ok(format!(
        "\t{} {:.8} shares => {:.8} {} vs current {:>11.8} vs deposited {:>11.8}",
        block_label(sample.block, sample.timestamp),
        rounded(shares, 8),
        rounded(value, 8),
        pool.name,
        rounded(vs_current, 8),
        rounded(vs_deposited, 8),
    ))
}

pub fn format_sample_failure(sample: &Sample, error: &YieldError) -> String {
    format!(
        "\t{} sample could not be formatted: {}",
        block_label(sample.block, sample.timestamp),
        error
    )
}

/// Note printed when the walk ended on something worth telling the reader
pub fn format_stop(stop: &StopReason) -> Option<String> {
    match stop {
        StopReason::NoHistoricalData { block, timestamp } => Some(format!(
            "\t{} provider has no data for this block",
            block_label(*block, *timestamp)
        )),
        StopReason::ReadFailed { block, timestamp, error } => Some(format!(
            "\t{} query failed: {}",
            block_label(*block, *timestamp),
            error
        )),
        StopReason::ReachedGenesis | StopReason::LookbackLimit { .. } | StopReason::NoPosition { .. } => None,
    }
}

pub fn format_yield(pool: &Pool, summary: &YieldSummary) -> YieldResult<String> {
    let gain = scale_raw(summary.gain, pool.asset_decimals)?;
    Ok(format!(
        "\tgained {:.8} {} in {:.1} days for APR: {:.2}%",
        rounded(gain, 8),
        pool.name,
        rounded(summary.elapsed_days, 1),
        rounded(summary.apr * dec!(100), 2),
    ))
}
