//! Report generation over every configured depositor

use alloy::primitives::U256;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{info, warn};
use crate::{
    history::{walk_history, SampleWalk, SamplerSettings, StopReason},
    network::resolve_chain_head,
    pools::ChainReader,
    report::{display::*, realized_yield},
    types::{find_pool, ChainHead, Depositor, DepositorGroup, Pool, Sample},
    utils::to_raw_units,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportStats {
    pub depositors: usize,
    pub samples: usize,
    pub unknown_pools: usize,
    pub no_data_boundaries: usize,
    pub read_failures: usize,
}

pub async fn generate_report<R: ChainReader, W: Write>(
    reader: &R,
    pools: &[Pool],
    groups: &[DepositorGroup],
    settings: &SamplerSettings,
    out: &mut W,
) -> Result<ReportStats> {
    let head = resolve_chain_head(reader, &settings.retry).await?;
    writeln!(out, "{}", format_head(&head))?;
    tokio::time::sleep(settings.cooldown).await;

    let mut stats = ReportStats::default();

    for group in groups {
        let Some(pool) = find_pool(pools, &group.pool) else {
            warn!("Skipping {} depositors of unknown pool {}", group.depositors.len(), group.pool);
            writeln!(out, "{}", format_unknown_pool(&group.pool))?;
            stats.unknown_pools += 1;
            continue;
        };

        for depositor in &group.depositors {
            report_depositor(reader, pool, depositor, head, settings, out, &mut stats).await?;
            tokio::time::sleep(settings.cooldown).await;
        }
    }

    Ok(stats)
}

async fn report_depositor<R: ChainReader, W: Write>(
    reader: &R,
    pool: &Pool,
    depositor: &Depositor,
    head: ChainHead,
    settings: &SamplerSettings,
    out: &mut W,
    stats: &mut ReportStats,
) -> Result<()> {
    writeln!(out, "{}", format_depositor(pool, depositor.address))?;
    stats.depositors += 1;

    let deposited = match to_raw_units(depositor.deposited, pool.asset_decimals) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("[{}] {} skipped: {}", pool.name, depositor.address, e);
            writeln!(out, "\tdeposit could not be converted: {}", e)?;
            return Ok(());
        }
    };

    // The newest sample arrives first and is the reference for every later line
    let mut current: Option<U256> = None;
    let mut write_error: Option<std::io::Error> = None;
    let walk = walk_history(reader, pool, depositor.address, head, settings, |sample| {
        let current_value = *current.get_or_insert(sample.value);
        if write_error.is_none() {
            let line = sample_line(pool, sample, current_value, deposited);
            if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
                write_error = Some(e);
            }
        }
    })
    .await;
    if let Some(e) = write_error {
        return Err(e).context("writing report");
    }

    stats.samples += walk.samples.len();
    match walk.stop {
        StopReason::NoHistoricalData { .. } => stats.no_data_boundaries += 1,
        StopReason::ReadFailed { .. } => stats.read_failures += 1,
        _ => {}
    }

    write_summary(pool, &walk, head, out)
}

fn sample_line(pool: &Pool, sample: &Sample, current_value: U256, deposited: U256) -> String {
    format_sample(pool, sample, current_value, deposited).unwrap_or_else(|e| {
        warn!("[{}] block {} not printable: {}", pool.name, sample.block, e);
        format_sample_failure(sample, &e)
    })
}

/// Stop note and yield line, once the walk is over
fn write_summary<W: Write>(pool: &Pool, walk: &SampleWalk, head: ChainHead, out: &mut W) -> Result<()> {
    if let Some(note) = format_stop(&walk.stop) {
        writeln!(out, "{}", note)?;
    }

    let (Some(current), Some(oldest)) = (walk.current(), walk.oldest()) else {
        return Ok(());
    };

    let summary = realized_yield(current.value, oldest.value, oldest.timestamp, head.timestamp)
        .and_then(|summary| {
            info!("[{}] APR {:.4} over {:.1} days", pool.name, summary.apr, summary.elapsed_days);
            format_yield(pool, &summary)
        });
    match summary {
        Ok(line) => writeln!(out, "{}", line)?,
        Err(e) => writeln!(out, "\tAPR unavailable: {}", e)?,
    }
    Ok(())
}
