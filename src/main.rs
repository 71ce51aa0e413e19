//! Yield Basis historical yield report - Main Entry Point

use yield_basis_history::*;
use anyhow::Result;
use std::io::Write;
use std::time::Instant;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    
    // Initialize logging
    utils::setup_output_directories()?;
    let _logging_guard = utils::setup_logging()?;
    
    // Load configuration
    let config = CONFIG.clone();
    
    info!("📈 Yield Basis historical yield report v{}", env!("CARGO_PKG_VERSION"));
    info!("📋 Configuration:");
    info!("   Depositors file: {}", config.depositors_file.display());
    info!("   Block time: {}s ({} blocks per sample)", config.block_time_secs, config.blocks_per_day());
    if config.max_days_to_parse > 0 {
        info!("   Lookback: {} days", config.max_days_to_parse);
    } else {
        info!("   Lookback: until history runs out");
    }
    info!("   Query cooldown: {}ms", config.query_cooldown_ms);
    info!(
        "   Retry: {} attempts, {}s rate-limit backoff step",
        config.max_query_attempts, config.rate_limit_backoff_secs
    );
    
    let groups = config::load_depositors(&config.depositors_file)?;
    let provider = network::setup_mainnet_provider(&config)?;
    let reader = pools::RpcChainReader::new(provider);
    let pools = types::mainnet_pools();
    let settings = history::SamplerSettings::from_config(&config);
    
    let start_time = Instant::now();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stats = report::generate_report(&reader, &pools, &groups, &settings, &mut out).await?;
    out.flush()?;
    
    print_final_statistics(start_time, &stats);
    
    Ok(())
}

/// Print final statistics once every depositor is reported
fn print_final_statistics(start_time: Instant, stats: &report::ReportStats) {
    info!("🏁 Report complete in {:?}", start_time.elapsed());
    info!("   Depositors reported: {}", stats.depositors);
    info!("   Samples taken: {}", stats.samples);
    info!("   History boundaries (no provider data): {}", stats.no_data_boundaries);
    info!("   Walks cut short by read failures: {}", stats.read_failures);
    if stats.unknown_pools > 0 {
        info!("   Unknown pools skipped: {}", stats.unknown_pools);
    }
}
