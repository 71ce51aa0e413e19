//! Network provider setup and chain head resolution

use alloy::{
    providers::ProviderBuilder,
    transports::http::reqwest::Url,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use crate::{
    config::Config,
    errors::{YieldError, YieldResult},
    network::retry::{read_with_retry, ReadOutcome, RetryConfig},
    pools::ChainReader,
    types::ChainHead,
    utils::timestamp_to_date,
    ConcreteProvider,
};

pub fn setup_mainnet_provider(config: &Config) -> Result<Arc<ConcreteProvider>> {
    let rpc_url: Url = config.rpc_url.parse().context("Invalid RPC_URL")?;

    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_http(rpc_url)
            .boxed()
    );
    
    info!("🔗 Using Ethereum RPC endpoint {}", redact_url(&config.rpc_url));
    Ok(provider)
}

/// Latest block number and its timestamp. A missing head makes every
/// elapsed-time computation meaningless, so any failure is fatal.
pub async fn resolve_chain_head<R: ChainReader>(reader: &R, retry: &RetryConfig) -> YieldResult<ChainHead> {
    let number = match read_with_retry(|| reader.latest_block_number(), retry, "eth_blockNumber").await {
        ReadOutcome::Value(number) => number,
        other => return Err(YieldError::ChainHead(format!("block number: {:?}", other))),
    };

    let timestamp = match read_with_retry(|| reader.block_timestamp(number), retry, "head block timestamp").await {
        ReadOutcome::Value(timestamp) => timestamp,
        other => return Err(YieldError::ChainHead(format!("timestamp of block {}: {:?}", number, other))),
    };

    info!("✅ Chain head at block {} ({})", number, timestamp_to_date(timestamp));
    Ok(ChainHead { number, timestamp })
}

/// Keeps scheme and host, hides API keys embedded in the path.
fn redact_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.split('/').next().unwrap_or(rest);
            format!("{}://{}/…", scheme, host)
        }
        None => "<unparsed url>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_api_key_path() {
        assert_eq!(
            redact_url("https://eth-mainnet.nodereal.io/v1/secret"),
            "https://eth-mainnet.nodereal.io/…"
        );
    }

    #[test]
    fn rejects_unparseable_rpc_url() {
        let mut config = Config::load();
        config.rpc_url = "not a url".to_string();
        assert!(setup_mainnet_provider(&config).is_err());
    }
}
