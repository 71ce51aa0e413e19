//! Historical reads of pool state

use alloy::{
    eips::BlockId,
    primitives::{Address, Bytes, U256},
    providers::Provider,
    rpc::types::{eth::TransactionRequest, BlockNumberOrTag, BlockTransactionsKind},
    sol_types::SolCall,
};
use std::sync::Arc;
use tracing::debug;
use crate::{
    errors::QueryError,
    network::classify_transport_error,
    pools::bindings::IYieldBasisPool::{balanceOfCall, preview_withdrawCall},
    ConcreteProvider,
};

/// Single-attempt reads of chain state; retry policy lives with the caller.
#[allow(async_fn_in_trait)]
pub trait ChainReader {
    async fn latest_block_number(&self) -> Result<u64, QueryError>;

    async fn block_timestamp(&self, block: u64) -> Result<u64, QueryError>;

    /// Pool share balance of `owner` as of `block`
    async fn share_balance(&self, pool: Address, owner: Address, block: u64) -> Result<U256, QueryError>;

    /// Underlying asset amount `shares` would redeem for as of `block`
    async fn preview_withdraw(&self, pool: Address, shares: U256, block: u64) -> Result<U256, QueryError>;
}

pub struct RpcChainReader {
    provider: Arc<ConcreteProvider>,
}

impl RpcChainReader {
    pub fn new(provider: Arc<ConcreteProvider>) -> Self {
        Self { provider }
    }

    async fn call_at(&self, pool: Address, data: Vec<u8>, block: u64) -> Result<Bytes, QueryError> {
        let tx = TransactionRequest::default()
            .to(pool)
            .input(data.into());

        self.provider
            .call(&tx)
            .block(BlockId::number(block))
            .await
            .map_err(classify_transport_error)
    }
}

impl ChainReader for RpcChainReader {
    async fn latest_block_number(&self) -> Result<u64, QueryError> {
        self.provider
            .get_block_number()
            .await
            .map_err(classify_transport_error)
    }

    async fn block_timestamp(&self, block: u64) -> Result<u64, QueryError> {
        let block_data = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(block), BlockTransactionsKind::Hashes)
            .await
            .map_err(classify_transport_error)?
            .ok_or(QueryError::BlockNotFound(block))?;

        Ok(block_data.header.timestamp)
    }

    async fn share_balance(&self, pool: Address, owner: Address, block: u64) -> Result<U256, QueryError> {
        let result = self
            .call_at(pool, balanceOfCall { owner }.abi_encode(), block)
            .await?;
        debug!("balanceOf({}) @ {} -> {}", owner, block, result);

        // empty return data: no contract code at this height
        let decoded = balanceOfCall::abi_decode_returns(&result, true)
            .map_err(|e| QueryError::Undecodable(format!("balanceOf @ {}: {}", block, e)))?;
        Ok(decoded._0)
    }

    async fn preview_withdraw(&self, pool: Address, shares: U256, block: u64) -> Result<U256, QueryError> {
        let result = self
            .call_at(pool, preview_withdrawCall { tokens: shares }.abi_encode(), block)
            .await?;
        debug!("preview_withdraw({}) @ {} -> {}", shares, block, result);

        let decoded = preview_withdrawCall::abi_decode_returns(&result, true)
            .map_err(|e| QueryError::Undecodable(format!("preview_withdraw @ {}: {}", block, e)))?;
        Ok(decoded._0)
    }
}
