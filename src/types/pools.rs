//! Pool-related types and structures

use alloy::primitives::Address;
use crate::types::POOLS_MAINNET;

/// Pool shares are 18-decimal tokens regardless of the underlying asset
pub const SHARE_DECIMALS: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub name: String,
    pub address: Address,
    pub asset_decimals: u32,
}

impl Pool {
    pub fn new(name: &str, address: Address, asset_decimals: u32) -> Self {
        Self {
            name: name.to_string(),
            address,
            asset_decimals,
        }
    }
}

/// Pools with a known contract address, keyed by the names used in the depositors file
pub fn mainnet_pools() -> Vec<Pool> {
    POOLS_MAINNET
        .iter()
        .map(|(name, address, decimals)| Pool::new(name, *address, *decimals))
        .collect()
}

pub fn find_pool<'a>(pools: &'a [Pool], name: &str) -> Option<&'a Pool> {
    pools.iter().find(|p| p.name == name)
}
