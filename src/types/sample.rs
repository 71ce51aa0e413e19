//! Depositor records and historical samples

use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Depositor {
    pub pool: String,
    pub address: Address,
    /// Originally deposited amount in human units of the pool asset
    pub deposited: Decimal,
}

#[derive(Debug, Clone)]
pub struct DepositorGroup {
    pub pool: String,
    pub depositors: Vec<Depositor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainHead {
    pub number: u64,
    pub timestamp: u64,
}

/// One dated valuation of a depositor's position, in raw on-chain units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub block: u64,
    pub timestamp: u64,
    pub shares: U256,
    pub value: U256,
}
