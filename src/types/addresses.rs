//! Network addresses and pool definitions

use alloy::primitives::{Address, address};

// Yield Basis pools on Ethereum mainnet
pub const WBTC_POOL: Address = address!("6095a220C5567360d459462A25b1AD5aEAD45204");
pub const CBBTC_POOL: Address = address!("D6a1147666f6E4d7161caf436d9923D44d901112");
pub const TBTC_POOL: Address = address!("2B513eBe7070Cff91cf699a0BFe5075020C732FF");

// (name, address, underlying asset decimals)
pub const POOLS_MAINNET: &[(&str, Address, u32)] = &[
    ("wBTC", WBTC_POOL, 8),
    ("cbBTC", CBBTC_POOL, 8),
    ("tBTC", TBTC_POOL, 18),
];
