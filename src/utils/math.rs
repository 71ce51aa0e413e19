//! Fixed-point conversions between raw on-chain integers and decimals

use alloy::primitives::{I256, U256};
use rust_decimal::prelude::*;
use crate::errors::{YieldError, YieldResult};

pub fn pow10(n: u32) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(n.min(28)), 0)
}

/// Signed difference `a - b` of two raw amounts.
pub fn signed_delta(a: U256, b: U256) -> YieldResult<I256> {
    let a = to_signed(a)?;
    let b = to_signed(b)?;
    a.checked_sub(b).ok_or_else(|| YieldError::AmountOverflow {
        context: format!("{} - {}", a, b),
    })
}

pub fn to_signed(raw: U256) -> YieldResult<I256> {
    I256::try_from(raw).map_err(|_| YieldError::AmountOverflow {
        context: raw.to_string(),
    })
}

/// Exact decimal value of a raw amount with `decimals` fractional digits.
pub fn scale_raw(raw: I256, decimals: u32) -> YieldResult<Decimal> {
    let mantissa = i128::try_from(raw).map_err(|_| YieldError::AmountOverflow {
        context: raw.to_string(),
    })?;
    Decimal::try_from_i128_with_scale(mantissa, decimals).map_err(|_| YieldError::AmountOverflow {
        context: format!("{}e-{}", mantissa, decimals),
    })
}

pub fn scale_unsigned(raw: U256, decimals: u32) -> YieldResult<Decimal> {
    scale_raw(to_signed(raw)?, decimals)
}

/// Converts a human amount into raw units, truncating digits beyond `decimals`.
pub fn to_raw_units(amount: Decimal, decimals: u32) -> YieldResult<U256> {
    let overflow = || YieldError::AmountOverflow {
        context: format!("{} with {} decimals", amount, decimals),
    };
    let raw = amount
        .checked_mul(pow10(decimals))
        .ok_or_else(overflow)?
        .trunc();
    let raw = raw.to_u128().ok_or_else(overflow)?;
    Ok(U256::from(raw))
}

/// Raw integer amount as an unscaled decimal, for ratios between raw values.
pub fn raw_to_decimal(raw: I256) -> YieldResult<Decimal> {
    scale_raw(raw, 0)
}
