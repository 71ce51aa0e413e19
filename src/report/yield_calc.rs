//! Realized yield between the oldest sample and the chain head

use alloy::primitives::{I256, U256};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use crate::{
    config::SECONDS_PER_DAY,
    errors::{YieldError, YieldResult},
    utils::{raw_to_decimal, signed_delta, to_signed},
};

const DAYS_PER_YEAR: Decimal = dec!(365);

#[derive(Debug, Clone, PartialEq)]
pub struct YieldSummary {
    /// current − oldest, raw units
    pub gain: I256,
    pub elapsed_days: Decimal,
    /// Linear annualization, 0.05 = 5%
    pub apr: Decimal,
}

pub fn realized_yield(
    current_value: U256,
    oldest_value: U256,
    oldest_timestamp: u64,
    head_timestamp: u64,
) -> YieldResult<YieldSummary> {
    if oldest_value.is_zero() {
        return Err(YieldError::ZeroBaseline);
    }
    if head_timestamp <= oldest_timestamp {
        return Err(YieldError::ZeroElapsed { timestamp: oldest_timestamp });
    }

    let gain = signed_delta(current_value, oldest_value)?;
    let elapsed_days = Decimal::from(head_timestamp - oldest_timestamp) / Decimal::from(SECONDS_PER_DAY);

    let overflow = || YieldError::AmountOverflow {
        context: format!("APR of {} over {} on {} days", gain, oldest_value, elapsed_days),
    };
    let apr = raw_to_decimal(gain)?
        .checked_div(raw_to_decimal(to_signed(oldest_value)?)?)
        .and_then(|ratio| ratio.checked_div(elapsed_days))
        .and_then(|daily| daily.checked_mul(DAYS_PER_YEAR))
        .ok_or_else(overflow)?;

    Ok(YieldSummary {
        gain,
        elapsed_days,
        apr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    const T: u64 = 1_700_000_000;

    #[test]
    fn three_daily_samples_give_linear_apr() {
        let stride_secs = SECONDS_PER_DAY;
        let summary = assert_ok!(realized_yield(
            U256::from(100u64),
            U256::from(80u64),
            T - 2 * stride_secs,
            T
        ));

        assert_eq!(summary.gain, I256::try_from(20i64).unwrap());
        assert_eq!(summary.elapsed_days, dec!(2));
        // 20 / 80 / 2 * 365
        assert_eq!(summary.apr, dec!(45.625));
    }

    #[test]
    fn fractional_days_are_kept() {
        let summary = assert_ok!(realized_yield(
            U256::from(100u64),
            U256::from(80u64),
            T - SECONDS_PER_DAY / 2,
            T
        ));
        assert_eq!(summary.elapsed_days, dec!(0.5));
        assert_eq!(summary.apr, dec!(182.5));
    }

    #[test]
    fn losses_give_negative_apr() {
        let summary = assert_ok!(realized_yield(U256::from(90u64), U256::from(100u64), T - SECONDS_PER_DAY, T));
        assert!(summary.gain.is_negative());
        assert_eq!(summary.apr, dec!(-36.5));
    }

    #[test]
    fn zero_baseline_is_an_error() {
        let err = assert_err!(realized_yield(U256::from(100u64), U256::ZERO, T - SECONDS_PER_DAY, T));
        assert!(matches!(err, YieldError::ZeroBaseline));
    }

    #[test]
    fn zero_elapsed_is_an_error() {
        let err = assert_err!(realized_yield(U256::from(100u64), U256::from(100u64), T, T));
        assert!(matches!(err, YieldError::ZeroElapsed { timestamp: T }));
    }
}
