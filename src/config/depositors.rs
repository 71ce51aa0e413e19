//! Depositor list loading from the TOML addresses file
//!
//! The file has one table per pool name, each mapping a depositor address to
//! the amount originally deposited in human units:
//!
//! ```toml
//! [wBTC]
//! "0x6095a220C5567360d459462A25b1AD5aEAD45204" = 0.25
//! ```

use alloy::primitives::Address;
use rust_decimal::prelude::*;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};
use crate::{
    errors::{YieldError, YieldResult},
    types::{Depositor, DepositorGroup},
};

pub fn load_depositors(path: &Path) -> YieldResult<Vec<DepositorGroup>> {
    let text = fs::read_to_string(path).map_err(|e| YieldError::DepositorsFile {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    let groups = parse_depositors(&text)?;

    info!(
        "📋 Loaded {} depositors across {} pools from {}",
        groups.iter().map(|g| g.depositors.len()).sum::<usize>(),
        groups.len(),
        path.display()
    );
    Ok(groups)
}

/// Parses the depositors file, keeping pool and address order as written.
pub fn parse_depositors(text: &str) -> YieldResult<Vec<DepositorGroup>> {
    let table: toml::Table = text.parse().map_err(YieldError::DepositorsSyntax)?;

    let mut groups = Vec::with_capacity(table.len());
    for (pool, entries) in table {
        let entries = entries.as_table().ok_or_else(|| YieldError::InvalidDepositor {
            pool: pool.clone(),
            entry: entries.to_string(),
            reason: "expected a table of address = amount".to_string(),
        })?;

        let mut depositors = Vec::with_capacity(entries.len());
        for (address, amount) in entries {
            let parsed_address = Address::from_str(address.trim()).map_err(|e| YieldError::InvalidDepositor {
                pool: pool.clone(),
                entry: address.clone(),
                reason: format!("bad address: {}", e),
            })?;
            let deposited = parse_amount(amount).map_err(|reason| YieldError::InvalidDepositor {
                pool: pool.clone(),
                entry: address.clone(),
                reason,
            })?;
            debug!("[{}] {} deposited {}", pool, parsed_address, deposited);
            depositors.push(Depositor {
                pool: pool.clone(),
                address: parsed_address,
                deposited,
            });
        }

        groups.push(DepositorGroup { pool, depositors });
    }

    Ok(groups)
}

fn parse_amount(value: &toml::Value) -> Result<Decimal, String> {
    let amount = match value {
        toml::Value::Integer(i) => Decimal::from(*i),
        // f64 Display never uses exponent notation, so the text round-trips
        toml::Value::Float(f) => Decimal::from_str(&f.to_string())
            .map_err(|e| format!("bad amount {}: {}", f, e))?,
        toml::Value::String(s) => Decimal::from_str(s.trim())
            .map_err(|e| format!("bad amount {:?}: {}", s, e))?,
        other => return Err(format!("amount must be a number, got {}", other.type_str())),
    };

    if amount.is_sign_negative() {
        return Err(format!("amount must not be negative: {}", amount));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use rust_decimal_macros::dec;

    #[test]
    fn keeps_file_order_and_parses_all_amount_forms() {
        let text = r#"
            [tBTC]
            "0x2B513eBe7070Cff91cf699a0BFe5075020C732FF" = "1.5"

            [wBTC]
            "0x6095a220C5567360d459462A25b1AD5aEAD45204" = 0.25
            "0xD6a1147666f6E4d7161caf436d9923D44d901112" = 2
        "#;

        let groups = parse_depositors(text).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].pool, "tBTC");
        assert_eq!(groups[0].depositors[0].deposited, dec!(1.5));
        assert_eq!(groups[1].pool, "wBTC");
        assert_eq!(
            groups[1].depositors[0].address,
            address!("6095a220C5567360d459462A25b1AD5aEAD45204")
        );
        assert_eq!(groups[1].depositors[0].deposited, dec!(0.25));
        assert_eq!(groups[1].depositors[1].deposited, dec!(2));
        assert_eq!(groups[1].depositors[1].pool, "wBTC");
    }

    #[test]
    fn rejects_malformed_address() {
        let text = "[wBTC]\n\"0x1234\" = 1\n";
        let err = parse_depositors(text).unwrap_err();
        assert!(matches!(err, YieldError::InvalidDepositor { ref entry, .. } if entry == "0x1234"));
    }

    #[test]
    fn rejects_negative_and_non_numeric_amounts() {
        let negative = "[wBTC]\n\"0x6095a220C5567360d459462A25b1AD5aEAD45204\" = -1\n";
        assert!(parse_depositors(negative).is_err());

        let boolean = "[wBTC]\n\"0x6095a220C5567360d459462A25b1AD5aEAD45204\" = true\n";
        assert!(parse_depositors(boolean).is_err());
    }

    #[test]
    fn rejects_pool_entry_that_is_not_a_table() {
        let text = "wBTC = 1\n";
        assert!(matches!(
            parse_depositors(text),
            Err(YieldError::InvalidDepositor { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_syntax_error() {
        let err = parse_depositors("[wBTC\n\"0xabc\" = 1\n").unwrap_err();
        assert!(matches!(err, YieldError::DepositorsSyntax(_)), "{:?}", err);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_depositors(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
