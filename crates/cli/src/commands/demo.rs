//! Built-in reference scenario

use minibank_core::{AccountConfig, BankConfig};
use rust_decimal_macros::dec;

use super::scenario::{Operation, Scenario};

const DANNY: &str = "Danny Camacaro";
const DAVID: &str = "David Camacaro";

/// Two accounts opened with 1000.12345 each, then a debit, a credit, a
/// transfer, then a transfer and a debit that the ledger rejects.
pub fn reference_scenario() -> Scenario {
    let opening = dec!(1000.12345);
    let account = |owner: &str| AccountConfig::default().with_owner(owner).with_balance(opening);

    Scenario {
        bank: "Chase Bank".to_string(),
        config: BankConfig::default(),
        accounts: vec![account(DANNY), account(DAVID)],
        operations: vec![
            Operation::Debit {
                account: DANNY.to_string(),
                amount: Some(dec!(21.12345)),
            },
            Operation::Credit {
                account: DANNY.to_string(),
                amount: Some(dec!(101)),
            },
            Operation::Transfer {
                from: DAVID.to_string(),
                to: DANNY.to_string(),
                amount: Some(dec!(100)),
            },
            // Leaves DAVID at exactly zero: rejected under the default floor
            Operation::Transfer {
                from: DAVID.to_string(),
                to: DANNY.to_string(),
                amount: Some(dec!(900.12345)),
            },
            Operation::Debit {
                account: DANNY.to_string(),
                amount: Some(dec!(3222)),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::scenario::execute;
    use minibank_core::BalanceFloor;
    use rust_decimal::Decimal;

    #[test]
    fn test_reference_scenario() {
        let report = execute(&reference_scenario(), None).unwrap();

        assert_eq!(report.rejected(), 2);
        assert_eq!(report.accounts[0].balance.to_string(), "1180.00000");
        assert_eq!(report.accounts[1].balance, dec!(900.12345));
    }

    #[test]
    fn test_reference_scenario_allow_zero() {
        let report = execute(&reference_scenario(), Some(BalanceFloor::AllowZero)).unwrap();

        // only the oversized debit is rejected
        assert_eq!(report.rejected(), 1);
        assert_eq!(report.accounts[0].balance, dec!(2080.12345));
        assert_eq!(report.accounts[1].balance, Decimal::ZERO);
    }
}
