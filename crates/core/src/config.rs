//! # Config Module
//!
//! Cấu hình khởi tạo cho Account và Bank, thay cho builder pattern:
//! các field có tên, giá trị mặc định rõ ràng, kiểm tra khi `build()`.

use crate::account::Account;
use crate::amount::BalanceFloor;
use crate::error::{LedgerError, LedgerResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cấu hình tạo Account.
///
/// Mặc định: chưa có owner, số dư 0, chưa thuộc bank nào.
///
/// # Examples
/// ```
/// use minibank_core::AccountConfig;
/// use rust_decimal_macros::dec;
///
/// let account = AccountConfig {
///     owner: Some("Danny Camacaro".to_string()),
///     balance: dec!(1000.12345),
/// }
/// .build()
/// .unwrap();
/// assert_eq!(account.balance(), dec!(1000.12345));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Chủ tài khoản (None = chưa gán)
    pub owner: Option<String>,
    /// Số dư ban đầu
    pub balance: Decimal,
}

impl AccountConfig {
    /// Tạo config với owner
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Tạo config với số dư ban đầu
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = balance;
        self
    }

    /// Kiểm tra và tạo Account.
    ///
    /// Khác với `Account::new`, số dư ban đầu âm bị từ chối.
    pub fn build(self) -> LedgerResult<Account> {
        if self.balance < Decimal::ZERO {
            return Err(LedgerError::NegativeOpeningBalance(self.balance));
        }
        Ok(Account::from_parts(self.owner, self.balance))
    }
}

/// Cấu hình của Bank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// Ngưỡng số dư của người gửi sau `Bank::transfer`.
    ///
    /// Mặc định `RejectZero`: transfer không được để người gửi về đúng 0,
    /// chặt hơn `Account::debit`.
    pub transfer_floor: BalanceFloor,
}

impl BankConfig {
    pub fn with_transfer_floor(mut self, floor: BalanceFloor) -> Self {
        self.transfer_floor = floor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_config_defaults() {
        let config = AccountConfig::default();
        assert_eq!(config.owner, None);
        assert_eq!(config.balance, Decimal::ZERO);

        let account = config.build().unwrap();
        assert_eq!(account.owner(), None);
        assert_eq!(account.balance(), dec!(0));
        assert!(account.bank().is_none());
    }

    #[test]
    fn test_account_config_build() {
        let account = AccountConfig::default()
            .with_owner("David Camacaro")
            .with_balance(dec!(1000.12345))
            .build()
            .unwrap();

        assert_eq!(account.owner(), Some("David Camacaro"));
        assert_eq!(account.balance(), dec!(1000.12345));
    }

    #[test]
    fn test_account_config_rejects_negative_balance() {
        let err = AccountConfig::default()
            .with_owner("Danny Camacaro")
            .with_balance(dec!(-0.01))
            .build()
            .unwrap_err();

        assert_eq!(err, LedgerError::NegativeOpeningBalance(dec!(-0.01)));
    }

    #[test]
    fn test_bank_config_serde() {
        assert_eq!(BankConfig::default().transfer_floor, BalanceFloor::RejectZero);

        let config: BankConfig = serde_json::from_str(r#"{"transfer_floor":"allow-zero"}"#).unwrap();
        assert_eq!(config.transfer_floor, BalanceFloor::AllowZero);

        let config: BankConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BankConfig::default());
    }

    #[test]
    fn test_account_config_from_json() {
        let config: AccountConfig =
            serde_json::from_str(r#"{"owner":"Danny Camacaro","balance":"1000.12345"}"#).unwrap();
        assert_eq!(config.balance, dec!(1000.12345));
    }
}
