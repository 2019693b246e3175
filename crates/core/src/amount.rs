//! # Amount Module
//!
//! Quy tắc kiểm tra số tiền dùng chung cho debit, credit và transfer,
//! cùng với ngưỡng số dư tối thiểu (`BalanceFloor`) sau khi trừ tiền.

use crate::error::{LedgerError, LedgerResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kiểm tra một số tiền đầu vào.
///
/// Chỉ chấp nhận số dương tuyệt đối: `None`, `0` và số âm đều trả về
/// `LedgerError::InvalidAmount`.
///
/// # Examples
/// ```
/// use minibank_core::validate_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(validate_amount(Some(dec!(100))).unwrap(), dec!(100));
/// assert!(validate_amount(Some(dec!(0))).is_err());
/// assert!(validate_amount(None).is_err());
/// ```
pub fn validate_amount(amount: Option<Decimal>) -> LedgerResult<Decimal> {
    match amount {
        None => Err(LedgerError::InvalidAmount("amount is missing".to_string())),
        Some(value) if value <= Decimal::ZERO => Err(LedgerError::InvalidAmount(format!(
            "amount must be positive: {}",
            value
        ))),
        Some(value) => Ok(value),
    }
}

/// Ngưỡng số dư còn lại được phép sau khi trừ tiền.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceFloor {
    /// Số dư còn lại có thể bằng 0 (quy tắc của `Account::debit`)
    AllowZero,
    /// Số dư còn lại phải lớn hơn 0 (quy tắc mặc định của `Bank::transfer`)
    #[default]
    RejectZero,
}

impl BalanceFloor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceFloor::AllowZero => "allow-zero",
            BalanceFloor::RejectZero => "reject-zero",
        }
    }

    /// Số dư còn lại `remaining` có thỏa ngưỡng không
    pub fn permits(&self, remaining: Decimal) -> bool {
        match self {
            BalanceFloor::AllowZero => remaining >= Decimal::ZERO,
            BalanceFloor::RejectZero => remaining > Decimal::ZERO,
        }
    }
}

impl fmt::Display for BalanceFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kiểm tra `balance - amount` theo ngưỡng `floor`.
///
/// # Returns
/// - `Ok(remaining)` số dư sau khi trừ
/// - `Err(InsufficientFunds)` nếu vượt ngưỡng
pub fn ensure_sufficient(
    balance: Decimal,
    amount: Decimal,
    floor: BalanceFloor,
) -> LedgerResult<Decimal> {
    match balance.checked_sub(amount) {
        Some(remaining) if floor.permits(remaining) => Ok(remaining),
        _ => Err(LedgerError::insufficient_funds(amount, balance)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_amount_accepts_positive() {
        assert_eq!(validate_amount(Some(dec!(21.12345))).unwrap(), dec!(21.12345));
        assert_eq!(
            validate_amount(Some(dec!(0.000000000000000001))).unwrap(),
            dec!(0.000000000000000001)
        );
    }

    #[test]
    fn test_validate_amount_rejects_zero_negative_and_missing() {
        assert!(validate_amount(Some(dec!(0))).unwrap_err().is_invalid_amount());
        assert!(validate_amount(Some(dec!(0.00))).unwrap_err().is_invalid_amount());
        assert!(validate_amount(Some(dec!(-1))).unwrap_err().is_invalid_amount());
        assert!(validate_amount(None).unwrap_err().is_invalid_amount());
    }

    #[test]
    fn test_floor_boundaries() {
        assert!(BalanceFloor::AllowZero.permits(dec!(0)));
        assert!(!BalanceFloor::AllowZero.permits(dec!(-0.00001)));
        assert!(!BalanceFloor::RejectZero.permits(dec!(0)));
        assert!(BalanceFloor::RejectZero.permits(dec!(0.00001)));
        assert_eq!(BalanceFloor::default(), BalanceFloor::RejectZero);
    }

    #[test]
    fn test_ensure_sufficient() {
        assert_eq!(
            ensure_sufficient(dec!(1000.12345), dec!(21.12345), BalanceFloor::AllowZero).unwrap(),
            dec!(979.00000)
        );
        assert_eq!(
            ensure_sufficient(dec!(100), dec!(100), BalanceFloor::AllowZero).unwrap(),
            dec!(0)
        );

        let err = ensure_sufficient(dec!(100), dec!(100), BalanceFloor::RejectZero).unwrap_err();
        assert_eq!(err, LedgerError::insufficient_funds(dec!(100), dec!(100)));

        let err = ensure_sufficient(dec!(10), dec!(10.5), BalanceFloor::AllowZero).unwrap_err();
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn test_floor_serde() {
        let json = serde_json::to_string(&BalanceFloor::AllowZero).unwrap();
        assert_eq!(json, "\"allow-zero\"");
        let floor: BalanceFloor = serde_json::from_str("\"reject-zero\"").unwrap();
        assert_eq!(floor, BalanceFloor::RejectZero);
    }
}
