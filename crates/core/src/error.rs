//! # Error Module
//!
//! Domain errors cho Minibank ledger, dùng thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Ledger errors.
///
/// Both operational kinds are raised before any balance is touched, so a
/// failed debit, credit or transfer leaves every account unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    // === Amount errors ===
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // === Balance errors ===
    #[error("Insufficient funds: need {needed}, available {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    // === Construction errors ===
    #[error("Negative opening balance: {0}")]
    NegativeOpeningBalance(Decimal),
}

/// Result type alias với LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// Create insufficient funds error
    pub fn insufficient_funds(needed: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds { needed, available }
    }

    /// Kiểm tra có phải lỗi invalid amount không
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, LedgerError::InvalidAmount(_))
    }

    /// Kiểm tra có phải lỗi insufficient funds không
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, LedgerError::InsufficientFunds { .. })
    }
}
