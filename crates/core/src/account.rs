//! # Account Module
//!
//! Định nghĩa Account - tài khoản giữ một số dư Decimal.
//! Mỗi Account có thể thuộc về một Bank thông qua back-reference (Weak),
//! được gán khi `Bank::add_account`.

use crate::amount::{ensure_sufficient, validate_amount, BalanceFloor};
use crate::bank::Bank;
use crate::error::{LedgerError, LedgerResult};
use parking_lot::{Mutex, MutexGuard, RwLock};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

/// Account ID counter, unique trong process
static NEXT_ACCOUNT_ID: AtomicU64 = AtomicU64::new(1);

fn next_account_id() -> u64 {
    NEXT_ACCOUNT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Tài khoản của người dùng.
///
/// Số dư được bảo vệ bởi mutex riêng của từng account, nên `debit`,
/// `credit` và `Bank::transfer` có thể gọi đồng thời từ nhiều thread.
///
/// # Equality
/// Hai account bằng nhau khi owner trùng (không phân biệt hoa thường) và
/// số dư giống hệt nhau, kể cả scale (`979.00000 != 979`). Account chưa có
/// owner không bao giờ bằng account nào, kể cả chính nó.
#[derive(Debug)]
pub struct Account {
    id: u64,
    owner: Option<String>,
    balance: Mutex<Decimal>,
    bank: RwLock<Weak<Bank>>,
}

impl Account {
    /// Tạo Account mới với owner và số dư ban đầu.
    ///
    /// Số dư âm không bị chặn ở đây; dùng `AccountConfig::build` nếu cần.
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Self {
        Self::from_parts(Some(owner.into()), balance)
    }

    pub(crate) fn from_parts(owner: Option<String>, balance: Decimal) -> Self {
        let account = Self {
            id: next_account_id(),
            owner,
            balance: Mutex::new(balance),
            bank: RwLock::new(Weak::new()),
        };
        if balance < Decimal::ZERO {
            warn!(account = account.id, %balance, "account opened with negative balance");
        }
        account
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Số dư hiện tại
    pub fn balance(&self) -> Decimal {
        *self.balance.lock()
    }

    /// Bank đang giữ account này, nếu có và còn tồn tại
    pub fn bank(&self) -> Option<Arc<Bank>> {
        self.bank.read().upgrade()
    }

    /// Owner trùng `owner` (không phân biệt hoa thường)
    pub fn owned_by(&self, owner: &str) -> bool {
        self.owner
            .as_deref()
            .map_or(false, |mine| mine.to_lowercase() == owner.to_lowercase())
    }

    pub(crate) fn attach_to(&self, bank: &Arc<Bank>) {
        *self.bank.write() = Arc::downgrade(bank);
    }

    pub(crate) fn lock_balance(&self) -> MutexGuard<'_, Decimal> {
        self.balance.lock()
    }

    /// Trừ tiền.
    ///
    /// # Errors
    /// - `InvalidAmount` nếu amount thiếu, bằng 0 hoặc âm
    /// - `InsufficientFunds` nếu số dư sau khi trừ < 0 (được phép về đúng 0)
    pub fn debit(&self, amount: impl Into<Option<Decimal>>) -> LedgerResult<()> {
        let mut balance = self.balance.lock();
        let amount = validate_amount(amount.into()).map_err(|err| {
            warn!(account = self.id, error = %err, "debit rejected");
            err
        })?;
        let remaining =
            ensure_sufficient(*balance, amount, BalanceFloor::AllowZero).map_err(|err| {
                warn!(account = self.id, error = %err, "debit rejected");
                err
            })?;

        *balance = remaining;
        debug!(account = self.id, %amount, balance = %remaining, "debit applied");
        Ok(())
    }

    /// Cộng tiền.
    ///
    /// # Errors
    /// - `InvalidAmount` nếu amount thiếu, bằng 0 hoặc âm, hoặc vượt giới
    ///   hạn biểu diễn của Decimal
    pub fn credit(&self, amount: impl Into<Option<Decimal>>) -> LedgerResult<()> {
        let mut balance = self.balance.lock();
        let amount = validate_amount(amount.into()).map_err(|err| {
            warn!(account = self.id, error = %err, "credit rejected");
            err
        })?;
        let updated = add_checked(*balance, amount)?;

        *balance = updated;
        debug!(account = self.id, %amount, balance = %updated, "credit applied");
        Ok(())
    }
}

/// `balance + amount`, báo lỗi thay vì panic khi tràn Decimal
pub(crate) fn add_checked(balance: Decimal, amount: Decimal) -> LedgerResult<Decimal> {
    balance.checked_add(amount).ok_or_else(|| {
        LedgerError::InvalidAmount(format!(
            "amount {} overflows balance {}",
            amount, balance
        ))
    })
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        let (Some(mine), Some(theirs)) = (self.owner(), other.owner()) else {
            return false;
        };
        if mine.to_lowercase() != theirs.to_lowercase() {
            return false;
        }

        let (a, b) = (self.balance(), other.balance());
        a == b && a.scale() == b.scale()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account #{} (owner: {}, balance: {})",
            self.id,
            self.owner().unwrap_or("-"),
            self.balance()
        )
    }
}
