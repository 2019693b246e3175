//! # Bank Module
//!
//! Bank giữ danh sách Account theo thứ tự thêm vào và thực hiện transfer
//! giữa hai Account bất kỳ.

use crate::account::{add_checked, Account};
use crate::amount::{ensure_sufficient, validate_amount};
use crate::config::BankConfig;
use crate::error::LedgerResult;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Ngân hàng.
///
/// Bank sở hữu danh sách `Arc<Account>`; mỗi Account chỉ giữ `Weak<Bank>`
/// ngược lại, nên Bank luôn được tạo dưới dạng `Arc<Bank>`.
#[derive(Debug)]
pub struct Bank {
    name: String,
    config: BankConfig,
    accounts: RwLock<Vec<Arc<Account>>>,
}

impl Bank {
    /// Tạo Bank rỗng với cấu hình mặc định
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Self::with_config(name, BankConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: BankConfig) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            config,
            accounts: RwLock::new(Vec::new()),
        })
    }

    /// Tạo Bank với danh sách account có sẵn.
    ///
    /// Mỗi account được đăng ký như qua `add_account`, nên back-reference
    /// luôn trỏ về bank này.
    pub fn with_accounts(
        name: impl Into<String>,
        accounts: impl IntoIterator<Item = Arc<Account>>,
    ) -> Arc<Self> {
        let bank = Self::new(name);
        for account in accounts {
            bank.add_account(account);
        }
        bank
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> BankConfig {
        self.config
    }

    /// Snapshot danh sách account theo thứ tự thêm vào
    pub fn accounts(&self) -> Vec<Arc<Account>> {
        self.accounts.read().clone()
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }

    /// Account đầu tiên có owner trùng `owner` (không phân biệt hoa thường)
    pub fn find_by_owner(&self, owner: &str) -> Option<Arc<Account>> {
        self.accounts
            .read()
            .iter()
            .find(|account| account.owned_by(owner))
            .cloned()
    }

    /// Tổng số dư của các account trong bank
    pub fn total_balance(&self) -> Decimal {
        self.accounts
            .read()
            .iter()
            .map(|account| account.balance())
            .sum()
    }

    /// Thêm account vào bank và gán back-reference.
    ///
    /// Không kiểm tra trùng lặp. Nếu account đã thuộc bank khác,
    /// back-reference được ghi đè bởi bank này.
    pub fn add_account(self: &Arc<Self>, account: Arc<Account>) {
        let mut accounts = self.accounts.write();
        account.attach_to(self);
        debug!(bank = %self.name, account = account.id(), "account added");
        accounts.push(account);
    }

    /// Chuyển `amount` từ `sender` sang `receiver`.
    ///
    /// Hai account không cần thuộc bank này. Cả hai số dư được khóa cùng
    /// lúc (theo thứ tự `id`) nên không ai quan sát được trạng thái chỉ
    /// cập nhật một bên.
    ///
    /// # Errors
    /// - `InvalidAmount` nếu amount thiếu, bằng 0 hoặc âm
    /// - `InsufficientFunds` nếu số dư còn lại của sender không thỏa
    ///   `BankConfig::transfer_floor`. Với mặc định `RejectZero`, transfer
    ///   toàn bộ số dư bị từ chối, khác với `Account::debit`.
    pub fn transfer(
        &self,
        sender: &Account,
        receiver: &Account,
        amount: impl Into<Option<Decimal>>,
    ) -> LedgerResult<()> {
        let floor = self.config.transfer_floor;
        let amount = validate_amount(amount.into()).map_err(|err| {
            warn!(bank = %self.name, error = %err, "transfer rejected");
            err
        })?;

        if sender.id() == receiver.id() {
            let balance = sender.lock_balance();
            ensure_sufficient(*balance, amount, floor).map_err(|err| {
                warn!(bank = %self.name, account = sender.id(), error = %err, "transfer rejected");
                err
            })?;
            debug!(bank = %self.name, account = sender.id(), %amount, "self transfer, balance unchanged");
            return Ok(());
        }

        let sender_first = sender.id() < receiver.id();
        let (mut first, mut second) = if sender_first {
            (sender.lock_balance(), receiver.lock_balance())
        } else {
            (receiver.lock_balance(), sender.lock_balance())
        };
        let (sender_balance, receiver_balance) = if sender_first {
            (&mut *first, &mut *second)
        } else {
            (&mut *second, &mut *first)
        };

        let remaining = ensure_sufficient(*sender_balance, amount, floor).map_err(|err| {
            warn!(
                bank = %self.name,
                sender = sender.id(),
                receiver = receiver.id(),
                error = %err,
                "transfer rejected"
            );
            err
        })?;
        let credited = add_checked(*receiver_balance, amount)?;

        *sender_balance = remaining;
        *receiver_balance = credited;
        debug!(
            bank = %self.name,
            sender = sender.id(),
            receiver = receiver.id(),
            %amount,
            "transfer applied"
        );
        Ok(())
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bank {} (accounts: {})", self.name, self.len())
    }
}
