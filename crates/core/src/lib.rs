//! # Minibank Core
//!
//! Sổ cái ngân hàng tối giản trong bộ nhớ: Account giữ số dư Decimal,
//! Bank giữ danh sách Account và thực hiện transfer.
//!
//! ```
//! use std::sync::Arc;
//! use minibank_core::{Account, Bank};
//! use rust_decimal_macros::dec;
//!
//! let bank = Bank::new("Chase Bank");
//! let alice = Arc::new(Account::new("Alice", dec!(1000.12345)));
//! let bob = Arc::new(Account::new("Bob", dec!(1000.12345)));
//! bank.add_account(Arc::clone(&alice));
//! bank.add_account(Arc::clone(&bob));
//!
//! bank.transfer(&alice, &bob, dec!(100)).unwrap();
//! assert_eq!(alice.balance(), dec!(900.12345));
//! assert_eq!(bob.balance(), dec!(1100.12345));
//! ```

pub mod account;
pub mod amount;
pub mod bank;
pub mod config;
pub mod error;

pub use account::Account;
pub use amount::{ensure_sufficient, validate_amount, BalanceFloor};
pub use bank::Bank;
pub use config::{AccountConfig, BankConfig};
pub use error::{LedgerError, LedgerResult};
