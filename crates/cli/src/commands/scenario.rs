//! Scenario files: load, execute, report

use anyhow::{Context, Result};
use minibank_core::{Account, AccountConfig, BalanceFloor, Bank, BankConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// A bank, its opening accounts, and operations to run in order
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Bank name
    pub bank: String,
    #[serde(default)]
    pub config: BankConfig,
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// One ledger operation; accounts are referenced by owner (case-insensitive)
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Debit {
        account: String,
        amount: Option<Decimal>,
    },
    Credit {
        account: String,
        amount: Option<Decimal>,
    },
    Transfer {
        from: String,
        to: String,
        amount: Option<Decimal>,
    },
}

impl Operation {
    pub fn describe(&self) -> String {
        fn show(amount: &Option<Decimal>) -> String {
            amount.map_or_else(|| "<missing>".to_string(), |a| a.to_string())
        }
        match self {
            Operation::Debit { account, amount } => format!("debit {} from {}", show(amount), account),
            Operation::Credit { account, amount } => format!("credit {} to {}", show(amount), account),
            Operation::Transfer { from, to, amount } => {
                format!("transfer {} from {} to {}", show(amount), from, to)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationOutcome {
    pub operation: String,
    /// Error message when the operation was rejected
    pub error: Option<String>,
}

impl OperationOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub owner: Option<String>,
    pub balance: Decimal,
}

/// Final state after running a scenario
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub bank: String,
    pub transfer_floor: BalanceFloor,
    pub outcomes: Vec<OperationOutcome>,
    pub accounts: Vec<AccountSummary>,
    pub total: Decimal,
}

impl RunReport {
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded()).count()
    }

    pub fn print(&self) {
        println!("🏦 {} (transfer floor: {})", self.bank, self.transfer_floor);
        println!();
        for outcome in &self.outcomes {
            match &outcome.error {
                None => println!("  ✅ {}", outcome.operation),
                Some(err) => println!("  ❌ {} - {}", outcome.operation, err),
            }
        }
        println!();
        for account in &self.accounts {
            println!(
                "  {:<24} {:>16}",
                account.owner.as_deref().unwrap_or("-"),
                account.balance
            );
        }
        println!("  {:<24} {:>16}", "Total", self.total);
    }
}

/// Read and parse a scenario file
pub fn load(path: &Path) -> Result<Scenario> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario {}", path.display()))?;
    parse(&content).with_context(|| format!("Invalid scenario {}", path.display()))
}

pub fn parse(content: &str) -> Result<Scenario> {
    Ok(serde_json::from_str(content)?)
}

/// Run every operation against a fresh bank.
///
/// Rejected operations are recorded and skipped. Unknown account owners and
/// invalid opening accounts abort the run.
pub fn execute(scenario: &Scenario, floor: Option<BalanceFloor>) -> Result<RunReport> {
    let mut config = scenario.config;
    if let Some(floor) = floor {
        config = config.with_transfer_floor(floor);
    }

    let bank = Bank::with_config(scenario.bank.clone(), config);
    for account in &scenario.accounts {
        let built = account
            .clone()
            .build()
            .with_context(|| format!("Invalid account {:?}", account.owner))?;
        bank.add_account(Arc::new(built));
    }

    let mut outcomes = Vec::with_capacity(scenario.operations.len());
    for operation in &scenario.operations {
        let result = match operation {
            Operation::Debit { account, amount } => find(&bank, account)?.debit(*amount),
            Operation::Credit { account, amount } => find(&bank, account)?.credit(*amount),
            Operation::Transfer { from, to, amount } => {
                let (sender, receiver) = (find(&bank, from)?, find(&bank, to)?);
                bank.transfer(&sender, &receiver, *amount)
            }
        };
        outcomes.push(OperationOutcome {
            operation: operation.describe(),
            error: result.err().map(|err| err.to_string()),
        });
    }

    let accounts: Vec<AccountSummary> = bank
        .accounts()
        .iter()
        .map(|account| AccountSummary {
            owner: account.owner().map(str::to_string),
            balance: account.balance(),
        })
        .collect();

    let report = RunReport {
        bank: bank.name().to_string(),
        transfer_floor: config.transfer_floor,
        outcomes,
        accounts,
        total: bank.total_balance(),
    };
    info!(
        bank = %report.bank,
        operations = report.outcomes.len(),
        rejected = report.rejected(),
        "scenario finished"
    );
    Ok(report)
}

fn find(bank: &Bank, owner: &str) -> Result<Arc<Account>> {
    bank.find_by_owner(owner)
        .with_context(|| format!("Unknown account: {}", owner))
}
