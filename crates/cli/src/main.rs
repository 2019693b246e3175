//! Minibank CLI - run ledger scenarios against an in-memory bank
//!
//! Usage:
//! ```bash
//! minibank demo
//! minibank run demos/chase.json
//! minibank --policy allow-zero --json run demos/chase.json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use minibank_core::BalanceFloor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{demo, scenario};

/// Minibank - an in-memory banking ledger
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Transfer floor, overrides the scenario's own config
    #[arg(long, global = true)]
    pub policy: Option<PolicyArg>,

    /// Print the final state as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in reference scenario
    Demo,

    /// Run a scenario from a JSON file
    Run {
        /// Scenario file path
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Reject transfers that would leave the sender at exactly zero
    RejectZero,
    /// Allow transfers down to a zero balance
    AllowZero,
}

impl PolicyArg {
    pub fn to_core_floor(&self) -> BalanceFloor {
        match self {
            PolicyArg::RejectZero => BalanceFloor::RejectZero,
            PolicyArg::AllowZero => BalanceFloor::AllowZero,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let floor = cli.policy.map(|p| p.to_core_floor());

    let report = match cli.command {
        Commands::Demo => scenario::execute(&demo::reference_scenario(), floor)?,
        Commands::Run { file } => {
            let loaded = scenario::load(&file)?;
            scenario::execute(&loaded, floor)?
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }

    Ok(())
}
