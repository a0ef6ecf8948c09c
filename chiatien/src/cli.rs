use std::{path::PathBuf, str::FromStr};

use chiatien_application::{LedgerError, Month, NewExpense};
use chiatien_domain::Money;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "chiatien", version, about = "Split group expenses and settle up")]
pub struct Cli {
    /// Ledger file; overrides CHIATIEN_DATA_FILE.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record an expense.
    Add(ExpenseArgs),
    /// Replace an existing expense.
    Update {
        id: u64,
        #[command(flatten)]
        expense: ExpenseArgs,
    },
    Delete {
        id: u64,
    },
    /// List expenses, optionally only those paid by one person.
    List {
        #[arg(long)]
        payer: Option<String>,
    },
    Stats,
    People,
    Person {
        name: String,
    },
    /// Show balances and who pays whom.
    Settle,
    History,
    /// Remove history entries for a month (`YYYY-MM`) or `all`.
    ClearHistory {
        #[arg(default_value = "all", value_parser = parse_month)]
        month: Month,
    },
    /// Move every current expense into a new archive.
    Archive,
    Archives,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ExpenseArgs {
    /// Who paid.
    pub name: String,
    #[arg(value_parser = parse_amount)]
    pub amount: Money,
    pub purpose: String,
    /// Comma-separated names to split among; everyone when omitted.
    #[arg(short, long, value_delimiter = ',')]
    pub participants: Vec<String>,
}

impl ExpenseArgs {
    pub fn into_new_expense(self) -> NewExpense {
        NewExpense {
            name: self.name,
            amount: self.amount,
            purpose: self.purpose,
            participants: (!self.participants.is_empty()).then_some(self.participants),
        }
    }
}

fn parse_amount(value: &str) -> Result<Money, String> {
    Decimal::from_str(value.trim())
        .map(Money::from_decimal)
        .map_err(|err| format!("invalid amount '{value}': {err}"))
}

fn parse_month(value: &str) -> Result<Month, String> {
    value.parse().map_err(|err: LedgerError| err.to_string())
}
