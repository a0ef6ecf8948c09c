#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{Expense, Money, PersonBalance, PersonTotals, Transfer};
pub use services::{
    BalanceClassifier, BalanceStatus, SETTLEMENT_TOLERANCE, SettlementCalculator, ShareCalculator,
};
