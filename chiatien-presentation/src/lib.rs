#![warn(clippy::uninlined_format_args)]

pub mod expense_presenter;
pub mod history_presenter;
pub mod money_format;
pub mod settlement_presenter;
pub mod stats_presenter;
pub mod text_table;

pub use expense_presenter::ExpensePresenter;
pub use history_presenter::HistoryPresenter;
pub use money_format::{format_money, format_signed_money};
pub use settlement_presenter::{SettlementPresenter, SettlementView, status_label};
pub use stats_presenter::StatsPresenter;
