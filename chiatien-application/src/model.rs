use std::str::FromStr;

use chiatien_domain::{
    BalanceClassifier, BalanceStatus, Expense, Money, PersonBalance, PersonTotals,
    SettlementCalculator, Transfer,
};
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Everything the ledger persists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerState {
    pub next_expense_id: u64,
    pub next_history_id: u64,
    pub next_archive_id: u64,
    pub expenses: Vec<Expense>,
    pub history: Vec<HistoryEntry>,
    pub archives: Vec<Archive>,
}

impl LedgerState {
    pub fn allocate_expense_id(&mut self) -> u64 {
        self.next_expense_id = self.next_expense_id.max(1);
        let id = self.next_expense_id;
        self.next_expense_id += 1;
        id
    }

    pub fn push_history(
        &mut self,
        action: HistoryAction,
        data: serde_json::Value,
        timestamp: NaiveDateTime,
    ) {
        self.next_history_id = self.next_history_id.max(1);
        let id = self.next_history_id;
        self.next_history_id += 1;
        self.history.push(HistoryEntry {
            id,
            timestamp,
            action,
            data,
        });
    }

    pub fn push_archive(&mut self, expenses: Vec<Expense>, timestamp: NaiveDateTime) {
        self.next_archive_id = self.next_archive_id.max(1);
        let id = self.next_archive_id;
        self.next_archive_id += 1;
        self.archives.push(Archive {
            id,
            timestamp,
            expenses,
        });
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryAction {
    Add,
    Update,
    Delete,
    Archive,
}

impl HistoryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryAction::Add => "ADD",
            HistoryAction::Update => "UPDATE",
            HistoryAction::Delete => "DELETE",
            HistoryAction::Archive => "ARCHIVE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: NaiveDateTime,
    pub action: HistoryAction,
    pub data: serde_json::Value,
}

impl HistoryEntry {
    /// Decodes `data` according to `action`. Entries written by an older
    /// format decode to `HistoryDetail::Unknown`.
    pub fn detail(&self) -> HistoryDetail {
        let decoded = match self.action {
            HistoryAction::Add => {
                serde_json::from_value(self.data.clone()).map(HistoryDetail::Added)
            }
            HistoryAction::Delete => {
                serde_json::from_value(self.data.clone()).map(HistoryDetail::Deleted)
            }
            HistoryAction::Update => serde_json::from_value::<ExpenseChange>(self.data.clone())
                .map(|change| HistoryDetail::Updated {
                    old: change.old,
                    new: change.new,
                }),
            HistoryAction::Archive => serde_json::from_value::<ArchiveCount>(self.data.clone())
                .map(|archived| HistoryDetail::Archived {
                    count: archived.count,
                }),
        };
        decoded.unwrap_or(HistoryDetail::Unknown)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryDetail {
    Added(Expense),
    Updated { old: Expense, new: Expense },
    Deleted(Expense),
    Archived { count: usize },
    Unknown,
}

#[derive(Deserialize)]
struct ExpenseChange {
    old: Expense,
    new: Expense,
}

#[derive(Deserialize)]
struct ArchiveCount {
    count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archive {
    pub id: u64,
    pub timestamp: NaiveDateTime,
    pub expenses: Vec<Expense>,
}

/// Largest amount, in whole units, a single expense may carry. Sums over any
/// realistic ledger stay far inside the `Decimal` range.
pub const MAX_EXPENSE_UNITS: i64 = 1_000_000_000_000_000;

/// User input for creating or replacing an expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewExpense {
    pub name: String,
    pub amount: Money,
    pub purpose: String,
    pub participants: Option<Vec<String>>,
}

impl NewExpense {
    /// Trims text fields and drops blank participants. An empty participant list
    /// becomes `None`, meaning everyone.
    pub fn normalized(self) -> Result<Self, LedgerError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(LedgerError::InvalidExpense {
                field: "name",
                reason: "must not be blank",
            });
        }
        let purpose = self.purpose.trim().to_string();
        if purpose.is_empty() {
            return Err(LedgerError::InvalidExpense {
                field: "purpose",
                reason: "must not be blank",
            });
        }
        if self.amount.is_negative() {
            return Err(LedgerError::InvalidExpense {
                field: "amount",
                reason: "must not be negative",
            });
        }
        if self.amount > Money::from_i64(MAX_EXPENSE_UNITS) {
            return Err(LedgerError::InvalidExpense {
                field: "amount",
                reason: "too large",
            });
        }

        let participants = self
            .participants
            .map(|list| {
                list.into_iter()
                    .map(|participant| participant.trim().to_string())
                    .filter(|participant| !participant.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty());

        Ok(Self {
            name,
            amount: self.amount,
            purpose,
            participants,
        })
    }
}

/// Which history entries to clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Month {
    All,
    YearMonth { year: i32, month: u32 },
}

impl Month {
    pub fn contains(self, timestamp: NaiveDateTime) -> bool {
        match self {
            Month::All => true,
            Month::YearMonth { year, month } => {
                timestamp.year() == year && timestamp.month() == month
            }
        }
    }
}

impl FromStr for Month {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return Ok(Month::All);
        }

        let invalid = || LedgerError::InvalidMonth(value.to_string());
        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Month::YearMonth { year, month })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverallStats {
    pub total_amount: Money,
    pub total_count: usize,
    pub average_amount: Money,
}

/// Owned per-person figures, detached from the ledger snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonStats {
    pub name: String,
    pub paid: Money,
    pub count: usize,
    pub share: Money,
    pub expenses: Vec<Expense>,
}

impl PersonStats {
    pub fn balance(&self) -> Money {
        self.paid - self.share
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceClassifier::classify(self.balance())
    }

    pub fn as_balance(&self) -> PersonBalance<'_> {
        PersonBalance::new(&self.name, self.paid, self.share)
    }
}

impl From<PersonTotals<'_>> for PersonStats {
    fn from(totals: PersonTotals<'_>) -> Self {
        Self {
            name: totals.name.to_string(),
            paid: totals.paid,
            count: totals.count,
            share: totals.share,
            expenses: totals.expenses.into_iter().cloned().collect(),
        }
    }
}

/// Expenses paid by a single person.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayerSummary {
    pub name: String,
    pub expenses: Vec<Expense>,
    pub total: Money,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementReport {
    pub people: Vec<PersonStats>,
}

impl SettlementReport {
    /// Recomputed on every call from the people snapshot.
    pub fn transfers(&self) -> Vec<Transfer<'_>> {
        SettlementCalculator.calculate(self.people.iter().map(PersonStats::as_balance))
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
