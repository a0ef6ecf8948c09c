use std::cmp::Reverse;

use chiatien_domain::{Expense, Money, ShareCalculator};
use serde_json::json;

use crate::{
    error::LedgerError,
    model::{
        Archive, HistoryAction, HistoryEntry, LedgerState, Month, NewExpense, OverallStats,
        PayerSummary, PersonStats, SettlementReport,
    },
    ports::{Clock, LedgerStore},
};

#[derive(Clone, Copy)]
pub struct LedgerService<'a> {
    store: &'a dyn LedgerStore,
    clock: &'a dyn Clock,
}

impl<'a> LedgerService<'a> {
    pub fn new(store: &'a dyn LedgerStore, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    pub fn list_expenses(&self) -> Result<Vec<Expense>, LedgerError> {
        Ok(self.store.load()?.expenses)
    }

    pub fn get_expense(&self, id: u64) -> Result<Expense, LedgerError> {
        self.store
            .load()?
            .expenses
            .into_iter()
            .find(|expense| expense.id == id)
            .ok_or(LedgerError::ExpenseNotFound(id))
    }

    pub fn expenses_by_payer(&self, name: &str) -> Result<Vec<Expense>, LedgerError> {
        Ok(self
            .store
            .load()?
            .expenses
            .into_iter()
            .filter(|expense| expense.name == name)
            .collect())
    }

    pub fn create_expense(&self, input: NewExpense) -> Result<Expense, LedgerError> {
        let input = input.normalized()?;
        let mut state = self.store.load()?;
        let now = self.clock.now();

        let expense = Expense {
            id: state.allocate_expense_id(),
            name: input.name,
            amount: input.amount,
            purpose: input.purpose,
            date: now,
            last_updated: Some(now),
            participants: input.participants,
        };
        state.expenses.push(expense.clone());
        state.push_history(HistoryAction::Add, serde_json::to_value(&expense)?, now);
        self.store.save(&state)?;

        tracing::info!(
            expense_id = expense.id,
            payer = %expense.name,
            amount = %expense.amount,
            "Expense created"
        );
        Ok(expense)
    }

    pub fn update_expense(&self, id: u64, input: NewExpense) -> Result<Expense, LedgerError> {
        let input = input.normalized()?;
        let mut state = self.store.load()?;
        let now = self.clock.now();

        let expense = state
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or(LedgerError::ExpenseNotFound(id))?;
        let old = serde_json::to_value(&*expense)?;

        expense.name = input.name;
        expense.amount = input.amount;
        expense.purpose = input.purpose;
        expense.participants = input.participants;
        expense.last_updated = Some(now);
        let updated = expense.clone();
        let new = serde_json::to_value(&updated)?;

        state.push_history(
            HistoryAction::Update,
            json!({ "old": old, "new": new }),
            now,
        );
        self.store.save(&state)?;

        tracing::info!(expense_id = id, "Expense updated");
        Ok(updated)
    }

    pub fn delete_expense(&self, id: u64) -> Result<Expense, LedgerError> {
        let mut state = self.store.load()?;
        let position = state
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(LedgerError::ExpenseNotFound(id))?;
        let removed = state.expenses.remove(position);

        state.push_history(
            HistoryAction::Delete,
            serde_json::to_value(&removed)?,
            self.clock.now(),
        );
        self.store.save(&state)?;

        tracing::info!(expense_id = id, "Expense deleted");
        Ok(removed)
    }

    pub fn overall_stats(&self) -> Result<OverallStats, LedgerError> {
        let expenses = self.store.load()?.expenses;
        let total_amount: Money = expenses.iter().map(|expense| expense.amount).sum();
        let average_amount = total_amount
            .split_evenly(expenses.len())
            .map(|average| average.round_dp(2))
            .unwrap_or(Money::ZERO);

        Ok(OverallStats {
            total_amount,
            total_count: expenses.len(),
            average_amount,
        })
    }

    pub fn people_stats(&self) -> Result<Vec<PersonStats>, LedgerError> {
        let state = self.store.load()?;
        Ok(ShareCalculator::calculate(&state.expenses)
            .into_iter()
            .map(PersonStats::from)
            .collect())
    }

    /// Expenses paid by `name`; `None` when that person paid for nothing.
    pub fn person_stats(&self, name: &str) -> Result<Option<PayerSummary>, LedgerError> {
        let expenses = self.expenses_by_payer(name)?;
        if expenses.is_empty() {
            return Ok(None);
        }

        Ok(Some(PayerSummary {
            name: name.to_string(),
            total: expenses.iter().map(|expense| expense.amount).sum(),
            count: expenses.len(),
            expenses,
        }))
    }

    pub fn settlement_report(&self) -> Result<SettlementReport, LedgerError> {
        Ok(SettlementReport {
            people: self.people_stats()?,
        })
    }

    /// Newest first.
    pub fn history(&self) -> Result<Vec<HistoryEntry>, LedgerError> {
        let mut history = self.store.load()?.history;
        history.sort_by_key(|entry| Reverse((entry.timestamp, entry.id)));
        Ok(history)
    }

    pub fn clear_history(&self, month: Month) -> Result<usize, LedgerError> {
        let mut state = self.store.load()?;
        let before = state.history.len();
        state.history.retain(|entry| !month.contains(entry.timestamp));
        let removed = before - state.history.len();
        self.store.save(&state)?;

        tracing::info!(removed, ?month, "History cleared");
        Ok(removed)
    }

    /// Moves every current expense into a new archive. Returns the number archived.
    pub fn archive(&self) -> Result<usize, LedgerError> {
        let mut state: LedgerState = self.store.load()?;
        if state.expenses.is_empty() {
            return Ok(0);
        }

        let now = self.clock.now();
        let expenses = std::mem::take(&mut state.expenses);
        let count = expenses.len();
        state.push_archive(expenses, now);
        state.push_history(HistoryAction::Archive, json!({ "count": count }), now);
        self.store.save(&state)?;

        tracing::info!(count, "Expenses archived");
        Ok(count)
    }

    /// Newest first.
    pub fn archives(&self) -> Result<Vec<Archive>, LedgerError> {
        let mut archives = self.store.load()?.archives;
        archives.sort_by_key(|archive| Reverse((archive.timestamp, archive.id)));
        Ok(archives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::StoreError, model::MAX_EXPENSE_UNITS};
    use chrono::{NaiveDate, NaiveDateTime};
    use rstest::{fixture, rstest};
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubStore {
        state: Mutex<LedgerState>,
    }

    impl LedgerStore for StubStore {
        fn load(&self) -> Result<LedgerState, StoreError> {
            Ok(self.state.lock().expect("store lock").clone())
        }

        fn save(&self, state: &LedgerState) -> Result<(), StoreError> {
            *self.state.lock().expect("store lock") = state.clone();
            Ok(())
        }
    }

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(8, 0, 0))
            .expect("valid timestamp")
    }

    fn new_expense(name: &str, amount: i64, participants: Option<&[&str]>) -> NewExpense {
        NewExpense {
            name: name.to_string(),
            amount: Money::from_i64(amount),
            purpose: "dinner".to_string(),
            participants: participants
                .map(|list| list.iter().map(|name| name.to_string()).collect()),
        }
    }

    #[fixture]
    fn store() -> StubStore {
        StubStore::default()
    }

    #[fixture]
    fn clock() -> FixedClock {
        FixedClock(at(2024, 6, 15))
    }

    #[rstest]
    fn create_assigns_ids_and_records_history(store: StubStore, clock: FixedClock) {
        let service = LedgerService::new(&store, &clock);

        let first = service
            .create_expense(new_expense("An", 300_000, None))
            .expect("create first");
        let second = service
            .create_expense(new_expense("Binh", 90_000, Some(&["An", "Binh"])))
            .expect("create second");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.date, clock.0);
        let history = service.history().expect("history");
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|entry| entry.action == HistoryAction::Add));
        assert_eq!(history[0].id, 2);
    }

    #[rstest]
    fn update_replaces_fields_and_keeps_old_snapshot(store: StubStore, clock: FixedClock) {
        let service = LedgerService::new(&store, &clock);
        let created = service
            .create_expense(new_expense("An", 1000, None))
            .expect("create");

        let updated = service
            .update_expense(created.id, new_expense("Chi", 2500, Some(&["An"])))
            .expect("update");

        assert_eq!(updated.name, "Chi");
        assert_eq!(updated.amount, Money::from_i64(2500));
        assert_eq!(updated.participants, Some(vec!["An".to_string()]));
        assert_eq!(updated.date, created.date);

        let history = service.history().expect("history");
        let update = history
            .iter()
            .find(|entry| entry.action == HistoryAction::Update)
            .expect("update entry");
        assert_eq!(update.data["old"]["name"], "An");
        assert_eq!(update.data["new"]["name"], "Chi");
    }

    #[rstest]
    fn unknown_ids_are_reported(store: StubStore, clock: FixedClock) {
        let service = LedgerService::new(&store, &clock);

        assert!(matches!(
            service.delete_expense(42),
            Err(LedgerError::ExpenseNotFound(42))
        ));
        assert!(matches!(
            service.update_expense(7, new_expense("An", 1, None)),
            Err(LedgerError::ExpenseNotFound(7))
        ));
        assert!(matches!(
            service.get_expense(3),
            Err(LedgerError::ExpenseNotFound(3))
        ));
    }

    #[rstest]
    fn overall_stats_average_is_rounded(store: StubStore, clock: FixedClock) {
        let service = LedgerService::new(&store, &clock);
        assert_eq!(
            service.overall_stats().expect("empty stats"),
            OverallStats {
                total_amount: Money::ZERO,
                total_count: 0,
                average_amount: Money::ZERO,
            }
        );

        for amount in [100, 100, 101] {
            service
                .create_expense(new_expense("An", amount, None))
                .expect("create");
        }

        let stats = service.overall_stats().expect("stats");
        assert_eq!(stats.total_amount, Money::from_i64(301));
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.average_amount, Money::new(10033, 2));
    }

    #[rstest]
    fn oversized_amount_is_rejected_and_stats_stay_computable(
        store: StubStore,
        clock: FixedClock,
    ) {
        let service = LedgerService::new(&store, &clock);
        let oversized = NewExpense {
            amount: Money::from_decimal(rust_decimal::Decimal::MAX),
            ..new_expense("An", 0, None)
        };

        for _ in 0..2 {
            assert!(matches!(
                service.create_expense(oversized.clone()),
                Err(LedgerError::InvalidExpense {
                    field: "amount",
                    reason: "too large"
                })
            ));
        }
        for name in ["An", "Binh"] {
            service
                .create_expense(new_expense(name, MAX_EXPENSE_UNITS, None))
                .expect("create largest allowed");
        }

        let stats = service.overall_stats().expect("stats");
        assert_eq!(stats.total_count, 2);
        assert_eq!(
            stats.total_amount,
            Money::from_i64(2 * MAX_EXPENSE_UNITS)
        );
        assert_eq!(service.people_stats().expect("people").len(), 2);
        assert!(service.settlement_report().expect("report").transfers().is_empty());
    }

    #[rstest]
    fn person_stats_only_counts_payments(store: StubStore, clock: FixedClock) {
        let service = LedgerService::new(&store, &clock);
        service
            .create_expense(new_expense("An", 500, Some(&["Binh"])))
            .expect("create");
        service
            .create_expense(new_expense("An", 700, None))
            .expect("create");

        let summary = service
            .person_stats("An")
            .expect("stats")
            .expect("An paid");
        assert_eq!(summary.total, Money::from_i64(1200));
        assert_eq!(summary.count, 2);
        assert_eq!(service.person_stats("Binh").expect("stats"), None);
    }

    #[rstest]
    fn archive_moves_expenses_and_logs_count(store: StubStore, clock: FixedClock) {
        let service = LedgerService::new(&store, &clock);
        assert_eq!(service.archive().expect("archive empty"), 0);
        assert!(service.archives().expect("archives").is_empty());

        service
            .create_expense(new_expense("An", 500, None))
            .expect("create");
        service
            .create_expense(new_expense("Binh", 500, None))
            .expect("create");

        assert_eq!(service.archive().expect("archive"), 2);
        assert!(service.list_expenses().expect("list").is_empty());

        let archives = service.archives().expect("archives");
        assert_eq!(archives.len(), 1);
        assert_eq!(archives[0].expenses.len(), 2);

        let history = service.history().expect("history");
        let archived = history
            .iter()
            .find(|entry| entry.action == HistoryAction::Archive)
            .expect("archive entry");
        assert_eq!(archived.data["count"], 2);
    }

    #[rstest]
    fn clear_history_by_month(store: StubStore) {
        let march = FixedClock(at(2024, 3, 10));
        let april = FixedClock(at(2024, 4, 2));
        LedgerService::new(&store, &march)
            .create_expense(new_expense("An", 10, None))
            .expect("create");
        LedgerService::new(&store, &april)
            .create_expense(new_expense("An", 20, None))
            .expect("create");
        let service = LedgerService::new(&store, &april);

        let removed = service
            .clear_history(Month::YearMonth {
                year: 2024,
                month: 3,
            })
            .expect("clear march");
        assert_eq!(removed, 1);
        assert_eq!(service.history().expect("history").len(), 1);

        assert_eq!(service.clear_history(Month::All).expect("clear all"), 1);
        assert!(service.history().expect("history").is_empty());
    }
}
