use anyhow::anyhow;
use chiatien_application::{LedgerError, LedgerService};
use chiatien_i18n as i18n;
use chiatien_presentation::{ExpensePresenter, HistoryPresenter, SettlementPresenter, StatsPresenter};

use crate::cli::Command;

/// Runs one subcommand and returns the text to print.
pub fn execute(service: &LedgerService<'_>, command: Command) -> anyhow::Result<String> {
    run(service, command).map_err(localize)
}

fn run(service: &LedgerService<'_>, command: Command) -> Result<String, LedgerError> {
    let output = match command {
        Command::Add(expense) => {
            let created = service.create_expense(expense.into_new_expense())?;
            i18n::expense_created(created.id)
        }
        Command::Update { id, expense } => {
            let updated = service.update_expense(id, expense.into_new_expense())?;
            i18n::expense_updated(updated.id)
        }
        Command::Delete { id } => {
            let removed = service.delete_expense(id)?;
            i18n::expense_deleted(removed.id)
        }
        Command::List { payer } => {
            let expenses = match payer {
                Some(name) => service.expenses_by_payer(&name)?,
                None => service.list_expenses()?,
            };
            ExpensePresenter::build_expense_table(&expenses)
        }
        Command::Stats => StatsPresenter::format_overall(&service.overall_stats()?),
        Command::People => StatsPresenter::build_people_table(&service.people_stats()?),
        Command::Person { name } => {
            let summary = service.person_stats(&name)?;
            StatsPresenter::format_person(&name, summary.as_ref())
        }
        Command::Settle => {
            let report = service.settlement_report()?;
            SettlementPresenter::render(&report)
                .map_or_else(|| i18n::NO_DATA.to_string(), |view| view.to_string())
        }
        Command::History => HistoryPresenter::build_history_table(&service.history()?),
        Command::ClearHistory { month } => i18n::history_cleared(service.clear_history(month)?),
        Command::Archive => match service.archive()? {
            0 => i18n::NOTHING_TO_ARCHIVE.to_string(),
            count => i18n::expenses_archived(count),
        },
        Command::Archives => ExpensePresenter::build_archive_list(&service.archives()?),
    };
    Ok(output)
}

fn localize(err: LedgerError) -> anyhow::Error {
    match err {
        LedgerError::ExpenseNotFound(id) => anyhow!("{}: #{id}", i18n::EXPENSE_NOT_FOUND),
        other => anyhow::Error::new(other),
    }
}
