use std::borrow::Cow;

use chiatien_application::Archive;
use chiatien_domain::{Expense, Money};
use chiatien_i18n as i18n;
use chrono::NaiveDateTime;

use crate::{
    money_format::format_money,
    text_table::{Alignment, TextTableBuilder},
};

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

pub struct ExpensePresenter;

impl ExpensePresenter {
    pub fn build_expense_table(expenses: &[Expense]) -> String {
        if expenses.is_empty() {
            return i18n::NO_DATA.to_string();
        }

        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Right,
                Alignment::Left,
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
            ])
            .headers(&[
                Cow::Borrowed("#"),
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::AMOUNT),
                Cow::Borrowed(i18n::PURPOSE),
                Cow::Borrowed(i18n::PARTICIPANTS),
                Cow::Borrowed(i18n::DATE),
            ]);

        for expense in expenses {
            builder = builder.row([
                Cow::Owned(expense.id.to_string()),
                Cow::Borrowed(expense.name.as_str()),
                Cow::Owned(format_money(expense.amount)),
                Cow::Borrowed(expense.purpose.as_str()),
                participants_label(expense),
                Cow::Owned(format_timestamp(expense.date)),
            ]);
        }

        builder.build()
    }

    pub fn build_archive_list(archives: &[Archive]) -> String {
        if archives.is_empty() {
            return i18n::NO_DATA.to_string();
        }

        archives
            .iter()
            .map(|archive| {
                let total: Money = archive.expenses.iter().map(|expense| expense.amount).sum();
                format!(
                    "#{} {} ({} {}, {}: {})\n{}",
                    archive.id,
                    format_timestamp(archive.timestamp),
                    archive.expenses.len(),
                    i18n::TOTAL_COUNT.to_lowercase(),
                    i18n::TOTAL_AMOUNT,
                    format_money(total),
                    Self::build_expense_table(&archive.expenses)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}

fn participants_label(expense: &Expense) -> Cow<'_, str> {
    match expense.participants() {
        Some(names) => Cow::Owned(names.join(", ")),
        None => Cow::Borrowed(i18n::EVERYONE),
    }
}
