use std::borrow::Cow;

use chiatien_application::{HistoryDetail, HistoryEntry};
use chiatien_domain::Expense;
use chiatien_i18n as i18n;

use crate::{
    expense_presenter::format_timestamp,
    money_format::format_money,
    text_table::{Alignment, TextTableBuilder},
};

pub struct HistoryPresenter;

impl HistoryPresenter {
    pub fn build_history_table(entries: &[HistoryEntry]) -> String {
        if entries.is_empty() {
            return i18n::NO_DATA.to_string();
        }

        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Right,
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
            ])
            .headers(&[
                Cow::Borrowed("#"),
                Cow::Borrowed(i18n::TIMESTAMP),
                Cow::Borrowed(i18n::ACTION),
                Cow::Borrowed(""),
            ]);

        for entry in entries {
            builder = builder.row([
                Cow::Owned(entry.id.to_string()),
                Cow::Owned(format_timestamp(entry.timestamp)),
                Cow::Borrowed(entry.action.as_str()),
                Cow::Owned(describe(&entry.detail())),
            ]);
        }

        builder.build()
    }
}

fn describe(detail: &HistoryDetail) -> String {
    match detail {
        HistoryDetail::Added(expense) | HistoryDetail::Deleted(expense) => {
            describe_expense(expense)
        }
        HistoryDetail::Updated { old, new } => {
            format!("{} ⇒ {}", describe_expense(old), describe_expense(new))
        }
        HistoryDetail::Archived { count } => {
            format!("{count} {}", i18n::TOTAL_COUNT.to_lowercase())
        }
        HistoryDetail::Unknown => String::new(),
    }
}

fn describe_expense(expense: &Expense) -> String {
    format!(
        "#{} {} {} ({})",
        expense.id,
        expense.name,
        format_money(expense.amount),
        expense.purpose
    )
}
