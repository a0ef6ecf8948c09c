use std::borrow::Cow;

use chiatien_application::{OverallStats, PayerSummary, PersonStats};
use chiatien_i18n as i18n;

use crate::{
    expense_presenter::ExpensePresenter,
    money_format::format_money,
    text_table::{Alignment, TextTableBuilder},
};

pub struct StatsPresenter;

impl StatsPresenter {
    pub fn format_overall(stats: &OverallStats) -> String {
        format!(
            "{}: {}\n{}: {}\n{}: {}",
            i18n::TOTAL_AMOUNT,
            format_money(stats.total_amount),
            i18n::TOTAL_COUNT,
            stats.total_count,
            i18n::AVERAGE_AMOUNT,
            format_money(stats.average_amount),
        )
    }

    pub fn build_people_table(people: &[PersonStats]) -> String {
        if people.is_empty() {
            return i18n::NO_DATA.to_string();
        }

        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::PAID),
                Cow::Borrowed(i18n::TOTAL_COUNT),
                Cow::Borrowed(i18n::SHARE),
            ]);

        for person in people {
            builder = builder.row([
                Cow::Borrowed(person.name.as_str()),
                Cow::Owned(format_money(person.paid)),
                Cow::Owned(person.count.to_string()),
                Cow::Owned(format_money(person.share)),
            ]);
        }

        builder.build()
    }

    pub fn format_person(name: &str, summary: Option<&PayerSummary>) -> String {
        let Some(summary) = summary else {
            return format!("{}: {name}", i18n::PERSON_NOT_FOUND);
        };

        format!(
            "{}\n{}: {} ({} {})\n{}",
            summary.name,
            i18n::PAID,
            format_money(summary.total),
            summary.count,
            i18n::TOTAL_COUNT.to_lowercase(),
            ExpensePresenter::build_expense_table(&summary.expenses),
        )
    }
}
