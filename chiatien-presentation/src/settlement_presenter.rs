use std::{borrow::Cow, fmt};

use chiatien_application::{PersonStats, SettlementReport};
use chiatien_domain::{BalanceStatus, Transfer};
use chiatien_i18n as i18n;

use crate::{
    money_format::{format_money, format_signed_money},
    text_table::{Alignment, TextTableBuilder},
};

pub struct SettlementPresenter;

pub struct SettlementView {
    pub balance_table: String,
    pub transfer_lines: Vec<String>,
}

impl SettlementPresenter {
    pub fn render(report: &SettlementReport) -> Option<SettlementView> {
        if report.is_empty() {
            return None;
        }

        Some(SettlementView {
            balance_table: Self::build_balance_table(&report.people),
            transfer_lines: report
                .transfers()
                .iter()
                .map(Self::format_transfer)
                .collect(),
        })
    }

    pub fn build_balance_table(people: &[PersonStats]) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
                Alignment::Left,
            ])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::PAID),
                Cow::Borrowed(i18n::SHARE),
                Cow::Borrowed(i18n::BALANCE),
                Cow::Borrowed(i18n::STATUS),
            ]);

        for person in people {
            builder = builder.row([
                Cow::Borrowed(person.name.as_str()),
                Cow::Owned(format_money(person.paid)),
                Cow::Owned(format_money(person.share)),
                Cow::Owned(format_signed_money(person.balance())),
                Cow::Borrowed(status_label(person.status())),
            ]);
        }

        builder.build()
    }

    pub fn format_transfer(transfer: &Transfer<'_>) -> String {
        format!(
            "{} → {}: {}",
            transfer.from,
            transfer.to,
            format_money(transfer.amount)
        )
    }
}

impl fmt::Display for SettlementView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.balance_table)?;
        writeln!(f)?;
        if self.transfer_lines.is_empty() {
            return write!(f, "{}", i18n::ALL_SETTLED);
        }
        write!(f, "{}", i18n::SETTLEMENT_HEADING)?;
        for line in &self.transfer_lines {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}

pub fn status_label(status: BalanceStatus) -> &'static str {
    match status {
        BalanceStatus::WillReceive => i18n::WILL_RECEIVE,
        BalanceStatus::Owes => i18n::OWES,
        BalanceStatus::Settled => i18n::SETTLED,
    }
}
