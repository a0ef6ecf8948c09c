use crate::{model::Money, services::SETTLEMENT_TOLERANCE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BalanceStatus {
    /// Net creditor: will be paid back.
    WillReceive,
    /// Net debtor: still has to pay.
    Owes,
    Settled,
}

pub struct BalanceClassifier;

impl BalanceClassifier {
    pub fn classify(balance: Money) -> BalanceStatus {
        if balance > SETTLEMENT_TOLERANCE {
            BalanceStatus::WillReceive
        } else if balance < -SETTLEMENT_TOLERANCE {
            BalanceStatus::Owes
        } else {
            BalanceStatus::Settled
        }
    }
}
