use chrono::NaiveDateTime;

use crate::{error::StoreError, model::LedgerState};

pub trait LedgerStore: Send + Sync {
    fn load(&self) -> Result<LedgerState, StoreError>;

    fn save(&self, state: &LedgerState) -> Result<(), StoreError>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
