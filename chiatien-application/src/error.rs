use thiserror::Error;

/// Failures of the persistence port.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("ledger storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("ledger data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("ledger storage is unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("expense #{0} not found")]
    ExpenseNotFound(u64),
    #[error("invalid expense {field}: {reason}")]
    InvalidExpense {
        field: &'static str,
        reason: &'static str,
    },
    #[error("invalid month '{0}', expected 'all' or 'YYYY-MM'")]
    InvalidMonth(String),
    #[error("failed to snapshot expense for history: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
