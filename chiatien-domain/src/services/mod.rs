pub mod balance_classifier;
pub mod settlement_calculator;
pub mod share_calculator;

pub use balance_classifier::{BalanceClassifier, BalanceStatus};
pub use settlement_calculator::{SETTLEMENT_TOLERANCE, SettlementCalculator};
pub use share_calculator::ShareCalculator;
