//! Persisted record models: the raw entities the engine derives metrics from.
//!
//! Records are owned by the external storage layer; the engine only ever
//! receives already-fetched collections and never mutates them.

pub mod budget;
pub mod goal;
pub mod transaction;

pub use budget::{BudgetPeriod, BudgetRecord};
pub use goal::GoalRecord;
pub use transaction::{Category, ExpenseCategory, IncomeCategory, TransactionKind, TransactionRecord};
