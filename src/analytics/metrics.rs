use serde::Serialize;

use crate::money::Money;
use crate::records::{TransactionKind, TransactionRecord};

/// Income/expense totals and their net, recomputed on every call.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub total_income: Money,
    pub total_expense: Money,
    pub net_balance: Money,
}

/// Sums the transaction collection into totals. Empty input yields zeros.
pub fn summarize(transactions: &[TransactionRecord]) -> DerivedMetrics {
    let mut total_income = Money::ZERO;
    let mut total_expense = Money::ZERO;
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => total_income += transaction.amount,
            TransactionKind::Expense => total_expense += transaction.amount,
        }
    }
    DerivedMetrics {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
    }
}
