use std::collections::HashMap;

use serde::Serialize;

use crate::money::Money;
use crate::records::{Category, ExpenseCategory, TransactionRecord};

/// One expense category's share of total spending.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategorySlice {
    pub category: ExpenseCategory,
    pub amount: Money,
    pub percent_of_total: f64,
    pub rank: usize,
}

/// Groups expense transactions by category, ranked by summed amount.
///
/// Ordering is a stable total order: descending by amount, ties broken by
/// ascending category name. When total spending is zero every percentage
/// is 0.0 rather than a division by zero.
pub fn breakdown(transactions: &[TransactionRecord]) -> Vec<CategorySlice> {
    let mut grouped: HashMap<ExpenseCategory, Money> = HashMap::new();
    for transaction in transactions {
        if let Category::Expense(category) = transaction.category {
            *grouped.entry(category).or_insert(Money::ZERO) += transaction.amount;
        }
    }

    let total: Money = grouped.values().copied().sum();
    let mut slices: Vec<(ExpenseCategory, Money)> = grouped.into_iter().collect();
    slices.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));

    slices
        .into_iter()
        .enumerate()
        .map(|(index, (category, amount))| CategorySlice {
            category,
            amount,
            percent_of_total: amount.percent_of(total),
            rank: index + 1,
        })
        .collect()
}
