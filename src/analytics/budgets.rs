use chrono::NaiveDate;
use serde::Serialize;

use crate::money::Money;
use crate::records::{BudgetRecord, Category, TransactionRecord};

/// Spend-vs-limit for one budget within its current period window.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetStatus {
    pub budget: BudgetRecord,
    pub spent: Money,
    pub remaining: Money,
    pub is_over_limit: bool,
}

/// Evaluates every budget against the expense transactions falling inside
/// its period window around `reference`. A budget with no matching
/// transactions yields zero spend; `remaining` may go negative.
pub fn evaluate_budgets(
    budgets: &[BudgetRecord],
    transactions: &[TransactionRecord],
    reference: NaiveDate,
) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .map(|budget| {
            let window = budget.period.window_for(reference);
            let spent: Money = transactions
                .iter()
                .filter(|t| {
                    t.category == Category::Expense(budget.category)
                        && window.contains(t.occurred_at)
                })
                .map(|t| t.amount)
                .sum();
            BudgetStatus {
                budget: budget.clone(),
                spent,
                remaining: budget.limit - spent,
                is_over_limit: spent > budget.limit,
            }
        })
        .collect()
}
