use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

use super::transaction::ExpenseCategory;

/// A spending guardrail for one expense category over a recurring period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetRecord {
    pub id: Uuid,
    pub category: ExpenseCategory,
    pub limit: Money,
    pub period: BudgetPeriod,
}

impl BudgetRecord {
    pub fn new(category: ExpenseCategory, limit: Money, period: BudgetPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            limit,
            period,
        }
    }
}

/// Enumeration of budgeting periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weekly" => Some(BudgetPeriod::Weekly),
            "monthly" => Some(BudgetPeriod::Monthly),
            "yearly" => Some(BudgetPeriod::Yearly),
            _ => None,
        }
    }
}
