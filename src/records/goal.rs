use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// A savings target with a due date.
///
/// `current_amount` may exceed `target_amount`; an exceeded goal is a valid
/// state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalRecord {
    pub id: Uuid,
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub target_date: NaiveDate,
}

impl GoalRecord {
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
        }
    }
}
