use chrono::NaiveDate;
use serde::Serialize;

use crate::records::GoalRecord;

/// Completion and schedule status for one savings goal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GoalStatus {
    pub goal: GoalRecord,
    /// Unclamped; values above 100 mean the goal is exceeded. Display
    /// clamping belongs to the presentation boundary.
    pub progress_percent: f64,
    pub days_remaining: i64,
    pub is_past_due: bool,
}

pub fn evaluate_goal(goal: &GoalRecord, reference: NaiveDate) -> GoalStatus {
    let progress_percent = goal.current_amount.percent_of(goal.target_amount);
    let days_remaining = (goal.target_date - reference).num_days();
    GoalStatus {
        goal: goal.clone(),
        progress_percent,
        days_remaining,
        is_past_due: days_remaining < 0,
    }
}

pub fn evaluate_goals(goals: &[GoalRecord], reference: NaiveDate) -> Vec<GoalStatus> {
    goals.iter().map(|goal| evaluate_goal(goal, reference)).collect()
}
