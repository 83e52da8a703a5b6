//! Deterministic composition of derived metrics into a structured summary
//! and the advisory prompt context rendered from it.
//!
//! Given identical inputs and reference date the assembler produces
//! byte-identical output: ordering is fully specified, all numbers render
//! with exactly two decimals, and the only notion of "now" is the explicit
//! `reference_date` argument.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::{
    breakdown, evaluate_budgets, evaluate_goals, summarize, BudgetStatus, CategorySlice,
    DerivedMetrics, GoalStatus,
};
use crate::records::{BudgetRecord, GoalRecord, TransactionRecord};

/// Preset advisory questions offered alongside free-form ones.
pub const PRESET_FORECAST: &str = "Generate a 3-month financial forecast. Project income, expenses, and savings. Present it in a structured way.";
pub const PRESET_RISKS: &str = "Analyze my spending habits and identify potential financial risks or areas of overspending. Be specific.";
pub const PRESET_OPTIMIZE: &str = "Suggest 3 actionable cost optimization strategies based on my expenses. Provide estimated monthly savings for each.";

#[derive(Debug, Clone, Copy)]
pub struct AssembleOptions {
    /// Cap on the itemized recent-transaction listing. Truncation never
    /// applies to the aggregate totals, which always cover the full set.
    pub transaction_limit: usize,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            transaction_limit: 50,
        }
    }
}

/// The assembled artifact consumed by the UI and the advisory service.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StructuredSummary {
    pub reference_date: NaiveDate,
    pub metrics: DerivedMetrics,
    pub recent_transactions: Vec<TransactionRecord>,
    pub categories: Vec<CategorySlice>,
    pub budgets: Vec<BudgetStatus>,
    pub goals: Vec<GoalStatus>,
    pub active_goals: usize,
}

/// Runs the full analytics pass and assembles the summary.
pub fn assemble(
    transactions: &[TransactionRecord],
    budgets: &[BudgetRecord],
    goals: &[GoalRecord],
    reference_date: NaiveDate,
    options: &AssembleOptions,
) -> StructuredSummary {
    let mut recent: Vec<TransactionRecord> = transactions.to_vec();
    recent.sort_by(|a, b| {
        b.occurred_at
            .cmp(&a.occurred_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    recent.truncate(options.transaction_limit);

    tracing::debug!(
        transactions = transactions.len(),
        listed = recent.len(),
        budgets = budgets.len(),
        goals = goals.len(),
        %reference_date,
        "assembling summary"
    );

    StructuredSummary {
        reference_date,
        metrics: summarize(transactions),
        recent_transactions: recent,
        categories: breakdown(transactions),
        budgets: evaluate_budgets(budgets, transactions, reference_date),
        goals: evaluate_goals(goals, reference_date),
        active_goals: goals.len(),
    }
}

impl StructuredSummary {
    /// Renders the textual context block sent to the advisory service.
    pub fn prompt_context(&self) -> String {
        let mut out = String::new();
        out.push_str("**Recent Transactions:**\n");
        for t in &self.recent_transactions {
            out.push_str(&format!(
                "- {}: {} ({}) - {}\n",
                t.occurred_at.format("%Y-%m-%d"),
                t.description,
                t.kind.as_str(),
                t.amount
            ));
        }
        out.push_str("\n**Budgets:**\n");
        for status in &self.budgets {
            out.push_str(&format!(
                "- {}: {}/{}\n",
                status.budget.category.as_str(),
                status.budget.limit,
                status.budget.period.as_str()
            ));
        }
        out.push_str("\n**Financial Goals:**\n");
        for status in &self.goals {
            out.push_str(&format!(
                "- {}: target {}, current {}, due {}\n",
                status.goal.name,
                status.goal.target_amount,
                status.goal.current_amount,
                status.goal.target_date.format("%Y-%m-%d")
            ));
        }
        out
    }
}

/// Composes the full advisory prompt from a summary and a user question.
pub fn compose_prompt(summary: &StructuredSummary, question: &str) -> String {
    format!(
        "Here is the user's current financial data:\n\n{}\nBased on the data above, please answer the following: \"{}\"",
        summary.prompt_context(),
        question
    )
}
