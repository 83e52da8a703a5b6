#![doc(test(attr(deny(warnings))))]

//! FinancAI Core turns raw transaction, budget, and goal records into
//! derived metrics (totals, category breakdowns, budget utilization, goal
//! progress) and assembles them into a deterministic structured summary for
//! UIs and an external advisory service.
//!
//! Every computation is a pure function over immutable input collections;
//! reference dates are explicit arguments, so identical inputs always yield
//! byte-identical output.

pub mod analytics;
pub mod errors;
pub mod export;
pub mod money;
pub mod records;
pub mod summary;
pub mod validate;

pub use analytics::{
    breakdown, evaluate_budgets, evaluate_goal, evaluate_goals, summarize, BudgetStatus,
    CategorySlice, DerivedMetrics, GoalStatus, PeriodWindow,
};
pub use errors::EngineError;
pub use export::{export_file_name, ExportArtifact};
pub use money::Money;
pub use records::{
    BudgetPeriod, BudgetRecord, Category, ExpenseCategory, GoalRecord, IncomeCategory,
    TransactionKind, TransactionRecord,
};
pub use summary::{
    assemble, compose_prompt, AssembleOptions, StructuredSummary, PRESET_FORECAST,
    PRESET_OPTIMIZE, PRESET_RISKS,
};
pub use validate::{
    validate_budgets, validate_goals, validate_transactions, RawBudget, RawGoal, RawTransaction,
    Rejected, RejectReason, Validated,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("financai_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("FinancAI Core tracing initialized.");
    });
}
