//! Pure, deterministic derivations over validated record collections.
//!
//! Every function here is referentially transparent: no wall-clock reads,
//! no caching, no internal state. Reference dates are always explicit
//! arguments so any computation can be reproduced for a given instant.

pub mod breakdown;
pub mod budgets;
pub mod goals;
pub mod metrics;
pub mod period;

pub use breakdown::{breakdown, CategorySlice};
pub use budgets::{evaluate_budgets, BudgetStatus};
pub use goals::{evaluate_goal, evaluate_goals, GoalStatus};
pub use metrics::{summarize, DerivedMetrics};
pub use period::PeriodWindow;
