//! Normalization and validation of raw records.
//!
//! Raw input arrives loosely typed (optional fields, free-form strings) and
//! is screened into strongly typed records. Validation never fails as a
//! whole: malformed entries are collected in `rejected` with a reason while
//! the rest of the batch proceeds.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::records::{
    BudgetPeriod, BudgetRecord, Category, ExpenseCategory, GoalRecord, TransactionKind,
    TransactionRecord,
};

/// Why a raw record was rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    InvalidAmount,
    InvalidCategory,
    InvalidDate,
    MissingField,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::InvalidAmount => "invalid_amount",
            RejectReason::InvalidCategory => "invalid_category",
            RejectReason::InvalidDate => "invalid_date",
            RejectReason::MissingField => "missing_field",
        }
    }
}

/// A raw record that failed validation, kept for caller-side reporting.
#[derive(Debug, Clone, Serialize)]
pub struct Rejected<R> {
    pub raw: R,
    pub reason: RejectReason,
}

/// Screening result: typed records plus the rejects with their reasons.
#[derive(Debug, Clone, Serialize)]
pub struct Validated<T, R> {
    pub valid: Vec<T>,
    pub rejected: Vec<Rejected<R>>,
}

/// Candidate transaction as received from storage or an import payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTransaction {
    pub id: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub occurred_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawBudget {
    pub id: Option<String>,
    pub category: Option<String>,
    pub limit: Option<f64>,
    pub period: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawGoal {
    pub id: Option<String>,
    pub name: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub target_date: Option<String>,
}

pub fn validate_transactions(
    raw: Vec<RawTransaction>,
) -> Validated<TransactionRecord, RawTransaction> {
    screen(raw, check_transaction, "transaction")
}

pub fn validate_budgets(raw: Vec<RawBudget>) -> Validated<BudgetRecord, RawBudget> {
    screen(raw, check_budget, "budget")
}

pub fn validate_goals(raw: Vec<RawGoal>) -> Validated<GoalRecord, RawGoal> {
    screen(raw, check_goal, "goal")
}

fn screen<T, R>(
    raw: Vec<R>,
    check: fn(&R) -> Result<T, RejectReason>,
    label: &'static str,
) -> Validated<T, R> {
    let mut valid = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();
    for item in raw {
        match check(&item) {
            Ok(record) => valid.push(record),
            Err(reason) => rejected.push(Rejected { raw: item, reason }),
        }
    }
    if !rejected.is_empty() {
        tracing::debug!(
            kind = label,
            rejected = rejected.len(),
            accepted = valid.len(),
            "skipped malformed records"
        );
    }
    Validated { valid, rejected }
}

fn check_transaction(raw: &RawTransaction) -> Result<TransactionRecord, RejectReason> {
    let amount = required_amount(raw.amount)?;
    let kind = raw
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RejectReason::MissingField)?;
    let kind = TransactionKind::parse(kind).ok_or(RejectReason::InvalidCategory)?;
    let category = required_text(&raw.category)?;
    let category = Category::parse(kind, category).ok_or(RejectReason::InvalidCategory)?;
    let description = required_text(&raw.description)?.to_string();
    let occurred_at = raw
        .occurred_at
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RejectReason::MissingField)?;
    let occurred_at = parse_timestamp(occurred_at).ok_or(RejectReason::InvalidDate)?;
    let id = required_id(&raw.id)?;
    Ok(TransactionRecord {
        id,
        kind,
        category,
        amount,
        description,
        occurred_at,
    })
}

fn check_budget(raw: &RawBudget) -> Result<BudgetRecord, RejectReason> {
    // A zero limit is degenerate but allowed; downstream math keeps it
    // well-defined. Only negative or non-numeric limits are rejected.
    let limit = required_amount(raw.limit)?;
    let category = required_text(&raw.category)?;
    let category = ExpenseCategory::parse(category).ok_or(RejectReason::InvalidCategory)?;
    let period = required_text(&raw.period)?;
    let period = BudgetPeriod::parse(period).ok_or(RejectReason::InvalidCategory)?;
    let id = required_id(&raw.id)?;
    Ok(BudgetRecord {
        id,
        category,
        limit,
        period,
    })
}

fn check_goal(raw: &RawGoal) -> Result<GoalRecord, RejectReason> {
    let target_amount = required_amount(raw.target_amount)?;
    let current_amount = required_amount(raw.current_amount)?;
    let name = required_text(&raw.name)?.to_string();
    let target_date = raw
        .target_date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RejectReason::MissingField)?;
    let target_date = parse_date(target_date).ok_or(RejectReason::InvalidDate)?;
    let id = required_id(&raw.id)?;
    Ok(GoalRecord {
        id,
        name,
        target_amount,
        current_amount,
        target_date,
    })
}

fn required_amount(value: Option<f64>) -> Result<Money, RejectReason> {
    let value = value.ok_or(RejectReason::MissingField)?;
    if !value.is_finite() || value < 0.0 {
        return Err(RejectReason::InvalidAmount);
    }
    Money::from_f64(value).ok_or(RejectReason::InvalidAmount)
}

fn required_text(value: &Option<String>) -> Result<&str, RejectReason> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RejectReason::MissingField)
}

fn required_id(value: &Option<String>) -> Result<Uuid, RejectReason> {
    let text = value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RejectReason::MissingField)?;
    Uuid::parse_str(text).map_err(|_| RejectReason::MissingField)
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC).
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    parse_date(value).and_then(|date| date.and_hms_opt(0, 0, 0)).map(|dt| dt.and_utc())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|instant| instant.with_timezone(&Utc).date_naive())
}
