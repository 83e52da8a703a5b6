use chrono::{DateTime, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::money::Money;

/// A single income or expense entry.
///
/// `amount` is magnitude only; the sign of the cash flow is implied by
/// `kind`. The invariant `category.kind() == kind` holds for every value
/// built through [`TransactionRecord::new`] or the record validator.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub category: Category,
    pub amount: Money,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn new(
        category: Category,
        amount: Money,
        description: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: category.kind(),
            category,
            amount,
            description: description.into(),
            occurred_at,
        }
    }
}

/// Direction of a transaction's cash flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// Closed category set for income transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IncomeCategory {
    Salary,
    Freelance,
    Investment,
    Other,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 4] = [
        IncomeCategory::Salary,
        IncomeCategory::Freelance,
        IncomeCategory::Investment,
        IncomeCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "Salary",
            IncomeCategory::Freelance => "Freelance",
            IncomeCategory::Investment => "Investment",
            IncomeCategory::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Closed category set for expense transactions and budgets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Housing,
    Utilities,
    Groceries,
    Transport,
    Entertainment,
    Health,
    Shopping,
    #[serde(rename = "Dining Out")]
    DiningOut,
    Travel,
    Subscriptions,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 11] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Utilities,
        ExpenseCategory::Groceries,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Health,
        ExpenseCategory::Shopping,
        ExpenseCategory::DiningOut,
        ExpenseCategory::Travel,
        ExpenseCategory::Subscriptions,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::DiningOut => "Dining Out",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Subscriptions => "Subscriptions",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// A validated category, tagged by the transaction kind it belongs to.
///
/// Both kinds share the name "Other", so a bare category string is only
/// unambiguous together with its kind; [`Category::parse`] is the one
/// entry point that resolves the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    pub fn parse(kind: TransactionKind, name: &str) -> Option<Self> {
        match kind {
            TransactionKind::Income => IncomeCategory::parse(name).map(Category::Income),
            TransactionKind::Expense => ExpenseCategory::parse(name).map(Category::Expense),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Category::Income(_) => TransactionKind::Income,
            Category::Expense(_) => TransactionKind::Expense,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income(c) => c.as_str(),
            Category::Expense(c) => c.as_str(),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// The category string alone cannot distinguish income "Other" from expense
// "Other", so deserialization goes through the sibling `kind` field.
impl<'de> Deserialize<'de> for TransactionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            id: Uuid,
            kind: TransactionKind,
            category: String,
            amount: Money,
            description: String,
            occurred_at: DateTime<Utc>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let category = Category::parse(wire.kind, &wire.category).ok_or_else(|| {
            D::Error::custom(format!(
                "unknown {} category: {}",
                wire.kind.as_str(),
                wire.category
            ))
        })?;
        Ok(TransactionRecord {
            id: wire.id,
            kind: wire.kind,
            category,
            amount: wire.amount,
            description: wire.description,
            occurred_at: wire.occurred_at,
        })
    }
}
