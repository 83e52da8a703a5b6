//! Backup/export artifact: raw record arrays, not derived metrics.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::records::{BudgetRecord, GoalRecord, TransactionRecord};

/// The document handed to the external file-export collaborator.
///
/// `exported_at` is an explicit argument rather than a wall-clock read so
/// the artifact stays reproducible for a given instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub exported_at: DateTime<Utc>,
    pub transactions: Vec<TransactionRecord>,
    pub budgets: Vec<BudgetRecord>,
    pub financial_goals: Vec<GoalRecord>,
}

impl ExportArtifact {
    pub fn new(
        exported_at: DateTime<Utc>,
        transactions: Vec<TransactionRecord>,
        budgets: Vec<BudgetRecord>,
        financial_goals: Vec<GoalRecord>,
    ) -> Self {
        Self {
            exported_at,
            transactions,
            budgets,
            financial_goals,
        }
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), EngineError> {
        let data = self.to_json()?;
        fs::write(path, data)?;
        tracing::debug!(path = %path.display(), "wrote export artifact");
        Ok(())
    }
}

/// Default download name for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("financ-ai-data-{}.json", date.format("%Y-%m-%d"))
}
