//! Generalization stages and their results.

use serde::{Deserialize, Serialize};

/// A generalization stage bound to a concrete input column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneralizeOperation {
    /// Replace job titles with broader role categories.
    JobTitle { column: String },

    /// Replace numeric ages with bucket labels.
    Age { column: String },

    /// Replace cities with their containing state/region.
    City { column: String },
}

impl GeneralizeOperation {
    /// The input column this stage reads and rewrites.
    pub fn column(&self) -> &str {
        match self {
            GeneralizeOperation::JobTitle { column }
            | GeneralizeOperation::Age { column }
            | GeneralizeOperation::City { column } => column,
        }
    }

    /// Short stage name for logs and audit records.
    pub fn kind(&self) -> &'static str {
        match self {
            GeneralizeOperation::JobTitle { .. } => "job_title",
            GeneralizeOperation::Age { .. } => "age",
            GeneralizeOperation::City { .. } => "city",
        }
    }

    /// Human-readable description of the stage.
    pub fn description(&self) -> String {
        match self {
            GeneralizeOperation::JobTitle { column } => {
                format!("Generalize job titles in '{}' to role categories", column)
            }
            GeneralizeOperation::Age { column } => {
                format!("Generalize ages in '{}' to bucket labels", column)
            }
            GeneralizeOperation::City { column } => {
                format!("Generalize cities in '{}' to states", column)
            }
        }
    }
}

/// Result of running the generalizer over a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralizeResult {
    /// Number of stages that ran (configured columns present in the input).
    pub stages_applied: usize,

    /// Total number of cell values rewritten.
    pub values_changed: usize,

    /// Per-stage change detail.
    pub changes: Vec<StageChange>,

    /// Non-fatal conditions encountered (missing columns, bad ages).
    pub warnings: Vec<String>,
}

impl GeneralizeResult {
    pub fn new() -> Self {
        Self {
            stages_applied: 0,
            values_changed: 0,
            changes: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_change(&mut self, change: StageChange) {
        self.stages_applied += 1;
        self.values_changed += change.values_changed;
        self.changes.push(change);
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl Default for GeneralizeResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Changes made by a single stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageChange {
    /// Description of the stage.
    pub description: String,

    /// Column affected.
    pub column: String,

    /// Number of values rewritten.
    pub values_changed: usize,

    /// Per-row audit records.
    pub row_audits: Vec<RowAudit>,
}

/// Audit record for a single rewritten cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowAudit {
    /// Row index (0-based, excluding header).
    pub row: usize,

    /// Column that was changed.
    pub column: String,

    /// Original value before generalization.
    pub original_value: String,

    /// Generalized value.
    pub new_value: String,

    /// Why the value changed.
    pub reason: String,
}
