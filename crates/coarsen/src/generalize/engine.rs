//! The generalization engine: applies configured stages to a table in place.

use tracing::warn;

use crate::input::DataTable;
use crate::rules::{parse_age, RuleSet};

use super::operations::{GeneralizeOperation, GeneralizeResult, RowAudit, StageChange};

/// Applies column generalization stages to a [`DataTable`].
///
/// The engine never aborts a run: a configured column missing from the input
/// skips that stage with a warning, and cells that cannot be generalized
/// (malformed ages, ages outside every bucket) keep their original value.
pub struct Generalizer {
    rules: RuleSet,
}

impl Generalizer {
    /// Create an engine with the given rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Create an engine with the compiled-in default rules.
    pub fn with_builtin_rules() -> Self {
        Self::new(RuleSet::builtin())
    }

    /// The rule set this engine applies.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Apply all stages to the table, mutating configured columns in place.
    pub fn apply(&self, operations: &[GeneralizeOperation], data: &mut DataTable) -> GeneralizeResult {
        let mut result = GeneralizeResult::new();

        for op in operations {
            let Some(col_idx) = data.column_index(op.column()) else {
                let message = format!(
                    "column '{}' not found in input; skipping {} generalization",
                    op.column(),
                    op.kind()
                );
                warn!("{}", message);
                result.add_warning(message);
                continue;
            };

            let change = match op {
                GeneralizeOperation::JobTitle { column } => {
                    self.apply_lookup_stage(op, column, col_idx, true, data)
                }
                GeneralizeOperation::City { column } => {
                    self.apply_lookup_stage(op, column, col_idx, false, data)
                }
                GeneralizeOperation::Age { column } => {
                    self.apply_age_stage(op, column, col_idx, data, &mut result)
                }
            };

            result.add_change(change);
        }

        result
    }

    /// Lookup-table stage, shared by the job-title and city rules.
    fn apply_lookup_stage(
        &self,
        op: &GeneralizeOperation,
        column: &str,
        col_idx: usize,
        job_titles: bool,
        data: &mut DataTable,
    ) -> StageChange {
        let table = if job_titles {
            &self.rules.job_titles
        } else {
            &self.rules.cities
        };

        let mut row_audits = Vec::new();

        for row_idx in 0..data.row_count() {
            let value = data.get(row_idx, col_idx).unwrap_or_default().to_string();
            if DataTable::is_null_value(&value) {
                continue;
            }

            let generalized = table.generalize(value.trim());
            if generalized != value {
                let reason = if table.category(value.trim()).is_some() {
                    format!("mapped '{}' to '{}'", value, generalized)
                } else {
                    format!("no mapping for '{}'; defaulted to '{}'", value, generalized)
                };
                row_audits.push(RowAudit {
                    row: row_idx,
                    column: column.to_string(),
                    original_value: value,
                    new_value: generalized.to_string(),
                    reason,
                });
                data.set(row_idx, col_idx, generalized.to_string());
            }
        }

        StageChange {
            description: op.description(),
            column: column.to_string(),
            values_changed: row_audits.len(),
            row_audits,
        }
    }

    /// Age-bucketing stage. Malformed or uncovered ages keep their value.
    fn apply_age_stage(
        &self,
        op: &GeneralizeOperation,
        column: &str,
        col_idx: usize,
        data: &mut DataTable,
        result: &mut GeneralizeResult,
    ) -> StageChange {
        let mut row_audits = Vec::new();

        for row_idx in 0..data.row_count() {
            let value = data.get(row_idx, col_idx).unwrap_or_default().to_string();
            if DataTable::is_null_value(&value) {
                continue;
            }

            let Some(age) = parse_age(&value) else {
                let message = format!(
                    "row {}: invalid age value '{}' in '{}'; keeping original",
                    row_idx, value, column
                );
                warn!("{}", message);
                result.add_warning(message);
                continue;
            };

            let Some(label) = self.rules.age_buckets.label_for(age) else {
                let message = format!(
                    "row {}: age {} in '{}' is outside every bucket; keeping original",
                    row_idx, age, column
                );
                warn!("{}", message);
                result.add_warning(message);
                continue;
            };

            if label != value {
                row_audits.push(RowAudit {
                    row: row_idx,
                    column: column.to_string(),
                    original_value: value,
                    new_value: label.to_string(),
                    reason: format!("age {} bucketed as '{}'", age, label),
                });
                data.set(row_idx, col_idx, label.to_string());
            }
        }

        StageChange {
            description: op.description(),
            column: column.to_string(),
            values_changed: row_audits.len(),
            row_audits,
        }
    }
}
