//! Main Coarsen struct and public API.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::generalize::{GeneralizeOperation, GeneralizeResult, Generalizer};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::output::{OutputFormat, Writer};
use crate::rules::RuleSet;

/// Which input columns get which generalization stage.
#[derive(Debug, Clone, Default)]
pub struct ColumnSelection {
    /// Column holding job titles.
    pub job_title: Option<String>,
    /// Column holding numeric ages.
    pub age: Option<String>,
    /// Column holding city names.
    pub city: Option<String>,
}

impl ColumnSelection {
    /// True when no column is configured; the run is then a plain copy.
    pub fn is_empty(&self) -> bool {
        self.job_title.is_none() && self.age.is_none() && self.city.is_none()
    }

    /// Expand the selection into concrete stages, in a fixed order.
    pub fn operations(&self) -> Vec<GeneralizeOperation> {
        let mut ops = Vec::new();
        if let Some(column) = &self.job_title {
            ops.push(GeneralizeOperation::JobTitle {
                column: column.clone(),
            });
        }
        if let Some(column) = &self.age {
            ops.push(GeneralizeOperation::Age {
                column: column.clone(),
            });
        }
        if let Some(column) = &self.city {
            ops.push(GeneralizeOperation::City {
                column: column.clone(),
            });
        }
        ops
    }
}

/// Configuration for a generalization run.
#[derive(Debug, Clone, Default)]
pub struct CoarsenConfig {
    /// Parser configuration (delimiter override, row cap).
    pub parser: ParserConfig,
    /// Column-to-stage bindings.
    pub columns: ColumnSelection,
    /// Output format (None = same as detected input).
    pub format: Option<OutputFormat>,
}

/// Summary of a completed run; doubles as the audit report payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Metadata about the input file.
    pub source: SourceMetadata,
    /// Stage changes and warnings.
    pub result: GeneralizeResult,
    /// Where the generalized data was written.
    pub output_path: PathBuf,
    /// Format the output was written in.
    pub output_format: OutputFormat,
}

/// The single-pass pipeline: row source → generalizer → row sink.
pub struct Coarsen {
    config: CoarsenConfig,
    parser: Parser,
    generalizer: Generalizer,
}

impl Coarsen {
    /// Create a pipeline with default configuration and built-in rules.
    pub fn new() -> Self {
        Self::with_config(CoarsenConfig::default())
    }

    /// Create a pipeline with custom configuration and built-in rules.
    pub fn with_config(config: CoarsenConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self {
            config,
            parser,
            generalizer: Generalizer::with_builtin_rules(),
        }
    }

    /// Replace the built-in rules, e.g. with a set loaded from a file.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.generalizer = Generalizer::new(rules);
        self
    }

    /// Read `input`, generalize the configured columns, write `output`.
    pub fn run(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<RunSummary> {
        let output = output.as_ref();

        let (mut table, source) = self.parser.parse_file(input)?;

        let operations = self.config.columns.operations();
        let result = self.generalizer.apply(&operations, &mut table);

        let output_format = self
            .config
            .format
            .unwrap_or_else(|| OutputFormat::from_delimiter(table.delimiter));

        Writer::new(output_format).write_file(&table, output)?;

        Ok(RunSummary {
            source,
            result,
            output_path: output.to_path_buf(),
            output_format,
        })
    }
}

impl Default for Coarsen {
    fn default() -> Self {
        Self::new()
    }
}
