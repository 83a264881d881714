//! Coarsen: column generalization for privacy-preserving data preparation.
//!
//! Coarsen reads tabular data and replaces values in designated
//! quasi-identifier columns with coarser categories: job titles become
//! broader role categories, ages become labeled ranges, cities become their
//! containing state. The output keeps the input's column set and order, so
//! downstream analysis keeps working while re-identification risk drops.
//!
//! # Core behaviors
//!
//! - **Deterministic**: the same rule set always produces the same output
//! - **Non-aborting**: missing columns and malformed values are warnings,
//!   never run failures
//! - **Auditable**: every rewritten cell is recorded with its original value
//!
//! # Example
//!
//! ```no_run
//! use coarsen::{Coarsen, CoarsenConfig, ColumnSelection};
//!
//! let config = CoarsenConfig {
//!     columns: ColumnSelection {
//!         age: Some("age".to_string()),
//!         ..ColumnSelection::default()
//!     },
//!     ..CoarsenConfig::default()
//! };
//!
//! let summary = Coarsen::with_config(config)
//!     .run("people.csv", "people_generalized.csv")
//!     .unwrap();
//!
//! println!("Rewrote {} values", summary.result.values_changed);
//! ```

pub mod error;
pub mod generalize;
pub mod input;
pub mod output;
pub mod rules;

mod coarsen;

pub use crate::coarsen::{Coarsen, CoarsenConfig, ColumnSelection, RunSummary};
pub use error::{CoarsenError, Result};
pub use generalize::{GeneralizeOperation, GeneralizeResult, Generalizer, RowAudit, StageChange};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use output::{OutputFormat, Writer};
pub use rules::{AgeBucket, AgeBuckets, LookupTable, RuleSet};
