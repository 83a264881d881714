//! The bundled rule set: job-title table, city table, age buckets.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{CoarsenError, Result};

use super::buckets::AgeBuckets;
use super::lookup::LookupTable;

/// Default category for job titles absent from the table.
pub const DEFAULT_JOB_CATEGORY: &str = "Other";
/// Default category for cities absent from the table.
pub const DEFAULT_CITY_CATEGORY: &str = "Unknown";

static BUILTIN: Lazy<RuleSet> = Lazy::new(|| RuleSet {
    job_titles: LookupTable::from_pairs(
        [
            ("Software Engineer", "Technology Professional"),
            ("Data Scientist", "Technology Professional"),
            ("Web Developer", "Technology Professional"),
            ("Systems Administrator", "Technology Professional"),
            ("Project Manager", "Management"),
            ("Product Manager", "Management"),
            ("Operations Manager", "Management"),
            ("Accountant", "Finance Professional"),
            ("Financial Analyst", "Finance Professional"),
            ("Auditor", "Finance Professional"),
            ("Teacher", "Education Professional"),
            ("Professor", "Education Professional"),
            ("Nurse", "Healthcare Professional"),
            ("Doctor", "Healthcare Professional"),
            ("Physician", "Healthcare Professional"),
            ("Pharmacist", "Healthcare Professional"),
            ("Lawyer", "Legal Professional"),
            ("Paralegal", "Legal Professional"),
            ("Sales Representative", "Sales Professional"),
            ("Account Executive", "Sales Professional"),
            ("Marketing Manager", "Marketing Professional"),
            ("Marketing Coordinator", "Marketing Professional"),
        ],
        DEFAULT_JOB_CATEGORY,
        true,
    ),
    cities: LookupTable::from_pairs(
        [
            ("Austin", "Texas"),
            ("Houston", "Texas"),
            ("Dallas", "Texas"),
            ("San Antonio", "Texas"),
            ("New York", "New York"),
            ("Buffalo", "New York"),
            ("Los Angeles", "California"),
            ("San Francisco", "California"),
            ("San Diego", "California"),
            ("San Jose", "California"),
            ("Sacramento", "California"),
            ("Chicago", "Illinois"),
            ("Seattle", "Washington"),
            ("Spokane", "Washington"),
            ("Boston", "Massachusetts"),
            ("Philadelphia", "Pennsylvania"),
            ("Pittsburgh", "Pennsylvania"),
            ("Phoenix", "Arizona"),
            ("Tucson", "Arizona"),
            ("Denver", "Colorado"),
            ("Miami", "Florida"),
            ("Orlando", "Florida"),
            ("Tampa", "Florida"),
            ("Jacksonville", "Florida"),
            ("Atlanta", "Georgia"),
            ("Portland", "Oregon"),
            ("Columbus", "Ohio"),
            ("Cleveland", "Ohio"),
            ("Detroit", "Michigan"),
            ("Minneapolis", "Minnesota"),
            ("Nashville", "Tennessee"),
            ("Memphis", "Tennessee"),
            ("Charlotte", "North Carolina"),
            ("Raleigh", "North Carolina"),
            ("New Orleans", "Louisiana"),
            ("Baltimore", "Maryland"),
            ("Milwaukee", "Wisconsin"),
            ("Las Vegas", "Nevada"),
            ("Salt Lake City", "Utah"),
            ("Kansas City", "Missouri"),
            ("St. Louis", "Missouri"),
            ("Indianapolis", "Indiana"),
            ("Oklahoma City", "Oklahoma"),
        ],
        DEFAULT_CITY_CATEGORY,
        false,
    ),
    age_buckets: AgeBuckets::default(),
});

/// The three generalization rules, loaded once at startup and read-only
/// thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Job title → role category (case-insensitive match).
    pub job_titles: LookupTable,
    /// City → containing state/region (exact match).
    pub cities: LookupTable,
    /// Ordered age ranges; first match wins.
    pub age_buckets: AgeBuckets,
}

impl RuleSet {
    /// The compiled-in default rules.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load a rule set from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| CoarsenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let reader = BufReader::new(file);
        let rules: RuleSet = serde_json::from_reader(reader).map_err(|e| {
            CoarsenError::Rules(format!("failed to parse '{}': {}", path.display(), e))
        })?;

        rules.validate()?;
        Ok(rules)
    }

    /// Save the rule set to a JSON file (pretty-printed).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let file = File::create(path).map_err(|e| CoarsenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reject rule sets that cannot produce meaningful output.
    pub fn validate(&self) -> Result<()> {
        if self.age_buckets.is_empty() {
            return Err(CoarsenError::Rules("no age buckets defined".to_string()));
        }
        for bucket in &self.age_buckets.buckets {
            if bucket.min > bucket.max {
                return Err(CoarsenError::Rules(format!(
                    "inverted age bucket: {}..{} ('{}')",
                    bucket.min, bucket.max, bucket.label
                )));
            }
            if bucket.label.trim().is_empty() {
                return Err(CoarsenError::Rules(format!(
                    "age bucket {}..{} has an empty label",
                    bucket.min, bucket.max
                )));
            }
        }
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}
