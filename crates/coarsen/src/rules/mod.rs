//! Generalization rules: lookup tables and age buckets.

mod buckets;
mod lookup;
mod set;

pub use buckets::{parse_age, AgeBucket, AgeBuckets};
pub use lookup::LookupTable;
pub use set::{RuleSet, DEFAULT_CITY_CATEGORY, DEFAULT_JOB_CATEGORY};
