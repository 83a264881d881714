//! Static key-to-category lookup tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A static mapping from specific values to coarser categories.
///
/// Entries preserve insertion order so serialized rule files stay readable
/// and diffable. Keys absent from the table generalize to `default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupTable {
    /// Value → category entries.
    pub entries: IndexMap<String, String>,
    /// Category assigned to keys not present in `entries`.
    pub default: String,
    /// Match keys ignoring ASCII case.
    #[serde(default)]
    pub case_insensitive: bool,
}

impl LookupTable {
    /// Create an empty table with the given default category.
    pub fn new(default: impl Into<String>, case_insensitive: bool) -> Self {
        Self {
            entries: IndexMap::new(),
            default: default.into(),
            case_insensitive,
        }
    }

    /// Build a table from (key, category) pairs.
    pub fn from_pairs<I, K, V>(pairs: I, default: impl Into<String>, case_insensitive: bool) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new(default, case_insensitive);
        for (k, v) in pairs {
            table.entries.insert(k.into(), v.into());
        }
        table
    }

    /// Look up a key, honoring the case-sensitivity setting.
    pub fn category(&self, key: &str) -> Option<&str> {
        if let Some(v) = self.entries.get(key) {
            return Some(v.as_str());
        }
        if self.case_insensitive {
            return self
                .entries
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str());
        }
        None
    }

    /// Generalize a value: its mapped category, or the default.
    pub fn generalize(&self, value: &str) -> &str {
        self.category(value).unwrap_or(&self.default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
