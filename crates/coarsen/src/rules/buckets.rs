//! Age bucketing: ordered numeric ranges with labels.

use serde::{Deserialize, Serialize};

/// A labeled inclusive age range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeBucket {
    pub min: u32,
    pub max: u32,
    pub label: String,
}

impl AgeBucket {
    pub fn new(min: u32, max: u32, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            label: label.into(),
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        self.min <= age && age <= self.max
    }
}

/// An ordered set of age buckets; the first matching bucket wins.
///
/// Coverage is defined entirely by the bucket list: an age outside every
/// bucket is treated the same way as a malformed value (kept, warned).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeBuckets {
    pub buckets: Vec<AgeBucket>,
}

impl AgeBuckets {
    pub fn new(buckets: Vec<AgeBucket>) -> Self {
        Self { buckets }
    }

    /// The label for an age, if any bucket covers it.
    pub fn label_for(&self, age: u32) -> Option<&str> {
        self.buckets
            .iter()
            .find(|b| b.contains(age))
            .map(|b| b.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Default for AgeBuckets {
    fn default() -> Self {
        Self::new(vec![
            AgeBucket::new(0, 17, "Minor"),
            AgeBucket::new(18, 29, "18-29"),
            AgeBucket::new(30, 44, "30-44"),
            AgeBucket::new(45, 64, "45-64"),
            AgeBucket::new(65, 120, "Senior"),
        ])
    }
}

/// Parse a raw cell into an age.
///
/// Accepts plain integers and whole-number floats ("34", "34.0"). Anything
/// else, including negative values, is None.
pub fn parse_age(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return u32::try_from(n).ok();
    }

    // Exported data often renders integer columns as floats.
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64 {
            return Some(f as u32);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bucket_labels() {
        let buckets = AgeBuckets::default();
        assert_eq!(buckets.label_for(0), Some("Minor"));
        assert_eq!(buckets.label_for(17), Some("Minor"));
        assert_eq!(buckets.label_for(18), Some("18-29"));
        assert_eq!(buckets.label_for(34), Some("30-44"));
        assert_eq!(buckets.label_for(64), Some("45-64"));
        assert_eq!(buckets.label_for(65), Some("Senior"));
        assert_eq!(buckets.label_for(120), Some("Senior"));
    }

    #[test]
    fn test_uncovered_age() {
        let buckets = AgeBuckets::default();
        assert_eq!(buckets.label_for(121), None);
    }

    #[test]
    fn test_first_match_wins() {
        let buckets = AgeBuckets::new(vec![
            AgeBucket::new(0, 50, "first"),
            AgeBucket::new(40, 100, "second"),
        ]);
        assert_eq!(buckets.label_for(45), Some("first"));
        assert_eq!(buckets.label_for(60), Some("second"));
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("34"), Some(34));
        assert_eq!(parse_age(" 34 "), Some(34));
        assert_eq!(parse_age("34.0"), Some(34));
        assert_eq!(parse_age("34.5"), None);
        assert_eq!(parse_age("-5"), None);
        assert_eq!(parse_age("thirty"), None);
        assert_eq!(parse_age(""), None);
    }
}
