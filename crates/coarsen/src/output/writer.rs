//! Row sink: writes a table back out in the same structural form.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoarsenError, Result};
use crate::input::DataTable;

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    /// The format matching an input delimiter, for same-as-input defaults.
    pub fn from_delimiter(delimiter: u8) -> Self {
        match delimiter {
            b'\t' => OutputFormat::Tsv,
            _ => OutputFormat::Csv,
        }
    }

    fn delimiter(self) -> u8 {
        match self {
            OutputFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Writes a [`DataTable`] to a file, preserving column order.
pub struct Writer {
    format: OutputFormat,
}

impl Writer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Write the table to `path` in this writer's format.
    pub fn write_file(&self, data: &DataTable, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match self.format {
            OutputFormat::Csv | OutputFormat::Tsv => self.write_delimited(data, path),
            OutputFormat::Json => self.write_json(data, path),
        }
    }

    fn write_delimited(&self, data: &DataTable, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.format.delimiter())
            .from_path(path)?;

        writer.write_record(&data.headers)?;
        for row in &data.rows {
            writer.write_record(row)?;
        }
        writer.flush().map_err(|e| CoarsenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    fn write_json(&self, data: &DataTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| CoarsenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        // One object per row, keyed by header; IndexMap keeps column order.
        let records: Vec<IndexMap<&str, &str>> = data
            .rows
            .iter()
            .map(|row| {
                data.headers
                    .iter()
                    .map(|h| h.as_str())
                    .zip(row.iter().map(|v| v.as_str()))
                    .collect()
            })
            .collect();

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataTable {
        DataTable::new(
            vec!["name".to_string(), "city".to_string()],
            vec![
                vec!["Alice".to_string(), "Texas".to_string()],
                vec!["Bob, Jr.".to_string(), "Unknown".to_string()],
            ],
            b',',
        )
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("TSV".parse::<OutputFormat>().unwrap(), OutputFormat::Tsv);
        assert!("parquet".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_from_delimiter() {
        assert_eq!(OutputFormat::from_delimiter(b'\t'), OutputFormat::Tsv);
        assert_eq!(OutputFormat::from_delimiter(b','), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_delimiter(b';'), OutputFormat::Csv);
    }

    #[test]
    fn test_write_csv_quotes_embedded_delimiters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        Writer::new(OutputFormat::Csv)
            .write_file(&sample(), &path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("name,city\n"));
        assert!(contents.contains("\"Bob, Jr.\""));
    }

    #[test]
    fn test_write_tsv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");

        Writer::new(OutputFormat::Tsv)
            .write_file(&sample(), &path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("name\tcity\n"));
    }

    #[test]
    fn test_write_json_preserves_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        Writer::new(OutputFormat::Json)
            .write_file(&sample(), &path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let name_pos = contents.find("\"name\"").unwrap();
        let city_pos = contents.find("\"city\"").unwrap();
        assert!(name_pos < city_pos);

        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["name"], "Alice");
    }
}
