//! The generalization command: read, generalize, write, report.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use coarsen::{
    Coarsen, CoarsenConfig, CoarsenError, ColumnSelection, ParserConfig, RuleSet, RunSummary,
};
use colored::Colorize;

use crate::cli::Cli;

/// How many per-row audit lines to print per stage in verbose mode.
const VERBOSE_AUDIT_LIMIT: usize = 10;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }

    let delimiter = match cli.delimiter {
        Some(c) if c.is_ascii() => Some(c as u8),
        Some(c) => {
            return Err(CoarsenError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                c
            ))
            .into());
        }
        None => None,
    };

    let columns = ColumnSelection {
        job_title: cli.job_title_column,
        age: cli.age_column,
        city: cli.city_column,
    };

    if columns.is_empty() {
        println!(
            "{} No generalization columns configured; rows will be copied unchanged.",
            "Warning:".yellow().bold()
        );
    }

    let config = CoarsenConfig {
        parser: ParserConfig {
            delimiter,
            max_rows: cli.num_rows,
            ..ParserConfig::default()
        },
        columns,
        format: cli.format,
    };

    let mut coarsen = Coarsen::with_config(config);

    if let Some(ref rules_path) = cli.rules {
        let rules = RuleSet::load(rules_path)?;
        println!(
            "{} {}",
            "Rules".cyan().bold(),
            rules_path.display().to_string().white()
        );
        coarsen = coarsen.with_rules(rules);
    }

    println!(
        "{} {}",
        "Generalizing".cyan().bold(),
        cli.input.display().to_string().white()
    );

    let summary = coarsen.run(&cli.input, &cli.output)?;

    println!(
        "Read {} rows x {} columns ({})",
        summary.source.row_count.to_string().white().bold(),
        summary.source.column_count,
        summary.source.format
    );

    for change in &summary.result.changes {
        println!(
            "  {} ({} values changed)",
            change.description,
            change.values_changed.to_string().white().bold()
        );

        if cli.verbose {
            for audit in change.row_audits.iter().take(VERBOSE_AUDIT_LIMIT) {
                println!(
                    "    row {}: '{}' -> '{}'",
                    audit.row, audit.original_value, audit.new_value
                );
            }
            let hidden = change.row_audits.len().saturating_sub(VERBOSE_AUDIT_LIMIT);
            if hidden > 0 {
                println!("    ... and {} more", hidden);
            }
        }
    }

    for warning in &summary.result.warnings {
        println!("{} {}", "Warning:".yellow().bold(), warning);
    }

    println!();
    println!(
        "{} {} ({} values changed)",
        "Saved to".green().bold(),
        cli.output.display().to_string().white(),
        summary.result.values_changed
    );

    if cli.with_audit {
        let audit = audit_path(&cli.output);
        write_audit(&summary, &audit)?;
        println!(
            "{} {}",
            "Audit report".green().bold(),
            audit.display().to_string().white()
        );
    }

    Ok(())
}

/// Audit reports live next to the output file: `<output>.audit.json`.
fn audit_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!("{}.audit.json", name))
}

fn write_audit(summary: &RunSummary, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_path() {
        assert_eq!(
            audit_path(Path::new("data/out.csv")).to_string_lossy(),
            "data/out.csv.audit.json"
        );
        assert_eq!(
            audit_path(Path::new("out.tsv")).to_string_lossy(),
            "out.tsv.audit.json"
        );
    }
}
