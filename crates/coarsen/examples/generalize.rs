//! Example: Generalize the quasi-identifier columns of a data file.
//!
//! Usage:
//!   cargo run --example generalize -- <input> <output>
//!
//! Example:
//!   cargo run --example generalize -- people.csv people_generalized.csv

use std::env;
use std::path::Path;

use coarsen::{Coarsen, CoarsenConfig, ColumnSelection};

fn main() -> coarsen::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example generalize -- <input> <output>");
        std::process::exit(1);
    }

    let input = Path::new(&args[1]);
    let output = Path::new(&args[2]);

    if !input.exists() {
        eprintln!("Error: File not found: {}", input.display());
        std::process::exit(1);
    }

    let config = CoarsenConfig {
        columns: ColumnSelection {
            job_title: Some("job_title".to_string()),
            age: Some("age".to_string()),
            city: Some("city".to_string()),
        },
        ..CoarsenConfig::default()
    };

    let summary = Coarsen::with_config(config).run(input, output)?;

    println!("## Source");
    println!("  File: {}", summary.source.file);
    println!("  Format: {}", summary.source.format);
    println!("  Rows: {}", summary.source.row_count);
    println!("  Columns: {}", summary.source.column_count);
    println!();

    println!("## Changes");
    for change in &summary.result.changes {
        println!("  {} ({} values)", change.description, change.values_changed);
    }

    if !summary.result.warnings.is_empty() {
        println!();
        println!("## Warnings");
        for warning in &summary.result.warnings {
            println!("  {}", warning);
        }
    }

    println!();
    println!("Wrote {}", summary.output_path.display());

    Ok(())
}
