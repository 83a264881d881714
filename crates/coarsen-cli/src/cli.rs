//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;
use coarsen::OutputFormat;

/// Coarsen: generalize quasi-identifier columns in tabular data
#[derive(Parser)]
#[command(name = "coarsen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input data file (CSV/TSV)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the generalized output file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Name of the job title column to generalize to role categories
    #[arg(long = "job_title_column", value_name = "NAME")]
    pub job_title_column: Option<String>,

    /// Name of the age column to generalize to bucket labels
    #[arg(long = "age_column", value_name = "NAME")]
    pub age_column: Option<String>,

    /// Name of the city column to generalize to states
    #[arg(long = "city_column", value_name = "NAME")]
    pub city_column: Option<String>,

    /// Maximum number of rows to process (default: all)
    #[arg(long = "num_rows", value_name = "N")]
    pub num_rows: Option<usize>,

    /// Path to an external rule set (JSON) replacing the built-in tables
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Output format (default: same as detected input)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Input delimiter override (single ASCII character)
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Write an audit report next to the output file
    #[arg(long)]
    pub with_audit: bool,

    /// Enable verbose output (per-row change detail)
    #[arg(short, long)]
    pub verbose: bool,
}
