//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// scrubs: hospital patient record table cleaner
#[derive(Parser)]
#[command(name = "scrubs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assess the data quality of a raw file without changing it
    Inspect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run the cleaning pipeline and write the cleaned outputs
    Clean {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for the cleaned CSV (default: <stem>_cleaned.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output path for the cleaned workbook (default: <stem>_cleaned.xlsx)
        #[arg(long)]
        xlsx: Option<PathBuf>,

        /// Also write the cleaning report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
}
