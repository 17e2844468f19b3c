//! Clean command - run the pipeline and export the cleaned outputs.

use std::path::PathBuf;

use colored::Colorize;
use scrubs::output::{write_csv, write_xlsx};
use scrubs::Cleaner;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    xlsx: Option<PathBuf>,
    report_path: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Cleaning".cyan().bold(),
        file.display().to_string().white()
    );

    let cleaner = Cleaner::new();
    let outcome = cleaner.clean_file(&file)?;
    let report = &outcome.report;

    // Default output paths sit next to the input
    let stem = file
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    let csv_path = output.unwrap_or_else(|| file.with_file_name(format!("{stem}_cleaned.csv")));
    let xlsx_path = xlsx.unwrap_or_else(|| file.with_file_name(format!("{stem}_cleaned.xlsx")));

    write_csv(&outcome.table, &csv_path)?;
    write_xlsx(&outcome.table, &xlsx_path)?;

    println!();
    println!(
        "Shape: {} rows x {} columns -> {} rows x {} columns",
        report.initial_rows.to_string().white().bold(),
        report.initial_columns,
        report.final_rows.to_string().white().bold(),
        report.final_columns
    );
    println!(
        "Missing cells: {} before imputation, {} after",
        report.missing_before.to_string().yellow(),
        report.missing_after.to_string().green()
    );
    println!(
        "Dates: {} recovered by fallback parsing, {} filled with the column median",
        report.dates_fallback_parsed.to_string().white(),
        report.dates_filled.to_string().white()
    );
    println!(
        "Duplicates removed: {}",
        report.duplicates_removed.to_string().white().bold()
    );
    println!(
        "Derived columns added: {}",
        report.derived_columns.to_string().white().bold()
    );

    if verbose {
        println!();
        println!("{}", "Stages:".yellow().bold());
        for stage in &report.stages {
            println!(
                "  {:10} {} ({} cells)",
                stage.stage, stage.description, stage.cells_changed
            );
        }
    }

    if let Some(path) = report_path {
        std::fs::write(&path, serde_json::to_string_pretty(report)?)?;
        println!();
        println!("Report written to {}", path.display().to_string().cyan());
    }

    println!();
    println!("{}", "Cleaned data saved:".green().bold());
    println!("  {}", csv_path.display().to_string().cyan());
    println!("  {}", xlsx_path.display().to_string().cyan());

    Ok(())
}
