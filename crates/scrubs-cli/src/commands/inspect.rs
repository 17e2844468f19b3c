//! Inspect command - pre-clean quality assessment of a raw file.

use std::path::PathBuf;

use colored::Colorize;
use scrubs::Cleaner;

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let cleaner = Cleaner::new();
    let report = cleaner.inspect(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Inspecting".cyan().bold(),
        file.display().to_string().white()
    );
    println!();
    println!(
        "Records: {}   Columns: {}",
        report.rows.to_string().white().bold(),
        report.columns.len().to_string().white().bold()
    );

    if verbose {
        println!();
        println!("{}", "Columns:".yellow().bold());
        for name in &report.columns {
            println!("  {}", name);
        }
    }

    println!();
    if report.column_missing.is_empty() {
        println!("{}", "No missing values.".green());
    } else {
        println!("{}", "Missing values:".yellow().bold());
        for (name, count) in &report.column_missing {
            let pct = report.column_missing_pct.get(name).copied().unwrap_or(0.0);
            println!(
                "  {:25} {:>6} ({:.2}%)",
                name,
                count.to_string().yellow(),
                pct
            );
        }
        println!(
            "Total missing cells: {}",
            report.missing_total.to_string().yellow().bold()
        );
    }

    println!(
        "Duplicate rows: {}",
        report.duplicate_rows.to_string().yellow().bold()
    );

    Ok(())
}
