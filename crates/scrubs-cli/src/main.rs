//! scrubs CLI - hospital patient record table cleaner.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect { file, json } => commands::inspect::run(file, json, cli.verbose),

        Commands::Clean {
            file,
            output,
            xlsx,
            report,
        } => commands::clean::run(file, output, xlsx, report, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
