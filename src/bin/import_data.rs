//! Offline converter from the CSV source files to the JSON documents the
//! server reads.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nefesh_mcp_server::import;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "import-data")]
#[command(about = "Convert Nefesh CSV source files into the server's JSON documents")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the therapist roster CSV into the record document
    Roster {
        /// Path to the roster CSV
        input: PathBuf,

        /// Path of the JSON document to write
        output: PathBuf,
    },
    /// Convert the national city table CSV into the gazetteer file
    Cities {
        /// Path to the city table CSV
        input: PathBuf,

        /// Path of the gazetteer JSON file to write
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Roster { input, output } => {
            let records = import::therapists_from_csv(&input)
                .with_context(|| format!("reading roster from {}", input.display()))?;
            let json = serde_json::to_string_pretty(&records)?;
            std::fs::write(&output, json)
                .with_context(|| format!("writing {}", output.display()))?;
            tracing::info!(
                records = records.len(),
                output = %output.display(),
                "roster converted"
            );
        }
        Command::Cities { input, output } => {
            let cities = import::gazetteer_from_csv(&input)
                .with_context(|| format!("reading city table from {}", input.display()))?;
            let json = serde_json::to_string_pretty(&cities)?;
            std::fs::write(&output, json)
                .with_context(|| format!("writing {}", output.display()))?;
            tracing::info!(
                cities = cities.len(),
                output = %output.display(),
                "city table converted"
            );
        }
    }

    Ok(())
}
