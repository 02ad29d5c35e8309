//! Export command - write the atlas as plain data

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{Atlas, cli::output, export};

#[derive(Parser, Debug)]
#[command(about = "Export the atlas in an open data format")]
pub struct ExportArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Export format
    #[arg(long, short = 'f', default_value = "json")]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    /// Whole atlas: boards plus route tables
    Json,
    /// One row per route entry
    Csv,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let spinner = output::create_spinner("Enumerating canonical boards...");
    let atlas = Atlas::build()?;
    spinner.finish_and_clear();

    let file = File::create(&args.output)?;
    let writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Json => export::write_json(&atlas, writer)?,
        ExportFormat::Csv => export::write_routes_csv(&atlas, writer)?,
    }

    println!("✓ Atlas exported to: {}", args.output.display());
    Ok(())
}
