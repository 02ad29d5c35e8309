//! Atlas CLI - inspect and export the canonical tic-tac-toe board atlas

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "atlas")]
#[command(version, about = "Canonical tic-tac-toe board atlas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the canonical board list and route tables
    Stats(ttt_atlas::cli::commands::stats::StatsArgs),

    /// Print one canonical board and its route table
    Show(ttt_atlas::cli::commands::show::ShowArgs),

    /// Export the atlas as JSON or CSV
    Export(ttt_atlas::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats(args) => ttt_atlas::cli::commands::stats::execute(args),
        Commands::Show(args) => ttt_atlas::cli::commands::show::execute(args),
        Commands::Export(args) => ttt_atlas::cli::commands::export::execute(args),
    }
}
