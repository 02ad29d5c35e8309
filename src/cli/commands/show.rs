//! Show command - print one canonical board and its route table

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{Atlas, cli::output};

#[derive(Parser, Debug)]
#[command(about = "Print a canonical board and its route table")]
pub struct ShowArgs {
    /// Canonical index of the board to print
    pub index: usize,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let spinner = output::create_spinner("Enumerating canonical boards...");
    let atlas = Atlas::build()?;
    spinner.finish_and_clear();

    let board = atlas
        .board(args.index)
        .ok_or_else(|| anyhow!("index {} out of range (0-{})", args.index, atlas.len() - 1))?;
    let table = atlas
        .routes(args.index)
        .expect("every board has a route table");

    output::print_section(&format!("Board {}", args.index));
    println!("{board}");

    output::print_kv("Occupied cells", &board.occupied_count().to_string());
    output::print_kv("Route entries", &table.len().to_string());

    println!();
    for entry in table.iter() {
        println!(
            "  X {} / O {} -> board {}",
            entry.mv, entry.response, entry.target
        );
    }

    Ok(())
}
