//! Stats command - summarize the atlas

use anyhow::Result;
use clap::Parser;

use crate::{Atlas, cli::output};

#[derive(Parser, Debug)]
#[command(about = "Summarize the canonical board list and route tables")]
pub struct StatsArgs {}

pub fn execute(_args: StatsArgs) -> Result<()> {
    let spinner = output::create_spinner("Enumerating canonical boards...");
    let atlas = Atlas::build()?;
    spinner.finish_and_clear();

    output::print_section("Atlas summary");
    output::print_kv("Canonical boards", &atlas.len().to_string());

    for (bucket, count) in atlas.occupancy_histogram().iter().enumerate() {
        output::print_kv(&format!("{} pieces", bucket * 2), &count.to_string());
    }

    output::print_kv("Route entries", &atlas.route_entry_count().to_string());

    Ok(())
}
