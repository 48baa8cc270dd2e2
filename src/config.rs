use std::path::PathBuf;

use clap::Parser;

use crate::data::summary::DEFAULT_TOP;

/// Command line / environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex-viewer")]
#[command(about = "Browse a Pokédex CSV: look up creatures, view stat charts, compare types")]
#[command(version)]
pub struct Config {
    /// CSV file to load at startup
    #[arg(short, long, env = "POKEDEX_DATA", default_value = "pokedex.csv")]
    pub data: PathBuf,

    /// Number of records in the totals bar chart
    #[arg(long, env = "POKEDEX_TOP", default_value_t = DEFAULT_TOP)]
    pub top: usize,
}
