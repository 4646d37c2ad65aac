use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Packs the products of an instance into its roll container
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file containing the container and the products
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON file with a packing configuration, defaults are used if absent
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
