use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use rollpack::io::{export, import};
use rollpack_lbf::config::PackConfig;
use rollpack_lbf::io;
use rollpack_lbf::io::cli::Cli;
use rollpack_lbf::io::output::PackOutput;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed PackConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let (container, products) = import::import_instance(&ext_instance)?;
    info!(
        "[MAIN] Packing {} products into {} ({}x{}x{}, {} max weight)",
        products.len(),
        container.name(),
        container.length(),
        container.width(),
        container.height(),
        container.max_weight()
    );

    let result = rollpack_lbf::pack(&products, &container, &config)?;

    for (i, pi) in result.placed_items.iter().enumerate() {
        info!(
            "[MAIN] {:>3}. {:<12} {:<8} band {} at [{:.1}, {:.1}, {:.1}]",
            i + 1,
            pi.product.id(),
            pi.phase,
            pi.band,
            pi.position.x(),
            pi.position.y(),
            pi.position.z()
        );
    }
    if !result.is_complete() {
        warn!(
            "[MAIN] {} products could not be placed: {}",
            result.n_unplaced(),
            result.unplaced.iter().map(|p| p.id()).collect::<Vec<_>>().join(", ")
        );
    }

    let output = PackOutput {
        instance: ext_instance,
        solution: export::export_result(&result),
        config,
    };
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(())
}
