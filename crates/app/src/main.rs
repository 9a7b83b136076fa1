//! huffpack: compress a directory of text files with static Huffman coding.
//!
//! Pipeline per input file:
//! read text -> encode (huffpack-core) -> write `<name>_comp.bin` and
//! `<name>_freq.txt` -> report compression statistics.

mod batch;
mod config;
mod input_gen;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use crate::config::{Args, Config};

fn main() -> ExitCode {
    let config = match Config::from_args(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("huffpack: {e}");
            return ExitCode::from(2);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    match run(&config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failures) => {
            error!("{} file(s) failed", failures);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the whole batch and return the number of files that failed.
fn run(config: &Config) -> huffpack_core::Result<usize> {
    if config.print_config {
        config.print();
    }

    if let Some(samples) = &config.samples {
        let paths = input_gen::write_samples(
            &config.input_dir,
            samples.seed,
            samples.count,
            samples.size_bytes,
        )?;
        info!(
            "generated {} sample(s) in {} (seed {})",
            paths.len(),
            config.input_dir.display(),
            samples.seed
        );
    }

    std::fs::create_dir_all(&config.output_dir)?;

    let inputs = batch::list_inputs(&config.input_dir)?;
    if inputs.is_empty() {
        warn!("no input files in {}", config.input_dir.display());
        return Ok(0);
    }

    let results = batch::process_all(&inputs, &config.output_dir, config.tie_break, config.verify)?;

    let mut failures = 0;
    for (input, result) in results {
        match result {
            Ok(report) => {
                println!();
                print!("{}", report.stats.summary(&report.name));
                println!(
                    "  Artifacts: {}, {}",
                    report.compressed_path.display(),
                    report.frequency_path.display()
                );
                if let Some(bits) = report.verified_bits {
                    println!("  Verified: {} bits", bits);
                }
            }
            Err(e) => {
                error!("{}: {}", input.display(), e);
                failures += 1;
            }
        }
    }

    Ok(failures)
}
