//! Configuration for the huffpack application.
//!
//! Command-line arguments are parsed with clap and resolved into a
//! [`Config`], filling in defaults (including a time-based sample seed) so
//! that every run can be reproduced from its printed configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use huffpack_core::{Error, Result, TieBreak};
use log::LevelFilter;

/// Compress every text file of a directory with static Huffman coding.
///
/// For each `<name>.txt` in the input directory, writes
/// `<name>_comp.bin` (packed bitstream) and `<name>_freq.txt` (frequency
/// table) to the output directory.
#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the files to compress
    #[arg(long, value_name = "DIR", default_value = "./input")]
    pub input_dir: PathBuf,

    /// Directory receiving the artifacts (created if missing)
    #[arg(long, value_name = "DIR", default_value = "./output")]
    pub output_dir: PathBuf,

    /// Rule for ordering equal-weight nodes while building the tree
    #[arg(long, value_enum, default_value = "reference")]
    pub tie_break: TieBreakArg,

    /// Write N generated sample texts into the input directory first
    #[arg(long, value_name = "N")]
    pub generate_samples: Option<usize>,

    /// Seed for sample generation (default: time-based)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Size of each generated sample in bytes
    #[arg(long, value_name = "N", default_value = "4096")]
    pub sample_bytes: usize,

    /// Re-read the written artifacts and check their consistency
    #[arg(long)]
    pub verify: bool,

    /// Print the resolved configuration
    #[arg(long)]
    pub print_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// Compare node labels, then creation order (historical output)
    Reference,
    /// Compare creation order only
    Sequence,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Reference => TieBreak::Reference,
            TieBreakArg::Sequence => TieBreak::Sequence,
        }
    }
}

/// Sample generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    /// Number of files to generate
    pub count: usize,
    /// Base seed; file `i` uses `seed + i`
    pub seed: u64,
    /// Size of each file in bytes
    pub size_bytes: usize,
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Directory holding the inputs
    pub input_dir: PathBuf,

    /// Directory receiving the artifacts
    pub output_dir: PathBuf,

    // === Encoding ===
    pub tie_break: TieBreak,

    /// Whether to check written artifacts
    pub verify: bool,

    // === Samples ===
    pub samples: Option<SampleConfig>,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Log level for env_logger (RUST_LOG still overrides)
    pub log_level: LevelFilter,
}

impl Config {
    /// Resolve parsed arguments into a configuration.
    ///
    /// # Errors
    /// `Error::Config` for inconsistent arguments.
    pub fn from_args(args: Args) -> Result<Self> {
        if args.input_dir == args.output_dir {
            return Err(Error::Config(format!(
                "input and output directories must differ (both {})",
                args.input_dir.display()
            )));
        }

        let samples = match args.generate_samples {
            Some(0) | None => None,
            Some(count) => {
                if args.sample_bytes == 0 {
                    return Err(Error::Config("--sample-bytes must be positive".to_string()));
                }
                Some(SampleConfig {
                    count,
                    seed: args.seed.unwrap_or_else(time_seed),
                    size_bytes: args.sample_bytes,
                })
            }
        };

        let log_level = if args.quiet {
            LevelFilter::Error
        } else {
            match args.verbose {
                0 => LevelFilter::Info,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        Ok(Config {
            input_dir: args.input_dir,
            output_dir: args.output_dir,
            tie_break: args.tie_break.into(),
            verify: args.verify,
            samples,
            print_config: args.print_config,
            log_level,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Input dir:  {}", self.input_dir.display());
        println!("Output dir: {}", self.output_dir.display());
        println!("Tie-break:  {:?}", self.tie_break);
        println!("Verify:     {}", self.verify);
        println!("Log level:  {}", self.log_level);
        if let Some(samples) = &self.samples {
            println!();
            println!("=== Samples ===");
            println!("Count: {}", samples.count);
            println!("Seed:  {}", samples.seed);
            println!("Size:  {} bytes", samples.size_bytes);
        }
        println!();
    }
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Config> {
        let args = Args::try_parse_from(std::iter::once("huffpack").chain(argv.iter().copied()))
            .expect("arguments should parse");
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("./input"));
        assert_eq!(config.output_dir, PathBuf::from("./output"));
        assert_eq!(config.tie_break, TieBreak::Reference);
        assert!(!config.verify);
        assert!(config.samples.is_none());
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_full_arguments() {
        let config = parse(&[
            "--input-dir",
            "in",
            "--output-dir",
            "out",
            "--tie-break",
            "sequence",
            "--generate-samples",
            "3",
            "--seed",
            "42",
            "--sample-bytes",
            "100",
            "--verify",
            "-vv",
        ])
        .unwrap();

        assert_eq!(config.tie_break, TieBreak::Sequence);
        assert!(config.verify);
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(
            config.samples,
            Some(SampleConfig {
                count: 3,
                seed: 42,
                size_bytes: 100
            })
        );
    }

    #[test]
    fn test_quiet() {
        assert_eq!(parse(&["-q"]).unwrap().log_level, LevelFilter::Error);
        assert!(Args::try_parse_from(["huffpack", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_same_directories_rejected() {
        let result = parse(&["--input-dir", "data", "--output-dir", "data"]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_zero_sample_bytes_rejected() {
        let result = parse(&["--generate-samples", "1", "--sample-bytes", "0"]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_tie_break() {
        assert!(Args::try_parse_from(["huffpack", "--tie-break", "random"]).is_err());
    }
}
