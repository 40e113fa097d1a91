//! Configuration for the huffpack command-line tool.
//!
//! Handles parsing command-line arguments into a `Config`. The `demo` mode
//! works with ZERO further arguments: it generates seeded sample data, and
//! the seed is printed so a run can be reproduced.

use huffpack_core::{Error, Result};
use std::path::PathBuf;

/// Default size of generated demo data
const DEFAULT_SAMPLE_BYTES: usize = 256 * 1024;

/// What the tool should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read a file, write its frame
    Compress,
    /// Read a frame, write the original file
    Decompress,
    /// Round-trip generated data in memory and report
    Demo,
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,

    // === Files ===
    /// Input file path (required for compress/decompress)
    pub input_file: Option<PathBuf>,

    /// Output file path (required for compress/decompress)
    pub output_file: Option<PathBuf>,

    // === Demo ===
    /// Seed for sample data generation
    pub seed: u64,

    /// Size of generated sample data in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Log pipeline stages at debug level
    pub verbose: bool,

    /// Whether to print the resolved config
    pub print_config: bool,

    /// Whether to print compression statistics
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    ///
    /// The first argument selects the mode. Without `--seed`, demo data is
    /// seeded from the clock.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mode = match args.first().map(String::as_str) {
            Some("compress") => Mode::Compress,
            Some("decompress") => Mode::Decompress,
            Some("demo") => Mode::Demo,
            Some("--help" | "-h") => {
                print_help();
                std::process::exit(0);
            }
            Some(other) => return Err(config_err(format!("unknown mode: {other}"))),
            None => return Err(config_err("missing mode (compress, decompress or demo)")),
        };

        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut verbose = false;
        let mut print_config = false;
        let mut print_stats = true;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    input_file = Some(PathBuf::from(value_for(args, &mut i, "--in requires a path")?));
                }
                "--out" => {
                    output_file = Some(PathBuf::from(value_for(args, &mut i, "--out requires a path")?));
                }
                "--seed" => {
                    let raw = value_for(args, &mut i, "--seed requires a number")?;
                    seed = Some(raw.parse().map_err(|_| config_err("invalid seed"))?);
                }
                "--size" => {
                    let raw = value_for(args, &mut i, "--size requires a number")?;
                    sample_bytes = Some(raw.parse().map_err(|_| config_err("invalid size"))?);
                }
                "--verbose" | "-v" => {
                    verbose = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => {
                    return Err(config_err(format!("unknown argument: {other}")));
                }
            }
            i += 1;
        }

        if mode != Mode::Demo {
            if input_file.is_none() {
                return Err(config_err("--in is required"));
            }
            if output_file.is_none() {
                return Err(config_err("--out is required"));
            }
        }

        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or_default()
        });

        Ok(Config {
            mode,
            input_file,
            output_file,
            seed,
            sample_bytes: sample_bytes.unwrap_or(DEFAULT_SAMPLE_BYTES),
            verbose,
            print_config,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        let show = |path: &Option<PathBuf>| {
            path.as_ref()
                .map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
        };

        println!("=== Configuration ===");
        println!("Mode:        {:?}", self.mode);
        println!("Input file:  {}", show(&self.input_file));
        println!("Output file: {}", show(&self.output_file));
        if self.mode == Mode::Demo {
            println!("Seed:        {}", self.seed);
            println!("Sample size: {} bytes ({} KiB)", self.sample_bytes, self.sample_bytes / 1024);
        }
        println!();
    }
}

/// Advance past a flag and return its value.
fn value_for<'a>(args: &'a [String], i: &mut usize, missing: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| config_err(missing))
}

fn config_err(msg: impl Into<String>) -> Error {
    Error::Config(msg.into())
}

fn print_help() {
    println!("huffpack: static Huffman compression");
    println!();
    println!("USAGE:");
    println!("    huffpack compress --in <PATH> --out <PATH> [OPTIONS]");
    println!("    huffpack decompress --in <PATH> --out <PATH> [OPTIONS]");
    println!("    huffpack demo [--seed <N>] [--size <BYTES>] [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>        Input file");
    println!("    --out <PATH>       Output file");
    println!("    --seed <N>         Seed for demo data (default: clock)");
    println!("    --size <BYTES>     Demo data size (default: {DEFAULT_SAMPLE_BYTES})");
    println!();
    println!("    --verbose, -v      Log pipeline stages (RUST_LOG overrides)");
    println!("    --print-config     Print resolved configuration");
    println!("    --no-stats         Don't print compression statistics");
    println!("    --help, -h         Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack compress --in notes.txt --out notes.huff");
    println!("    huffpack decompress --in notes.huff --out notes.txt");
    println!("    huffpack demo --seed 42");
    println!();
}
