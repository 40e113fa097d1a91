//! huffpack: compress and decompress files with static Huffman coding.
//!
//! The binary is the loader and presentation layer around `huffpack-core`:
//! it reads whole files, hands the bytes to the codec, writes the result,
//! and prints the statistics the codec returns.

mod config;
mod input_gen;

use std::fs;
use std::process::ExitCode;

use config::{Config, Mode};
use huffpack_core::{compress_with_stats, decompress, Error, Result};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run with --help for usage");
            return ExitCode::from(2);
        }
    };

    init_logging(config.verbose);

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:?} failed: {e}", config.mode);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

fn run(config: &Config) -> Result<()> {
    match config.mode {
        Mode::Compress => run_compress(config),
        Mode::Decompress => run_decompress(config),
        Mode::Demo => run_demo(config),
    }
}

fn paths(config: &Config) -> Result<(&std::path::Path, &std::path::Path)> {
    match (&config.input_file, &config.output_file) {
        (Some(input), Some(output)) => Ok((input.as_path(), output.as_path())),
        _ => Err(Error::Config("--in and --out are required".to_string())),
    }
}

fn run_compress(config: &Config) -> Result<()> {
    let (input, output) = paths(config)?;

    let data = fs::read(input)?;
    log::info!("read {} bytes from {}", data.len(), input.display());

    let (frame, stats) = compress_with_stats(&data)?;
    fs::write(output, &frame)?;
    log::info!("wrote {} bytes to {}", frame.len(), output.display());

    if config.print_stats {
        println!("{stats}");
    }
    println!("✓ Compressed {} -> {}", input.display(), output.display());
    Ok(())
}

fn run_decompress(config: &Config) -> Result<()> {
    let (input, output) = paths(config)?;

    let frame = fs::read(input)?;
    let data = decompress(&frame)?;
    fs::write(output, &data)?;

    if config.print_stats {
        println!("=== Decompression ===");
        println!("Frame:  {} bytes", frame.len());
        println!("Output: {} bytes", data.len());
    }
    println!("✓ Decompressed {} -> {}", input.display(), output.display());
    Ok(())
}

fn run_demo(config: &Config) -> Result<()> {
    println!("Generating {} bytes of sample data (seed {})", config.sample_bytes, config.seed);
    let data = input_gen::generate_sample_data(config.seed, config.sample_bytes);

    let (frame, stats) = compress_with_stats(&data)?;
    let restored = decompress(&frame)?;

    if config.print_stats {
        println!("{stats}");
        println!();
    }

    if restored == data {
        println!("✓ Round trip verified: {} bytes", restored.len());
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            expected: data.len(),
            actual: restored.len(),
        })
    }
}
