//! Page-replacement simulator CLI.
//!
//! This binary is a thin front end over `pagesim_core`. It performs:
//! 1. **Argument handling:** trace path, policy selector, frame count, and
//!    the optional display/diagnostic toggles.
//! 2. **Trace loading:** reads the `<pid> <page>` file, tolerating a
//!    malformed tail line.
//! 3. **Simulation:** runs every selected policy and prints the ranked
//!    summary report.

use clap::Parser;
use std::process;

use pagesim_core::config::{CacheConfig, GeneralConfig, Selection, SimConfig};
use pagesim_core::{stats, Engine, SimError, Trace};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Trace-driven page-replacement policy simulator",
    long_about = "Replay a page-reference trace against one replacement policy or all of them, \
and compare hit ratios.\n\n\
Algorithm codes:\n\
  O = OPTIMAL   R = RANDOM   F = FIFO   L = LRU\n\
  C = CLOCK     N = NFU      A = AGING  M = MRU\n\
  n = NRU       m = MFU      l = LFU    f = LFRU\n\
  a = run ALL policies\n\n\
Input file format: one reference per line, two whitespace-separated\n\
integers `<pid> <page>`. A line that fails to parse ends ingestion; the\n\
references read up to that point are simulated.\n\n\
Examples:\n\
  pagesim trace.txt L 4          LRU with 4 frames\n\
  pagesim trace.txt a 8 1        All policies, show each step\n\
  pagesim trace.txt R 3 0 0 --seed 7"
)]
struct Cli {
    /// Path to the trace file.
    input_file: String,

    /// One-character algorithm code (see --help for the full list).
    algorithm: String,

    /// Number of page frames (values below 1 are clamped to 1).
    #[arg(allow_hyphen_values = true)]
    num_frames: i64,

    /// Print a summary and page table after every reference (0 or 1).
    #[arg(default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    show_process: u8,

    /// Verbose diagnostics, no semantic effect (0 or 1).
    #[arg(default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    debug: u8,

    /// Seed for the RANDOM policy's generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Upper bound on references processed.
    #[arg(long)]
    max_calls: Option<usize>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("[!] {}", e);
        process::exit(1);
    }
}

/// Builds the configuration, loads the trace, runs the engine, and prints
/// the ranked report.
fn run(cli: Cli) -> Result<(), SimError> {
    let code = cli.algorithm.chars().next().unwrap_or(' ');
    let selection = Selection::from_code(code)?;

    let config = SimConfig {
        general: GeneralConfig {
            show_process: cli.show_process != 0,
            debug: cli.debug != 0,
            max_calls: cli.max_calls.unwrap_or(GeneralConfig::default().max_calls),
        },
        cache: CacheConfig {
            // Negative frame counts clamp to the 1-frame minimum.
            frames: cli.num_frames.max(0) as usize,
            seed: cli.seed.unwrap_or(CacheConfig::default().seed),
            ..CacheConfig::default()
        },
        selection,
    };

    let trace = Trace::from_path(&cli.input_file)?;

    if config.general.debug {
        println!("[*] Trace: {} ({} references)", cli.input_file, trace.len());
        println!(
            "[*] Selection: {:?}  Frames: {}  Seed: {}",
            config.selection, config.cache.frames, config.cache.seed
        );
    }

    let mut engine = Engine::new(trace, &config)?;
    engine.run();
    stats::print_report(&engine);
    Ok(())
}
