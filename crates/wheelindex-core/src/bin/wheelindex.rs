//! CLI entry point for the wheel flat indexer.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wheelindex_core::config::IndexerConfig;
use wheelindex_core::indexer::pipeline;

#[derive(Parser, Debug)]
#[command(name = "wheelindex")]
#[command(about = "Scan a directory of built wheels and emit a flat JSON package index", long_about = None)]
struct Cli {
    /// Directory containing built wheel files
    #[arg(long, default_value = "dist")]
    dist_dir: PathBuf,

    /// Path of the JSON index to write
    #[arg(long, default_value = "flat-index.json")]
    output: PathBuf,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = IndexerConfig {
        dist_dir: cli.dist_dir,
        output_path: cli.output,
    };

    match pipeline::run(&config) {
        Ok(stats) => {
            println!(
                "indexed {} wheels ({} files seen, {} skipped) in {} ms",
                stats.wheels_indexed, stats.files_seen, stats.wheels_skipped, stats.elapsed_ms
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
