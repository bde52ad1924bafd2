//! Atoll scaffolder - Main Entry Point
//!
//! `atoll-init <target-dir> [--twind | --no-twind]`

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Scaffold a new Atoll project
#[derive(Parser, Debug)]
#[command(name = "atoll-init")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory to create the project in
    target: PathBuf,

    /// Wire in the twind styling layer
    #[arg(long, conflicts_with = "no_twind")]
    twind: bool,

    /// Skip the twind styling layer (the default)
    #[arg(long)]
    no_twind: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Rejected invocations exit 1 (the documented failure code), not clap's
    // default usage-error code 2. Help and version remain exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    if let Err(err) = atoll_cli::scaffold(&cli.target, cli.twind) {
        eprintln!("atoll-init: {err}");
        std::process::exit(1);
    }

    println!("Project created in {}", cli.target.display());
    println!();
    println!("Preview it with:");
    println!();
    println!("  atoll-dev {}", cli.target.display());
}
