//! Atoll preview server - Main Entry Point

use std::path::PathBuf;

use clap::Parser;

use atoll_dev::{serve, DevServerConfig};

/// Serve a scaffolded Atoll project
#[derive(Parser, Debug)]
#[command(name = "atoll-dev")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project directory to serve
    #[arg(default_value = ".")]
    project: PathBuf,

    /// Port to listen on (0 picks an ephemeral port)
    #[arg(long, env = "ATOLL_PORT", default_value_t = atoll_common::DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    serve(DevServerConfig {
        project_dir: cli.project,
        port: cli.port,
    })
    .await
}
