use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use omega_cli::{
    cli::Cli,
    commands::{self, Outcome},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Default to info-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    match commands::run(cli, &mut stdout)? {
        Outcome::Done => Ok(ExitCode::SUCCESS),
        Outcome::Rejected => Ok(ExitCode::FAILURE),
    }
}
