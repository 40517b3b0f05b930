//! extguard CLI - file extension blocklist panel
//!
//! This is the main entry point for the extguard command-line interface.

mod cli;
mod commands;
mod output;
mod terminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Must run before the first TLS connection
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Fixed(cmd) => commands::fixed::run(cmd, &cli.globals).await,
        Commands::Custom(cmd) => commands::custom::run(cmd, &cli.globals).await,
        Commands::Panel => commands::panel::run(&cli.globals).await,
        Commands::Config(cmd) => commands::config::run(cmd, &cli.globals),
    }
}

/// Initialize tracing with appropriate verbosity
///
/// Logs go to stderr so list output on stdout stays pipeable.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
