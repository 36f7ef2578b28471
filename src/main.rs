// ABOUTME: Entry point for the slipway CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use slipway::config::{self, Config};
use slipway::error::Result;
use slipway::output::{Output, OutputMode};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let output = Output::new(mode);

    if let Err(e) = run(cli, output).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: Output) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, force)?;
            output.success("Created slipway.yml");
            Ok(())
        }
        Commands::Deploy {
            package,
            image,
            mode,
            expected_version,
            swap_target,
        } => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            let args = commands::DeployArgs {
                package,
                image,
                mode,
                expected_version,
                swap_target,
            };
            commands::deploy(config, args, output).await
        }
        Commands::Verify { expected_version } => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            commands::verify(config, expected_version, output).await
        }
    }
}
