// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slipway")]
#[command(about = "Slot-based App Service deployment with health-gated swaps")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output for CI
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// JSON line output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new slipway.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Deploy to the configured slot, verifying health before finishing
    Deploy {
        /// Code package: a zip/war/jar file or a folder to be zipped
        #[arg(short, long, conflicts_with = "image")]
        package: Option<PathBuf>,

        /// Container image reference to deploy instead of a package
        #[arg(short, long)]
        image: Option<String>,

        /// Deployment mode: prod swaps into the target slot after verification
        #[arg(short, long, value_enum, default_value_t = Mode::NonProd)]
        mode: Mode,

        /// Version the health endpoint must report (overrides config)
        #[arg(long)]
        expected_version: Option<String>,

        /// Slot to swap into in prod mode (overrides config)
        #[arg(long)]
        swap_target: Option<String>,
    },

    /// Probe the configured slot's health endpoint until healthy or deadline
    Verify {
        /// Version the health endpoint must report (overrides config)
        #[arg(long)]
        expected_version: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Mode {
    /// Deploy and verify the slot, then swap into the target slot
    Prod,
    /// Deploy and verify the slot only
    NonProd,
}
