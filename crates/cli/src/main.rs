//! chainbuild CLI: the main entry point.
//!
//! Commands:
//! - `build`: run configured steps and write their targets
//! - `resolve`: show the segments a step would assemble
//! - `validate`: check the configuration file
//! - `init`: write a starter `chainbuild.toml`

use chainbuild_config::BuildConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "chainbuild",
    about = "chainbuild: assemble an artifact from a chain of text, modules, targets, and sources",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the build configuration [default: $CHAINBUILD_CONFIG, then chainbuild.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run build steps and write their targets
    Build {
        /// Only run the step with this index
        #[arg(short, long)]
        step: Option<usize>,
    },

    /// Print the resolved segments of each step without writing
    Resolve {
        /// Only resolve the step with this index
        #[arg(short, long)]
        step: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Write a starter configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = cli.config.unwrap_or_else(BuildConfig::default_path);
    match cli.command {
        Commands::Build { step } => commands::build::run(&config, step).await?,
        Commands::Resolve { step } => commands::resolve::run(&config, step).await?,
        Commands::Validate => commands::validate::run(&config).await?,
        Commands::Init => commands::init::run(&config).await?,
    }

    Ok(())
}
