use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Recover PNG images from base64 text
#[derive(Parser)]
#[command(name = "base64-image-recovery")]
#[command(about = "Recover PNG images from pasted base64 text")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode the input and write <stem>.png, or <stem>_raw.bin if it is not a PNG
    Recover(commands::recover::RecoverCommand),
    /// Decode and classify the input without writing anything
    Inspect(commands::inspect::InspectCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recover(command) => command.run(),
        Commands::Inspect(command) => command.run(),
    }
}
