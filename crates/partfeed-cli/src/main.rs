mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "partfeed",
    version,
    about = "Builds enriched part data feeds from periodic delta files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the feed from the newest pending delta file
    Run {
        /// Path to feed config YAML file
        config: PathBuf,
    },
    /// Validate feed configuration and directory layout
    Check {
        /// Path to feed config YAML file
        config: PathBuf,
    },
    /// Stage a file and record a git snapshot commit
    Snapshot {
        /// File to snapshot (typically the written feed)
        file: PathBuf,
        /// Commit message
        #[arg(short, long)]
        message: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    match cli.command {
        Commands::Run { config } => commands::run::execute(&config),
        Commands::Check { config } => commands::check::execute(&config),
        Commands::Snapshot { file, message } => commands::snapshot::execute(&file, &message),
    }
}
