mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imenh", about = "Blur, tone and cartoonize a single image")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image file name and dimensions
    Info(commands::info::InfoArgs),
    /// Enhance an image and write the processed and original downloads
    Enhance(commands::enhance::EnhanceArgs),
    /// Print or save the default enhancement parameters as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Enhance(args) => commands::enhance::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
