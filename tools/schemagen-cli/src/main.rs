mod catalog;
mod commands;
mod target;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check::CheckArgs, deps::DepsArgs, generate::GenerateArgs, render::RenderArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "schemagen",
    about = "Generate schema definitions for several formats from one catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every schema for the selected targets into a directory
    Generate(GenerateArgs),
    /// Print one rendered schema
    Render(RenderArgs),
    /// Print the transitive dependencies of a message
    Deps(DepsArgs),
    /// Validate a catalog document
    Check(CheckArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::Render(args) => args.run(),
        Commands::Deps(args) => args.run(),
        Commands::Check(args) => args.run(),
    }
}
