//! oxo CLI - perfect-play Tic-Tac-Toe engine
//!
//! This CLI provides a unified interface for:
//! - Playing interactive games against the engine
//! - Evaluating the engine against baseline opponents
//! - Analyzing positions move by move
//! - Exporting the solved-position table

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Play the engine against a baseline opponent
    Evaluate(oxo::cli::commands::evaluate::EvaluateArgs),

    /// Score every legal move of a position
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Export the solved-position table
    Export(oxo::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Evaluate(args) => oxo::cli::commands::evaluate::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Export(args) => oxo::cli::commands::export::execute(args),
    }
}
