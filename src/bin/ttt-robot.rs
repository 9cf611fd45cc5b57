//! ttt-robot - play Tic-Tac-Toe against a rollout robot
//!
//! - `play`: interactive game in the terminal
//! - `suggest`: rollout scores and the robot's choice for a board
//! - `bench`: the robot against baseline opponents

use anyhow::Result;
use clap::{Parser, Subcommand};
use rollout_ttt::cli::{
    commands::{bench, play, suggest},
    config::CommonArgs,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "ttt-robot")]
#[command(version, about = "Tic-Tac-Toe against a rollout robot", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the robot
    Play(play::PlayArgs),

    /// Show the robot's evaluation of a board
    Suggest(suggest::SuggestArgs),

    /// Benchmark the robot against a baseline
    Bench(bench::BenchArgs),
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.common.resolve()?;

    init_tracing(&config.log_level);
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Play(args) => play::execute(args, &config),
        Commands::Suggest(args) => suggest::execute(args, &config),
        Commands::Bench(args) => bench::execute(args, &config),
    }
}
