//! Bench command - play the robot against a baseline agent

use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    EngineConfig,
    cli::output::{format_percent, print_kv, print_section},
    pipeline::{
        Agent, BlockingAgent, MatchConfig, MatchResult, MatchRunner, MetricsObserver,
        ProgressObserver, RandomAgent, RobotAgent,
    },
    rollout::Difficulty,
};

/// Baseline agents the robot can be benchmarked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentKind {
    Random,
    Blocking,
    /// Another rollout robot at `--opponent-difficulty`
    Robot,
}

#[derive(Parser, Debug)]
#[command(about = "Benchmark the robot against a baseline opponent")]
pub struct BenchArgs {
    /// Opponent to play against
    #[arg(long, short = 'o', value_enum, default_value = "random")]
    pub opponent: OpponentKind,

    /// Difficulty of the opponent when it is a robot too
    #[arg(long, default_value = "easy")]
    pub opponent_difficulty: Difficulty,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: BenchArgs, config: &EngineConfig) -> Result<()> {
    let stdout = std::io::stdout();
    run(&args, config, stdout.lock())?;
    Ok(())
}

/// Play the match described by `args` and `config`, reporting to `out`
pub fn run<W: Write>(args: &BenchArgs, config: &EngineConfig, mut out: W) -> Result<MatchResult> {
    let mut robot = RobotAgent::for_difficulty(config.difficulty, config.seed);
    let mut opponent: Box<dyn Agent> = match args.opponent {
        OpponentKind::Random => Box::new(RandomAgent::new("Random".to_string())),
        OpponentKind::Blocking => Box::new(BlockingAgent::new("Blocking".to_string())),
        OpponentKind::Robot => Box::new(RobotAgent::for_difficulty(args.opponent_difficulty, None)),
    };

    print_section(&mut out, "Bench configuration")?;
    print_kv(&mut out, "Robot", robot.name())?;
    print_kv(&mut out, "Opponent", opponent.name())?;
    print_kv(&mut out, "Games", &args.games.to_string())?;
    print_kv(&mut out, "First mover", &config.first_mover.to_string())?;
    if let Some(seed) = config.seed {
        print_kv(&mut out, "Seed", &seed.to_string())?;
    }

    let match_config = MatchConfig {
        games: args.games,
        seed: config.seed,
        first_mover: config.first_mover,
    };

    let metrics = MetricsObserver::new();
    let metrics_handle = metrics.handle();
    let mut runner = MatchRunner::new(match_config).with_observer(Box::new(metrics));
    if !args.quiet {
        runner = runner.with_observer(Box::new(ProgressObserver::new()));
    }

    let result = runner.run(&mut robot, opponent.as_mut())?;
    let metrics = metrics_handle.snapshot();

    print_section(&mut out, "Results")?;
    print_kv(&mut out, "Total games", &result.total_games.to_string())?;
    print_kv(
        &mut out,
        "Robot wins",
        &format!("{} ({})", result.robot_wins, format_percent(result.robot_win_rate)),
    )?;
    print_kv(
        &mut out,
        "Draws",
        &format!("{} ({})", result.draws, format_percent(result.draw_rate)),
    )?;
    print_kv(
        &mut out,
        "Opponent wins",
        &format!("{} ({})", result.player_wins, format_percent(result.player_win_rate)),
    )?;
    print_kv(
        &mut out,
        "Average length",
        &format!("{:.2} moves", metrics.average_length),
    )?;

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("failed to export results to {}", path.display()))?;
        writeln!(out, "\nResults exported to: {}", path.display())?;
    }

    Ok(result)
}
