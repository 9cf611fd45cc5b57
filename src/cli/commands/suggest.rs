//! Suggest command - score every free cell of a given board

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    EngineConfig,
    cli::output::{print_kv, print_section, render_board},
    rollout::{MoveScore, RolloutEvaluator, select_best},
    tictactoe::{Board, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Show rollout scores and the robot's choice for a board")]
pub struct SuggestArgs {
    /// Board as 9 cells, e.g. "oo.xx...." ('x' player, 'o' robot, '.' empty)
    pub board: String,

    /// Side making the move
    #[arg(long, short = 'm', default_value = "robot")]
    pub mover: Side,

    /// Print machine-readable JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Scores and choice for one board, also the `--json` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub board: String,
    pub mover: Side,
    pub rollouts_per_candidate: usize,
    pub scores: Vec<MoveScore>,
    pub best: usize,
}

pub fn execute(args: SuggestArgs, config: &EngineConfig) -> Result<()> {
    let stdout = std::io::stdout();
    run(&args, config, stdout.lock())?;
    Ok(())
}

/// Evaluate the board from `args` and write a table or JSON to `out`
pub fn run<W: Write>(args: &SuggestArgs, config: &EngineConfig, mut out: W) -> Result<Suggestion> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("invalid board '{}'", args.board))?;

    let mut evaluator = RolloutEvaluator::from_difficulty(config.difficulty, config.seed);
    let scores = evaluator
        .scores(&board, args.mover)
        .context("cannot suggest a move")?;
    let best = select_best(&scores).context("no candidate moves")?;

    let suggestion = Suggestion {
        board: board.encode(),
        mover: args.mover,
        rollouts_per_candidate: evaluator.rollouts_per_candidate(),
        scores,
        best: best.position,
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&suggestion)?)?;
        return Ok(suggestion);
    }

    print_section(&mut out, "Board")?;
    writeln!(out, "{}", render_board(&board))?;

    print_section(&mut out, "Rollout scores")?;
    print_kv(&mut out, "Mover", &args.mover.to_string())?;
    print_kv(&mut out, "Difficulty", &config.difficulty.to_string())?;
    print_kv(
        &mut out,
        "Rollouts/candidate",
        &suggestion.rollouts_per_candidate.to_string(),
    )?;
    for entry in &suggestion.scores {
        let marker = if entry.position == suggestion.best { " <- best" } else { "" };
        writeln!(out, "  cell {}: {:>8}{marker}", entry.position, entry.score)?;
    }

    Ok(suggestion)
}
