//! Play command - interactive game against the robot
//!
//! The loop is a small state machine: wait for the human, let the robot
//! evaluate and apply its move, check for the end of the game, and either
//! continue or reset the board after the display delay.

use std::{
    io::{BufRead, Write},
    thread,
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    EngineConfig, Error,
    cli::output::render_board,
    rollout::{Difficulty, RolloutEvaluator},
    tictactoe::{GameStatus, Session, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the robot in the terminal")]
pub struct PlayArgs {
    /// Stop after this many finished games (default: play until quit)
    #[arg(long, short = 'g')]
    pub games: Option<usize>,
}

/// Tally of an interactive run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlaySummary {
    pub games: usize,
    pub robot_wins: usize,
    pub player_wins: usize,
    pub draws: usize,
}

impl PlaySummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Side::Robot) => self.robot_wins += 1,
            GameStatus::Won(Side::Player) => self.player_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.games += 1;
    }
}

/// What one line of human input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(usize),
    Difficulty(Difficulty),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "q" | "quit" | "exit" => return Some(Command::Quit),
        "r" | "restart" => return Some(Command::Restart),
        _ => {}
    }
    if let Some(level) = line
        .strip_prefix("difficulty ")
        .or_else(|| line.strip_prefix("d "))
    {
        return level.parse().ok().map(Command::Difficulty);
    }
    line.parse().ok().map(Command::Move)
}

pub fn execute(args: PlayArgs, config: &EngineConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = run(config, args.games, stdin.lock(), stdout.lock())?;

    println!(
        "\nGames: {}  Robot: {}  You: {}  Draws: {}",
        summary.games, summary.robot_wins, summary.player_wins, summary.draws
    );
    Ok(())
}

/// Drive games from `input` until it ends, the human quits, or `max_games`
/// games have finished.
pub fn run<R: BufRead, W: Write>(
    config: &EngineConfig,
    max_games: Option<usize>,
    input: R,
    mut output: W,
) -> Result<PlaySummary> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(random()),
    };
    let mut evaluator = RolloutEvaluator::from_difficulty(config.difficulty, config.seed);
    let mut game_num = 0;
    let mut session = Session::new(config.first_mover.resolve(game_num, &mut rng));
    let mut summary = PlaySummary::default();
    let mut lines = input.lines();

    writeln!(
        output,
        "You are {}, the robot is {}. Enter a cell 0-8, 'd <0-3>' to change difficulty, 'r' to restart, 'q' to quit.",
        Side::Player.to_char(),
        Side::Robot.to_char()
    )?;

    loop {
        // Robot's turn: evaluate, apply, then fall through to the terminal check
        if session.to_move() == Side::Robot && !session.status().is_terminal() {
            let (position, _) = session.play_robot(&mut evaluator)?;
            writeln!(output, "Robot plays {position}")?;
        }

        let status = session.status();
        if status.is_terminal() {
            writeln!(output, "{}", render_board(session.board()))?;
            if let Some(message) = status.announcement() {
                writeln!(output, "{message}")?;
            }
            summary.record(status);
            if max_games.is_some_and(|max| summary.games >= max) {
                break;
            }

            thread::sleep(Duration::from_millis(config.reset_delay_ms));
            game_num += 1;
            session.reset(config.first_mover.resolve(game_num, &mut rng));
            info!(game_num, first = %session.first_mover(), "new game");
            continue;
        }

        writeln!(output, "{}", render_board(session.board()))?;
        write!(output, "Your move: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => {
                game_num += 1;
                session.reset(config.first_mover.resolve(game_num, &mut rng));
                writeln!(output, "Restarted.")?;
            }
            Some(Command::Difficulty(level)) => {
                evaluator.set_rollouts_per_candidate(level.rollouts_per_candidate());
                writeln!(output, "Difficulty set to {level}.")?;
            }
            Some(Command::Move(position)) => match session.play(position, Side::Player) {
                Ok(_) => {}
                Err(err @ Error::IllegalMove { .. }) => {
                    debug!(position, "rejected human move");
                    writeln!(output, "{err}")?;
                }
                Err(err) => return Err(err.into()),
            },
            None => writeln!(output, "Unrecognized input '{}'", line.trim())?,
        }
    }

    Ok(summary)
}
