//! Match pipeline: the robot against another agent over many games

use std::path::Path;

use rand::{SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::{Agent, Observer},
    tictactoe::{FirstMover, GameStatus, Session, Side},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed; agents are reseeded from it before the match
    pub seed: Option<u64>,

    /// Who opens each game
    pub first_mover: FirstMover,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            first_mover: FirstMover::Alternate,
        }
    }
}

/// Result of a match, counted from the robot's side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub robot: String,
    pub opponent: String,
    pub total_games: usize,
    pub robot_wins: usize,
    pub draws: usize,
    pub player_wins: usize,
    pub robot_win_rate: f64,
    pub draw_rate: f64,
    pub player_win_rate: f64,
}

impl MatchResult {
    pub fn new(
        robot: String,
        opponent: String,
        robot_wins: usize,
        draws: usize,
        player_wins: usize,
    ) -> Self {
        let total_games = robot_wins + draws + player_wins;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            robot,
            opponent,
            total_games,
            robot_wins,
            draws,
            player_wins,
            robot_win_rate: rate(robot_wins),
            draw_rate: rate(draws),
            player_win_rate: rate(player_wins),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays the robot (always [`Side::Robot`]) against an opponent
/// (always [`Side::Player`])
pub struct MatchRunner {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run the whole match
    pub fn run(&mut self, robot: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<MatchResult> {
        let mut first_rng = match self.config.seed {
            Some(seed) => {
                robot.set_rng_seed(seed)?;
                opponent.set_rng_seed(seed.wrapping_add(1))?;
                StdRng::seed_from_u64(seed.wrapping_add(2))
            }
            None => StdRng::seed_from_u64(random()),
        };

        info!(
            robot = robot.name(),
            opponent = opponent.name(),
            games = self.config.games,
            first_mover = %self.config.first_mover,
            "match started"
        );

        for observer in &mut self.observers {
            observer.on_match_start(self.config.games)?;
        }

        let (mut robot_wins, mut draws, mut player_wins) = (0, 0, 0);
        for game_num in 0..self.config.games {
            let first = self.config.first_mover.resolve(game_num, &mut first_rng);
            match self.play_game(game_num, first, robot, opponent)? {
                GameStatus::Won(Side::Robot) => robot_wins += 1,
                GameStatus::Won(Side::Player) => player_wins += 1,
                GameStatus::Drawn => draws += 1,
                GameStatus::InProgress => {}
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        let result = MatchResult::new(
            robot.name().to_string(),
            opponent.name().to_string(),
            robot_wins,
            draws,
            player_wins,
        );
        info!(
            robot_wins = result.robot_wins,
            draws = result.draws,
            player_wins = result.player_wins,
            "match finished"
        );
        Ok(result)
    }

    fn play_game(
        &mut self,
        game_num: usize,
        first: Side,
        robot: &mut dyn Agent,
        opponent: &mut dyn Agent,
    ) -> Result<GameStatus> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut session = Session::new(first);
        let mut step_num = 0;

        while !session.status().is_terminal() {
            let side = session.to_move();
            let agent: &mut dyn Agent = match side {
                Side::Robot => &mut *robot,
                Side::Player => &mut *opponent,
            };

            let board = *session.board();
            let position = agent.select_move(&board, side)?;
            session.play(position, side)?;

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, &board, side, position)?;
            }
            step_num += 1;
        }

        let status = session.status();
        debug!(game_num, first = %first, status = ?status, moves = step_num, "game recorded");

        for observer in &mut self.observers {
            observer.on_game_end(game_num, status)?;
        }

        Ok(status)
    }
}
