//! Game session management
//!
//! A [`Session`] owns one running game: the board, whose turn it is and the
//! move history. Turn state lives here and is passed explicitly to the board
//! and the evaluator, never kept in ambient state.

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::{Board, Side};
use crate::{Error, Result, rollout::RolloutEvaluator};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub side: Side,
}

/// Status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Side),
    Drawn,
}

impl GameStatus {
    /// Whether the game has ended (win or draw)
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Announcement shown to the human when the game ends
    pub fn announcement(self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(Side::Robot) => Some("Robot won!!!"),
            GameStatus::Won(Side::Player) => Some("You won!!!"),
            GameStatus::Drawn => Some("Draw!"),
        }
    }
}

/// One game between the human and the robot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    to_move: Side,
    first_mover: Side,
    status: GameStatus,
    history: Vec<Move>,
}

impl Session {
    /// Create a new game where `first` makes the opening move
    pub fn new(first: Side) -> Self {
        Session {
            board: Board::new(),
            to_move: first,
            first_mover: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Create a new game with a coin flip deciding who opens
    pub fn with_random_first<R: Rng>(rng: &mut R) -> Self {
        Self::new(random_side(rng))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Play a move for `side`
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the game already ended
    /// - [`Error::NotYourTurn`] if it is the other side's turn
    /// - [`Error::IllegalMove`] if the cell is taken or out of range
    ///
    /// On error the session is left unchanged.
    pub fn play(&mut self, position: usize, side: Side) -> Result<GameStatus> {
        if self.status.is_terminal() {
            return Err(Error::GameOver);
        }
        if side != self.to_move {
            return Err(Error::NotYourTurn {
                expected: self.to_move,
                got: side,
            });
        }

        self.board = self.board.apply(position, side)?;
        self.history.push(Move { position, side });
        self.to_move = side.opponent();
        self.status = self.board.status();

        debug!(position, %side, status = ?self.status, "move applied");
        if self.status.is_terminal() {
            info!(
                status = ?self.status,
                moves = self.history.len(),
                "game finished"
            );
        }

        Ok(self.status)
    }

    /// Let the robot pick and play its move
    ///
    /// Returns the chosen position and the resulting status.
    pub fn play_robot(&mut self, evaluator: &mut RolloutEvaluator) -> Result<(usize, GameStatus)> {
        if self.status.is_terminal() {
            return Err(Error::GameOver);
        }
        if self.to_move != Side::Robot {
            return Err(Error::NotYourTurn {
                expected: self.to_move,
                got: Side::Robot,
            });
        }

        let position = evaluator.choose(&self.board, Side::Robot)?;
        let status = self.play(position, Side::Robot)?;
        Ok((position, status))
    }

    /// Clear the board for a new game where `first` opens
    pub fn reset(&mut self, first: Side) {
        *self = Session::new(first);
    }
}

/// Who opens each game of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    Robot,
    Player,
    /// Alternate starting with the robot
    Alternate,
    /// Coin flip per game
    #[default]
    Random,
}

impl FirstMover {
    /// Decide who opens game number `game_num`
    pub fn resolve<R: Rng>(self, game_num: usize, rng: &mut R) -> Side {
        match self {
            FirstMover::Robot => Side::Robot,
            FirstMover::Player => Side::Player,
            FirstMover::Alternate if game_num.is_multiple_of(2) => Side::Robot,
            FirstMover::Alternate => Side::Player,
            FirstMover::Random => random_side(rng),
        }
    }
}

impl fmt::Display for FirstMover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FirstMover::Robot => "robot",
            FirstMover::Player => "player",
            FirstMover::Alternate => "alternate",
            FirstMover::Random => "random",
        };
        f.write_str(name)
    }
}

impl FromStr for FirstMover {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "robot" => Ok(FirstMover::Robot),
            "player" | "human" => Ok(FirstMover::Player),
            "alternate" => Ok(FirstMover::Alternate),
            "random" => Ok(FirstMover::Random),
            _ => Err(Error::ParseFirstMover {
                input: s.to_string(),
                expected: "robot, player, alternate, random".to_string(),
            }),
        }
    }
}

/// Flip a fair coin between the two sides
pub fn random_side<R: Rng>(rng: &mut R) -> Side {
    if rng.random_bool(0.5) {
        Side::Robot
    } else {
        Side::Player
    }
}
