//! Board representation and the rules of the game

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::GameStatus, lines::LineAnalyzer};

/// One of the two participants of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human at the keyboard
    Player,
    /// The automated opponent
    Robot,
}

impl Side {
    /// Get the other side
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Robot,
            Side::Robot => Side::Player,
        }
    }

    /// Glyph used when rendering a mark of this side
    pub fn to_char(self) -> char {
        match self {
            Side::Player => 'x',
            Side::Robot => 'o',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Robot => write!(f, "robot"),
        }
    }
}

impl FromStr for Side {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player" | "human" | "x" => Ok(Side::Player),
            "robot" | "o" => Ok(Side::Robot),
            _ => Err(crate::Error::ParseSide {
                input: s.to_string(),
            }),
        }
    }
}

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Mark(Side),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(side) => side.to_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'x' | 'X' => Some(Cell::Mark(Side::Player)),
            'o' | 'O' | '0' => Some(Cell::Mark(Side::Robot)),
            _ => None,
        }
    }
}

/// The 3x3 grid, indexed
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// A board is a plain value: [`Board::apply`] returns a new board and never
/// touches the receiver, so rollouts can freely work on copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Parse a board from a 9-character string such as `"oo.xx...."`.
    ///
    /// Row separators (`|`, `/` and newlines, as in `"oo.|xx.|..."`) are
    /// skipped. A space counts as an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 cells or a
    /// character is invalid.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '|' | '/'))
            .collect();

        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    ///
    /// # Panics
    ///
    /// Panics if `pos` is 9 or more. Use [`Board::apply`] for unchecked input.
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    ///
    /// # Panics
    ///
    /// Panics if `pos` is 9 or more.
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// All empty positions, in ascending order
    pub fn free_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of marks a side has on the board
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Mark(side))
            .count()
    }

    /// Place `side`'s mark at `pos` and return the resulting board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if `pos` is outside 0-8 or the
    /// cell is already marked.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, pos: usize, side: Side) -> Result<Board, crate::Error> {
        if pos >= 9 || !self.is_empty(pos) {
            return Err(crate::Error::IllegalMove { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = Cell::Mark(side);
        Ok(next)
    }

    /// Check if a side has completed any line
    pub fn has_winner(&self, side: Side) -> bool {
        LineAnalyzer::has_won(&self.cells, side)
    }

    /// Check if every cell is marked
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Side> {
        if self.has_winner(Side::Player) {
            Some(Side::Player)
        } else if self.has_winner(Side::Robot) {
            Some(Side::Robot)
        } else {
            None
        }
    }

    /// Derive the game status from the marks on the board
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(side) => GameStatus::Won(side),
            None if self.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Compact single-line encoding, the inverse of [`Board::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
