//! Observer port - abstraction for watching matches
//!
//! Observers collect data while the match pipeline plays games, without
//! coupling the game loop to progress bars or metrics.

use crate::{
    Result,
    tictactoe::{Board, GameStatus, Side},
};

/// Observer trait for monitoring matches
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - for each move in the game
///    - `on_game_end(game_num, status)`
/// 3. `on_match_end()` - once at the end
///
/// All methods default to doing nothing.
pub trait Observer: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called once a move has been applied, with the board before the move.
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _side: Side,
        _position: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called with the terminal status (`Won` or `Drawn`) of a game.
    fn on_game_end(&mut self, _game_num: usize, _status: GameStatus) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
