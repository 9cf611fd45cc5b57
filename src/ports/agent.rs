//! Agent port - abstraction for anything that picks moves
//!
//! The robot, the random baseline and the line-blocking baseline all sit
//! behind this trait so the match pipeline can pit any two of them against
//! each other.

use crate::{
    Result,
    tictactoe::{Board, Side},
};

/// Agent trait - unified interface for move selection
///
/// # Examples
///
/// ```no_run
/// use rollout_ttt::{
///     ports::Agent,
///     tictactoe::{Board, Side},
/// };
///
/// fn opening<A: Agent>(agent: &mut A) -> rollout_ttt::Result<usize> {
///     agent.select_move(&Board::new(), Side::Robot)
/// }
/// ```
pub trait Agent: Send {
    /// Select a move for `side` on `board`.
    ///
    /// The returned position (0-8) must be a free cell.
    ///
    /// # Errors
    ///
    /// Returns an error if no valid moves are available (full board).
    fn select_move(&mut self, board: &Board, side: Side) -> Result<usize>;

    /// Get the agent's name.
    fn name(&self) -> &str;

    /// Reseed the agent's randomness for reproducible matches.
    ///
    /// The default implementation does nothing, suitable for deterministic
    /// agents.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
