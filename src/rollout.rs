//! Move selection by weighted random rollouts
//!
//! The robot scores every free cell by playing many random continuations
//! from the position after that move. Wins found early in a continuation
//! weigh more than wins found late; robot wins add, player wins subtract.

pub mod difficulty;
pub mod evaluator;

pub use difficulty::Difficulty;
pub use evaluator::{MoveScore, RolloutEvaluator, best_move, score_candidates, select_best, simulate};
