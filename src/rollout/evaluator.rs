//! Rollout evaluator for the robot's move selection

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::Difficulty;
use crate::{
    Error, Result,
    tictactoe::{Board, Cell, Side},
};

/// Accumulated rollout score of one candidate cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub position: usize,
    pub score: i64,
}

/// Run one random continuation from `candidate` and return its signed weight.
///
/// `mover` is the side that just played the candidate move. Turns alternate
/// starting with its opponent; before every placement the weight drops by
/// one. The first line completed ends the rollout: `+weight` when the robot
/// completed it, `-weight` when the player did. A rollout that fills the
/// board without a new line scores 0.
///
/// The candidate position itself is not checked for a win, so a rollout
/// can start from a board that is already won.
pub fn simulate<R: Rng>(candidate: &Board, mover: Side, initial_weight: i64, rng: &mut R) -> i64 {
    let mut work = *candidate;
    let mut turn = mover;
    let mut weight = initial_weight;

    loop {
        turn = turn.opponent();
        weight -= 1;

        let free = work.free_cells();
        if free.is_empty() {
            return 0;
        }

        let position = free[rng.random_range(0..free.len())];
        work.cells[position] = Cell::Mark(turn);

        if work.has_winner(turn) {
            return match turn {
                Side::Robot => weight,
                Side::Player => -weight,
            };
        }
    }
}

/// Score every free cell of `board` for `mover`, in ascending cell order.
///
/// Each candidate gets `rollouts_per_candidate` rollouts. The starting
/// weight is the number of free cells before the candidate move.
///
/// # Errors
///
/// Returns [`Error::NoLegalMove`] if the board has no free cell.
pub fn score_candidates<R: Rng>(
    board: &Board,
    mover: Side,
    rollouts_per_candidate: usize,
    rng: &mut R,
) -> Result<Vec<MoveScore>> {
    let candidates = board.free_cells();
    if candidates.is_empty() {
        return Err(Error::NoLegalMove);
    }

    let initial_weight = candidates.len() as i64;
    let mut scores = Vec::with_capacity(candidates.len());

    for position in candidates {
        let candidate_board = board.apply(position, mover)?;
        let mut score = 0;
        for _ in 0..rollouts_per_candidate {
            score += simulate(&candidate_board, mover, initial_weight, rng);
        }
        trace!(position, score, "candidate scored");
        scores.push(MoveScore { position, score });
    }

    Ok(scores)
}

/// Highest score wins; on ties the earliest entry is kept.
pub fn select_best(scores: &[MoveScore]) -> Option<MoveScore> {
    let mut best: Option<MoveScore> = None;
    for &entry in scores {
        if best.is_none_or(|current| entry.score > current.score) {
            best = Some(entry);
        }
    }
    best
}

/// Pick the cell whose rollouts most favor the robot
///
/// # Errors
///
/// Returns [`Error::NoLegalMove`] if the board has no free cell.
pub fn best_move<R: Rng>(
    board: &Board,
    mover: Side,
    rollouts_per_candidate: usize,
    rng: &mut R,
) -> Result<usize> {
    let scores = score_candidates(board, mover, rollouts_per_candidate, rng)?;
    select_best(&scores)
        .map(|best| best.position)
        .ok_or(Error::NoLegalMove)
}

/// Stateful wrapper holding the rollout budget and a seedable RNG
#[derive(Debug, Clone)]
pub struct RolloutEvaluator {
    rollouts_per_candidate: usize,
    rng: StdRng,
}

impl RolloutEvaluator {
    /// Create an evaluator seeded from system entropy
    pub fn new(rollouts_per_candidate: usize) -> Self {
        Self::with_seed(rollouts_per_candidate, random())
    }

    /// Create an evaluator with a deterministic seed
    pub fn with_seed(rollouts_per_candidate: usize, seed: u64) -> Self {
        Self {
            rollouts_per_candidate,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an evaluator for a difficulty level, optionally seeded
    pub fn from_difficulty(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rollouts = difficulty.rollouts_per_candidate();
        match seed {
            Some(seed) => Self::with_seed(rollouts, seed),
            None => Self::new(rollouts),
        }
    }

    pub fn rollouts_per_candidate(&self) -> usize {
        self.rollouts_per_candidate
    }

    pub fn set_rollouts_per_candidate(&mut self, rollouts: usize) {
        self.rollouts_per_candidate = rollouts;
    }

    /// Set or reset the RNG seed
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Score all candidates without choosing
    pub fn scores(&mut self, board: &Board, mover: Side) -> Result<Vec<MoveScore>> {
        score_candidates(board, mover, self.rollouts_per_candidate, &mut self.rng)
    }

    /// Choose a move for `mover` on `board`
    pub fn choose(&mut self, board: &Board, mover: Side) -> Result<usize> {
        let scores = self.scores(board, mover)?;
        let best = select_best(&scores).ok_or(Error::NoLegalMove)?;
        debug!(
            %mover,
            candidates = scores.len(),
            rollouts = self.rollouts_per_candidate,
            position = best.position,
            score = best.score,
            "robot move selected"
        );
        Ok(best.position)
    }
}
