//! Agent implementations (adapters for the [`Agent`] port)

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    ports::Agent,
    rollout::{Difficulty, RolloutEvaluator},
    tictactoe::{Board, LineAnalyzer, Side},
};

/// The rollout robot
pub struct RobotAgent {
    name: String,
    evaluator: RolloutEvaluator,
}

impl RobotAgent {
    pub fn new(name: String, evaluator: RolloutEvaluator) -> Self {
        Self { name, evaluator }
    }

    /// Create a robot for a difficulty level, named after it
    pub fn for_difficulty(difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self::new(
            format!("Robot-{difficulty}"),
            RolloutEvaluator::from_difficulty(difficulty, seed),
        )
    }

    pub fn evaluator(&self) -> &RolloutEvaluator {
        &self.evaluator
    }
}

impl Agent for RobotAgent {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<usize> {
        self.evaluator.choose(board, side)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.evaluator.reseed(seed);
        Ok(())
    }
}

/// Random policy agent (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _side: Side) -> Result<usize> {
        let moves = board.free_cells();
        if moves.is_empty() {
            return Err(crate::Error::NoLegalMove);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Line-aware baseline
///
/// 1. Completes its own line if it can
/// 2. Otherwise blocks the opponent's immediate win
/// 3. Otherwise plays randomly
pub struct BlockingAgent {
    name: String,
    rng: StdRng,
}

impl BlockingAgent {
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for BlockingAgent {
    fn select_move(&mut self, board: &Board, side: Side) -> Result<usize> {
        if let Some(&win) = LineAnalyzer::winning_moves(&board.cells, side).first() {
            return Ok(win);
        }
        if let Some(&block) = LineAnalyzer::winning_moves(&board.cells, side.opponent()).first() {
            return Ok(block);
        }

        let moves = board.free_cells();
        if moves.is_empty() {
            return Err(crate::Error::NoLegalMove);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
