//! Observer implementations for match pipelines

use std::sync::{Arc, Mutex, PoisonError};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameStatus, Side},
};

/// Progress bar observer - shows match progress with a running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    robot_wins: usize,
    draws: usize,
    player_wins: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            robot_wins: 0,
            draws: 0,
            player_wins: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} D:{} P:{}", self.robot_wins, self.draws, self.player_wins)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (R:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, status: GameStatus) -> Result<()> {
        match status {
            GameStatus::Won(Side::Robot) => self.robot_wins += 1,
            GameStatus::Won(Side::Player) => self.player_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Summary of what a [`MetricsObserver`] saw
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchMetrics {
    pub games: usize,
    pub robot_wins: usize,
    pub draws: usize,
    pub player_wins: usize,
    /// Mean number of moves per finished game
    pub average_length: f64,
    /// How often each cell was chosen as the opening move
    pub opening_counts: [usize; 9],
}

/// Metrics observer - tracks outcomes, game lengths and openings
///
/// The observer is usually boxed into a pipeline; keep a [`MetricsObserver::handle`]
/// to read the numbers once the match is over.
pub struct MetricsObserver {
    metrics: Arc<Mutex<MatchMetrics>>,
    current_length: usize,
    total_length: usize,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(Mutex::new(MatchMetrics::default())),
            current_length: 0,
            total_length: 0,
        }
    }

    /// Shared view of the collected metrics
    pub fn handle(&self) -> MetricsHandle {
        MetricsHandle {
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Snapshot of the metrics collected so far
    pub fn metrics(&self) -> MatchMetrics {
        self.handle().snapshot()
    }

    fn update(&self, f: impl FnOnce(&mut MatchMetrics)) {
        let mut guard = self.metrics.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of a [`MetricsObserver`]
#[derive(Debug, Clone)]
pub struct MetricsHandle {
    metrics: Arc<Mutex<MatchMetrics>>,
}

impl MetricsHandle {
    pub fn snapshot(&self) -> MatchMetrics {
        self.metrics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Observer for MetricsObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.current_length = 0;
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        step_num: usize,
        _board: &Board,
        _side: Side,
        position: usize,
    ) -> Result<()> {
        if step_num == 0 {
            self.update(|m| m.opening_counts[position] += 1);
        }
        self.current_length += 1;
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, status: GameStatus) -> Result<()> {
        self.total_length += self.current_length;
        let total_length = self.total_length;
        self.update(|m| {
            match status {
                GameStatus::Won(Side::Robot) => m.robot_wins += 1,
                GameStatus::Won(Side::Player) => m.player_wins += 1,
                GameStatus::Drawn => m.draws += 1,
                GameStatus::InProgress => {}
            }
            m.games += 1;
            m.average_length = total_length as f64 / m.games as f64;
        });
        Ok(())
    }
}
