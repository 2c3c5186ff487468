//! High score leaderboard
//!
//! Kept in memory and carried through the game state across restarts. Loading
//! and saving the list is left to the host application.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score
    pub score: u64,
    /// Completed rounds when the game ended
    pub round: u32,
}

/// High score leaderboard, sorted by descending score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a final score earns a place (zero never does)
    pub fn qualifies(&self, score: u64) -> bool {
        let has_room = self.entries.len() < MAX_HIGH_SCORES;
        score > 0 && (has_room || self.entries.last().is_some_and(|lowest| score > lowest.score))
    }

    /// Insert a finished game, returning its 1-based rank
    ///
    /// Equal scores rank below the ones already listed.
    pub fn add_score(&mut self, score: u64, round: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let index = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, HighScoreEntry { score, round });
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(index + 1)
    }

    /// Best score so far
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
