//! Leaderboard Merge
//!
//! The engine never touches storage; it supplies the top-score merge rule
//! the persistence collaborator applies when a session ends. At most three
//! final scores are retained, descending, with ties keeping the older entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of retained scores.
pub const LEADERBOARD_CAPACITY: usize = 3;

/// One recorded final score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Final session score.
    pub score: u32,
    /// When the score was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Ordered top-score list (descending).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from previously persisted entries.
    ///
    /// Restores the ordering and capacity invariants regardless of how the
    /// entries were stored.
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(LEADERBOARD_CAPACITY);
        Self { entries }
    }

    /// Retained entries, best first.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// The best retained score, if any.
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|entry| entry.score)
    }

    /// Merge a final score; returns whether it made the list.
    ///
    /// A score ties with the current worst only displaces it when the list
    /// still has room; a full list keeps the older entry.
    pub fn submit(&mut self, score: u32) -> bool {
        let qualifies = self.entries.len() < LEADERBOARD_CAPACITY
            || self.entries.last().is_some_and(|worst| score > worst.score);
        if qualifies {
            self.entries.push(ScoreEntry { score, recorded_at: Utc::now() });
            self.entries.sort_by(|a, b| b.score.cmp(&a.score));
            self.entries.truncate(LEADERBOARD_CAPACITY);
        }
        qualifies
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(board: &Leaderboard) -> Vec<u32> {
        board.entries().iter().map(|entry| entry.score).collect()
    }

    #[test]
    fn test_keeps_top_three_descending() {
        let mut board = Leaderboard::new();
        for score in [100, 300, 200, 50, 400] {
            board.submit(score);
        }
        assert_eq!(scores(&board), vec![400, 300, 200]);
        assert_eq!(board.best(), Some(400));
    }

    #[test]
    fn test_submit_reports_qualification() {
        let mut board = Leaderboard::new();
        assert!(board.submit(10));
        assert!(board.submit(20));
        assert!(board.submit(30));
        assert!(!board.submit(5));
        assert!(board.submit(25));
        assert_eq!(scores(&board), vec![30, 25, 20]);
    }

    #[test]
    fn test_tie_with_worst_keeps_older_entry() {
        let mut board = Leaderboard::new();
        for score in [30, 20, 10] {
            board.submit(score);
        }
        assert!(!board.submit(10));
        assert_eq!(scores(&board), vec![30, 20, 10]);
    }

    #[test]
    fn test_from_entries_restores_invariants() {
        let at = Utc::now();
        let entries = vec![
            ScoreEntry { score: 10, recorded_at: at },
            ScoreEntry { score: 40, recorded_at: at },
            ScoreEntry { score: 30, recorded_at: at },
            ScoreEntry { score: 20, recorded_at: at },
        ];
        let board = Leaderboard::from_entries(entries);
        assert_eq!(scores(&board), vec![40, 30, 20]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = Leaderboard::new();
        board.submit(123);
        board.submit(456);
        let json = serde_json::to_string(&board).unwrap();
        let restored: Leaderboard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);
    }
}
