//! Persistent high-score table.
use std::{
    fs,
    path::{Path, PathBuf},
};

use bevy::log::warn;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Scores kept on the board.
pub const MAX_ENTRIES: usize = 10;

const LEADERBOARD_PATH: &str = "leaderboard.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

/// Descending score table capped at [`MAX_ENTRIES`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Inserts a score in rank order. Returns false when the board is full
    /// and the score does not beat the lowest entry.
    pub fn add_score(&mut self, name: impl Into<String>, score: u32) -> bool {
        if self.entries.len() >= MAX_ENTRIES
            && self.entries.last().is_some_and(|last| last.score >= score)
        {
            return false;
        }

        let position = self
            .entries
            .iter()
            .position(|entry| entry.score < score)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            position,
            ScoreEntry {
                name: name.into(),
                score,
            },
        );
        self.entries.truncate(MAX_ENTRIES);
        true
    }

    pub fn score_at(&self, index: usize) -> Option<u32> {
        self.entries.get(index).map(|entry| entry.score)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Leaderboard plus the file it round-trips through.
#[derive(Resource, Debug)]
pub struct LeaderboardStore {
    board: Leaderboard,
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let board = match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str::<Leaderboard>(&data) {
                Ok(board) => board,
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Starting a fresh leaderboard.",
                        path.display(),
                        err
                    );
                    Leaderboard::default()
                }
            },
            Err(_) => Leaderboard::default(),
        };
        Self { board, path }
    }

    pub fn board(&self) -> &Leaderboard {
        &self.board
    }

    /// Records a score and persists the board.
    pub fn record(&mut self, name: &str, score: u32) -> bool {
        let added = self.board.add_score(name, score);
        if added {
            self.save();
        }
        added
    }

    fn save(&self) {
        match serde_json::to_string_pretty(&self.board) {
            Ok(data) => {
                if let Err(err) = write_atomically(&self.path, &data) {
                    warn!("Failed to write {}: {}", self.path.display(), err);
                }
            }
            Err(err) => warn!("Failed to serialise leaderboard: {}", err),
        }
    }
}

impl Default for LeaderboardStore {
    fn default() -> Self {
        Self::load_or_default(LEADERBOARD_PATH)
    }
}

fn write_atomically(path: &Path, data: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_top_score_lands_at_the_first_slot() {
        let mut board = Leaderboard::default();
        board.add_score("A", 300);
        board.add_score("B", 500);

        assert_eq!(board.score_at(0), Some(500));
        assert_eq!(board.score_at(1), Some(300));

        let top = board.score_at(0).unwrap();
        assert!(board.add_score("C", top + 1));
        assert_eq!(board.score_at(0), Some(top + 1));
    }

    #[test]
    fn a_full_board_rejects_scores_below_the_cut() {
        let mut board = Leaderboard::default();
        for i in 0..MAX_ENTRIES {
            board.add_score("Filler", (i as u32) + 2);
        }
        assert_eq!(board.len(), MAX_ENTRIES);

        assert!(!board.add_score("Late", 1));
        assert!(board.score_at(board.len() - 1).unwrap() > 1);
    }

    #[test]
    fn inserting_into_a_full_board_drops_the_lowest() {
        let mut board = Leaderboard::default();
        for i in 0..MAX_ENTRIES {
            board.add_score("Filler", ((i as u32) + 1) * 100);
        }

        assert!(board.add_score("Mid", 550));
        assert_eq!(board.len(), MAX_ENTRIES);
        assert_eq!(board.score_at(0), Some(1000));
        // The previous lowest (100) fell off the board.
        assert_eq!(board.score_at(board.len() - 1), Some(200));
    }

    #[test]
    fn entries_serialise_and_round_trip() {
        let mut board = Leaderboard::default();
        board.add_score("A", 700);
        board.add_score("B", 400);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Leaderboard = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.entries(), board.entries());
    }
}
