//! Session lifecycle and final-score resources.
use bevy::prelude::*;

/// Whether the session is still being played.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Running,
    Finished,
}

impl SessionPhase {
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Name recorded against leaderboard entries.
#[derive(Resource, Debug, Clone)]
pub struct PlayerProfile {
    pub name: String,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
        }
    }
}

/// Final stats computed once when the session ends.
#[derive(Resource, Debug, Clone)]
pub struct FinalSummary {
    pub hours_studied: u32,
    pub hours_recreational: u32,
    pub hours_slept: u32,
    pub score: u32,
}
