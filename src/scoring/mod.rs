//! Scoring module - session phase, final score, and the persisted
//! leaderboard.
pub mod components;
pub mod leaderboard;
pub mod plugin;
pub mod systems;

pub use plugin::ScoringPlugin;
