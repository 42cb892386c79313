//! Scoring plugin wiring the session phase and the leaderboard store.
use bevy::prelude::*;

use super::{
    components::{PlayerProfile, SessionPhase},
    leaderboard::LeaderboardStore,
    systems::handle_game_over,
};

pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionPhase>()
            .init_resource::<PlayerProfile>()
            .init_resource::<LeaderboardStore>()
            .add_systems(Startup, log_leaderboard_state)
            .add_systems(Update, handle_game_over);
    }
}

fn log_leaderboard_state(store: Res<LeaderboardStore>) {
    info!(
        "ScoringPlugin initialised, {} leaderboard entries on file",
        store.board().len()
    );
}
