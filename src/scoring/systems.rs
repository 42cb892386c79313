//! Systems closing out the session and recording the final score.
use bevy::prelude::*;

use crate::{
    dialogue::controller::DialogueController,
    interactions::events::GameOverEvent,
    player::components::{PlayerResources, RestState},
};

use super::{
    components::{FinalSummary, PlayerProfile, SessionPhase},
    leaderboard::LeaderboardStore,
};

/// Hour-to-score multiplier applied to the summed activity counters.
const SCORE_PER_HOUR: u32 = 100;

/// Finishes the session on the first game-over message: computes the score,
/// persists it, and publishes the final summary. Later duplicates are
/// ignored.
pub fn handle_game_over(
    mut commands: Commands,
    mut events: MessageReader<GameOverEvent>,
    mut phase: ResMut<SessionPhase>,
    mut rest: ResMut<RestState>,
    mut dialogue: ResMut<DialogueController>,
    resources: Res<PlayerResources>,
    profile: Res<PlayerProfile>,
    mut store: ResMut<LeaderboardStore>,
) {
    for _ in events.read() {
        if !phase.is_running() {
            continue;
        }
        *phase = SessionPhase::Finished;
        // Any sleep callbacks still in flight must find the flag cleared.
        rest.sleeping = false;
        dialogue.hide();

        let score = (resources.hours_studied()
            + resources.hours_recreational()
            + resources.hours_slept())
            * SCORE_PER_HOUR;
        store.record(&profile.name, score);
        commands.insert_resource(FinalSummary {
            hours_studied: resources.hours_studied(),
            hours_recreational: resources.hours_recreational(),
            hours_slept: resources.hours_slept(),
            score,
        });

        info!(
            "Session complete: studied {}h, recreation {}h, slept {}h, score {}",
            resources.hours_studied(),
            resources.hours_recreational(),
            resources.hours_slept(),
            score
        );
    }
}
