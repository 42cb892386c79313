//! Systems advancing the dialogue reveal each frame.
use bevy::prelude::*;

use crate::core::plugin::SimulationClock;

use super::{controller::DialogueController, reveal::DEFAULT_CHARS_PER_SECOND};

/// Tunable dialogue pacing.
#[derive(Resource, Debug, Clone)]
pub struct DialogueSettings {
    /// Reveal rate of the typewriter effect.
    pub chars_per_second: f32,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            chars_per_second: DEFAULT_CHARS_PER_SECOND,
        }
    }
}

/// Advances the reveal timer of the active dialogue session.
pub fn scroll_dialogue_text(
    simulation_clock: Res<SimulationClock>,
    settings: Res<DialogueSettings>,
    mut dialogue: ResMut<DialogueController>,
) {
    if !dialogue.is_visible() {
        return;
    }
    let delta = simulation_clock.last_scaled_delta().as_secs_f32();
    dialogue.tick(delta, settings.chars_per_second);
}
