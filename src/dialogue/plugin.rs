//! Dialogue plugin wiring the session controller and reveal systems.
use bevy::prelude::*;

use super::{
    controller::DialogueController,
    systems::{scroll_dialogue_text, DialogueSettings},
};

pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogueController>()
            .init_resource::<DialogueSettings>()
            .add_systems(Startup, log_dialogue_settings)
            .add_systems(Update, scroll_dialogue_text);
    }
}

fn log_dialogue_settings(settings: Res<DialogueSettings>) {
    info!(
        "DialoguePlugin initialised, reveal rate {:.0} chars/s",
        settings.chars_per_second
    );
}
