use bevy::prelude::*;

mod core;
mod dialogue;
mod interactions;
mod player;
mod scoring;
mod ui;
mod world;

use crate::{
    core::CorePlugin, dialogue::DialoguePlugin, interactions::InteractionsPlugin,
    player::PlayerPlugin, scoring::ScoringPlugin, ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            CorePlugin::default(),
            WorldPlugin,
            DialoguePlugin,
            InteractionsPlugin,
            PlayerPlugin,
            ScoringPlugin,
            UiPlugin, // After DialoguePlugin so the panel reads a live session
        ))
        .run();
}
