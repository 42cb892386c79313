// src/ui/fade/plugin.rs
//
// FadePlugin renders the transition queue's overlay alpha.

use bevy::prelude::*;

use super::systems::{spawn_fade_overlay, update_fade_overlay};

pub struct FadePlugin;

impl Plugin for FadePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_fade_overlay)
            .add_systems(Update, update_fade_overlay);
    }
}
