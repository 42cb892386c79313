// src/ui/hud/plugin.rs
//
// HudPlugin coordinates the clock/energy HUD and the summary window.

use bevy::prelude::*;

use super::components::HudSettings;
use super::systems::{show_final_summary, spawn_hud, update_hud, update_interaction_hint};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(HudSettings::default())
            .add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (update_hud, update_interaction_hint, show_final_summary),
            );
    }
}
