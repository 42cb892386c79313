// src/ui/dialogue_panel/plugin.rs
//
// DialoguePanelPlugin coordinates dialogue panel systems and resources.

use bevy::prelude::*;

use super::components::{DialoguePanelSettings, DialoguePanelTracker};
use super::systems::{spawn_dialogue_panel, sync_choice_menu, update_dialogue_panel};

pub struct DialoguePanelPlugin;

impl Plugin for DialoguePanelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(DialoguePanelSettings::default())
            .insert_resource(DialoguePanelTracker::default())
            .add_systems(Startup, spawn_dialogue_panel)
            .add_systems(
                Update,
                (
                    update_dialogue_panel,
                    sync_choice_menu.after(update_dialogue_panel),
                ),
            );
    }
}
