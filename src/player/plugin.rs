//! Player plugin wiring movement, proximity, and dialogue input.
use bevy::prelude::*;

use super::{
    components::{PlayerInteractionState, PlayerResources, RestState},
    systems::{detect_nearby_interactables, handle_dialogue_input, move_player, spawn_player},
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerResources>()
            .init_resource::<RestState>()
            .init_resource::<PlayerInteractionState>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    move_player,
                    detect_nearby_interactables.after(move_player),
                    handle_dialogue_input.after(detect_nearby_interactables),
                ),
            );
    }
}
