// src/ui/fade/systems.rs
//
// Systems keeping the fade overlay in sync with the transition queue.

use bevy::prelude::*;
use bevy::ui::GlobalZIndex;

use crate::interactions::scheduler::TransitionQueue;

use super::components::FadeOverlay;

/// Spawns the full-screen black overlay, initially transparent. The overlay
/// sits below the dialogue panel so the sleep summary stays readable while
/// the screen is dark.
pub fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        GlobalZIndex(5),
        FadeOverlay,
        Name::new("Fade Overlay"),
    ));
}

/// Applies the queue's current alpha to the overlay.
pub fn update_fade_overlay(
    transitions: Res<TransitionQueue>,
    mut overlay_query: Query<&mut BackgroundColor, With<FadeOverlay>>,
) {
    if let Ok(mut background) = overlay_query.single_mut() {
        background.0 = Color::srgba(0.0, 0.0, 0.0, transitions.overlay_alpha());
    }
}
