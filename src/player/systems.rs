//! Player movement, proximity detection, and dialogue input.
use bevy::prelude::*;

use crate::{
    dialogue::controller::DialogueController,
    interactions::{
        dispatcher::EventDispatcher,
        events::InteractionRequestedEvent,
        keys::GameEvent,
    },
    scoring::components::SessionPhase,
};

use super::components::{
    Interactable, NearbyInteractable, Player, PlayerInteractionState, RestState,
};

/// Maximum distance (in world units) for player-object interaction.
const INTERACTION_RANGE: f32 = 48.0;
/// Walk speed in world units per second.
const WALK_SPEED: f32 = 160.0;

/// Spawns the player marker at the campus origin.
pub fn spawn_player(mut commands: Commands) {
    commands.spawn((Player, Transform::default(), Name::new("Player")));
}

/// Moves the player with WASD/arrows. Movement freezes while a dialogue is
/// open, the player sleeps, or the session is over.
pub fn move_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    dialogue: Res<DialogueController>,
    rest: Res<RestState>,
    phase: Res<SessionPhase>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    if dialogue.is_visible() || rest.sleeping || !phase.is_running() {
        return;
    }

    let mut direction = Vec2::ZERO;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        direction.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        direction.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        direction.x += 1.0;
    }

    if direction == Vec2::ZERO {
        return;
    }

    if let Ok(mut transform) = query.single_mut() {
        let step = direction.normalize() * WALK_SPEED * time.delta_secs();
        transform.translation.x += step.x;
        transform.translation.y += step.y;
    }
}

/// Records the closest interactable within range, if any.
pub fn detect_nearby_interactables(
    player_query: Query<&Transform, With<Player>>,
    objects: Query<(&Transform, &Interactable)>,
    mut state: ResMut<PlayerInteractionState>,
) {
    let Ok(player_transform) = player_query.single() else {
        state.nearby = None;
        return;
    };
    let player_pos = player_transform.translation;

    let mut nearest: Option<(&Interactable, f32)> = None;
    for (object_transform, interactable) in objects.iter() {
        let distance = player_pos.distance(object_transform.translation);
        if distance <= INTERACTION_RANGE {
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((interactable, distance)),
            }
        }
    }

    state.nearby = nearest.map(|(interactable, distance)| NearbyInteractable {
        label: interactable.label.clone(),
        trigger: interactable.trigger.clone(),
        sign_text: interactable.sign_text.clone(),
        distance,
    });
}

/// Handles confirm/navigate input: advances or resolves an open dialogue, or
/// offers the nearby object's interaction prompt.
pub fn handle_dialogue_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut dialogue: ResMut<DialogueController>,
    dispatcher: Res<EventDispatcher>,
    state: Res<PlayerInteractionState>,
    rest: Res<RestState>,
    phase: Res<SessionPhase>,
    mut requests: MessageWriter<InteractionRequestedEvent>,
) {
    let confirm = keyboard.just_pressed(KeyCode::KeyE)
        || keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::Space);

    if confirm {
        if dialogue.is_visible() {
            if let Some(event) = dialogue.confirm() {
                requests.write(InteractionRequestedEvent { event });
            }
            return;
        }

        if rest.sleeping || !phase.is_running() {
            return;
        }

        let Some(nearby) = state.nearby.clone() else {
            return;
        };

        if let Some(trigger) = nearby.trigger {
            offer_interaction(&mut dialogue, &dispatcher, &trigger);
        } else if let Some(text) = nearby.sign_text {
            dialogue.open(&text);
        }
        return;
    }

    if dialogue.is_visible() && dialogue.menu().is_visible() {
        if keyboard.just_pressed(KeyCode::KeyW) || keyboard.just_pressed(KeyCode::ArrowUp) {
            dialogue.navigate_up();
        } else if keyboard.just_pressed(KeyCode::KeyS) || keyboard.just_pressed(KeyCode::ArrowDown)
        {
            dialogue.navigate_down();
        }
    }
}

/// Opens the Yes/No prompt for a map trigger. The trigger string is resolved
/// to a typed event here, once; a malformed trigger degrades to flavor text
/// when confirmed.
fn offer_interaction(
    dialogue: &mut DialogueController,
    dispatcher: &EventDispatcher,
    trigger: &str,
) {
    let key = trigger.split_once('-').map_or(trigger, |(key, _)| key);
    let yes_event = GameEvent::parse_trigger(trigger).unwrap_or_else(|error| {
        debug!("Trigger '{trigger}' has bad parameters ({error})");
        GameEvent::Flavor {
            name: error.key.clone(),
        }
    });

    let prompt = dispatcher
        .catalog()
        .prompt(key)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Interact with {key}?"));

    dialogue.open(&prompt);
    dialogue
        .menu_mut()
        .set_options(&["Yes", "No"], &[yes_event, GameEvent::Exit]);
}
