//! Messages exchanged between input, dispatch, and scoring.
use bevy::prelude::Message;

use super::keys::GameEvent;

/// Fired when input or a resolved dialogue choice requests an interaction.
#[derive(Message, Debug, Clone)]
pub struct InteractionRequestedEvent {
    pub event: GameEvent,
}

/// Fired once when the session ends, either by the clock reaching the final
/// day or an explicit game-over trigger.
#[derive(Message, Debug, Clone)]
pub struct GameOverEvent;
