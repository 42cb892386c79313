//! Systems feeding the dispatcher and resolving deferred transitions.
use bevy::prelude::*;

use crate::{
    core::plugin::SimulationClock,
    dialogue::controller::DialogueController,
    player::components::{PlayerResources, RestState},
    world::time::GameClock,
};

use super::{
    dispatcher::{DispatchCtx, EventDispatcher, GameSignal},
    events::{GameOverEvent, InteractionRequestedEvent},
    scheduler::{Guard, TransitionQueue},
};

/// Runs every requested interaction through the dispatcher.
pub fn run_event_dispatcher(
    mut requests: MessageReader<InteractionRequestedEvent>,
    mut dispatcher: ResMut<EventDispatcher>,
    mut clock: ResMut<GameClock>,
    mut resources: ResMut<PlayerResources>,
    mut dialogue: ResMut<DialogueController>,
    mut transitions: ResMut<TransitionQueue>,
    mut rest: ResMut<RestState>,
    mut game_over: MessageWriter<GameOverEvent>,
) {
    for request in requests.read() {
        let mut ctx = DispatchCtx {
            clock: &mut *clock,
            resources: &mut *resources,
            dialogue: &mut *dialogue,
            transitions: &mut *transitions,
            rest: &mut *rest,
        };
        if let Some(GameSignal::GameOver) = dispatcher.dispatch(request.event.clone(), &mut ctx) {
            game_over.write(GameOverEvent);
        }
    }
}

/// Ticks the transition queue and applies whichever guarded callbacks came
/// due this frame. Guards are evaluated here, immediately before each action
/// runs; a stale callback is dropped without effect.
pub fn drive_transition_queue(
    simulation_clock: Res<SimulationClock>,
    mut dispatcher: ResMut<EventDispatcher>,
    mut clock: ResMut<GameClock>,
    mut resources: ResMut<PlayerResources>,
    mut dialogue: ResMut<DialogueController>,
    mut transitions: ResMut<TransitionQueue>,
    mut rest: ResMut<RestState>,
    mut game_over: MessageWriter<GameOverEvent>,
) {
    let delta = simulation_clock.last_scaled_delta().as_secs_f32();
    let sleeping = rest.sleeping;
    let ready = transitions.tick(delta, |guard| match guard {
        Guard::None => true,
        Guard::PlayerSleeping => sleeping,
    });

    for action in ready {
        let mut ctx = DispatchCtx {
            clock: &mut *clock,
            resources: &mut *resources,
            dialogue: &mut *dialogue,
            transitions: &mut *transitions,
            rest: &mut *rest,
        };
        if let Some(GameSignal::GameOver) = dispatcher.apply_deferred(action, &mut ctx) {
            game_over.write(GameOverEvent);
        }
    }
}
