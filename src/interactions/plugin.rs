//! Interactions plugin wiring the dispatcher, catalog, and transition queue.
use bevy::prelude::*;

use super::{
    dispatcher::EventDispatcher,
    events::{GameOverEvent, InteractionRequestedEvent},
    scheduler::TransitionQueue,
    systems::{drive_transition_queue, run_event_dispatcher},
};

pub struct InteractionsPlugin;

impl Plugin for InteractionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EventDispatcher>()
            .init_resource::<TransitionQueue>()
            .add_message::<InteractionRequestedEvent>()
            .add_message::<GameOverEvent>()
            .add_systems(Startup, log_catalog_size)
            .add_systems(
                Update,
                (run_event_dispatcher, drive_transition_queue).chain(),
            );
    }
}

fn log_catalog_size(dispatcher: Res<EventDispatcher>) {
    info!(
        "InteractionsPlugin initialised with {} catalogued interactions",
        dispatcher.catalog().len()
    );
}
