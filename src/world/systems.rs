//! Systems advancing the session clock and placing the campus objects.
use bevy::prelude::*;

use crate::{
    core::plugin::SimulationClock,
    interactions::{dispatcher::EventDispatcher, events::GameOverEvent},
    player::components::{Interactable, RestState},
    scoring::components::SessionPhase,
};

use super::time::{ClockSettings, GameClock};

/// Advances game time while the world is live. Time stands still while the
/// player sleeps (the sleep handler applies the skipped hours itself) and
/// once the session has finished.
pub fn advance_game_clock(
    mut clock: ResMut<GameClock>,
    settings: Res<ClockSettings>,
    simulation_clock: Res<SimulationClock>,
    rest: Res<RestState>,
    phase: Res<SessionPhase>,
    mut dispatcher: ResMut<EventDispatcher>,
    mut game_over: MessageWriter<GameOverEvent>,
) {
    if rest.sleeping || !phase.is_running() {
        return;
    }

    let delta = simulation_clock.last_scaled_delta().as_secs_f32() * settings.time_scale;
    let rolled = clock.advance(delta);
    if rolled > 0 {
        dispatcher.advance_day();
        info!("Day {} begins", clock.day());
    }

    if clock.consume_session_end() {
        game_over.write(GameOverEvent);
    }
}

/// Lays out the interactable campus objects around the spawn point.
///
/// Positions stand in for the authored tile maps; the trigger strings use
/// the same wire format a map editor would attach to its objects.
pub fn spawn_campus(mut commands: Commands) {
    let objects: [(&str, Option<&str>, Option<&str>, Vec2); 11] = [
        (
            "Your room",
            Some("accomodation"),
            None,
            Vec2::new(-120.0, 80.0),
        ),
        (
            "Computer science building",
            Some("comp_sci"),
            None,
            Vec2::new(200.0, 120.0),
        ),
        ("Study hub", Some("rch"), None, Vec2::new(320.0, 40.0)),
        ("Canteen", Some("eat"), None, Vec2::new(80.0, -140.0)),
        ("Kitchen", Some("cook"), None, Vec2::new(-180.0, -60.0)),
        ("Bench", Some("chat"), None, Vec2::new(0.0, 180.0)),
        (
            "Basketball court",
            Some("basketball"),
            None,
            Vec2::new(260.0, -180.0),
        ),
        ("Duck pond", Some("ducks"), None, Vec2::new(-260.0, 160.0)),
        ("Old tree", Some("tree"), None, Vec2::new(-60.0, 260.0)),
        ("Chest", Some("chest"), None, Vec2::new(140.0, 240.0)),
        (
            "Noticeboard",
            None,
            Some("Exams start at the end of the week.\nGood luck!"),
            Vec2::new(40.0, 60.0),
        ),
    ];

    for (label, trigger, sign_text, position) in objects {
        commands.spawn((
            Interactable {
                label: label.to_string(),
                trigger: trigger.map(str::to_string),
                sign_text: sign_text.map(str::to_string),
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            Name::new(label.to_string()),
        ));
    }
}
