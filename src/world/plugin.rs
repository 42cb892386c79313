//! WorldPlugin coordinates the session clock and the campus layout.
use bevy::prelude::*;

use super::{
    systems::{advance_game_clock, spawn_campus},
    time::{format_time, ClockSettings, GameClock},
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        let settings = ClockSettings::load_or_default();
        info!(
            "Session clock configured: day starts at {}, alarm at {}, {} day run",
            format_time(settings.start_seconds as i32),
            format_time(settings.wake_threshold as i32),
            settings.max_days
        );

        app.insert_resource(GameClock::from_settings(&settings))
            .insert_resource(settings)
            .add_systems(Startup, spawn_campus)
            .add_systems(Update, advance_game_clock);
    }
}
