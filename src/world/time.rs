//! Session clock configuration, day tracking, and time formatting.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/time.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawTimeConfig {
    #[serde(default)]
    clock: RawClockSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawClockSection {
    time_scale: f32,
    start_seconds: f32,
    wake_threshold: f32,
    max_days: u32,
}

impl Default for RawClockSection {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            start_seconds: 8.0 * 60.0,
            wake_threshold: 8.0 * 60.0,
            max_days: 8,
        }
    }
}

/// Tunable parameters describing how the session clock behaves.
#[derive(Resource, Debug, Clone)]
pub struct ClockSettings {
    /// Clock units added per real second while the world runs.
    pub time_scale: f32,
    /// Clock position at the start of day one.
    pub start_seconds: f32,
    /// Clock position of the morning alarm.
    pub wake_threshold: f32,
    /// The session ends when the day counter reaches this value.
    pub max_days: u32,
}

impl Default for ClockSettings {
    fn default() -> Self {
        RawClockSection::default().into()
    }
}

impl ClockSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawTimeConfig>(&data) {
                Ok(raw) => raw.clock.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawClockSection::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawClockSection::default().into()
            }
        }
    }
}

impl From<RawClockSection> for ClockSettings {
    fn from(value: RawClockSection) -> Self {
        Self {
            time_scale: value.time_scale.max(0.0),
            start_seconds: value.start_seconds.rem_euclid(GameClock::SECONDS_PER_DAY),
            wake_threshold: value.wake_threshold.rem_euclid(GameClock::SECONDS_PER_DAY),
            max_days: value.max_days.max(1),
        }
    }
}

/// Runtime state of the session clock.
///
/// A day is 1440 clock units (one per minute of game time); the counter wraps
/// at day end and the day number increments per wrap. Reaching the configured
/// final day latches the session-over state, which is surfaced exactly once
/// through [`GameClock::consume_session_end`].
#[derive(Resource, Debug)]
pub struct GameClock {
    day_seconds: f32,
    day: u32,
    max_days: u32,
    wake_threshold: f32,
    session_over: bool,
    end_notified: bool,
}

impl GameClock {
    /// Clock units in one in-game day.
    pub const SECONDS_PER_DAY: f32 = 1440.0;

    pub fn from_settings(settings: &ClockSettings) -> Self {
        Self {
            day_seconds: settings.start_seconds,
            day: 1,
            max_days: settings.max_days,
            wake_threshold: settings.wake_threshold,
            session_over: false,
            end_notified: false,
        }
    }

    /// Clock units elapsed since midnight of the current day.
    pub fn seconds_elapsed_today(&self) -> f32 {
        self.day_seconds
    }

    /// Current day number, starting at 1.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    pub fn wake_threshold(&self) -> f32 {
        self.wake_threshold
    }

    /// Advances the clock, wrapping at day end. Returns how many day
    /// rollovers occurred.
    pub fn advance(&mut self, seconds: f32) -> u32 {
        if !(seconds > 0.0) || !seconds.is_finite() {
            return 0;
        }

        self.day_seconds += seconds;
        let mut rolled = 0;
        while self.day_seconds >= Self::SECONDS_PER_DAY {
            self.day_seconds -= Self::SECONDS_PER_DAY;
            self.day = self.day.saturating_add(1);
            rolled += 1;
        }

        if self.day >= self.max_days {
            self.session_over = true;
        }

        rolled
    }

    pub fn session_over(&self) -> bool {
        self.session_over
    }

    /// True exactly once, on the first call after the session ended. Keeps
    /// repeated `advance` calls past the final day from producing more than
    /// one game-over notification.
    pub fn consume_session_end(&mut self) -> bool {
        if self.session_over && !self.end_notified {
            self.end_notified = true;
            true
        } else {
            false
        }
    }

    /// Meal served at the current hour: breakfast, lunch, dinner, or plain
    /// "food" outside serving times.
    pub fn meal_label(&self) -> &'static str {
        let hours = (self.day_seconds / 60.0) as u32;
        match hours {
            7..=10 => "breakfast",
            11..=16 => "lunch",
            17..=21 => "dinner",
            _ => "food",
        }
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::from_settings(&ClockSettings::default())
    }
}

/// Formats a clock position as a 12-hour time, e.g. `"8:05am"`.
pub fn format_time(seconds: i32) -> String {
    let hour = seconds.div_euclid(60);
    let minutes = format!("{:02}", seconds - hour * 60);

    if hour == 24 || hour == 0 {
        format!("12:{minutes}am")
    } else if hour == 12 {
        format!("12:{minutes}pm")
    } else if hour > 12 {
        format!("{}:{minutes}pm", hour - 12)
    } else {
        format!("{hour}:{minutes}am")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_wraps_the_day_and_increments_the_counter() {
        let mut clock = GameClock::default();
        assert_eq!(clock.day(), 1);

        let rolled = clock.advance(GameClock::SECONDS_PER_DAY);
        assert_eq!(rolled, 1);
        assert_eq!(clock.day(), 2);
        assert!((clock.seconds_elapsed_today() - 480.0).abs() < 1e-3);
    }

    #[test]
    fn a_single_large_advance_can_roll_several_days() {
        let mut clock = GameClock::default();
        let rolled = clock.advance(GameClock::SECONDS_PER_DAY * 3.0);
        assert_eq!(rolled, 3);
        assert_eq!(clock.day(), 4);
    }

    #[test]
    fn session_end_notifies_exactly_once() {
        let mut clock = GameClock::default();
        let mut notifications = 0;
        for _ in 0..20 {
            clock.advance(GameClock::SECONDS_PER_DAY);
            if clock.consume_session_end() {
                notifications += 1;
            }
        }
        assert!(clock.session_over());
        assert_eq!(notifications, 1);
    }

    #[test]
    fn non_positive_and_non_finite_advances_are_ignored() {
        let mut clock = GameClock::default();
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.advance(-60.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert!((clock.seconds_elapsed_today() - 480.0).abs() < 1e-3);
    }

    #[test]
    fn meals_follow_the_serving_hours() {
        let mut settings = ClockSettings::default();

        settings.start_seconds = 8.0 * 60.0;
        assert_eq!(GameClock::from_settings(&settings).meal_label(), "breakfast");

        settings.start_seconds = 13.0 * 60.0;
        assert_eq!(GameClock::from_settings(&settings).meal_label(), "lunch");

        settings.start_seconds = 19.0 * 60.0;
        assert_eq!(GameClock::from_settings(&settings).meal_label(), "dinner");

        settings.start_seconds = 23.0 * 60.0;
        assert_eq!(GameClock::from_settings(&settings).meal_label(), "food");
    }

    #[test]
    fn twelve_hour_formatting_handles_the_edges() {
        assert_eq!(format_time(0), "12:00am");
        assert_eq!(format_time(8 * 60), "8:00am");
        assert_eq!(format_time(12 * 60), "12:00pm");
        assert_eq!(format_time(12 * 60 + 30), "12:30pm");
        assert_eq!(format_time(23 * 60 + 5), "11:05pm");
        assert_eq!(format_time(24 * 60), "12:00am");
    }

    #[test]
    fn settings_sanitise_out_of_range_values() {
        let settings: ClockSettings = RawClockSection {
            time_scale: -2.0,
            start_seconds: 1500.0,
            wake_threshold: -60.0,
            max_days: 0,
        }
        .into();

        assert_eq!(settings.time_scale, 0.0);
        assert!((settings.start_seconds - 60.0).abs() < 1e-3);
        assert!((settings.wake_threshold - 1380.0).abs() < 1e-3);
        assert_eq!(settings.max_days, 1);
    }
}
