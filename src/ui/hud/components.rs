// src/ui/hud/components.rs
//
// Components for the time/day/energy HUD and the end-of-session summary.

use bevy::prelude::*;

/// Label showing the formatted clock time.
#[derive(Component, Debug)]
pub struct TimeLabel;

/// Label showing the current day number.
#[derive(Component, Debug)]
pub struct DayLabel;

/// The filled part of the energy bar; its width tracks the energy level.
#[derive(Component, Debug)]
pub struct EnergyBarFill;

/// The "E - Interact" style hint shown near interactables.
#[derive(Component, Debug)]
pub struct InteractionHintLabel;

/// Root node of the end-of-session summary window.
#[derive(Component, Debug)]
pub struct SummaryRoot;

/// Layout settings for the HUD.
#[derive(Resource, Debug)]
pub struct HudSettings {
    pub margin: f32,
    pub label_font_size: f32,
    pub energy_bar_width: f32,
    pub energy_bar_height: f32,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            margin: 10.0,
            label_font_size: 22.0,
            energy_bar_width: 200.0,
            energy_bar_height: 18.0,
        }
    }
}
