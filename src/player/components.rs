//! Player state resources and interactable markers.
use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component, Debug, Default)]
pub struct Player;

/// A world object the player can stand next to and interact with.
///
/// `trigger` holds the map-authored trigger string (`"<key>"` or
/// `"<key>-<args>"`); `sign_text` is plain readable text for props without an
/// event.
#[derive(Component, Debug, Clone)]
pub struct Interactable {
    pub label: String,
    pub trigger: Option<String>,
    pub sign_text: Option<String>,
}

/// Snapshot of the closest interactable in range.
#[derive(Debug, Clone)]
pub struct NearbyInteractable {
    pub label: String,
    pub trigger: Option<String>,
    pub sign_text: Option<String>,
    pub distance: f32,
}

/// Tracks what the player could interact with this frame.
#[derive(Resource, Debug, Default)]
pub struct PlayerInteractionState {
    pub nearby: Option<NearbyInteractable>,
}

/// The player's energy and session-long activity counters.
///
/// Energy is clamped to `[0, 100]`; the hour counters only ever grow.
#[derive(Resource, Debug)]
pub struct PlayerResources {
    energy: i32,
    hours_studied: u32,
    hours_recreational: u32,
    hours_slept: u32,
}

impl Default for PlayerResources {
    fn default() -> Self {
        Self {
            energy: 100,
            hours_studied: 0,
            hours_recreational: 0,
            hours_slept: 0,
        }
    }
}

impl PlayerResources {
    pub fn energy(&self) -> i32 {
        self.energy
    }

    /// Sets the energy level, clamped into `[0, 100]`.
    pub fn set_energy(&mut self, energy: i32) {
        self.energy = energy.clamp(0, 100);
    }

    /// Lowers energy, never below zero.
    pub fn decrease_energy(&mut self, amount: i32) {
        self.set_energy(self.energy - amount.max(0));
    }

    pub fn add_study_hours(&mut self, hours: u32) {
        self.hours_studied += hours;
    }

    pub fn add_recreational_hours(&mut self, hours: u32) {
        self.hours_recreational += hours;
    }

    pub fn add_slept_hours(&mut self, hours: u32) {
        self.hours_slept += hours;
    }

    pub fn hours_studied(&self) -> u32 {
        self.hours_studied
    }

    pub fn hours_recreational(&self) -> u32 {
        self.hours_recreational
    }

    pub fn hours_slept(&self) -> u32 {
        self.hours_slept
    }
}

/// Whether the player is currently asleep. Checked as the guard for the
/// deferred sleep/wake callbacks.
#[derive(Resource, Debug, Default)]
pub struct RestState {
    pub sleeping: bool,
}
