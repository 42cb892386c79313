//! Player module - movement, energy, activity counters, and interaction input.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
