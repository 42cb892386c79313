//! Core module providing frame timing shared by every simulation system.
pub mod plugin;

pub use plugin::CorePlugin;
