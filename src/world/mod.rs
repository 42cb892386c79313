//! World module housing the session clock and campus layout.
pub mod plugin;
pub mod systems;
pub mod time;

pub use plugin::WorldPlugin;
