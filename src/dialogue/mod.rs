//! Dialogue module hosting pagination, reveal, choices, and the session
//! controller.
pub mod choice;
pub mod controller;
pub mod paginate;
pub mod plugin;
pub mod reveal;
pub mod systems;

pub use plugin::DialoguePlugin;
