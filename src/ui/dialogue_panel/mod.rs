// src/ui/dialogue_panel/mod.rs
//
// Dialogue panel module rendering the dialogue session and its choices.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::DialoguePanelPlugin;
