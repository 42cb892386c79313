// src/ui/mod.rs
//
// UI module providing screen-space presentation for the game state:
// - Dialogue panel (bottom-center dialogue window plus choice rows)
// - HUD (time, day, energy bar, interaction hint, final summary)
// - Fade overlay (driven by the transition queue)

pub mod dialogue_panel;
pub mod fade;
pub mod hud;

use bevy::prelude::*;

use dialogue_panel::DialoguePanelPlugin;
use fade::FadePlugin;
use hud::HudPlugin;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((HudPlugin, FadePlugin, DialoguePanelPlugin));
    }
}
