// src/ui/dialogue_panel/components.rs
//
// Components and resources for the dialogue panel.

use bevy::prelude::*;

/// Root node of the dialogue window.
#[derive(Component, Debug)]
pub struct DialoguePanelRoot;

/// The label the revealed page text is written into.
#[derive(Component, Debug)]
pub struct DialogueTextLabel;

/// Root node of the choice window overlapping the panel's top-right corner.
#[derive(Component, Debug)]
pub struct ChoiceWindow;

/// Container the choice rows are spawned under.
#[derive(Component, Debug)]
pub struct ChoiceList;

/// One spawned choice row.
#[derive(Component, Debug)]
pub struct ChoiceRow;

/// The `>` marker in front of a choice row.
#[derive(Component, Debug)]
pub struct ChoicePointer {
    pub index: usize,
}

/// Resource containing layout settings for the dialogue panel.
#[derive(Resource, Debug)]
pub struct DialoguePanelSettings {
    /// Panel width (pixels).
    pub panel_width: f32,

    /// Panel height (pixels).
    pub panel_height: f32,

    /// Offset from the bottom edge of the screen (pixels).
    pub bottom_offset: f32,

    /// Padding inside the panel (pixels).
    pub padding: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Font size for dialogue text (points).
    pub text_font_size: f32,
}

impl Default for DialoguePanelSettings {
    fn default() -> Self {
        Self {
            panel_width: 800.0,
            panel_height: 200.0,
            bottom_offset: 15.0,
            padding: 24.0,
            border_width: 2.0,
            text_font_size: 20.0,
        }
    }
}

/// Tracks the last choice-menu revision the rows were built for.
#[derive(Resource, Debug, Default)]
pub struct DialoguePanelTracker {
    pub menu_revision: Option<u64>,
}
