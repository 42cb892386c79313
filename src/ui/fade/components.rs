// src/ui/fade/components.rs
//
// Marker for the full-screen fade overlay.

use bevy::prelude::*;

/// The black overlay whose alpha follows the transition queue.
#[derive(Component, Debug)]
pub struct FadeOverlay;
