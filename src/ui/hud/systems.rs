// src/ui/hud/systems.rs
//
// Systems building and refreshing the HUD, plus the final summary window.

use bevy::prelude::*;
use bevy::ui::GlobalZIndex;

use crate::{
    dialogue::controller::DialogueController,
    player::components::{PlayerInteractionState, PlayerResources, RestState},
    scoring::components::FinalSummary,
    world::time::{format_time, GameClock},
};

use super::components::{
    DayLabel, EnergyBarFill, HudSettings, InteractionHintLabel, SummaryRoot, TimeLabel,
};

const HUD_TEXT_COLOR: Color = Color::WHITE;
const ENERGY_FILL_COLOR: Color = Color::srgb(0.3, 0.75, 0.3);
const ENERGY_BACK_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.8);
const WINDOW_COLOR: Color = Color::srgba(0.08, 0.08, 0.1, 0.97);
const TITLE_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);

/// Spawns the 2D camera and the static HUD hierarchy.
pub fn spawn_hud(mut commands: Commands, settings: Res<HudSettings>) {
    commands.spawn(Camera2d);

    // Clock block, top-left.
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(settings.margin),
                left: Val::Px(settings.margin),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            Name::new("Clock HUD"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.label_font_size * 1.4,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOR),
                TimeLabel,
            ));
            parent.spawn((
                Text::new("Day 1"),
                TextFont {
                    font_size: settings.label_font_size,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOR),
                DayLabel,
            ));
        });

    // Energy bar, bottom-right.
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.margin + 5.0),
                right: Val::Px(settings.margin + 5.0),
                width: Val::Px(settings.energy_bar_width),
                height: Val::Px(settings.energy_bar_height),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(ENERGY_BACK_COLOR),
            BorderColor::from(HUD_TEXT_COLOR),
            Name::new("Energy Bar"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(ENERGY_FILL_COLOR),
                EnergyBarFill,
            ));
        });

    // Interaction hint, lower middle of the screen.
    commands.spawn((
        Text::new("E - Interact"),
        TextFont {
            font_size: settings.label_font_size,
            ..default()
        },
        TextColor(HUD_TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Percent(35.0),
            left: Val::Percent(50.0),
            margin: UiRect::left(Val::Px(-70.0)),
            ..default()
        },
        Visibility::Hidden,
        InteractionHintLabel,
        Name::new("Interaction Hint"),
    ));
}

/// Refreshes the clock labels and the energy bar fill.
pub fn update_hud(
    clock: Res<GameClock>,
    resources: Res<PlayerResources>,
    mut time_query: Query<&mut Text, (With<TimeLabel>, Without<DayLabel>)>,
    mut day_query: Query<&mut Text, (With<DayLabel>, Without<TimeLabel>)>,
    mut fill_query: Query<&mut Node, With<EnergyBarFill>>,
) {
    if let Ok(mut text) = time_query.single_mut() {
        let formatted = format_time(clock.seconds_elapsed_today() as i32);
        if text.0 != formatted {
            text.0 = formatted;
        }
    }

    if let Ok(mut text) = day_query.single_mut() {
        let formatted = format!("Day {}", clock.day());
        if text.0 != formatted {
            text.0 = formatted;
        }
    }

    if let Ok(mut node) = fill_query.single_mut() {
        node.width = Val::Percent(resources.energy().clamp(0, 100) as f32);
    }
}

/// Shows the interaction hint when something is in range and no dialogue or
/// sleep is in the way.
pub fn update_interaction_hint(
    state: Res<PlayerInteractionState>,
    dialogue: Res<DialogueController>,
    rest: Res<RestState>,
    mut hint_query: Query<(&mut Text, &mut Visibility), With<InteractionHintLabel>>,
) {
    let Ok((mut text, mut visibility)) = hint_query.single_mut() else {
        return;
    };

    let shown = match (&state.nearby, dialogue.is_visible() || rest.sleeping) {
        (Some(nearby), false) => {
            let hint = if nearby.trigger.is_some() {
                "E - Interact"
            } else {
                "E - Read Sign"
            };
            if text.0 != hint {
                text.0 = hint.to_string();
            }
            true
        }
        _ => false,
    };

    *visibility = if shown {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}

/// Spawns the summary window once the final stats are published.
pub fn show_final_summary(
    mut commands: Commands,
    summary: Option<Res<FinalSummary>>,
    settings: Res<HudSettings>,
    existing: Query<(), With<SummaryRoot>>,
) {
    let Some(summary) = summary else {
        return;
    };
    if !existing.is_empty() {
        return;
    }

    let rows = [
        ("Hours Studied", summary.hours_studied),
        ("Recreational Hours", summary.hours_recreational),
        ("Hours Slept", summary.hours_slept),
        ("Score", summary.score),
    ];

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Percent(20.0),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(-220.0)),
                width: Val::Px(440.0),
                padding: UiRect::all(Val::Px(30.0)),
                border: UiRect::all(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(WINDOW_COLOR),
            BorderColor::from(HUD_TEXT_COLOR),
            GlobalZIndex(20),
            SummaryRoot,
            Name::new("Summary Window"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Game Over!"),
                TextFont {
                    font_size: settings.label_font_size * 1.6,
                    ..default()
                },
                TextColor(TITLE_COLOR),
            ));
            for (label, value) in rows {
                parent.spawn((
                    Text::new(format!("{label}: {value}")),
                    TextFont {
                        font_size: settings.label_font_size,
                        ..default()
                    },
                    TextColor(HUD_TEXT_COLOR),
                ));
            }
        });
}
