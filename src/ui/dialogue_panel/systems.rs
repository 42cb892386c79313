// src/ui/dialogue_panel/systems.rs
//
// Systems rendering the dialogue controller's state into UI nodes.

use bevy::prelude::*;
use bevy::ui::GlobalZIndex;

use crate::dialogue::controller::DialogueController;

use super::components::{
    ChoiceList, ChoicePointer, ChoiceRow, ChoiceWindow, DialoguePanelRoot, DialoguePanelSettings,
    DialoguePanelTracker, DialogueTextLabel,
};

const BACKGROUND_COLOR: Color = Color::srgba(0.08, 0.08, 0.1, 0.95);
const BORDER_COLOR: Color = Color::srgb(0.35, 0.35, 0.38);
const TEXT_COLOR: Color = Color::WHITE;
const POINTER_TEXT: &str = "> ";

/// Spawns the (initially hidden) dialogue window and its choice window.
pub fn spawn_dialogue_panel(mut commands: Commands, settings: Res<DialoguePanelSettings>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(-settings.panel_width / 2.0)),
                width: Val::Px(settings.panel_width),
                height: Val::Px(settings.panel_height),
                padding: UiRect::all(Val::Px(settings.padding)),
                border: UiRect::all(Val::Px(settings.border_width)),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            BorderColor::from(BORDER_COLOR),
            GlobalZIndex(10),
            Visibility::Hidden,
            DialoguePanelRoot,
            Name::new("Dialogue Panel"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.text_font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                DialogueTextLabel,
            ));
        });

    // The choice window sits above the panel's right edge, like a tab.
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset + settings.panel_height - 24.0),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(settings.panel_width / 2.0 - 240.0)),
                min_width: Val::Px(220.0),
                padding: UiRect::all(Val::Px(16.0)),
                border: UiRect::all(Val::Px(settings.border_width)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            BorderColor::from(BORDER_COLOR),
            GlobalZIndex(11),
            Visibility::Hidden,
            ChoiceWindow,
            Name::new("Choice Window"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                },
                ChoiceList,
            ));
        });
}

/// Mirrors the controller's visibility and revealed text into the panel.
pub fn update_dialogue_panel(
    dialogue: Res<DialogueController>,
    mut root_query: Query<&mut Visibility, With<DialoguePanelRoot>>,
    mut text_query: Query<&mut Text, With<DialogueTextLabel>>,
) {
    let Ok(mut visibility) = root_query.single_mut() else {
        return;
    };

    *visibility = if dialogue.is_visible() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    if let Ok(mut text) = text_query.single_mut() {
        let shown = dialogue.visible_text();
        if text.0 != shown {
            text.0 = shown;
        }
    }
}

/// Rebuilds the choice rows when the menu changes and keeps the pointer on
/// the selected row.
pub fn sync_choice_menu(
    mut commands: Commands,
    dialogue: Res<DialogueController>,
    settings: Res<DialoguePanelSettings>,
    mut tracker: ResMut<DialoguePanelTracker>,
    mut window_query: Query<&mut Visibility, With<ChoiceWindow>>,
    list_query: Query<Entity, With<ChoiceList>>,
    row_query: Query<Entity, With<ChoiceRow>>,
    mut pointer_query: Query<(&ChoicePointer, &mut Visibility), Without<ChoiceWindow>>,
) {
    let menu = dialogue.menu();

    if let Ok(mut visibility) = window_query.single_mut() {
        *visibility = if menu.is_visible() && dialogue.is_visible() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }

    let Ok(list) = list_query.single() else {
        return;
    };

    if tracker.menu_revision != Some(menu.revision()) {
        tracker.menu_revision = Some(menu.revision());

        for row in row_query.iter() {
            commands.entity(row).despawn();
        }

        for (index, choice) in menu.choices().iter().enumerate() {
            let row = commands
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Row,
                        ..default()
                    },
                    ChoiceRow,
                ))
                .with_children(|row| {
                    row.spawn((
                        Text::new(POINTER_TEXT),
                        TextFont {
                            font_size: settings.text_font_size,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        ChoicePointer { index },
                        Visibility::Hidden,
                    ));
                    row.spawn((
                        Text::new(choice.label.clone()),
                        TextFont {
                            font_size: settings.text_font_size,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                })
                .id();
            commands.entity(list).add_child(row);
        }
        // Pointer visibility for fresh rows lands next frame, once they exist.
        return;
    }

    for (pointer, mut visibility) in pointer_query.iter_mut() {
        *visibility = if pointer.index == menu.selected_index() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
