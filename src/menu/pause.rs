use super::*;

/// ESC while in `Playing` → transition to `Paused`.
pub fn toggle_pause_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Paused);
    }
}

/// ESC while in `Paused` → transition back to `Playing`.
pub fn pause_resume_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Playing);
    }
}

/// Spawn the in-game pause overlay.
///
/// The game world and HUD stay spawned underneath — every gameplay system is
/// gated off in `Paused`, so the session renders frozen behind the dimmed
/// overlay and resumes bit-identically.
///
/// Layout (centred over the frozen world):
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │ ░░░░░░░░░ semi-transparent overlay ░░░░░░░░ │
/// │ ░░░░░   ┌───────────────────────┐   ░░░░░░ │
/// │ ░░░░░   │       PAUSED          │   ░░░░░░ │
/// │ ░░░░░   │    [ RESUME    ]      │   ░░░░░░ │
/// │ ░░░░░   │    [ MAIN MENU ]      │   ░░░░░░ │
/// │ ░░░░░   │    ESC to resume      │   ░░░░░░ │
/// │ ░░░░░   └───────────────────────┘   ░░░░░░ │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_pause_menu(mut commands: Commands, font: Res<GameFont>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.70)),
            ZIndex(200),
            PauseMenuRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(36.0)),
                        row_gap: Val::Px(14.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(280.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.04, 0.04, 0.07)),
                    BorderColor::all(Color::srgb(0.30, 0.30, 0.46)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("PAUSED"),
                        TextFont {
                            font: font.0.clone(),
                            font_size: 38.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));

                    spacer(card, 4.0);

                    // Resume button
                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(48.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(confirm_bg()),
                        BorderColor::all(confirm_border()),
                        PauseResumeButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("RESUME"),
                            TextFont {
                                font: font.0.clone(),
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(confirm_text()),
                        ));
                    });

                    // Main Menu button
                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(48.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(quit_bg()),
                        BorderColor::all(quit_border()),
                        PauseMainMenuButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("MAIN MENU"),
                            TextFont {
                                font: font.0.clone(),
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(quit_text()),
                        ));
                    });

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new("ESC to resume"),
                        TextFont {
                            font: font.0.clone(),
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        });
}

/// Recursively despawn all pause-overlay entities.
pub(super) fn cleanup_pause_menu(
    mut commands: Commands,
    query: Query<Entity, With<PauseMenuRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle RESUME / MAIN MENU presses in the pause overlay.
///
/// - **RESUME** → back to [`GameState::Playing`]; the session continues from
///   the exact state it froze in.
/// - **MAIN MENU** → [`GameState::MainMenu`]; the session world is discarded
///   on the way out.
#[allow(clippy::type_complexity)]
pub(super) fn pause_menu_button_system(
    resume_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<PauseResumeButton>)>,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<PauseMainMenuButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sfx: MessageWriter<Sfx>,
) {
    for (interaction, children) in resume_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                next_state.set(GameState::Playing);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, confirm_text()),
        }
    }

    for (interaction, children) in quit_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                next_state.set(GameState::MainMenu);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, quit_text()),
        }
    }
}
