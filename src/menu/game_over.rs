use super::*;

/// Spawn the game-over screen with the final score.
///
/// The session entities were already discarded on entering `GameOver`; only
/// the score resource survives so it can be shown here. It resets when the
/// next session starts.
pub(super) fn setup_game_over(
    mut commands: Commands,
    score: Res<PlayerScore>,
    font: Res<GameFont>,
) {
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
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.82)),
            ZIndex(300),
            GameOverRoot,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(40.0)),
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(320.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.06, 0.02, 0.02)),
                    BorderColor::all(Color::srgb(0.55, 0.10, 0.10)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("GAME OVER"),
                        TextFont {
                            font: font.0.clone(),
                            font_size: 52.0,
                            ..default()
                        },
                        TextColor(Color::srgb(1.0, 0.22, 0.22)),
                    ));

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new(format!(
                            "FINAL SCORE: {}   ({} ships destroyed)",
                            score.total(),
                            score.destroyed
                        )),
                        TextFont {
                            font: font.0.clone(),
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(subtitle_color()),
                    ));

                    spacer(card, 8.0);

                    // Restart button
                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(confirm_bg()),
                        BorderColor::all(confirm_border()),
                        GameOverRestartButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("RESTART"),
                            TextFont {
                                font: font.0.clone(),
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(confirm_text()),
                        ));
                    });

                    // Main menu button
                    card.spawn((
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            height: Val::Px(50.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(back_bg()),
                        BorderColor::all(back_border()),
                        GameOverMenuButton,
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new("MAIN MENU"),
                            TextFont {
                                font: font.0.clone(),
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(back_text()),
                        ));
                    });
                });
        });
}

/// Recursively despawn all game-over entities.
pub(super) fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle RESTART / MAIN MENU presses on the game-over screen.
///
/// - **RESTART** → [`GameState::Playing`] with the same ship; the score and
///   spawner reset as part of session start.
/// - **MAIN MENU** → [`GameState::MainMenu`]
#[allow(clippy::type_complexity)]
pub(super) fn game_over_button_system(
    restart_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<GameOverRestartButton>),
    >,
    menu_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<GameOverMenuButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sfx: MessageWriter<Sfx>,
) {
    for (interaction, children) in restart_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                next_state.set(GameState::Playing);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, confirm_text()),
        }
    }

    for (interaction, children) in menu_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                next_state.set(GameState::MainMenu);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, back_text()),
        }
    }
}
