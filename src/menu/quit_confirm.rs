use super::*;

/// Spawn the quit-confirmation screen.
pub(super) fn setup_quit_confirm(mut commands: Commands, font: Res<GameFont>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            QuitConfirmRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("ARE YOU SURE?"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 42.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 12.0);

            root.spawn((
                Text::new("Do you want to quit the game?"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 48.0);

            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(60.0),
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|row| {
                // YES — terminate the process.
                row.spawn((
                    Button,
                    Node {
                        width: Val::Px(150.0),
                        height: Val::Px(60.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(quit_bg()),
                    BorderColor::all(quit_border()),
                    QuitYesButton,
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("YES"),
                        TextFont {
                            font: font.0.clone(),
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(quit_text()),
                    ));
                });

                // NO — back to the main menu.
                row.spawn((
                    Button,
                    Node {
                        width: Val::Px(150.0),
                        height: Val::Px(60.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(confirm_bg()),
                    BorderColor::all(confirm_border()),
                    QuitNoButton,
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("NO"),
                        TextFont {
                            font: font.0.clone(),
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(confirm_text()),
                    ));
                });
            });
        });
}

/// Recursively despawn all quit-confirm entities.
pub(super) fn cleanup_quit_confirm(
    mut commands: Commands,
    query: Query<Entity, With<QuitConfirmRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle YES / NO presses.
///
/// - **YES** → sends [`AppExit`] for a clean exit-0 shutdown.
/// - **NO** → [`GameState::MainMenu`]
#[allow(clippy::type_complexity)]
pub(super) fn quit_confirm_button_system(
    yes_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<QuitYesButton>)>,
    no_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<QuitNoButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<bevy::app::AppExit>,
    mut sfx: MessageWriter<Sfx>,
) {
    for (interaction, children) in yes_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                exit.write(bevy::app::AppExit::Success);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, quit_text()),
        }
    }

    for (interaction, children) in no_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                next_state.set(GameState::MainMenu);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, confirm_text()),
        }
    }
}
