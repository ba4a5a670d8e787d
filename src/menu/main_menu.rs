use super::*;

/// Spawn the full-screen main-menu overlay.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │              STARFALL                       │
/// │     A vertical-scrolling arcade shooter     │
/// │                                             │
/// │              [ START ]                      │
/// │              [ SETTINGS ]                   │
/// │              [ QUIT ]                       │
/// │                                             │
/// │          v0.1.0  ·  Bevy 0.17               │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_main_menu(mut commands: Commands, font: Res<GameFont>) {
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
            MainMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("STARFALL"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 10.0);

            root.spawn((
                Text::new("A vertical-scrolling arcade shooter"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 52.0);

            // ── START ─────────────────────────────────────────────────────────
            root.spawn((
                Button,
                Node {
                    width: Val::Px(300.0),
                    height: Val::Px(60.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(start_bg()),
                BorderColor::all(start_border()),
                MenuStartButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("START"),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(start_text()),
                ));
            });

            spacer(root, 18.0);

            // ── SETTINGS ──────────────────────────────────────────────────────
            root.spawn((
                Button,
                Node {
                    width: Val::Px(300.0),
                    height: Val::Px(60.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(back_bg()),
                BorderColor::all(back_border()),
                MenuSettingsButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("SETTINGS"),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(back_text()),
                ));
            });

            spacer(root, 18.0);

            // ── QUIT ──────────────────────────────────────────────────────────
            root.spawn((
                Button,
                Node {
                    width: Val::Px(300.0),
                    height: Val::Px(60.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(quit_bg()),
                BorderColor::all(quit_border()),
                MenuQuitButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("QUIT"),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(quit_text()),
                ));
            });

            spacer(root, 52.0);

            root.spawn((
                Text::new("v0.1.0  ·  Bevy 0.17"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Recursively despawn all main-menu entities.
pub(super) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle START / SETTINGS / QUIT presses.
///
/// - **START** → [`GameState::ShipSelect`]
/// - **SETTINGS** → [`GameState::Settings`]
/// - **QUIT** → [`GameState::QuitConfirm`]
#[allow(clippy::type_complexity)]
pub(super) fn main_menu_button_system(
    start_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuStartButton>)>,
    settings_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<MenuSettingsButton>),
    >,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sfx: MessageWriter<Sfx>,
) {
    for (interaction, children) in start_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                next_state.set(GameState::ShipSelect);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, start_text()),
        }
    }

    for (interaction, children) in settings_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                next_state.set(GameState::Settings);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, back_text()),
        }
    }

    for (interaction, children) in quit_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                next_state.set(GameState::QuitConfirm);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, quit_text()),
        }
    }
}
