use super::*;

const CARD_WIDTH: f32 = 180.0;
const CARD_GAP: f32 = 40.0;

/// Spawn the ship-select screen: one preview card per selectable ship plus a
/// BACK button.
///
/// Layout:
/// ```text
/// ┌───────────────────────────────────────────────┐
/// │ [BACK]       SELECT YOUR SHIP                 │
/// │                                               │
/// │   ┌───────┐    ┌───────┐    ┌───────┐         │
/// │   │ ship1 │    │ ship2 │    │ ship3 │         │
/// │   │SELECT │    │SELECT │    │SELECT │         │
/// │   └───────┘    └───────┘    └───────┘         │
/// └───────────────────────────────────────────────┘
/// ```
pub(super) fn setup_ship_select(
    mut commands: Commands,
    font: Res<GameFont>,
    sprites: Res<SpriteAssets>,
) {
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
            ShipSelectRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("SELECT YOUR SHIP"),
                TextFont {
                    font: font.0.clone(),
                    font_size: 42.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 48.0);

            // ── Ship cards ────────────────────────────────────────────────────
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                column_gap: Val::Px(CARD_GAP),
                align_items: AlignItems::Center,
                ..default()
            })
            .with_children(|row| {
                for (index, handle) in sprites.ships.iter().enumerate() {
                    row.spawn((
                        Node {
                            width: Val::Px(CARD_WIDTH),
                            flex_direction: FlexDirection::Column,
                            align_items: AlignItems::Center,
                            padding: UiRect::all(Val::Px(14.0)),
                            row_gap: Val::Px(12.0),
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(card_bg()),
                        BorderColor::all(card_border()),
                    ))
                    .with_children(|card| {
                        // Preview: the real sprite, or its placeholder colour.
                        match handle {
                            Some(image) => {
                                card.spawn((
                                    ImageNode::new(image.clone()),
                                    Node {
                                        width: Val::Px(120.0),
                                        height: Val::Px(120.0),
                                        ..default()
                                    },
                                ));
                            }
                            None => {
                                card.spawn((
                                    Node {
                                        width: Val::Px(120.0),
                                        height: Val::Px(120.0),
                                        ..default()
                                    },
                                    BackgroundColor(
                                        crate::constants::SHIP_FALLBACK_COLORS[index],
                                    ),
                                ));
                            }
                        }

                        card.spawn((
                            Text::new(format!("SHIP {}", index + 1)),
                            TextFont {
                                font: font.0.clone(),
                                font_size: 18.0,
                                ..default()
                            },
                            TextColor(subtitle_color()),
                        ));

                        card.spawn((
                            Button,
                            Node {
                                width: Val::Px(130.0),
                                height: Val::Px(44.0),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                border: UiRect::all(Val::Px(2.0)),
                                ..default()
                            },
                            BackgroundColor(confirm_bg()),
                            BorderColor::all(confirm_border()),
                            ShipSelectButton { index },
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new("SELECT"),
                                TextFont {
                                    font: font.0.clone(),
                                    font_size: 16.0,
                                    ..default()
                                },
                                TextColor(confirm_text()),
                            ));
                        });
                    });
                }
            });

            spacer(root, 48.0);

            // ── BACK ──────────────────────────────────────────────────────────
            root.spawn((
                Button,
                Node {
                    width: Val::Px(180.0),
                    height: Val::Px(50.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(back_bg()),
                BorderColor::all(back_border()),
                ShipSelectBackButton,
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new("BACK"),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(back_text()),
                ));
            });
        });
}

/// Recursively despawn all ship-select entities.
pub(super) fn cleanup_ship_select(
    mut commands: Commands,
    query: Query<Entity, With<ShipSelectRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle SELECT / BACK presses.
///
/// - **SELECT on ship i** → record the index and enter [`GameState::Playing`];
///   the session-start systems spawn the world with that ship.
/// - **BACK** → [`GameState::MainMenu`]
#[allow(clippy::type_complexity)]
pub(super) fn ship_select_button_system(
    select_query: Query<
        (&Interaction, &ShipSelectButton, &Children),
        (Changed<Interaction>, With<ShipSelectButton>),
    >,
    back_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<ShipSelectBackButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut selected: ResMut<SelectedShip>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sfx: MessageWriter<Sfx>,
) {
    for (interaction, button, children) in select_query.iter() {
        match interaction {
            Interaction::Pressed => {
                sfx.write(Sfx(SfxKind::Click));
                selected.index = button.index;
                next_state.set(GameState::Playing);
            }
            Interaction::Hovered => set_text_color(children, &mut btn_text, Color::WHITE),
            Interaction::None => set_text_color(children, &mut btn_text, confirm_text()),
        }
    }

    for (interaction, children) in back_query.iter() {
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
