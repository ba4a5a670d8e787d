use super::*;
use crate::constants::{
    CHECKBOX_SIZE, CHECKBOX_X, CHECKBOX_Y, SLIDER_GRAB_MARGIN, SLIDER_HANDLE_HEIGHT,
    SLIDER_HANDLE_WIDTH, SLIDER_TRACK_HEIGHT, SLIDER_TRACK_WIDTH, SLIDER_TRACK_X, WINDOW_WIDTH,
};
use bevy::window::PrimaryWindow;

// ── Slider value math ─────────────────────────────────────────────────────────

/// Map a cursor x to a 0–100 slider value, clamped to the track. Pure and
/// idempotent: the same cursor position always yields the same value.
pub fn slider_value_from_cursor(track_x: f32, track_width: f32, cursor_x: f32) -> f32 {
    (((cursor_x - track_x) / track_width) * 100.0).clamp(0.0, 100.0)
}

/// Whether a pointer position grabs the given slider's track (the track
/// rectangle expanded by a small margin, so the handle is easy to catch).
pub fn cursor_grabs_track(kind: SliderKind, pos: Vec2) -> bool {
    let top = kind.track_top();
    pos.x >= SLIDER_TRACK_X - SLIDER_GRAB_MARGIN
        && pos.x <= SLIDER_TRACK_X + SLIDER_TRACK_WIDTH + SLIDER_GRAB_MARGIN
        && pos.y >= top - SLIDER_GRAB_MARGIN
        && pos.y <= top + SLIDER_TRACK_HEIGHT + SLIDER_GRAB_MARGIN
}

/// Handle offset (px from the track's left edge) for a 0–100 value.
fn handle_left_for_value(value: f32) -> f32 {
    (value / 100.0).clamp(0.0, 1.0) * (SLIDER_TRACK_WIDTH - SLIDER_HANDLE_WIDTH)
}

// ── Setup / teardown ──────────────────────────────────────────────────────────

fn spawn_slider(
    root: &mut ChildSpawnerCommands<'_>,
    font: &GameFont,
    kind: SliderKind,
    value: f32,
) {
    // Label above the track.
    root.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SLIDER_TRACK_X),
            top: Val::Px(kind.track_top() - 40.0),
            ..default()
        },
        SliderLabel(kind),
    ))
    .with_children(|label| {
        label.spawn((
            Text::new(format!("{}: {:.0}%", kind.label(), value)),
            TextFont {
                font: font.0.clone(),
                font_size: 20.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
    });

    // Track with the handle inside it.
    root.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SLIDER_TRACK_X),
            top: Val::Px(kind.track_top()),
            width: Val::Px(SLIDER_TRACK_WIDTH),
            height: Val::Px(SLIDER_TRACK_HEIGHT),
            ..default()
        },
        BackgroundColor(track_color()),
        VolumeSlider {
            kind,
            value,
            dragging: false,
        },
    ))
    .with_children(|track| {
        track.spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(handle_left_for_value(value)),
                top: Val::Px(-(SLIDER_HANDLE_HEIGHT - SLIDER_TRACK_HEIGHT) / 2.0),
                width: Val::Px(SLIDER_HANDLE_WIDTH),
                height: Val::Px(SLIDER_HANDLE_HEIGHT),
                ..default()
            },
            BackgroundColor(handle_color()),
            SliderHandle,
        ));
    });
}

/// Spawn the settings screen: two volume sliders, the fullscreen checkbox,
/// and a BACK button. Sliders sit at fixed pixel coordinates so the drag
/// system can map the cursor onto them directly.
pub(super) fn setup_settings(
    mut commands: Commands,
    font: Res<GameFont>,
    settings: Res<GameSettings>,
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(Color::BLACK),
            SettingsRoot,
        ))
        .with_children(|root| {
            // ── Title ─────────────────────────────────────────────────────────
            root.spawn(Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(90.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            })
            .with_children(|row| {
                row.spawn((
                    Text::new("SETTINGS"),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 46.0,
                        ..default()
                    },
                    TextColor(title_color()),
                ));
            });

            // ── Sliders ───────────────────────────────────────────────────────
            spawn_slider(root, &font, SliderKind::Sfx, settings.sfx_volume);
            spawn_slider(root, &font, SliderKind::Music, settings.music_volume);

            // ── Fullscreen checkbox ───────────────────────────────────────────
            root.spawn((
                Button,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(CHECKBOX_X),
                    top: Val::Px(CHECKBOX_Y),
                    width: Val::Px(CHECKBOX_SIZE),
                    height: Val::Px(CHECKBOX_SIZE),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(3.0)),
                    ..default()
                },
                BackgroundColor(Color::NONE),
                BorderColor::all(Color::WHITE),
                FullscreenCheckbox,
            ))
            .with_children(|boxed| {
                boxed.spawn((
                    Node {
                        width: Val::Px(CHECKBOX_SIZE - 14.0),
                        height: Val::Px(CHECKBOX_SIZE - 14.0),
                        ..default()
                    },
                    BackgroundColor(check_color()),
                    if settings.fullscreen {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    },
                    FullscreenCheckMark,
                ));
            });

            root.spawn(Node {
                position_type: PositionType::Absolute,
                left: Val::Px(CHECKBOX_X + CHECKBOX_SIZE + 15.0),
                top: Val::Px(CHECKBOX_Y),
                ..default()
            })
            .with_children(|label| {
                label.spawn((
                    Text::new("FULLSCREEN MODE"),
                    TextFont {
                        font: font.0.clone(),
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });

            // ── BACK ──────────────────────────────────────────────────────────
            root.spawn((
                Button,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(WINDOW_WIDTH / 2.0 - 100.0),
                    top: Val::Px(620.0),
                    width: Val::Px(200.0),
                    height: Val::Px(50.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(back_bg()),
                BorderColor::all(back_border()),
                SettingsBackButton,
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

/// Recursively despawn all settings-screen entities.
pub(super) fn cleanup_settings(mut commands: Commands, query: Query<Entity, With<SettingsRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

// ── Interaction systems ───────────────────────────────────────────────────────

/// Drive both sliders from the pointer.
///
/// Press inside a track's grab zone starts a drag; while dragging, the value
/// follows the cursor x clamped to the track and is pushed into
/// [`GameSettings`] immediately (music volume is audible live). Releasing
/// the SFX slider plays the laser sample once as a test tone at the new
/// volume. Clicks outside every track are ignored.
pub(super) fn slider_drag_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sliders: Query<&mut VolumeSlider>,
    mut settings: ResMut<GameSettings>,
    mut sfx: MessageWriter<Sfx>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let cursor = window.cursor_position();

    for mut slider in sliders.iter_mut() {
        if mouse.just_pressed(MouseButton::Left) {
            if let Some(pos) = cursor {
                if cursor_grabs_track(slider.kind, pos) {
                    slider.dragging = true;
                }
            }
        }

        if slider.dragging {
            if let Some(pos) = cursor {
                let value = slider_value_from_cursor(SLIDER_TRACK_X, SLIDER_TRACK_WIDTH, pos.x);
                if value != slider.value {
                    slider.value = value;
                    match slider.kind {
                        SliderKind::Sfx => settings.sfx_volume = value,
                        SliderKind::Music => settings.music_volume = value,
                    }
                }
            }
        }

        if mouse.just_released(MouseButton::Left) && slider.dragging {
            slider.dragging = false;
            if slider.kind == SliderKind::Sfx {
                sfx.write(Sfx(SfxKind::Laser));
            }
        }
    }
}

/// Keep each slider's handle position and label text in sync with its value.
#[allow(clippy::type_complexity)]
pub(super) fn slider_visual_sync_system(
    sliders: Query<(&VolumeSlider, &Children), Changed<VolumeSlider>>,
    mut handles: Query<&mut Node, With<SliderHandle>>,
    labels: Query<(&SliderLabel, &Children)>,
    mut texts: Query<&mut Text>,
) {
    for (slider, children) in sliders.iter() {
        for child in children.iter() {
            if let Ok(mut node) = handles.get_mut(child) {
                node.left = Val::Px(handle_left_for_value(slider.value));
            }
        }
        for (label, label_children) in labels.iter() {
            if label.0 != slider.kind {
                continue;
            }
            for child in label_children.iter() {
                if let Ok(mut text) = texts.get_mut(child) {
                    text.0 = format!("{}: {:.0}%", slider.kind.label(), slider.value);
                }
            }
        }
    }
}

/// Toggle the fullscreen flag when the checkbox is clicked and mirror it in
/// the check mark. The window-mode change itself is applied by
/// `settings::apply_window_mode_system`.
pub(super) fn checkbox_system(
    interactions: Query<&Interaction, (Changed<Interaction>, With<FullscreenCheckbox>)>,
    mut settings: ResMut<GameSettings>,
    mut marks: Query<&mut Visibility, With<FullscreenCheckMark>>,
    mut sfx: MessageWriter<Sfx>,
) {
    for interaction in interactions.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        sfx.write(Sfx(SfxKind::Click));
        settings.fullscreen = !settings.fullscreen;
        for mut visibility in marks.iter_mut() {
            *visibility = if settings.fullscreen {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

/// Handle the BACK button.
pub(super) fn settings_button_system(
    back_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<SettingsBackButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut sfx: MessageWriter<Sfx>,
) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_maps_linearly_onto_the_track() {
        assert_eq!(slider_value_from_cursor(440.0, 400.0, 440.0), 0.0);
        assert_eq!(slider_value_from_cursor(440.0, 400.0, 640.0), 50.0);
        assert_eq!(slider_value_from_cursor(440.0, 400.0, 840.0), 100.0);
    }

    #[test]
    fn value_is_clamped_outside_the_track() {
        assert_eq!(slider_value_from_cursor(440.0, 400.0, 0.0), 0.0);
        assert_eq!(slider_value_from_cursor(440.0, 400.0, 5000.0), 100.0);
    }

    #[test]
    fn same_cursor_position_yields_same_value() {
        let a = slider_value_from_cursor(440.0, 400.0, 617.3);
        let b = slider_value_from_cursor(440.0, 400.0, 617.3);
        assert_eq!(a, b);
    }

    #[test]
    fn grab_zone_includes_margin_and_excludes_far_points() {
        let top = SliderKind::Sfx.track_top();
        assert!(cursor_grabs_track(
            SliderKind::Sfx,
            Vec2::new(SLIDER_TRACK_X - SLIDER_GRAB_MARGIN / 2.0, top)
        ));
        assert!(!cursor_grabs_track(SliderKind::Sfx, Vec2::new(0.0, 0.0)));
        assert!(!cursor_grabs_track(
            SliderKind::Music,
            Vec2::new(SLIDER_TRACK_X, top)
        ));
    }
}
