//! Background layer and the in-game score HUD.
//!
//! | System | Schedule | Purpose |
//! |--------|----------|---------|
//! | `setup_background` | `Startup` | Spawn the full-window backdrop sprite |
//! | `setup_hud_score` | session start | Spawn the score HUD node |
//! | `hud_score_display_system` | `Update` / in `Playing` | Refresh the score text |
//!
//! The HUD is spawned when a session starts and torn down with the rest of
//! the session entities, so menu screens never show a stale score. It stays
//! up through `Paused` (the overlay dims it) because the pause screen shows
//! the frozen game underneath.

use crate::assets::SpriteAssets;
use crate::config::GameConfig;
use crate::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::graphics::GameFont;
use crate::menu::GameState;
use crate::player::PlayerScore;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker for the backdrop sprite entity.
#[derive(Component)]
pub struct BackgroundLayer;

/// Marker for the score HUD root node (despawned with the session).
#[derive(Component)]
pub struct HudScoreDisplay;

/// Marker for the score text itself.
#[derive(Component)]
pub struct HudScoreText;

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the backdrop and the session-scoped score HUD.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnTransition {
                exited: GameState::ShipSelect,
                entered: GameState::Playing,
            },
            setup_hud_score,
        )
        .add_systems(
            OnTransition {
                exited: GameState::GameOver,
                entered: GameState::Playing,
            },
            setup_hud_score,
        )
        .add_systems(
            Update,
            hud_score_display_system.run_if(in_state(GameState::Playing)),
        );
    }
}

// ── Background ────────────────────────────────────────────────────────────────

/// Spawn the backdrop, stretched to the window. With no background image the
/// clear colour (black) shows through instead.
pub fn setup_background(mut commands: Commands, sprites: Res<SpriteAssets>) {
    let Some(handle) = &sprites.background else {
        return;
    };
    commands.spawn((
        Sprite {
            image: handle.clone(),
            custom_size: Some(Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, -10.0),
        BackgroundLayer,
    ));
}

// ── Score HUD ─────────────────────────────────────────────────────────────────

/// Spawn the score HUD in the top-left corner.
pub fn setup_hud_score(mut commands: Commands, config: Res<GameConfig>, font: Res<GameFont>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            HudScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("SCORE: 0"),
                TextFont {
                    font: font.0.clone(),
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.88, 0.45)),
                HudScoreText,
            ));
        });
}

/// Refresh the HUD text whenever the score changes.
pub fn hud_score_display_system(
    score: Res<PlayerScore>,
    mut text: Query<&mut Text, With<HudScoreText>>,
) {
    if !score.is_changed() {
        return;
    }
    for mut t in text.iter_mut() {
        t.0 = format!("SCORE: {}", score.total());
    }
}
