//! Centralised gameplay and UI constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! Gameplay values can also be overridden at startup through
//! `assets/tuning.toml` (see [`crate::config`]); this file remains the
//! authoritative default source.
//!
//! Movement values are in world units per second and get scaled by the
//! frame delta, so gameplay speed is independent of the display refresh
//! rate. Speeds were tuned against a 60 FPS baseline.

use bevy::prelude::*;

// ── Window ────────────────────────────────────────────────────────────────────

/// Window width in logical pixels. The play area spans the full window.
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Window height in logical pixels.
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Half-extent of the play area on the x axis (world units, origin centred).
pub const PLAY_HALF_WIDTH: f32 = WINDOW_WIDTH / 2.0;

/// Half-extent of the play area on the y axis.
pub const PLAY_HALF_HEIGHT: f32 = WINDOW_HEIGHT / 2.0;

// ── Player ────────────────────────────────────────────────────────────────────

/// Player ship sprite/collision size. Sprites are scaled to this box; the
/// fallback rectangle uses it directly.
pub const PLAYER_SIZE: Vec2 = Vec2::new(64.0, 64.0);

/// Fixed y position of the player ship (near the bottom edge).
pub const PLAYER_Y: f32 = -PLAY_HALF_HEIGHT + 120.0;

/// Horizontal movement speed (world units / s).
///
/// Raising this makes dodging easier and the game noticeably less tense;
/// values above ~700 let the ship cross the full window in under a second.
pub const PLAYER_SPEED: f32 = 480.0;

/// Minimum interval between consecutive shots (seconds).
///
/// Bounds bullet spam; at 0.25 a held-down player fires 4 shots per second.
pub const PLAYER_FIRE_COOLDOWN: f32 = 0.25;

// ── Bullet ────────────────────────────────────────────────────────────────────

/// Bullet sprite/collision size.
pub const BULLET_SIZE: Vec2 = Vec2::new(8.0, 32.0);

/// Upward bullet speed (world units / s).
pub const BULLET_SPEED: f32 = 420.0;

// ── Enemy / difficulty ────────────────────────────────────────────────────────

/// Enemy sprite/collision size.
pub const ENEMY_SIZE: Vec2 = Vec2::new(64.0, 64.0);

/// Fall speed assigned to enemies at stage 0 (world units / s).
pub const ENEMY_BASE_SPEED: f32 = 120.0;

/// Extra fall speed per difficulty stage.
pub const ENEMY_SPEED_PER_STAGE: f32 = 14.0;

/// Upper bound on enemy fall speed. Keeps late-game enemies reactable;
/// at 360 an enemy crosses the window in two seconds.
pub const ENEMY_MAX_SPEED: f32 = 360.0;

/// Seconds between enemy spawns at stage 0.
pub const ENEMY_SPAWN_BASE_INTERVAL: f32 = 1.0;

/// Spawn-interval reduction per difficulty stage (seconds).
pub const ENEMY_SPAWN_INTERVAL_PER_STAGE: f32 = 0.07;

/// Lower bound on the spawn interval. Prevents the spawner from degenerating
/// into a continuous stream at high scores.
pub const ENEMY_SPAWN_MIN_INTERVAL: f32 = 0.35;

/// Score points per difficulty stage: stage = score / this.
pub const STAGE_SCORE_POINTS: u32 = 50;

/// Points awarded per enemy destroyed by a bullet.
pub const ENEMY_KILL_POINTS: u32 = 10;

// ── Audio defaults ────────────────────────────────────────────────────────────

/// Default SFX volume (0–100).
pub const DEFAULT_SFX_VOLUME: f32 = 50.0;

/// Default music volume (0–100).
pub const DEFAULT_MUSIC_VOLUME: f32 = 20.0;

/// Per-sample gain trims applied on top of the SFX volume, so loud samples
/// don't drown the mix at equal settings.
pub const EXPLOSION_TRIM: f32 = 0.1;
pub const GAME_OVER_TRIM: f32 = 0.25;
pub const CLICK_TRIM: f32 = 0.3;
pub const LASER_TRIM: f32 = 1.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Font size of the in-game score HUD.
pub const HUD_FONT_SIZE: f32 = 28.0;

// ── Settings screen layout (UI pixels, top-left origin) ───────────────────────

/// Width of a volume-slider track.
pub const SLIDER_TRACK_WIDTH: f32 = 400.0;

/// Height of a volume-slider track.
pub const SLIDER_TRACK_HEIGHT: f32 = 20.0;

/// Width of the draggable slider handle.
pub const SLIDER_HANDLE_WIDTH: f32 = 16.0;

/// Height of the draggable slider handle.
pub const SLIDER_HANDLE_HEIGHT: f32 = 36.0;

/// Left edge of both slider tracks.
pub const SLIDER_TRACK_X: f32 = WINDOW_WIDTH / 2.0 - SLIDER_TRACK_WIDTH / 2.0;

/// Top edge of the SFX slider track.
pub const SFX_SLIDER_Y: f32 = 250.0;

/// Top edge of the music slider track.
pub const MUSIC_SLIDER_Y: f32 = 350.0;

/// Extra pixels around a slider track that still count as grabbing it.
pub const SLIDER_GRAB_MARGIN: f32 = 14.0;

/// Side length of the fullscreen checkbox.
pub const CHECKBOX_SIZE: f32 = 30.0;

/// Position of the fullscreen checkbox.
pub const CHECKBOX_X: f32 = WINDOW_WIDTH / 2.0 - 100.0;
pub const CHECKBOX_Y: f32 = 480.0;

// ── Asset paths (relative to `assets/`) ───────────────────────────────────────

/// Ship sprite candidates, one per selectable ship.
pub const SHIP_SPRITES: [&str; 3] = [
    "images/ship1.png",
    "images/ship2.png",
    "images/ship3.png",
];

pub const ENEMY_SPRITE: &str = "images/enemy.png";
pub const BULLET_SPRITE: &str = "images/bullet.png";
pub const BACKGROUND_SPRITE: &str = "images/background.png";

pub const LASER_SOUND: &str = "audio/laser.wav";
pub const EXPLOSION_SOUND: &str = "audio/explosion.wav";
pub const CLICK_SOUND: &str = "audio/click.wav";
pub const GAME_OVER_SOUND: &str = "audio/game_over.mp3";
pub const MENU_MUSIC: &str = "audio/menu_music.ogg";
pub const GAMEPLAY_MUSIC: &str = "audio/gameplay_music.ogg";

pub const DISPLAY_FONT: &str = "fonts/retro_space.ttf";

// ── Fallback colours for missing sprites ──────────────────────────────────────

/// One placeholder colour per selectable ship.
pub const SHIP_FALLBACK_COLORS: [Color; 3] = [
    Color::srgb(0.20, 0.80, 0.30),
    Color::srgb(0.30, 0.55, 0.95),
    Color::srgb(0.90, 0.35, 0.25),
];

pub const ENEMY_FALLBACK_COLOR: Color = Color::srgb(0.85, 0.85, 0.85);
pub const BULLET_FALLBACK_COLOR: Color = Color::srgb(1.0, 0.15, 0.15);
