//! Runtime gameplay configuration loaded from `assets/tuning.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the gameplay constants
//! in [`crate::constants`]. At startup, [`load_game_config`] reads
//! `assets/tuning.toml` and overwrites the defaults with any values present
//! in the file. Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.player_speed`, `config.spawn_base_interval`, etc.
//!
//! ## Tuning workflow
//!
//! 1. Edit `assets/tuning.toml`.
//! 2. Restart the game — no recompilation required.
//!
//! Keep `src/constants.rs` in sync: it remains the authoritative default
//! source used by `GameConfig::default()`.

use crate::constants::*;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset by setting the value in
/// `assets/tuning.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Player ────────────────────────────────────────────────────────────────
    pub player_speed: f32,
    pub player_fire_cooldown: f32,

    // ── Bullet ────────────────────────────────────────────────────────────────
    pub bullet_speed: f32,

    // ── Enemy / difficulty ────────────────────────────────────────────────────
    pub enemy_base_speed: f32,
    pub enemy_speed_per_stage: f32,
    pub enemy_max_speed: f32,
    pub spawn_base_interval: f32,
    pub spawn_interval_per_stage: f32,
    pub spawn_min_interval: f32,
    pub stage_score_points: u32,
    pub enemy_kill_points: u32,

    // ── HUD ───────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Player
            player_speed: PLAYER_SPEED,
            player_fire_cooldown: PLAYER_FIRE_COOLDOWN,
            // Bullet
            bullet_speed: BULLET_SPEED,
            // Enemy / difficulty
            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_speed_per_stage: ENEMY_SPEED_PER_STAGE,
            enemy_max_speed: ENEMY_MAX_SPEED,
            spawn_base_interval: ENEMY_SPAWN_BASE_INTERVAL,
            spawn_interval_per_stage: ENEMY_SPAWN_INTERVAL_PER_STAGE,
            spawn_min_interval: ENEMY_SPAWN_MIN_INTERVAL,
            stage_score_points: STAGE_SCORE_POINTS,
            enemy_kill_points: ENEMY_KILL_POINTS,
            // HUD
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

/// Startup system: attempt to load `assets/tuning.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults. TOML parse errors are logged
/// but do not abort startup. A missing file is silently ignored (defaults
/// are already in place from `insert_resource`).
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/tuning.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("loaded gameplay tuning from {path}");
            }
            Err(e) => {
                warn!("failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            info!("no {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: GameConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.player_speed, PLAYER_SPEED);
        assert_eq!(cfg.stage_score_points, STAGE_SCORE_POINTS);
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let cfg: GameConfig =
            toml::from_str("enemy_base_speed = 200.0\nspawn_min_interval = 0.5\n").unwrap();
        assert_eq!(cfg.enemy_base_speed, 200.0);
        assert_eq!(cfg.spawn_min_interval, 0.5);
        assert_eq!(cfg.bullet_speed, BULLET_SPEED);
    }
}
