//! Enemy ships: interval spawning, difficulty scaling, fall movement, and
//! the two session-ending checks (floor breach and player contact).
//!
//! Difficulty is stage-stepped: every `stage_score_points` of score advances
//! one stage, each stage shortens the spawn interval and raises the assigned
//! fall speed, and both curves are clamped so high scores can never produce
//! a zero interval or an unreadable speed. The profile is a pure function so
//! the monotonicity and bounds are unit-tested directly.

use crate::assets::SpriteAssets;
use crate::config::GameConfig;
use crate::constants::{ENEMY_SIZE, PLAYER_SIZE, PLAY_HALF_HEIGHT, PLAY_HALF_WIDTH};
use crate::geometry::{overlaps, Aabb};
use crate::menu::GameState;
use crate::player::{Player, PlayerScore};
use bevy::prelude::*;
use rand::Rng;

// ── Components ────────────────────────────────────────────────────────────────

/// An attacking ship falling toward the bottom of the play area.
#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy {
    /// Fall speed assigned at spawn time (world units / s).
    pub speed: f32,
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Countdown to the next enemy spawn.
#[derive(Resource, Debug, Clone, Copy)]
pub struct EnemySpawnState {
    /// Seconds until the next spawn.
    pub timer_secs: f32,
}

impl Default for EnemySpawnState {
    fn default() -> Self {
        Self {
            timer_secs: crate::constants::ENEMY_SPAWN_BASE_INTERVAL,
        }
    }
}

// ── Difficulty profile ────────────────────────────────────────────────────────

/// Difficulty stage for a score: one stage per `stage_score_points`.
pub fn difficulty_stage(config: &GameConfig, score: u32) -> u32 {
    score / config.stage_score_points.max(1)
}

/// Spawn interval and enemy fall speed for the current score.
///
/// Interval shrinks and speed grows linearly per stage; both are clamped so
/// the spawner never degenerates.
pub fn spawn_profile(config: &GameConfig, score: u32) -> (f32, f32) {
    let stage = difficulty_stage(config, score) as f32;
    let interval = (config.spawn_base_interval - stage * config.spawn_interval_per_stage)
        .max(config.spawn_min_interval);
    let speed =
        (config.enemy_base_speed + stage * config.enemy_speed_per_stage).min(config.enemy_max_speed);
    (interval, speed)
}

/// Map a unit random sample to a spawn x that keeps the enemy box fully
/// inside the play area.
pub fn spawn_x_from_unit(unit: f32, half_width: f32, enemy_width: f32) -> f32 {
    let limit = half_width - enemy_width / 2.0;
    -limit + unit.clamp(0.0, 1.0) * 2.0 * limit
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Count down the spawn timer and spawn one enemy just above the top edge
/// whenever it elapses, re-arming with the score-scaled interval.
pub fn enemy_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    mut state: ResMut<EnemySpawnState>,
    config: Res<GameConfig>,
    score: Res<PlayerScore>,
    sprites: Res<SpriteAssets>,
) {
    state.timer_secs -= time.delta_secs();
    if state.timer_secs > 0.0 {
        return;
    }
    let (interval, speed) = spawn_profile(&config, score.total());
    state.timer_secs = interval;

    let x = spawn_x_from_unit(
        rand::thread_rng().gen_range(0.0..1.0),
        PLAY_HALF_WIDTH,
        ENEMY_SIZE.x,
    );
    let y = PLAY_HALF_HEIGHT + ENEMY_SIZE.y / 2.0;
    commands.spawn((
        Enemy { speed },
        sprites.enemy_sprite(),
        Transform::from_xyz(x, y, 1.0),
    ));
}

/// Move every enemy down by its assigned speed.
pub fn enemy_fall_system(time: Res<Time>, mut enemies: Query<(&Enemy, &mut Transform)>) {
    let dt = time.delta_secs();
    for (enemy, mut transform) in enemies.iter_mut() {
        transform.translation.y -= enemy.speed * dt;
    }
}

/// An enemy whose box has fully left the bottom edge ends the session.
pub fn enemy_breach_system(
    enemies: Query<&Transform, With<Enemy>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for transform in enemies.iter() {
        if transform.translation.y + ENEMY_SIZE.y / 2.0 < -PLAY_HALF_HEIGHT {
            next_state.set(GameState::GameOver);
            return;
        }
    }
}

/// An enemy overlapping the player's ship ends the session.
pub fn enemy_player_collision_system(
    enemies: Query<&Transform, With<Enemy>>,
    ships: Query<&Transform, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(ship) = ships.single() else {
        return;
    };
    let ship_box = Aabb::from_transform(ship, PLAYER_SIZE);
    for transform in enemies.iter() {
        let enemy_box = Aabb::from_transform(transform, ENEMY_SIZE);
        if overlaps(&enemy_box, &ship_box) {
            next_state.set(GameState::GameOver);
            return;
        }
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the spawner resource and the per-frame enemy pipeline (gated to
/// `Playing`).
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemySpawnState>().add_systems(
            Update,
            (
                enemy_spawn_system,
                enemy_fall_system,
                enemy_breach_system,
                enemy_player_collision_system,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ENEMY_SIZE;

    #[test]
    fn spawn_interval_is_monotonically_non_increasing() {
        let config = GameConfig::default();
        let mut last = f32::INFINITY;
        for score in (0..2000).step_by(10) {
            let (interval, _) = spawn_profile(&config, score);
            assert!(interval <= last, "interval grew at score {score}");
            last = interval;
        }
    }

    #[test]
    fn enemy_speed_is_monotonically_non_decreasing() {
        let config = GameConfig::default();
        let mut last = 0.0;
        for score in (0..2000).step_by(10) {
            let (_, speed) = spawn_profile(&config, score);
            assert!(speed >= last, "speed shrank at score {score}");
            last = speed;
        }
    }

    #[test]
    fn profile_is_clamped_at_extreme_scores() {
        let config = GameConfig::default();
        let (interval, speed) = spawn_profile(&config, u32::MAX);
        assert_eq!(interval, config.spawn_min_interval);
        assert_eq!(speed, config.enemy_max_speed);
        assert!(interval > 0.0);
    }

    #[test]
    fn stage_zero_uses_base_values() {
        let config = GameConfig::default();
        let (interval, speed) = spawn_profile(&config, config.stage_score_points - 1);
        assert_eq!(interval, config.spawn_base_interval);
        assert_eq!(speed, config.enemy_base_speed);
    }

    #[test]
    fn spawn_x_keeps_enemy_fully_on_screen() {
        for unit in [0.0, 0.25, 0.5, 0.99, 1.0] {
            let x = spawn_x_from_unit(unit, PLAY_HALF_WIDTH, ENEMY_SIZE.x);
            assert!(x - ENEMY_SIZE.x / 2.0 >= -PLAY_HALF_WIDTH);
            assert!(x + ENEMY_SIZE.x / 2.0 <= PLAY_HALF_WIDTH);
        }
    }

    #[test]
    fn out_of_range_unit_sample_is_clamped() {
        let lo = spawn_x_from_unit(-3.0, PLAY_HALF_WIDTH, ENEMY_SIZE.x);
        let hi = spawn_x_from_unit(7.0, PLAY_HALF_WIDTH, ENEMY_SIZE.x);
        assert_eq!(lo, spawn_x_from_unit(0.0, PLAY_HALF_WIDTH, ENEMY_SIZE.x));
        assert_eq!(hi, spawn_x_from_unit(1.0, PLAY_HALF_WIDTH, ENEMY_SIZE.x));
    }
}
