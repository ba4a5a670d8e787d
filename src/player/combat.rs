//! Firing, bullet lifecycle, and bullet×enemy hit resolution.
//!
//! Hit pairing is a pure function over collected bounding boxes so the
//! matching rules (one enemy per bullet, one bullet per enemy) can be
//! unit-tested without an ECS world.

use super::state::{Bullet, Player, PlayerFireCooldown, PlayerScore};
use crate::assets::SpriteAssets;
use crate::audio::{Sfx, SfxKind};
use crate::config::GameConfig;
use crate::constants::{BULLET_SIZE, ENEMY_SIZE, PLAYER_SIZE, PLAY_HALF_HEIGHT};
use crate::enemy::Enemy;
use crate::geometry::{overlaps, Aabb};
use bevy::prelude::*;

/// Where a bullet appears relative to the ship's position: centred on the
/// ship, nose just clear of its top edge.
pub fn bullet_spawn_point(ship: Vec2) -> Vec2 {
    Vec2::new(ship.x, ship.y + PLAYER_SIZE.y / 2.0 + BULLET_SIZE.y / 2.0)
}

/// Advance the fire-cooldown timer.
pub fn cooldown_tick_system(time: Res<Time>, mut cooldown: ResMut<PlayerFireCooldown>) {
    cooldown.tick(time.delta_secs());
}

/// Fire a bullet on SPACE, subject to the cooldown.
///
/// A press during the cooldown window is a no-op rather than queued.
pub fn projectile_fire_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut cooldown: ResMut<PlayerFireCooldown>,
    config: Res<GameConfig>,
    sprites: Res<SpriteAssets>,
    ships: Query<&Transform, With<Player>>,
    mut sfx: MessageWriter<Sfx>,
) {
    if !keys.just_pressed(KeyCode::Space) || !cooldown.ready() {
        return;
    }
    let Ok(ship) = ships.single() else {
        return;
    };
    let spawn = bullet_spawn_point(ship.translation.truncate());
    commands.spawn((
        Bullet,
        sprites.bullet_sprite(),
        Transform::from_xyz(spawn.x, spawn.y, 1.0),
    ));
    cooldown.arm(config.player_fire_cooldown);
    sfx.write(Sfx(SfxKind::Laser));
}

/// Move every bullet upward.
pub fn bullet_move_system(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut bullets: Query<&mut Transform, With<Bullet>>,
) {
    let step = config.bullet_speed * time.delta_secs();
    for mut transform in bullets.iter_mut() {
        transform.translation.y += step;
    }
}

/// Despawn bullets that have fully left the top of the play area.
pub fn despawn_offscreen_bullets_system(
    mut commands: Commands,
    bullets: Query<(Entity, &Transform), With<Bullet>>,
) {
    for (entity, transform) in bullets.iter() {
        if transform.translation.y - BULLET_SIZE.y / 2.0 > PLAY_HALF_HEIGHT {
            commands.entity(entity).despawn();
        }
    }
}

/// Pair up overlapping bullets and enemies: each bullet consumes at most one
/// enemy and each enemy is destroyed at most once per frame.
pub fn resolve_hits<I: Copy + PartialEq>(
    bullets: &[(I, Aabb)],
    enemies: &[(I, Aabb)],
) -> Vec<(I, I)> {
    let mut claimed: Vec<I> = Vec::new();
    let mut pairs = Vec::new();
    for (bullet, bullet_box) in bullets {
        for (enemy, enemy_box) in enemies {
            if claimed.contains(enemy) {
                continue;
            }
            if overlaps(bullet_box, enemy_box) {
                claimed.push(*enemy);
                pairs.push((*bullet, *enemy));
                break;
            }
        }
    }
    pairs
}

/// Resolve bullet×enemy collisions: despawn both, award points, and request
/// the explosion sound.
pub fn bullet_enemy_hit_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut score: ResMut<PlayerScore>,
    bullets: Query<(Entity, &Transform), With<Bullet>>,
    enemies: Query<(Entity, &Transform), With<Enemy>>,
    mut sfx: MessageWriter<Sfx>,
) {
    let bullet_boxes: Vec<_> = bullets
        .iter()
        .map(|(e, t)| (e, Aabb::from_transform(t, BULLET_SIZE)))
        .collect();
    let enemy_boxes: Vec<_> = enemies
        .iter()
        .map(|(e, t)| (e, Aabb::from_transform(t, ENEMY_SIZE)))
        .collect();

    for (bullet, enemy) in resolve_hits(&bullet_boxes, &enemy_boxes) {
        commands.entity(bullet).despawn();
        commands.entity(enemy).despawn();
        score.award_kill(config.enemy_kill_points);
        sfx.write(Sfx(SfxKind::Explosion));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32) -> Aabb {
        Aabb::from_center_size(Vec2::new(x, y), Vec2::new(10.0, 10.0))
    }

    #[test]
    fn overlapping_pair_is_resolved() {
        let bullets = [(1usize, boxed(0.0, 0.0))];
        let enemies = [(2usize, boxed(3.0, 3.0))];
        assert_eq!(resolve_hits(&bullets, &enemies), vec![(1, 2)]);
    }

    #[test]
    fn bullet_consumes_only_one_enemy() {
        let bullets = [(1usize, boxed(0.0, 0.0))];
        let enemies = [(2usize, boxed(2.0, 0.0)), (3usize, boxed(-2.0, 0.0))];
        let pairs = resolve_hits(&bullets, &enemies);
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn enemy_is_destroyed_at_most_once() {
        let bullets = [(1usize, boxed(0.0, 0.0)), (2usize, boxed(1.0, 0.0))];
        let enemies = [(3usize, boxed(0.0, 0.0))];
        let pairs = resolve_hits(&bullets, &enemies);
        assert_eq!(pairs, vec![(1, 3)]);
    }

    #[test]
    fn disjoint_boxes_produce_no_pairs() {
        let bullets = [(1usize, boxed(0.0, 0.0))];
        let enemies = [(2usize, boxed(100.0, 100.0))];
        assert!(resolve_hits(&bullets, &enemies).is_empty());
    }

    #[test]
    fn bullet_spawns_above_ship_nose() {
        let p = bullet_spawn_point(Vec2::new(100.0, -240.0));
        assert_eq!(p.x, 100.0);
        assert!(p.y > -240.0 + PLAYER_SIZE.y / 2.0);
    }
}
