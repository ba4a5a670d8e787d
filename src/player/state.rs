//! Player components and resources.
//!
//! All ECS components and resources that describe ship, bullet, and score
//! state live here. Systems that mutate this state are in the sibling
//! modules:
//! - [`super::control`] — input + movement
//! - [`super::combat`] — firing, bullet lifecycle, hit resolution

use crate::constants::{ENEMY_KILL_POINTS, PLAYER_FIRE_COOLDOWN};
use bevy::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// Marker component for the player ship entity.
#[derive(Component)]
pub struct Player;

/// Marker component for a live bullet.
#[derive(Component)]
pub struct Bullet;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Aggregated movement intent for the current frame, derived from input.
///
/// The keyboard system writes to this resource each frame after it is
/// cleared; [`super::control::apply_move_system`] reads it and moves the
/// ship. Tests can populate it directly to drive the ship without a real
/// input device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct MoveIntent {
    /// Horizontal direction in −1.0 (left) ..= 1.0 (right); 0.0 = idle.
    pub dir: f32,
}

/// Enforces a minimum interval between consecutive shots.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerFireCooldown {
    /// Remaining cooldown in seconds; decremented each frame, clamped to 0.
    pub timer: f32,
}

impl PlayerFireCooldown {
    /// True when a shot may be fired this frame.
    #[inline]
    pub fn ready(&self) -> bool {
        self.timer <= 0.0
    }

    /// Start a fresh cooldown window after firing.
    #[inline]
    pub fn arm(&mut self, cooldown: f32) {
        self.timer = cooldown;
    }

    /// Advance the timer by `dt` seconds.
    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.timer = (self.timer - dt).max(0.0);
    }
}

/// Tracks the player's score for the current session.
///
/// Points only ever increase during a session (one fixed award per enemy
/// destroyed) and reset when a new session starts.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PlayerScore {
    /// Accumulated points.
    pub points: u32,
    /// Enemies destroyed by bullets.
    pub destroyed: u32,
}

impl PlayerScore {
    /// Total session score.
    #[inline]
    pub fn total(self) -> u32 {
        self.points
    }

    /// Record one destroyed enemy.
    #[inline]
    pub fn award_kill(&mut self, points: u32) {
        self.points += points;
        self.destroyed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_blocks_until_elapsed() {
        let mut cd = PlayerFireCooldown::default();
        assert!(cd.ready());
        cd.arm(PLAYER_FIRE_COOLDOWN);
        assert!(!cd.ready());
        cd.tick(PLAYER_FIRE_COOLDOWN / 2.0);
        assert!(!cd.ready());
        cd.tick(PLAYER_FIRE_COOLDOWN);
        assert!(cd.ready());
    }

    #[test]
    fn cooldown_timer_never_goes_negative() {
        let mut cd = PlayerFireCooldown::default();
        cd.tick(10.0);
        assert_eq!(cd.timer, 0.0);
    }

    #[test]
    fn kills_accumulate_points() {
        let mut score = PlayerScore::default();
        score.award_kill(ENEMY_KILL_POINTS);
        score.award_kill(ENEMY_KILL_POINTS);
        assert_eq!(score.total(), 2 * ENEMY_KILL_POINTS);
        assert_eq!(score.destroyed, 2);
    }
}
