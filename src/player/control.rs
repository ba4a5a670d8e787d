//! Player input and movement systems.
//!
//! ## Pipeline (runs in order every `Update` frame while Playing)
//!
//! 1. [`keyboard_to_intent_system`] — resets [`MoveIntent`] and translates
//!    the arrow keys into it.
//! 2. [`apply_move_system`] — moves the ship by the intent, clamped to the
//!    play area.
//!
//! The intent layer makes movement fully testable: tests populate the
//! resource directly and run only `apply_move_system`.

use super::state::{MoveIntent, Player};
use crate::config::GameConfig;
use crate::constants::{PLAYER_SIZE, PLAY_HALF_WIDTH};
use bevy::prelude::*;

/// Translate the arrow keys into [`MoveIntent`].
///
/// Holding both arrows cancels out.
pub fn keyboard_to_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<MoveIntent>) {
    let mut dir = 0.0;
    if keys.pressed(KeyCode::ArrowLeft) {
        dir -= 1.0;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        dir += 1.0;
    }
    intent.dir = dir;
}

/// Horizontal position clamped so the ship stays fully inside the play area.
pub fn clamped_player_x(x: f32, half_width: f32, ship_width: f32) -> f32 {
    let limit = half_width - ship_width / 2.0;
    x.clamp(-limit, limit)
}

/// Move the ship by the current intent, clamped to the play area.
pub fn apply_move_system(
    time: Res<Time>,
    intent: Res<MoveIntent>,
    config: Res<GameConfig>,
    mut ships: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = ships.single_mut() else {
        return;
    };
    let x = transform.translation.x + intent.dir * config.player_speed * time.delta_secs();
    transform.translation.x = clamped_player_x(x, PLAY_HALF_WIDTH, PLAYER_SIZE.x);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_identity_inside_bounds() {
        assert_eq!(clamped_player_x(0.0, 640.0, 64.0), 0.0);
        assert_eq!(clamped_player_x(-300.0, 640.0, 64.0), -300.0);
    }

    #[test]
    fn clamp_keeps_ship_fully_on_screen() {
        // 640 − 32 = 608 is the furthest the ship centre can go.
        assert_eq!(clamped_player_x(1000.0, 640.0, 64.0), 608.0);
        assert_eq!(clamped_player_x(-1000.0, 640.0, 64.0), -608.0);
    }
}
