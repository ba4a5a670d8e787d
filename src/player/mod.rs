//! Player module: ship entity, input handling, and combat.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Player`, `Bullet`) and resources (`MoveIntent`, `PlayerFireCooldown`, `PlayerScore`) |
//! | [`control`] | Input systems: arrow-key intent, clamped horizontal movement |
//! | [`combat`] | Bullet firing, movement, off-screen despawn, bullet×enemy hit resolution |
//!
//! All public items are re-exported at this level so the rest of the crate
//! can use flat `crate::player::*` imports without knowing the sub-module
//! layout.

pub mod combat;
pub mod control;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use combat::{
    bullet_enemy_hit_system, bullet_move_system, despawn_offscreen_bullets_system,
    projectile_fire_system,
};
pub use control::{apply_move_system, keyboard_to_intent_system};
pub use state::{Bullet, MoveIntent, Player, PlayerFireCooldown, PlayerScore};

use crate::assets::SpriteAssets;
use crate::constants::PLAYER_Y;
use crate::menu::{GameState, SelectedShip};
use bevy::prelude::*;

// ── Ship spawn ────────────────────────────────────────────────────────────────

/// Spawn the player's ship at the bottom-centre of the play area, wearing the
/// sprite chosen on the ship-select screen (or its placeholder colour).
pub fn spawn_player(
    mut commands: Commands,
    sprites: Res<SpriteAssets>,
    selected: Res<SelectedShip>,
) {
    commands.spawn((
        Player,
        sprites.ship_sprite(selected.index),
        Transform::from_xyz(0.0, PLAYER_Y, 1.0),
    ));
    info!("player ship {} spawned", selected.index);
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers player resources, the ship spawn on session start, and the
/// per-frame input → movement → combat pipeline (gated to `Playing`).
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MoveIntent>()
            .init_resource::<PlayerFireCooldown>()
            .init_resource::<PlayerScore>()
            .add_systems(
                OnTransition {
                    exited: GameState::ShipSelect,
                    entered: GameState::Playing,
                },
                spawn_player,
            )
            .add_systems(
                OnTransition {
                    exited: GameState::GameOver,
                    entered: GameState::Playing,
                },
                spawn_player,
            )
            .add_systems(
                Update,
                (
                    keyboard_to_intent_system,
                    apply_move_system,
                    combat::cooldown_tick_system,
                    projectile_fire_system,
                    bullet_move_system,
                    despawn_offscreen_bullets_system,
                    bullet_enemy_hit_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
