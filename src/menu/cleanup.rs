use super::*;
use crate::enemy::{Enemy, EnemySpawnState};
use crate::player::{Bullet, MoveIntent, Player, PlayerFireCooldown};
use crate::rendering::HudScoreDisplay;

/// Reset per-session resources when a new session starts.
///
/// Runs on `OnTransition { ShipSelect → Playing }` and
/// `OnTransition { GameOver → Playing }`. Resuming from `Paused` must not
/// pass through here — the frozen session state is the whole point of pause.
pub(super) fn reset_session(
    mut score: ResMut<PlayerScore>,
    mut spawner: ResMut<EnemySpawnState>,
    mut cooldown: ResMut<PlayerFireCooldown>,
    mut intent: ResMut<MoveIntent>,
) {
    *score = PlayerScore::default();
    *spawner = EnemySpawnState::default();
    *cooldown = PlayerFireCooldown::default();
    *intent = MoveIntent::default();
}

/// Despawn every session entity: the ship, all bullets and enemies, and the
/// score HUD.
///
/// Runs on `OnEnter(GameOver)` (the overlay shows only the final score, over
/// an empty field) and on `OnTransition { Paused → MainMenu }`. The score
/// resource deliberately survives so the game-over screen can display it; it
/// resets in [`reset_session`].
#[allow(clippy::type_complexity)]
pub(super) fn cleanup_session(
    mut commands: Commands,
    session: Query<
        Entity,
        Or<(
            With<Player>,
            With<Bullet>,
            With<Enemy>,
            With<HudScoreDisplay>,
        )>,
    >,
) {
    for entity in session.iter() {
        commands.entity(entity).despawn();
    }
}
