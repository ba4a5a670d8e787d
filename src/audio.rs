//! Audio feedback: fire-and-forget sound effects and music routing.
//!
//! Gameplay and UI code never touch the audio backend directly; they write
//! an [`Sfx`] message and this module spawns a one-shot [`AudioPlayer`] for
//! it, applying the user's SFX volume plus a per-sample trim. Music is a
//! single looping entity tagged [`MusicChannel`], switched on state
//! transitions and silenced on game over.
//!
//! | System | Schedule | Purpose |
//! |--------|----------|---------|
//! | `play_sfx_system` | `Update` | Drain `Sfx` messages into one-shot players |
//! | `apply_music_volume_system` | `Update` | Push settings changes into the live sink |
//! | `start_menu_music` | `OnEnter(MainMenu)` | Loop the menu track (idempotent) |
//! | `start_gameplay_music` | session start | Loop the gameplay track |
//! | `game_over_audio` | `OnEnter(GameOver)` | Stop music, play the sting |

use crate::assets::SoundAssets;
use crate::constants::{CLICK_TRIM, EXPLOSION_TRIM, GAME_OVER_TRIM, LASER_TRIM};
use crate::menu::GameState;
use crate::settings::GameSettings;
use bevy::audio::{AudioSink, AudioSource, Volume};
use bevy::prelude::*;

// ── Messages ──────────────────────────────────────────────────────────────────

/// Request to play one sound effect at the current SFX volume.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sfx(pub SfxKind);

/// The game's sound-effect vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxKind {
    Laser,
    Explosion,
    Click,
    GameOver,
}

impl SfxKind {
    /// Per-sample gain trim applied on top of the user's SFX volume.
    fn trim(self) -> f32 {
        match self {
            SfxKind::Laser => LASER_TRIM,
            SfxKind::Explosion => EXPLOSION_TRIM,
            SfxKind::Click => CLICK_TRIM,
            SfxKind::GameOver => GAME_OVER_TRIM,
        }
    }
}

// ── Music channel ─────────────────────────────────────────────────────────────

/// Marker for the single looping music entity.
#[derive(Component)]
pub struct MusicChannel;

/// Which track the music channel is currently playing.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CurrentMusic {
    #[default]
    Silent,
    Menu,
    Gameplay,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the `Sfx` message, the music channel, and all playback systems.
pub struct AudioFeedbackPlugin;

impl Plugin for AudioFeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Sfx>()
            .init_resource::<CurrentMusic>()
            .add_systems(Update, (play_sfx_system, apply_music_volume_system))
            .add_systems(OnEnter(GameState::MainMenu), start_menu_music)
            .add_systems(
                OnTransition {
                    exited: GameState::ShipSelect,
                    entered: GameState::Playing,
                },
                start_gameplay_music,
            )
            .add_systems(
                OnTransition {
                    exited: GameState::GameOver,
                    entered: GameState::Playing,
                },
                start_gameplay_music,
            )
            .add_systems(OnEnter(GameState::GameOver), game_over_audio);
    }
}

// ── Sound effects ─────────────────────────────────────────────────────────────

/// Spawn a despawn-on-finish audio player for every pending [`Sfx`] message.
///
/// Missing samples stay silent; the warning was already logged at load time.
pub fn play_sfx_system(
    mut commands: Commands,
    mut messages: MessageReader<Sfx>,
    sounds: Res<SoundAssets>,
    settings: Res<GameSettings>,
) {
    for msg in messages.read() {
        let kind = msg.0;
        let handle = match kind {
            SfxKind::Laser => &sounds.laser,
            SfxKind::Explosion => &sounds.explosion,
            SfxKind::Click => &sounds.click,
            SfxKind::GameOver => &sounds.game_over,
        };
        let Some(handle) = handle else {
            continue;
        };
        let gain = settings.sfx_gain() * kind.trim();
        commands.spawn((
            AudioPlayer::new(handle.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(gain)),
        ));
    }
}

// ── Music ─────────────────────────────────────────────────────────────────────

fn start_track(
    commands: &mut Commands,
    channel: &Query<Entity, With<MusicChannel>>,
    handle: &Option<Handle<AudioSource>>,
    gain: f32,
) -> bool {
    for entity in channel.iter() {
        commands.entity(entity).despawn();
    }
    let Some(handle) = handle else {
        return false;
    };
    commands.spawn((
        AudioPlayer::new(handle.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(gain)),
        MusicChannel,
    ));
    true
}

/// Loop the menu track. No-op when it is already playing, so bouncing
/// between menu screens never restarts the music.
pub fn start_menu_music(
    mut commands: Commands,
    mut current: ResMut<CurrentMusic>,
    channel: Query<Entity, With<MusicChannel>>,
    sounds: Res<SoundAssets>,
    settings: Res<GameSettings>,
) {
    if *current == CurrentMusic::Menu {
        return;
    }
    *current = if start_track(
        &mut commands,
        &channel,
        &sounds.menu_music,
        settings.music_gain(),
    ) {
        CurrentMusic::Menu
    } else {
        CurrentMusic::Silent
    };
}

/// Loop the gameplay track when a new session starts.
pub fn start_gameplay_music(
    mut commands: Commands,
    mut current: ResMut<CurrentMusic>,
    channel: Query<Entity, With<MusicChannel>>,
    sounds: Res<SoundAssets>,
    settings: Res<GameSettings>,
) {
    if *current == CurrentMusic::Gameplay {
        return;
    }
    *current = if start_track(
        &mut commands,
        &channel,
        &sounds.gameplay_music,
        settings.music_gain(),
    ) {
        CurrentMusic::Gameplay
    } else {
        CurrentMusic::Silent
    };
}

/// Stop the music and play the game-over sting once.
pub fn game_over_audio(
    mut commands: Commands,
    mut current: ResMut<CurrentMusic>,
    channel: Query<Entity, With<MusicChannel>>,
    mut sfx: MessageWriter<Sfx>,
) {
    for entity in channel.iter() {
        commands.entity(entity).despawn();
    }
    *current = CurrentMusic::Silent;
    sfx.write(Sfx(SfxKind::GameOver));
}

/// Push music-volume changes from the Settings screen into the live sink.
pub fn apply_music_volume_system(
    settings: Res<GameSettings>,
    mut sinks: Query<&mut AudioSink, With<MusicChannel>>,
) {
    if !settings.is_changed() {
        return;
    }
    for mut sink in sinks.iter_mut() {
        sink.set_volume(Volume::Linear(settings.music_gain()));
    }
}
