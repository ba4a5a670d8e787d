use crate::constants::{MUSIC_SLIDER_Y, SFX_SLIDER_Y};
use bevy::prelude::*;

/// Top-level application state machine.
///
/// Exactly one state is active at a time; every transition is requested
/// explicitly by a screen's input system. Gameplay systems across the crate
/// run under `.run_if(in_state(GameState::Playing))`, so `Paused` freezes
/// the session without tearing it down.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Main-menu splash screen; shown on startup.
    #[default]
    MainMenu,
    /// Ship picker shown after START.
    ShipSelect,
    /// Volume sliders and the fullscreen toggle.
    Settings,
    /// Active gameplay.
    Playing,
    /// Session frozen; pause overlay visible over the game world.
    Paused,
    /// Session ended; final score and restart options shown.
    GameOver,
    /// "Are you sure?" screen shown before quitting.
    QuitConfirm,
}

/// Which ship sprite the player flies this session. Set on the ship-select
/// screen; restart after game over reuses it.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SelectedShip {
    /// Index into the ship sprite table (0–2).
    pub index: usize,
}

// ── Main menu ─────────────────────────────────────────────────────────────────

/// Root node of the main-menu UI; entire tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the "START" button.
#[derive(Component)]
pub struct MenuStartButton;

/// Tags the "SETTINGS" button.
#[derive(Component)]
pub struct MenuSettingsButton;

/// Tags the "QUIT" button.
#[derive(Component)]
pub struct MenuQuitButton;

// ── Ship select ───────────────────────────────────────────────────────────────

/// Root node of the ship-select screen; despawned on `OnExit(ShipSelect)`.
#[derive(Component)]
pub struct ShipSelectRoot;

/// Tags a "SELECT" button with the ship it chooses.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShipSelectButton {
    pub index: usize,
}

/// Tags the "BACK" button on the ship-select screen.
#[derive(Component)]
pub struct ShipSelectBackButton;

// ── Settings ──────────────────────────────────────────────────────────────────

/// Root node of the settings screen; despawned on `OnExit(Settings)`.
#[derive(Component)]
pub struct SettingsRoot;

/// Tags the "BACK" button on the settings screen.
#[derive(Component)]
pub struct SettingsBackButton;

/// Which volume a slider edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKind {
    Sfx,
    Music,
}

impl SliderKind {
    /// Label prefix shown above the track.
    pub fn label(self) -> &'static str {
        match self {
            SliderKind::Sfx => "SFX VOLUME",
            SliderKind::Music => "MUSIC VOLUME",
        }
    }

    /// Top edge of this slider's track (UI pixels).
    pub fn track_top(self) -> f32 {
        match self {
            SliderKind::Sfx => SFX_SLIDER_Y,
            SliderKind::Music => MUSIC_SLIDER_Y,
        }
    }
}

/// Pointer-driven volume slider state, attached to the track node.
#[derive(Component, Debug)]
pub struct VolumeSlider {
    pub kind: SliderKind,
    /// Current value in 0–100.
    pub value: f32,
    /// True while the pointer is dragging this slider's handle.
    pub dragging: bool,
}

/// Tags the draggable handle inside a slider track.
#[derive(Component)]
pub struct SliderHandle;

/// Tags a slider's label text with the slider it describes.
#[derive(Component, Debug, Clone, Copy)]
pub struct SliderLabel(pub SliderKind);

/// Tags the fullscreen checkbox button.
#[derive(Component)]
pub struct FullscreenCheckbox;

/// Tags the filled mark inside the checkbox; visibility mirrors the flag.
#[derive(Component)]
pub struct FullscreenCheckMark;

// ── Pause ─────────────────────────────────────────────────────────────────────

/// Root node of the pause overlay; despawned on `OnExit(Paused)`.
#[derive(Component)]
pub struct PauseMenuRoot;

/// Tags the "RESUME" button in the pause overlay.
#[derive(Component)]
pub struct PauseResumeButton;

/// Tags the "MAIN MENU" button in the pause overlay.
#[derive(Component)]
pub struct PauseMainMenuButton;

// ── Game over ─────────────────────────────────────────────────────────────────

/// Root node of the game-over screen; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Tags the "RESTART" button on the game-over screen.
#[derive(Component)]
pub struct GameOverRestartButton;

/// Tags the "MAIN MENU" button on the game-over screen.
#[derive(Component)]
pub struct GameOverMenuButton;

// ── Quit confirm ──────────────────────────────────────────────────────────────

/// Root node of the quit-confirm screen; despawned on `OnExit(QuitConfirm)`.
#[derive(Component)]
pub struct QuitConfirmRoot;

/// Tags the "YES" button on the quit-confirm screen.
#[derive(Component)]
pub struct QuitYesButton;

/// Tags the "NO" button on the quit-confirm screen.
#[derive(Component)]
pub struct QuitNoButton;
