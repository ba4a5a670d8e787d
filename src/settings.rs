//! Process-wide user settings and the systems that apply them.
//!
//! [`GameSettings`] lives for the whole process and is mutated only by the
//! Settings screen. There is no disk persistence; defaults are restored on
//! every launch.

use crate::constants::{DEFAULT_MUSIC_VOLUME, DEFAULT_SFX_VOLUME};
use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};

/// User-facing audio/display settings.
#[derive(Resource, Debug, Clone)]
pub struct GameSettings {
    /// Sound-effect volume, 0–100.
    pub sfx_volume: f32,
    /// Music volume, 0–100.
    pub music_volume: f32,
    /// Whether the window runs borderless-fullscreen.
    pub fullscreen: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sfx_volume: DEFAULT_SFX_VOLUME,
            music_volume: DEFAULT_MUSIC_VOLUME,
            fullscreen: false,
        }
    }
}

impl GameSettings {
    /// SFX volume as a linear 0–1 gain.
    #[inline]
    pub fn sfx_gain(&self) -> f32 {
        (self.sfx_volume / 100.0).clamp(0.0, 1.0)
    }

    /// Music volume as a linear 0–1 gain.
    #[inline]
    pub fn music_gain(&self) -> f32 {
        (self.music_volume / 100.0).clamp(0.0, 1.0)
    }
}

/// Push the fullscreen flag into the primary window whenever settings change.
///
/// Writes the window only when the mode actually differs, so toggling a
/// volume slider does not touch the window at all.
pub fn apply_window_mode_system(
    settings: Res<GameSettings>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !settings.is_changed() {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let wanted = if settings.fullscreen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    };
    if window.mode != wanted {
        window.mode = wanted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_volumes_match_constants() {
        let s = GameSettings::default();
        assert_eq!(s.sfx_volume, DEFAULT_SFX_VOLUME);
        assert_eq!(s.music_volume, DEFAULT_MUSIC_VOLUME);
        assert!(!s.fullscreen);
    }

    #[test]
    fn gains_are_clamped_to_unit_range() {
        let mut s = GameSettings::default();
        s.sfx_volume = 250.0;
        s.music_volume = -40.0;
        assert_eq!(s.sfx_gain(), 1.0);
        assert_eq!(s.music_gain(), 0.0);
    }
}
