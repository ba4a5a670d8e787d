//! Game-specific error types.
//!
//! Everything recoverable degrades by substitution rather than retry: a
//! missing asset becomes a placeholder shape or silence, an out-of-range
//! volume is clamped. These types carry the diagnostics for the warnings
//! logged at those substitution points.

use std::fmt;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// An expected asset file was not found on disk. Recoverable: the caller
    /// substitutes a placeholder rectangle (images) or silence (audio).
    MissingAsset {
        /// Path relative to the `assets/` directory.
        path: String,
    },

    /// A volume value outside the 0–100 range was produced. Returned by the
    /// validation helper; callers clamp rather than propagate.
    InvalidVolume {
        /// The value that was rejected.
        value: f32,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingAsset { path } => {
                write!(f, "asset '{}' not found; using placeholder", path)
            }
            GameError::InvalidVolume { value } => {
                write!(f, "volume {} is outside the 0–100 range", value)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `value` is not a valid 0–100 volume.
pub fn validate_volume(value: f32) -> GameResult<()> {
    if !(0.0..=100.0).contains(&value) {
        Err(GameError::InvalidVolume { value })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_range_is_inclusive() {
        assert!(validate_volume(0.0).is_ok());
        assert!(validate_volume(100.0).is_ok());
        assert!(validate_volume(50.0).is_ok());
    }

    #[test]
    fn out_of_range_volume_is_rejected() {
        assert!(validate_volume(-0.1).is_err());
        assert!(validate_volume(100.1).is_err());
        assert!(validate_volume(f32::NAN).is_err());
    }
}
