//! Starfall — a vertical-scrolling arcade shooter.
//!
//! The application is a plugin-per-concern Bevy app driven by the
//! [`menu::GameState`] state machine: each screen owns its UI through
//! `OnEnter`/`OnExit` lifecycles, and every gameplay system is gated on
//! `in_state(GameState::Playing)` so that pausing freezes the world without
//! tearing it down.

pub mod assets;
pub mod audio;
pub mod config;
pub mod constants;
pub mod enemy;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod menu;
pub mod player;
pub mod rendering;
pub mod settings;
