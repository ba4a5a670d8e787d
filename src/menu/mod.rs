//! Application state machine and every menu screen.
//!
//! ## States
//!
//! | State         | Screen                                        |
//! |---------------|-----------------------------------------------|
//! | `MainMenu`    | Splash with START / SETTINGS / QUIT           |
//! | `ShipSelect`  | Three ship cards + BACK                       |
//! | `Settings`    | Volume sliders, fullscreen checkbox, BACK     |
//! | `Playing`     | Live session (no menu UI)                     |
//! | `Paused`      | Dim overlay over the frozen session           |
//! | `GameOver`    | Final score, RESTART / MAIN MENU              |
//! | `QuitConfirm` | YES (exit) / NO                               |
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`types`] | `GameState`, `SelectedShip`, and every screen's marker components |
//! | `common` | Shared colours, spacers, hover-tint helper |
//! | `main_menu` / `ship_select` / `settings_menu` / `pause` / `game_over` / `quit_confirm` | One file per screen: setup, cleanup, interaction |
//! | `cleanup` | Session start/teardown shared across screens |
//!
//! Every screen follows the same lifecycle: `OnEnter` spawns its UI tree
//! under a root marker, `OnExit` despawns the tree, and an `Update` system
//! gated to the state handles its buttons.

use bevy::prelude::*;

use crate::assets::SpriteAssets;
use crate::audio::{Sfx, SfxKind};
use crate::graphics::GameFont;
use crate::player::PlayerScore;
use crate::settings::GameSettings;

mod cleanup;
mod common;
mod game_over;
mod main_menu;
mod pause;
mod quit_confirm;
mod settings_menu;
mod ship_select;
pub mod types;

use common::*;
pub use pause::{pause_resume_input_system, toggle_pause_system};
pub use types::*;

/// Registers [`GameState`], every screen's lifecycle, and the session
/// start/teardown transitions.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SelectedShip>()
            // ── Main menu ─────────────────────────────────────────────────────
            .add_systems(OnEnter(GameState::MainMenu), main_menu::setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), main_menu::cleanup_main_menu)
            .add_systems(
                Update,
                main_menu::main_menu_button_system.run_if(in_state(GameState::MainMenu)),
            )
            // ── Ship select ───────────────────────────────────────────────────
            .add_systems(OnEnter(GameState::ShipSelect), ship_select::setup_ship_select)
            .add_systems(OnExit(GameState::ShipSelect), ship_select::cleanup_ship_select)
            .add_systems(
                Update,
                ship_select::ship_select_button_system.run_if(in_state(GameState::ShipSelect)),
            )
            // ── Settings ──────────────────────────────────────────────────────
            .add_systems(OnEnter(GameState::Settings), settings_menu::setup_settings)
            .add_systems(OnExit(GameState::Settings), settings_menu::cleanup_settings)
            .add_systems(
                Update,
                (
                    settings_menu::slider_drag_system,
                    settings_menu::slider_visual_sync_system,
                    settings_menu::checkbox_system,
                    settings_menu::settings_button_system,
                )
                    .run_if(in_state(GameState::Settings)),
            )
            // ── Pause ─────────────────────────────────────────────────────────
            .add_systems(
                Update,
                pause::toggle_pause_system.run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::Paused), pause::setup_pause_menu)
            .add_systems(OnExit(GameState::Paused), pause::cleanup_pause_menu)
            .add_systems(
                Update,
                (
                    pause::pause_resume_input_system,
                    pause::pause_menu_button_system,
                )
                    .run_if(in_state(GameState::Paused)),
            )
            // ── Game over ─────────────────────────────────────────────────────
            .add_systems(
                OnEnter(GameState::GameOver),
                (cleanup::cleanup_session, game_over::setup_game_over),
            )
            .add_systems(OnExit(GameState::GameOver), game_over::cleanup_game_over)
            .add_systems(
                Update,
                game_over::game_over_button_system.run_if(in_state(GameState::GameOver)),
            )
            // ── Quit confirm ──────────────────────────────────────────────────
            .add_systems(OnEnter(GameState::QuitConfirm), quit_confirm::setup_quit_confirm)
            .add_systems(OnExit(GameState::QuitConfirm), quit_confirm::cleanup_quit_confirm)
            .add_systems(
                Update,
                quit_confirm::quit_confirm_button_system.run_if(in_state(GameState::QuitConfirm)),
            )
            // ── Session lifecycle ─────────────────────────────────────────────
            .add_systems(
                OnTransition {
                    exited: GameState::ShipSelect,
                    entered: GameState::Playing,
                },
                cleanup::reset_session,
            )
            .add_systems(
                OnTransition {
                    exited: GameState::GameOver,
                    entered: GameState::Playing,
                },
                cleanup::reset_session,
            )
            .add_systems(
                OnTransition {
                    exited: GameState::Paused,
                    entered: GameState::MainMenu,
                },
                cleanup::cleanup_session,
            );
    }
}
