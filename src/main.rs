use bevy::prelude::*;
use bevy::window::WindowResolution;

use starfall::assets;
use starfall::audio::AudioFeedbackPlugin;
use starfall::config::{self, GameConfig};
use starfall::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use starfall::enemy::EnemyPlugin;
use starfall::graphics::{self, GameFont};
use starfall::menu::MenuPlugin;
use starfall::player::PlayerPlugin;
use starfall::rendering::{self, HudPlugin};
use starfall::settings::{self, GameSettings};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Starfall".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/tuning.toml (if present) at startup.
        .insert_resource(GameConfig::default())
        .insert_resource(GameSettings::default())
        .init_resource::<GameFont>()
        .add_plugins((
            MenuPlugin,
            PlayerPlugin,
            EnemyPlugin,
            AudioFeedbackPlugin,
            HudPlugin,
        ))
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                config::load_game_config,
                graphics::load_game_font.after(config::load_game_config),
                assets::load_assets.after(config::load_game_config),
                graphics::setup_camera,
                rendering::setup_background.after(assets::load_assets),
            ),
        )
        .add_systems(Update, settings::apply_window_mode_system)
        .run();
}
