use crate::constants::DISPLAY_FONT;
use bevy::prelude::*;
use std::path::Path;

/// Display font resource — stores the loaded retro font handle.
///
/// All UI text references `font.0.clone()`. When the font file is absent the
/// handle stays default and Bevy renders its builtin font instead; menus stay
/// readable either way.
#[derive(Resource, Default)]
pub struct GameFont(pub Handle<Font>);

/// Load the display font at startup, if present.
pub fn load_game_font(mut font: ResMut<GameFont>, asset_server: Res<AssetServer>) {
    if Path::new("assets").join(DISPLAY_FONT).exists() {
        font.0 = asset_server.load(DISPLAY_FONT);
        info!("display font loaded");
    } else {
        warn!("font '{DISPLAY_FONT}' not found; using builtin font");
    }
}

/// Setup camera for 2D rendering.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
