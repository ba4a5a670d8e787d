//! Asset facade: probe-and-load with graceful placeholder fallback.
//!
//! Every expected file under `assets/` is probed once at startup. Present
//! files are loaded through the asset server; absent ones are logged as a
//! warning and recorded as `None`, which downstream code renders as a
//! coloured rectangle (images) or silence (audio). A missing asset never
//! fails the process.

use crate::constants::*;
use crate::error::{GameError, GameResult};
use bevy::audio::AudioSource;
use bevy::prelude::*;
use std::path::Path;

/// Handles for every sprite the game draws. `None` means the file was
/// missing at startup and the placeholder colour is used instead.
#[derive(Resource, Default)]
pub struct SpriteAssets {
    /// One entry per selectable ship.
    pub ships: [Option<Handle<Image>>; 3],
    pub enemy: Option<Handle<Image>>,
    pub bullet: Option<Handle<Image>>,
    pub background: Option<Handle<Image>>,
}

/// Handles for every sound the game plays. `None` means silence.
#[derive(Resource, Default)]
pub struct SoundAssets {
    pub laser: Option<Handle<AudioSource>>,
    pub explosion: Option<Handle<AudioSource>>,
    pub click: Option<Handle<AudioSource>>,
    pub game_over: Option<Handle<AudioSource>>,
    pub menu_music: Option<Handle<AudioSource>>,
    pub gameplay_music: Option<Handle<AudioSource>>,
}

/// Check that `path` (relative to `assets/`) exists on disk.
fn probe(path: &str) -> GameResult<()> {
    if Path::new("assets").join(path).exists() {
        Ok(())
    } else {
        Err(GameError::MissingAsset {
            path: path.to_owned(),
        })
    }
}

fn load_image(asset_server: &AssetServer, path: &str) -> Option<Handle<Image>> {
    match probe(path) {
        Ok(()) => Some(asset_server.load(path.to_owned())),
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}

fn load_sound(asset_server: &AssetServer, path: &str) -> Option<Handle<AudioSource>> {
    match probe(path) {
        Ok(()) => Some(asset_server.load(path.to_owned())),
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}

/// Startup system: probe and load every game asset, inserting the
/// [`SpriteAssets`] and [`SoundAssets`] resources.
pub fn load_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    let sprites = SpriteAssets {
        ships: [
            load_image(&asset_server, SHIP_SPRITES[0]),
            load_image(&asset_server, SHIP_SPRITES[1]),
            load_image(&asset_server, SHIP_SPRITES[2]),
        ],
        enemy: load_image(&asset_server, ENEMY_SPRITE),
        bullet: load_image(&asset_server, BULLET_SPRITE),
        background: load_image(&asset_server, BACKGROUND_SPRITE),
    };
    let sounds = SoundAssets {
        laser: load_sound(&asset_server, LASER_SOUND),
        explosion: load_sound(&asset_server, EXPLOSION_SOUND),
        click: load_sound(&asset_server, CLICK_SOUND),
        game_over: load_sound(&asset_server, GAME_OVER_SOUND),
        menu_music: load_sound(&asset_server, MENU_MUSIC),
        gameplay_music: load_sound(&asset_server, GAMEPLAY_MUSIC),
    };
    commands.insert_resource(sprites);
    commands.insert_resource(sounds);
    info!("asset probe complete");
}

/// A sprite scaled to `size`, or a flat-colour rectangle of the same size
/// when the image is missing.
pub fn sprite_or_placeholder(
    handle: &Option<Handle<Image>>,
    fallback: Color,
    size: Vec2,
) -> Sprite {
    match handle {
        Some(h) => Sprite {
            image: h.clone(),
            custom_size: Some(size),
            ..default()
        },
        None => Sprite::from_color(fallback, size),
    }
}

impl SpriteAssets {
    /// Sprite for the ship at `index`, placeholder-coloured when missing.
    pub fn ship_sprite(&self, index: usize) -> Sprite {
        let i = index.min(self.ships.len() - 1);
        sprite_or_placeholder(&self.ships[i], SHIP_FALLBACK_COLORS[i], PLAYER_SIZE)
    }

    pub fn enemy_sprite(&self) -> Sprite {
        sprite_or_placeholder(&self.enemy, ENEMY_FALLBACK_COLOR, ENEMY_SIZE)
    }

    pub fn bullet_sprite(&self) -> Sprite {
        sprite_or_placeholder(&self.bullet, BULLET_FALLBACK_COLOR, BULLET_SIZE)
    }
}
