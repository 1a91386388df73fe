use std::fs;
use std::path::{Path, PathBuf};

use glam::{IVec2, UVec2};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::map::MapId;
use crate::window::WindowConfig;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "brooklands.json";

/// Game settings. Every field is optional in JSON; missing ones take the
/// defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Viewport size in cells.
    pub viewport_cells: UVec2,
    /// Tile edge in logical pixels.
    pub tile_size: u32,
    /// Fixed updates per second.
    pub ups: u32,
    pub window: WindowConfig,
    pub asset_dir: PathBuf,
    /// Text-box characters revealed per tick.
    pub text_speed: usize,
    /// Length of the black fade after a map transition, in ticks.
    pub transition_ticks: u32,
    /// Pixels an object moves per tick.
    pub walk_speed: u32,
    /// Map and cell the player starts a new game on.
    pub start_map: MapId,
    pub start_cell: IVec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_cells: UVec2::new(20, 15),
            tile_size: 32,
            ups: 50,
            window: WindowConfig::default(),
            asset_dir: PathBuf::from("resources"),
            text_speed: 2,
            transition_ticks: 25,
            walk_speed: 4,
            start_map: 0,
            start_cell: IVec2::new(9, 22),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_json(&json)
            .map_err(|source| LoadError::Json { path: path.to_path_buf(), source })?;
        info!("loaded config from {}", path.display());
        Ok(config.normalized())
    }

    /// Load `path` if given, else [`CONFIG_FILE`] if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LoadError> {
        match path {
            Some(p) => Self::load(p),
            None if Path::new(CONFIG_FILE).is_file() => Self::load(CONFIG_FILE),
            None => Ok(Self::default().normalized()),
        }
    }

    /// Logical framebuffer size: viewport cells × tile size.
    pub fn logical_size(&self) -> UVec2 {
        self.viewport_cells * self.tile_size
    }

    /// Force the window's logical resolution to match the viewport and keep
    /// rates and sizes non-zero.
    pub fn normalized(mut self) -> Self {
        self.tile_size = self.tile_size.max(1);
        self.ups = self.ups.max(1);
        self.viewport_cells = self.viewport_cells.max(UVec2::ONE);
        self.walk_speed = self.walk_speed.max(1);
        let logical = self.logical_size();
        self.window.logical_width = logical.x;
        self.window.logical_height = logical.y;
        self
    }

    pub fn maps_dir(&self) -> PathBuf { self.asset_dir.join("maps") }
    pub fn tiles_dir(&self) -> PathBuf { self.asset_dir.join("tiles") }
    pub fn sprites_dir(&self) -> PathBuf { self.asset_dir.join("sprites") }
    pub fn sounds_dir(&self) -> PathBuf { self.asset_dir.join("sounds") }
    pub fn fonts_dir(&self) -> PathBuf { self.asset_dir.join("fonts") }
}
