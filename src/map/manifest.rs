use std::fs;
use std::path::{Path, PathBuf};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::geometry::Direction;
use crate::map::{InteractiveText, MapId, MapLoader, MapSource, NpcSpawn};
use crate::tiles::{DEFAULT_FALLBACK_SYMBOL, Tile, TileKind};

/// File name of the manifest inside the maps directory.
pub const MANIFEST_FILE: &str = "maps.json";

// ── JSON-facing types ─────────────────────────────────────────────────────────

/// `maps.json`: every map of the game and its tile table.
///
/// ```json
/// { "maps": [ { "id": 0, "name": "School Hall G", "file": "hall_g.txt",
///               "tiles": [ { "symbol": ".", "image": "floor" },
///                          { "symbol": "D", "image": "door", "kind": { "type": "door" } } ] } ] }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MapManifest {
    pub maps: Vec<MapEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapEntry {
    pub id: MapId,
    pub name: String,
    /// Grid text file, relative to the manifest directory.
    pub file: String,
    #[serde(default)]
    pub minimap_id: u32,
    #[serde(default)]
    pub icon: IVec2,
    #[serde(default = "default_fallback")]
    pub fallback: char,
    pub tiles: Vec<TileEntry>,
    #[serde(default)]
    pub interactive: Vec<InteractiveEntry>,
    #[serde(default)]
    pub npcs: Vec<NpcEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileEntry {
    pub symbol: char,
    pub image: String,
    #[serde(default)]
    pub collision: bool,
    #[serde(default)]
    pub kind: TileKind,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InteractiveEntry {
    pub at: IVec2,
    #[serde(default)]
    pub portrait: u8,
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NpcEntry {
    pub id: u32,
    pub at: IVec2,
    #[serde(default)]
    pub facing: Direction,
    pub sprite: String,
}

fn default_fallback() -> char {
    DEFAULT_FALLBACK_SYMBOL
}

impl MapManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn entry(&self, id: MapId) -> Option<&MapEntry> {
        self.maps.iter().find(|m| m.id == id)
    }
}

impl MapEntry {
    /// Combine this entry with its grid text into a [`MapSource`].
    pub fn to_source(&self, grid: String) -> MapSource {
        MapSource {
            id: self.id,
            name: self.name.clone(),
            grid,
            tiles: self
                .tiles
                .iter()
                .map(|t| Tile::new(t.symbol, t.image.clone(), t.collision, t.kind))
                .collect(),
            fallback: self.fallback,
            minimap_id: self.minimap_id,
            icon: self.icon,
            interactive: self
                .interactive
                .iter()
                .map(|e| (e.at, InteractiveText { portrait: e.portrait, text: e.text.clone() }))
                .collect(),
            npcs: self
                .npcs
                .iter()
                .map(|n| NpcSpawn { id: n.id, position: n.at, facing: n.facing, sprite: n.sprite.clone() })
                .collect(),
        }
    }
}

// ── FileMapLoader ─────────────────────────────────────────────────────────────

/// Reads `maps.json` and the per-map grid text files from a directory.
#[derive(Debug)]
pub struct FileMapLoader {
    root: PathBuf,
    manifest: MapManifest,
}

impl FileMapLoader {
    /// Open `dir/maps.json`. Grid files are read lazily by [`MapLoader::load`].
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, LoadError> {
        let root = dir.as_ref().to_path_buf();
        let path = root.join(MANIFEST_FILE);
        let json = fs::read_to_string(&path).map_err(|source| LoadError::Io { path: path.clone(), source })?;
        let manifest = MapManifest::from_json(&json).map_err(|source| LoadError::Json { path, source })?;
        Ok(Self { root, manifest })
    }

    pub fn manifest(&self) -> &MapManifest {
        &self.manifest
    }
}

impl MapLoader for FileMapLoader {
    fn map_ids(&self) -> Vec<MapId> {
        self.manifest.maps.iter().map(|m| m.id).collect()
    }

    fn load(&self, id: MapId) -> Result<MapSource, LoadError> {
        let entry = self.manifest.entry(id).ok_or(LoadError::UnknownMap(id))?;
        let path = self.root.join(&entry.file);
        let grid = fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })?;
        Ok(entry.to_source(grid))
    }
}
