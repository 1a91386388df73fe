pub mod grid;
pub mod manifest;

pub use grid::Grid;
pub use manifest::{FileMapLoader, MapEntry, MapManifest};

use std::collections::{BTreeMap, HashMap};

use glam::IVec2;
use log::{debug, info};

use crate::error::LoadError;
use crate::geometry::Direction;
use crate::tiles::{Tile, TileSet};

/// Integer map identifier, as used by the door-link table.
pub type MapId = u32;

/// Text shown when the player clicks an interactive tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractiveText {
    /// Portrait drawn beside the text; 0 means none.
    pub portrait: u8,
    pub text: String,
}

/// Where an NPC stands when its map becomes active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NpcSpawn {
    pub id: u32,
    pub position: IVec2,
    pub facing: Direction,
    pub sprite: String,
}

/// Raw map data as produced by a [`MapLoader`], before validation.
#[derive(Clone, Debug)]
pub struct MapSource {
    pub id: MapId,
    pub name: String,
    /// Grid text, one row per line.
    pub grid: String,
    pub tiles: Vec<Tile>,
    pub fallback: char,
    pub minimap_id: u32,
    /// Anchor of the "you are here" icon on the minimap.
    pub icon: IVec2,
    pub interactive: HashMap<IVec2, InteractiveText>,
    pub npcs: Vec<NpcSpawn>,
}

/// A validated, ready-to-render map.
#[derive(Clone, Debug)]
pub struct TileMap {
    id: MapId,
    name: String,
    grid: Grid,
    tiles: TileSet,
    minimap_id: u32,
    icon: IVec2,
    interactive: HashMap<IVec2, InteractiveText>,
    npcs: Vec<NpcSpawn>,
}

impl TileMap {
    /// Validate a loaded source. Fails on empty or non-rectangular grids.
    pub fn from_source(source: MapSource) -> Result<Self, LoadError> {
        let grid = Grid::parse(source.id, &source.grid)?;
        debug!("map {} '{}': {}x{} cells", source.id, source.name, grid.width(), grid.height());
        Ok(Self {
            id: source.id,
            name: source.name,
            grid,
            tiles: TileSet::new(source.tiles, source.fallback),
            minimap_id: source.minimap_id,
            icon: source.icon,
            interactive: source.interactive,
            npcs: source.npcs,
        })
    }

    pub fn id(&self) -> MapId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn tiles(&self) -> &TileSet { &self.tiles }
    pub fn minimap_id(&self) -> u32 { self.minimap_id }
    pub fn icon(&self) -> IVec2 { self.icon }
    pub fn npcs(&self) -> &[NpcSpawn] { &self.npcs }

    /// Tile drawn at `pos`. Cells outside the grid and unknown symbols both
    /// resolve to the fallback tile.
    pub fn tile_at(&self, pos: IVec2) -> &Tile {
        match self.grid.get(pos) {
            Some(symbol) => self.tiles.resolve(symbol),
            None => self.tiles.fallback(),
        }
    }

    /// True if an object may step onto `pos` as far as the terrain goes.
    pub fn is_walkable(&self, pos: IVec2) -> bool {
        !self.tile_at(pos).collision()
    }

    pub fn interactive_text(&self, pos: IVec2) -> Option<&InteractiveText> {
        self.interactive.get(&pos)
    }
}

/// External source of map data.
pub trait MapLoader {
    /// Every map id this loader can produce.
    fn map_ids(&self) -> Vec<MapId>;
    fn load(&self, id: MapId) -> Result<MapSource, LoadError>;
}

/// All maps of the game, loaded once at start-up.
#[derive(Clone, Debug, Default)]
pub struct MapCatalog {
    maps: BTreeMap<MapId, TileMap>,
}

impl MapCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate every map the loader knows. The first failure aborts.
    pub fn load_all(loader: &dyn MapLoader) -> Result<Self, LoadError> {
        let mut catalog = Self::new();
        for id in loader.map_ids() {
            catalog.insert(TileMap::from_source(loader.load(id)?)?);
        }
        info!("loaded {} maps", catalog.maps.len());
        Ok(catalog)
    }

    pub fn insert(&mut self, map: TileMap) {
        self.maps.insert(map.id, map);
    }

    pub fn get(&self, id: MapId) -> Option<&TileMap> {
        self.maps.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = MapId> + '_ {
        self.maps.keys().copied()
    }

    pub fn len(&self) -> usize { self.maps.len() }
    pub fn is_empty(&self) -> bool { self.maps.is_empty() }
}
