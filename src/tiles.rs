use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Symbol rendered for any cell outside the grid or with no registered tile.
pub const DEFAULT_FALLBACK_SYMBOL: char = '#';

/// Image name of the built-in fallback tile.
pub const VOID_IMAGE: &str = "void";

/// What a tile does when the player walks onto it or clicks while facing it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TileKind {
    #[default]
    Floor,
    /// Teleports through the door-link table when stepped on.
    Door,
    /// Shows a text box when clicked; `opens_menu` also pops the yes/no menu.
    Interactive {
        #[serde(default)]
        opens_menu: bool,
    },
}

/// Immutable descriptor bound to one grid symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    symbol: char,
    image: String,
    collision: bool,
    kind: TileKind,
}

impl Tile {
    pub fn new(symbol: char, image: impl Into<String>, collision: bool, kind: TileKind) -> Self {
        Self { symbol, image: image.into(), collision, kind }
    }

    /// Solid, non-interactive tile drawn wherever the map has nothing to show.
    pub fn void(symbol: char) -> Self {
        Self::new(symbol, VOID_IMAGE, true, TileKind::Floor)
    }

    pub fn symbol(&self) -> char { self.symbol }
    pub fn image(&self) -> &str { &self.image }
    pub fn collision(&self) -> bool { self.collision }
    pub fn kind(&self) -> TileKind { self.kind }

    pub fn is_interactive(&self) -> bool {
        matches!(self.kind, TileKind::Interactive { .. })
    }

    pub fn opens_menu(&self) -> bool {
        matches!(self.kind, TileKind::Interactive { opens_menu: true })
    }
}

/// Symbol → tile table for one map.
///
/// Always holds a tile for its fallback symbol, so [`TileSet::resolve`] never
/// fails: unknown symbols resolve to the fallback tile.
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: HashMap<char, Tile>,
    fallback: char,
}

impl TileSet {
    /// Build a tile set. If `tiles` has no entry for `fallback`, a solid
    /// [`Tile::void`] is registered under that symbol.
    pub fn new(tiles: impl IntoIterator<Item = Tile>, fallback: char) -> Self {
        let mut map: HashMap<char, Tile> = tiles.into_iter().map(|t| (t.symbol, t)).collect();
        map.entry(fallback).or_insert_with(|| Tile::void(fallback));
        Self { tiles: map, fallback }
    }

    pub fn get(&self, symbol: char) -> Option<&Tile> {
        self.tiles.get(&symbol)
    }

    pub fn fallback(&self) -> &Tile {
        // `new` always registers the fallback symbol.
        &self.tiles[&self.fallback]
    }

    /// Tile for `symbol`, or the fallback tile when the symbol is unknown.
    pub fn resolve(&self, symbol: char) -> &Tile {
        self.tiles.get(&symbol).unwrap_or_else(|| self.fallback())
    }

    pub fn len(&self) -> usize { self.tiles.len() }
    pub fn is_empty(&self) -> bool { self.tiles.is_empty() }
}
