use std::path::PathBuf;

use thiserror::Error;

use crate::map::MapId;

/// Failure while loading maps, the map manifest, configuration or fonts.
///
/// Loading is the only fallible phase; once a world is running, rendering
/// and input fall back to defaults instead of erroring.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("map {map}: row {row} has {found} cells, expected {expected}")]
    NonRectangular {
        map: MapId,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map {0} has no rows")]
    EmptyMap(MapId),

    #[error("no map with id {0}")]
    UnknownMap(MapId),
}
