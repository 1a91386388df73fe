// =============================================================================
// DOORS.RS: Door/teleport link table
//
// Each map id owns a table from a door cell to the (map, cell) the player
// lands on. The school table is fixed at compile time, built on first use and
// shared read-only for the rest of the process.
// =============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use glam::IVec2;

use crate::map::MapId;

/// Where a door leads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Destination {
    pub map: MapId,
    pub position: IVec2,
}

/// One registered door: `source` cell on some map → `destination`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DoorLink {
    pub source: IVec2,
    pub destination: Destination,
}

/// `(map, source col, source row, destination map, destination col, destination row)`
type LinkRow = (MapId, i32, i32, MapId, i32, i32);

const SCHOOL_LINKS: &[LinkRow] = &[
    // School Hall G
    (0, 10, 1, 6, 30, 28),
    (0, 3, 5, 2, 13, 9),
    (0, 17, 5, 3, 5, 9),
    (0, 5, 17, 5, 3, 9),
    (0, 9, 17, 1, 9, 12),
    (0, 10, 17, 1, 10, 12),
    (0, 15, 17, 5, 22, 9),
    // School Hall 1F
    (1, 4, 10, 4, 2, 8),
    (1, 9, 13, 0, 9, 18),
    (1, 10, 13, 0, 10, 18),
    (1, 15, 10, 4, 18, 8),
    // Design Tech classroom
    (2, 12, 10, 0, 3, 6),
    (2, 13, 10, 0, 3, 6),
    // Food Tech classroom
    (3, 5, 10, 0, 17, 6),
    (3, 6, 10, 0, 17, 6),
    // 1F classrooms
    (4, 2, 9, 1, 4, 11),
    (4, 3, 9, 1, 4, 11),
    (4, 18, 9, 1, 15, 11),
    (4, 19, 9, 1, 15, 11),
    // Canteen
    (5, 3, 10, 0, 5, 18),
    (5, 4, 10, 0, 5, 18),
    (5, 21, 10, 0, 15, 18),
    (5, 22, 10, 0, 15, 18),
    // Yard
    (6, 30, 29, 0, 10, 2),
    (6, 31, 29, 0, 10, 2),
];

/// Per-map lookup from door cell to destination.
#[derive(Clone, Debug, Default)]
pub struct DoorLinkRegistry {
    links: HashMap<MapId, HashMap<IVec2, Destination>>,
}

impl DoorLinkRegistry {
    /// Build a registry from `(map, link)` pairs. Later duplicates win.
    pub fn from_links(links: impl IntoIterator<Item = (MapId, DoorLink)>) -> Self {
        let mut registry = Self::default();
        for (map, link) in links {
            registry.links.entry(map).or_default().insert(link.source, link.destination);
        }
        registry
    }

    /// The school's door table, built once and shared.
    pub fn school() -> &'static Self {
        static SCHOOL: OnceLock<DoorLinkRegistry> = OnceLock::new();
        SCHOOL.get_or_init(|| {
            Self::from_links(SCHOOL_LINKS.iter().map(|&(map, sx, sy, dm, dx, dy)| {
                (map, DoorLink {
                    source: IVec2::new(sx, sy),
                    destination: Destination { map: dm, position: IVec2::new(dx, dy) },
                })
            }))
        })
    }

    /// All links of `map`. Maps without doors yield `None`.
    pub fn links_for(&self, map: MapId) -> Option<&HashMap<IVec2, Destination>> {
        self.links.get(&map)
    }

    /// Destination of the door at `cell` on `map`. A miss means the cell is
    /// not a door and behaves like ordinary floor.
    pub fn lookup(&self, map: MapId, cell: IVec2) -> Option<Destination> {
        self.links.get(&map)?.get(&cell).copied()
    }

    /// Every map id that owns at least one door.
    pub fn map_ids(&self) -> impl Iterator<Item = MapId> + '_ {
        self.links.keys().copied()
    }
}
