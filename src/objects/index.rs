use std::collections::HashMap;

use glam::IVec2;

use super::{GameObject, ObjectId};

/// Cell → object lookup.
///
/// Non-owning: stores indices into the world's object list. Rebuilt from the
/// list at the start of every tick and kept in step as objects claim cells
/// during that tick; the object list stays authoritative.
#[derive(Clone, Debug, Default)]
pub struct ObjectIndex {
    cells: HashMap<IVec2, ObjectId>,
}

impl ObjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from scratch. Non-blocking objects are not indexed. When two
    /// objects share a cell the later one wins, matching draw order.
    pub fn rebuild(&mut self, objects: &[GameObject]) {
        self.cells.clear();
        for (id, obj) in objects.iter().enumerate() {
            if obj.is_blocking() {
                self.cells.insert(obj.position(), id);
            }
        }
    }

    pub fn occupant(&self, cell: IVec2) -> Option<ObjectId> {
        self.cells.get(&cell).copied()
    }

    /// True when some object other than `me` holds `cell`.
    pub fn is_blocked_for(&self, cell: IVec2, me: ObjectId) -> bool {
        self.occupant(cell).is_some_and(|id| id != me)
    }

    /// Move `id`'s claim from `from` to `to`.
    pub fn relocate(&mut self, id: ObjectId, from: IVec2, to: IVec2) {
        if self.cells.get(&from) == Some(&id) {
            self.cells.remove(&from);
        }
        self.cells.insert(to, id);
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}
