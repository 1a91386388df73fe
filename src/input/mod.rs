use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use glam::IVec2;
pub use winit::keyboard::KeyCode;

use crate::geometry::Direction;
use crate::interaction::MouseButton;
use crate::objects::Intents;

/// Held keys plus the mouse events that arrived since the last tick, already
/// mapped into logical pixels.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,

    /// Cursor position in logical pixels; `None` over the letterbox bars or
    /// outside the window.
    pub mouse_pos: Option<IVec2>,
    /// Clicks in arrival order.
    pub clicks: Vec<(MouseButton, IVec2)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_frame_state(&mut self) {
        self.clicks.clear();
    }

    pub fn press(&mut self, key: KeyCode) {
        self.keys_held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    /// Record a click at the current cursor position. Clicks over the bars
    /// are dropped.
    pub fn click(&mut self, button: MouseButton) {
        if let Some(pos) = self.mouse_pos {
            self.clicks.push((button, pos));
        }
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
}

/// Maps logical actions to one or more keys.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<KeyCode>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, key: KeyCode) {
        self.bindings.entry(action).or_default().push(key);
    }

    /// Returns true while any bound key is down.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).is_some_and(|keys| keys.iter().any(|k| input.is_key_held(*k)))
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}

impl ActionMap<Direction> {
    /// Arrow keys and WASD.
    pub fn movement() -> Self {
        let mut map = Self::new();
        for (dir, keys) in [
            (Direction::Up, [KeyCode::ArrowUp, KeyCode::KeyW]),
            (Direction::Down, [KeyCode::ArrowDown, KeyCode::KeyS]),
            (Direction::Left, [KeyCode::ArrowLeft, KeyCode::KeyA]),
            (Direction::Right, [KeyCode::ArrowRight, KeyCode::KeyD]),
        ] {
            for key in keys {
                map.bind(dir, key);
            }
        }
        map
    }

    /// Movement intents for every held direction.
    pub fn intents(&self, input: &InputState) -> Intents {
        let mut intents = Intents::default();
        for dir in Direction::ALL {
            intents.set(dir, self.is_held(dir, input));
        }
        intents
    }
}
