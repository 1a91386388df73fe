// =============================================================================
// HOOKS.RS: Game-rule callbacks invoked by the interaction state machine
//
// The core decides *when* something happens (an NPC was answered, a lesson
// option was clicked, a special screen was dismissed); what it means for the
// game lives behind `GameHooks`. Every method defaults to a no-op so callers
// implement only what they need.
// =============================================================================

use crate::world::WorldState;

/// What an NPC offers, decided by its id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NpcRole {
    Activity,
    Gift,
    Lesson,
    Lunch,
}

impl NpcRole {
    /// Ids below 5 are friends (even: activity, odd: gift), below 10
    /// teachers, the rest canteen staff.
    pub fn for_npc(id: u32) -> Self {
        match id {
            0..=4 if id % 2 == 0 => NpcRole::Activity,
            0..=4 => NpcRole::Gift,
            5..=9 => NpcRole::Lesson,
            _ => NpcRole::Lunch,
        }
    }
}

/// Portrait shown when NPC `id` speaks: `id + 1`, or none (0) when that
/// does not fit a portrait number.
pub fn npc_portrait(id: u32) -> u8 {
    u8::try_from(id).ok().and_then(|n| n.checked_add(1)).unwrap_or(0)
}

/// Something the player can do on a home-map tile after confirming.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HomeActivity {
    Study,
    Game,
    Sleep,
    Manual,
}

impl HomeActivity {
    /// Map id of the player's bedroom.
    pub const HOME_MAP: u32 = 7;

    pub fn for_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'C' => Some(HomeActivity::Study),
            'G' => Some(HomeActivity::Game),
            'n' | 'U' => Some(HomeActivity::Sleep),
            'c' => Some(HomeActivity::Manual),
            _ => None,
        }
    }
}

#[allow(unused_variables)]
pub trait GameHooks {
    /// The player clicked while facing NPC `npc`. Typically opens a text box
    /// and [`crate::ui::menu_table::NPC_CHOICE`].
    fn npc_interaction(&mut self, world: &mut WorldState, npc: u32) {}

    fn npc_answer(&mut self, world: &mut WorldState, npc: u32, role: NpcRole, yes: bool) {}

    fn npc_gift_item(&mut self, world: &mut WorldState, npc: u32, slot: u8) {}

    fn load_map_image(&mut self, world: &mut WorldState, floor: u32) {}

    fn load_friend(&mut self, world: &mut WorldState, friend: u8) {}

    fn load_grade(&mut self, world: &mut WorldState, subject: u8) {}

    fn lesson_action(&mut self, world: &mut WorldState, action: u8) {}

    fn go_home(&mut self, world: &mut WorldState, yes: bool) {}

    fn home_activity(&mut self, world: &mut WorldState, activity: HomeActivity) {}

    fn grade_boost(&mut self, world: &mut WorldState, subject: u8) {}

    fn new_game_finished(&mut self, world: &mut WorldState) {}

    fn new_day_finished(&mut self, world: &mut WorldState) {}

    fn after_activity_finished(&mut self, world: &mut WorldState) {}

    /// A lesson's closing text was dismissed. Runs before the world applies
    /// the grade increase.
    fn lesson_finished(&mut self, world: &mut WorldState) {}
}

/// Hooks that do nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHooks;

impl GameHooks for NoHooks {}
