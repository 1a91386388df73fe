// =============================================================================
// INTERACTION.RS: Mouse state machine
//
// Clicks are interpreted against the active UI layer only:
//   no UI    → act on the cell the player faces
//   text box → reveal it, or dismiss it and finish any special screen
//   menu(id) → look the click up in the menu table
// Hover runs the same table lookup without touching state.
// =============================================================================

use glam::IVec2;
use log::{debug, warn};

use crate::audio::Clip;
use crate::hooks::{GameHooks, HomeActivity, NpcRole};
use crate::ui::menu_table::{self, MenuAction, MenuId};
use crate::ui::{NOTHING_HERE, TextBox, UiState};
use crate::world::{Screen, WorldState};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Secondary,
}

/// Pointer affordance chosen by hover.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Hand,
}

/// Interpret one click at `point` (logical pixels).
pub fn handle_click(world: &mut WorldState, hooks: &mut dyn GameHooks, button: MouseButton, point: IVec2) {
    if world.screen() == Screen::TransitionFade {
        return;
    }
    match button {
        MouseButton::Primary => match world.ui.state() {
            UiState::NoUi => interact_facing(world, hooks),
            UiState::TextBox => click_text_box(world, hooks),
            UiState::Menu(id) => click_menu(world, hooks, id, point),
        },
        MouseButton::Secondary => toggle_root_menu(world),
    }
}

/// Cursor for the pointer at `point`. Anything but a live menu region is
/// the default cursor.
pub fn hover(world: &WorldState, point: IVec2) -> Cursor {
    let UiState::Menu(id) = world.ui.state() else {
        return Cursor::Default;
    };
    if world.menus.hover(id, point, &world.hit_context()) { Cursor::Hand } else { Cursor::Default }
}

fn interact_facing(world: &mut WorldState, hooks: &mut dyn GameHooks) {
    let cell = world.player().facing_cell();
    let tile = world.map().tile_at(cell);

    if tile.is_interactive() {
        let opens_menu = tile.opens_menu();
        let (portrait, text) = world
            .map()
            .interactive_text(cell)
            .map_or((0, NOTHING_HERE.to_string()), |t| (t.portrait, t.text.clone()));
        if opens_menu {
            world.ui.open_text(TextBox::prompt(portrait, text));
            world.ui.open_menu(menu_table::CONFIRM);
        } else {
            world.ui.open_text(TextBox::new(portrait, text));
        }
        return;
    }

    if let Some(npc) = world.object_at(cell).and_then(|o| o.npc_id()) {
        let player = world.player().position();
        if let Some(obj) = world.object_at_mut(cell) {
            obj.face_towards(player);
        }
        hooks.npc_interaction(world, npc);
        return;
    }

    world.ui.open_text(TextBox::new(0, NOTHING_HERE));
}

fn click_text_box(world: &mut WorldState, hooks: &mut dyn GameHooks) {
    let Some(text_box) = world.ui.text_box.as_mut() else { return };
    if !text_box.is_skippable() {
        text_box.reveal_all();
        return;
    }

    world.ui.text_box = None;
    world.audio().play(Clip::Click);

    let flags = std::mem::take(&mut world.flags);
    if flags.new_game {
        hooks.new_game_finished(world);
    }
    if flags.new_day {
        hooks.new_day_finished(world);
    }
    if flags.after_activity {
        hooks.after_activity_finished(world);
    }
    if world.lesson.as_ref().is_some_and(|l| l.finished) {
        hooks.lesson_finished(world);
        world.finish_lesson();
    }
}

fn click_menu(world: &mut WorldState, hooks: &mut dyn GameHooks, id: MenuId, point: IVec2) {
    let Some(spec) = world.menus.get(id) else {
        warn!("no regions for menu {id}; click ignored");
        return;
    };
    let gated = spec.feedback_gate;
    if let Some(lesson) = world.lesson.as_mut().filter(|l| gated && l.feedback) {
        lesson.dismiss_feedback();
        return;
    }

    let Some(action) = world.menus.hit(id, point, &world.hit_context()).map(|r| r.action) else {
        return;
    };
    debug!("menu {id}: {action:?}");
    world.audio().play(Clip::Menu);
    apply_action(world, hooks, action);
}

fn apply_action(world: &mut WorldState, hooks: &mut dyn GameHooks, action: MenuAction) {
    match action {
        MenuAction::OpenMenu(id) => world.ui.open_menu(id),
        MenuAction::LoadMapImage(floor) => hooks.load_map_image(world, floor),
        MenuAction::LoadFriend(friend) => hooks.load_friend(world, friend),
        MenuAction::LoadGrade(subject) => hooks.load_grade(world, subject),
        MenuAction::NpcAnswer(yes) => {
            if let Some(npc) = facing_npc(world) {
                hooks.npc_answer(world, npc, NpcRole::for_npc(npc), yes);
            }
        }
        MenuAction::GiftItem(slot) => {
            if let Some(npc) = facing_npc(world) {
                hooks.npc_gift_item(world, npc, slot);
            }
        }
        MenuAction::GiftCancel => {
            if let Some(npc) = facing_npc(world) {
                hooks.npc_answer(world, npc, NpcRole::Gift, false);
            }
        }
        MenuAction::LessonAction(action) => hooks.lesson_action(world, action),
        MenuAction::GoHome(yes) => hooks.go_home(world, yes),
        MenuAction::HomeActivity => confirm_home_activity(world, hooks),
        MenuAction::CloseAll => world.ui.close_all(),
        MenuAction::GradeBoost(subject) => hooks.grade_boost(world, subject),
    }
}

fn confirm_home_activity(world: &mut WorldState, hooks: &mut dyn GameHooks) {
    if world.map_id() != HomeActivity::HOME_MAP {
        return;
    }
    let symbol = world.map().tile_at(world.player().facing_cell()).symbol();
    let Some(activity) = HomeActivity::for_symbol(symbol) else {
        debug!("nothing to do at '{symbol}'");
        return;
    };
    if activity == HomeActivity::Manual {
        world.ui.close_all();
    }
    hooks.home_activity(world, activity);
}

fn toggle_root_menu(world: &mut WorldState) {
    if world.ui.text_box.is_some() || world.screen() != Screen::Normal {
        return;
    }
    match world.ui.menu_id() {
        Some(menu_table::ROOT | menu_table::GRADE_BOOST) => world.ui.close_menu(),
        _ => {
            world.ui.open_menu(menu_table::ROOT);
            world.audio().play(Clip::Menu);
        }
    }
}

fn facing_npc(world: &WorldState) -> Option<u32> {
    world.object_at(world.player().facing_cell()).and_then(|o| o.npc_id())
}
