use brooklands::ui::menu_table::{self, Guard, HitContext, MenuAction, MenuTable};
use glam::IVec2;

const WIDTH: i32 = 640;

fn ctx(items: &[[u32; 4]; 3], feedback_pending: bool) -> HitContext<'_> {
    HitContext { screen_width: WIDTH, items, feedback_pending }
}

fn action_at(table: &MenuTable, id: u8, x: i32, y: i32, ctx: &HitContext<'_>) -> Option<MenuAction> {
    table.hit(id, IVec2::new(x, y), ctx).map(|r| r.action)
}

// ── Standard table ───────────────────────────────────────────────────────────

#[test]
fn root_map_option_edges() {
    let table = MenuTable::standard();
    let items = [[0; 4]; 3];
    let c = ctx(&items, false);
    // Map spans x in (488, 540), y in (96, 116).
    assert_eq!(action_at(&table, menu_table::ROOT, 489, 97, &c), Some(MenuAction::OpenMenu(menu_table::MAP)));
    assert_eq!(action_at(&table, menu_table::ROOT, 539, 115, &c), Some(MenuAction::OpenMenu(menu_table::MAP)));
    assert_eq!(action_at(&table, menu_table::ROOT, 488, 100, &c), None);
    assert_eq!(action_at(&table, menu_table::ROOT, 540, 100, &c), None);
    assert_eq!(action_at(&table, menu_table::ROOT, 500, 116, &c), None);
}

#[test]
fn yes_no_menus_share_layout() {
    let table = MenuTable::standard();
    let items = [[0; 4]; 3];
    let c = ctx(&items, false);
    assert_eq!(action_at(&table, menu_table::NPC_CHOICE, 580, 40, &c), Some(MenuAction::NpcAnswer(true)));
    assert_eq!(action_at(&table, menu_table::NPC_CHOICE, 580, 70, &c), Some(MenuAction::NpcAnswer(false)));
    assert_eq!(action_at(&table, menu_table::CONFIRM, 580, 40, &c), Some(MenuAction::HomeActivity));
    assert_eq!(action_at(&table, menu_table::CONFIRM, 580, 70, &c), Some(MenuAction::CloseAll));
    assert_eq!(action_at(&table, menu_table::GO_HOME, 580, 40, &c), Some(MenuAction::GoHome(true)));
}

#[test]
fn point_between_options_misses() {
    let table = MenuTable::standard();
    let items = [[0; 4]; 3];
    assert_eq!(action_at(&table, menu_table::NPC_CHOICE, 580, 56, &ctx(&items, false)), None);
}

#[test]
fn unknown_menu_hits_nothing() {
    let table = MenuTable::standard();
    let items = [[0; 4]; 3];
    assert!(!table.contains(12));
    assert_eq!(action_at(&table, 12, 500, 100, &ctx(&items, false)), None);
}

#[test]
fn items_menu_has_no_regions() {
    let table = MenuTable::standard();
    assert!(table.get(menu_table::ITEMS).is_some_and(|m| m.regions.is_empty()));
}

// ── Guards ───────────────────────────────────────────────────────────────────

#[test]
fn gift_slot_needs_stock() {
    let table = MenuTable::standard();
    let empty = [[0; 4]; 3];
    let mut stocked = [[0; 4]; 3];
    stocked[2][1] = 2;

    // Snack 2 spans x in (356, 544), y in (64, 80).
    assert_eq!(action_at(&table, menu_table::GIFT_SNACKS, 400, 70, &ctx(&empty, false)), None);
    assert!(!table.hover(menu_table::GIFT_SNACKS, IVec2::new(400, 70), &ctx(&empty, false)));
    assert_eq!(action_at(&table, menu_table::GIFT_SNACKS, 400, 70, &ctx(&stocked, false)), Some(MenuAction::GiftItem(1)));
    assert!(table.hover(menu_table::GIFT_SNACKS, IVec2::new(400, 70), &ctx(&stocked, false)));
}

#[test]
fn tool_gifts_read_the_tool_pocket() {
    let table = MenuTable::standard();
    let mut items = [[0; 4]; 3];
    items[2][0] = 5;
    assert_eq!(action_at(&table, menu_table::GIFT_TOOLS, 400, 40, &ctx(&items, false)), None);
    items[1][0] = 1;
    assert_eq!(action_at(&table, menu_table::GIFT_TOOLS, 400, 40, &ctx(&items, false)), Some(MenuAction::GiftItem(0)));
}

#[test]
fn cancel_is_never_guarded() {
    let table = MenuTable::standard();
    let items = [[0; 4]; 3];
    assert_eq!(action_at(&table, menu_table::GIFT_SNACKS, 400, 170, &ctx(&items, false)), Some(MenuAction::GiftCancel));
}

#[test]
fn feedback_gate_blocks_lesson_options() {
    let table = MenuTable::standard();
    let items = [[0; 4]; 3];
    assert_eq!(action_at(&table, menu_table::LESSON_DT, 500, 40, &ctx(&items, false)), Some(MenuAction::LessonAction(0)));
    assert_eq!(action_at(&table, menu_table::LESSON_DT, 500, 40, &ctx(&items, true)), None);
    // Menus without the gate ignore pending feedback.
    assert!(action_at(&table, menu_table::ROOT, 500, 100, &ctx(&items, true)).is_some());
}

#[test]
fn hit_tracks_screen_width() {
    let table = MenuTable::standard();
    let items = [[0; 4]; 3];
    let wide = HitContext { screen_width: 800, items: &items, feedback_pending: false };
    assert_eq!(action_at(&table, menu_table::ROOT, 660, 100, &wide), Some(MenuAction::OpenMenu(menu_table::MAP)));
    assert_eq!(action_at(&table, menu_table::ROOT, 500, 100, &wide), None);
}

// ── JSON ─────────────────────────────────────────────────────────────────────

#[test]
fn table_loads_from_json() {
    let json = r#"{
      "menus": {
        "20": {
          "title": "Shop",
          "regions": [
            { "rect": { "left": 100, "right": 20, "top": 10, "bottom": 30 },
              "action": { "type": "gift_item", "arg": 0 },
              "guard": { "type": "has_item", "pocket": 0, "slot": 3 },
              "label": "Buy" },
            { "rect": { "left": 100, "right": 20, "top": 40, "bottom": 60 },
              "action": { "type": "close_all" } }
          ]
        }
      }
    }"#;
    let table = MenuTable::from_json(json).unwrap();
    let spec = table.get(20).unwrap();
    assert_eq!(spec.title, "Shop");
    assert!(!spec.feedback_gate);
    assert_eq!(spec.regions[0].guard, Guard::HasItem { pocket: 0, slot: 3 });
    assert_eq!(spec.regions[1].guard, Guard::Always);
    assert_eq!(spec.regions[1].label, "");

    let mut items = [[0; 4]; 3];
    items[0][3] = 1;
    assert_eq!(action_at(&table, 20, 600, 20, &ctx(&items, false)), Some(MenuAction::GiftItem(0)));
    assert_eq!(action_at(&table, 20, 600, 50, &ctx(&items, false)), Some(MenuAction::CloseAll));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(MenuTable::from_json(r#"{ "menus": { "1": { "regions": 3 } } }"#).is_err());
}
