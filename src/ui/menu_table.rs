// =============================================================================
// MENU_TABLE.RS: Declarative menu hit-test table
//
// Every menu screen is addressed by a numeric id. Its clickable options are
// rectangles measured from the right edge of the logical screen, each bound
// to one action and an optional guard. Clicks and hover both go through
// `MenuTable::hit`, so the two can never disagree about what is clickable.
// =============================================================================

use std::collections::BTreeMap;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::map::MapId;

/// Numeric menu identifier.
pub type MenuId = u8;

pub const ROOT: MenuId = 0;
pub const MAP: MenuId = 1;
pub const FRIENDS: MenuId = 2;
pub const GRADES: MenuId = 3;
pub const ITEMS: MenuId = 4;
pub const NPC_CHOICE: MenuId = 5;
pub const GIFT_SNACKS: MenuId = 6;
pub const GIFT_TOOLS: MenuId = 7;
pub const LESSON_DT: MenuId = 8;
pub const LESSON_FOOD: MenuId = 9;
pub const LESSON_PE: MenuId = 10;
pub const LESSON_SCIENCE: MenuId = 11;
pub const GO_HOME: MenuId = 13;
pub const CONFIRM: MenuId = 14;
pub const GRADE_BOOST: MenuId = 15;

/// Rectangle in logical screen pixels, horizontal edges measured leftwards
/// from the screen's right edge. All four bounds are exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl ScreenRect {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }

    pub fn contains(&self, screen_width: i32, point: IVec2) -> bool {
        point.x > screen_width - self.left
            && point.x < screen_width - self.right
            && point.y > self.top
            && point.y < self.bottom
    }

    /// Top-left corner in absolute screen pixels.
    pub fn origin(&self, screen_width: i32) -> IVec2 {
        IVec2::new(screen_width - self.left, self.top)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.left - self.right, self.bottom - self.top)
    }
}

/// Extra condition a region must meet to be clickable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Guard {
    #[default]
    Always,
    /// The inventory holds at least one of `items[pocket][slot]`.
    HasItem { pocket: usize, slot: usize },
}

/// What a region does when clicked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "arg", rename_all = "snake_case")]
pub enum MenuAction {
    OpenMenu(MenuId),
    LoadMapImage(MapId),
    LoadFriend(u8),
    LoadGrade(u8),
    /// Yes/no answer to the NPC the player is facing.
    NpcAnswer(bool),
    GiftItem(u8),
    GiftCancel,
    LessonAction(u8),
    GoHome(bool),
    /// "Yes" on the confirm menu: run whatever the facing tile offers.
    HomeActivity,
    /// Close both the menu and any text box.
    CloseAll,
    GradeBoost(u8),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRegion {
    pub rect: ScreenRect,
    pub action: MenuAction,
    #[serde(default)]
    pub guard: Guard,
    #[serde(default)]
    pub label: String,
}

impl MenuRegion {
    pub fn new(rect: ScreenRect, action: MenuAction, label: impl Into<String>) -> Self {
        Self { rect, action, guard: Guard::Always, label: label.into() }
    }

    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }
}

/// Every region of one menu screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSpec {
    #[serde(default)]
    pub title: String,
    pub regions: Vec<MenuRegion>,
    /// While lesson feedback is pending, a click only dismisses it and no
    /// region is considered hit.
    #[serde(default)]
    pub feedback_gate: bool,
}

/// World facts the guards are evaluated against.
#[derive(Copy, Clone, Debug)]
pub struct HitContext<'a> {
    pub screen_width: i32,
    pub items: &'a [[u32; 4]; 3],
    pub feedback_pending: bool,
}

impl Guard {
    fn passes(&self, ctx: &HitContext<'_>) -> bool {
        match *self {
            Guard::Always => true,
            Guard::HasItem { pocket, slot } => {
                ctx.items.get(pocket).and_then(|p| p.get(slot)).is_some_and(|&n| n > 0)
            }
        }
    }
}

/// `menu id → regions`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTable {
    menus: BTreeMap<MenuId, MenuSpec>,
}

impl MenuTable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, id: MenuId, spec: MenuSpec) {
        self.menus.insert(id, spec);
    }

    pub fn get(&self, id: MenuId) -> Option<&MenuSpec> {
        self.menus.get(&id)
    }

    pub fn contains(&self, id: MenuId) -> bool {
        self.menus.contains_key(&id)
    }

    /// First region of menu `id` containing `point` whose guard passes.
    /// `None` for unknown menus, misses and gated menus with feedback pending.
    pub fn hit(&self, id: MenuId, point: IVec2, ctx: &HitContext<'_>) -> Option<&MenuRegion> {
        let spec = self.menus.get(&id)?;
        if spec.feedback_gate && ctx.feedback_pending {
            return None;
        }
        spec.regions
            .iter()
            .find(|r| r.rect.contains(ctx.screen_width, point) && r.guard.passes(ctx))
    }

    /// Whether the pointer over `point` should show the hand cursor.
    pub fn hover(&self, id: MenuId, point: IVec2, ctx: &HitContext<'_>) -> bool {
        self.hit(id, point, ctx).is_some()
    }

    /// The school's menus.
    pub fn standard() -> Self {
        use MenuAction::*;

        let mut table = Self::default();
        let r = ScreenRect::new;
        let yes_no = |yes: MenuAction, no: MenuAction| MenuSpec {
            title: String::new(),
            regions: vec![
                MenuRegion::new(r(76, 28, 32, 48), yes, "Yes"),
                MenuRegion::new(r(76, 42, 64, 80), no, "No"),
            ],
            feedback_gate: false,
        };
        let subjects = |act: fn(u8) -> MenuAction, title: &str| MenuSpec {
            title: title.into(),
            regions: [(168, 32, 48, "DT"), (56, 64, 80, "Food Tech"), (168, 96, 116, "PE"), (56, 128, 144, "Chemistry"), (152, 160, 176, "ICT")]
                .into_iter()
                .enumerate()
                .map(|(i, (right, top, bottom, label))| MenuRegion::new(r(200, right, top, bottom), act(i as u8), label))
                .collect(),
            feedback_gate: false,
        };
        let lesson = |rows: &[(i32, i32, i32)]| MenuSpec {
            title: String::new(),
            regions: rows
                .iter()
                .enumerate()
                .map(|(i, &(right, top, bottom))| {
                    MenuRegion::new(r(152, right, top, bottom), LessonAction(i as u8), format!("Option {}", i + 1))
                })
                .collect(),
            feedback_gate: true,
        };

        table.insert(ROOT, MenuSpec {
            title: "Menu".into(),
            regions: vec![
                MenuRegion::new(r(152, 100, 96, 116), OpenMenu(MAP), "Map"),
                MenuRegion::new(r(152, 40, 64, 80), OpenMenu(FRIENDS), "Friends"),
                MenuRegion::new(r(152, 52, 32, 48), OpenMenu(GRADES), "Grades"),
                MenuRegion::new(r(152, 72, 128, 146), OpenMenu(ITEMS), "Items"),
            ],
            feedback_gate: false,
        });

        table.insert(MAP, MenuSpec {
            title: "Map".into(),
            regions: vec![
                MenuRegion::new(r(76, 56, 32, 52), LoadMapImage(0), "G"),
                MenuRegion::new(r(76, 44, 64, 84), LoadMapImage(1), "1F"),
            ],
            feedback_gate: false,
        });

        table.insert(FRIENDS, MenuSpec {
            title: "Friends".into(),
            regions: [(88, 32, 48), (56, 64, 80), (136, 96, 116), (40, 128, 144), (120, 160, 176)]
                .into_iter()
                .enumerate()
                .map(|(i, (right, top, bottom))| MenuRegion::new(r(200, right, top, bottom), LoadFriend(i as u8), format!("Friend {}", i + 1)))
                .collect(),
            feedback_gate: false,
        });

        table.insert(GRADES, subjects(LoadGrade, "Grades"));
        table.insert(ITEMS, MenuSpec { title: "Items".into(), ..MenuSpec::default() });
        table.insert(NPC_CHOICE, yes_no(NpcAnswer(true), NpcAnswer(false)));

        table.insert(GIFT_SNACKS, MenuSpec {
            title: "Gift".into(),
            regions: [(96, 32, 48), (96, 64, 80), (96, 96, 116), (124, 128, 144)]
                .into_iter()
                .enumerate()
                .map(|(i, (right, top, bottom))| {
                    MenuRegion::new(r(284, right, top, bottom), GiftItem(i as u8), format!("Snack {}", i + 1))
                        .guarded(Guard::HasItem { pocket: 2, slot: i })
                })
                .chain(std::iter::once(MenuRegion::new(r(284, 124, 160, 176), GiftCancel, "Cancel")))
                .collect(),
            feedback_gate: false,
        });

        table.insert(GIFT_TOOLS, MenuSpec {
            title: "Gift".into(),
            regions: [(76, 32, 48), (76, 64, 80), (76, 96, 116)]
                .into_iter()
                .enumerate()
                .map(|(i, (right, top, bottom))| {
                    MenuRegion::new(r(284, right, top, bottom), GiftItem(i as u8), format!("Item {}", i + 1))
                        .guarded(Guard::HasItem { pocket: 1, slot: i })
                })
                .chain(std::iter::once(MenuRegion::new(r(284, 124, 128, 144), GiftCancel, "Cancel")))
                .collect(),
            feedback_gate: false,
        });

        table.insert(LESSON_DT, lesson(&[(56, 32, 48), (72, 64, 80), (72, 96, 116), (56, 128, 146)]));
        table.insert(LESSON_FOOD, lesson(&[(40, 32, 48), (24, 64, 80), (52, 96, 116)]));
        table.insert(LESSON_PE, lesson(&[(40, 32, 48), (72, 64, 80), (72, 96, 116)]));
        table.insert(LESSON_SCIENCE, lesson(&[(104, 32, 48), (104, 64, 80), (52, 96, 116), (88, 128, 144), (72, 160, 176)]));

        table.insert(GO_HOME, yes_no(GoHome(true), GoHome(false)));
        table.insert(CONFIRM, yes_no(HomeActivity, CloseAll));
        table.insert(GRADE_BOOST, subjects(GradeBoost, "Study"));

        table
    }
}
