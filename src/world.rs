// =============================================================================
// WORLD.RS: Everything one running game owns
//
// `WorldState` is passed by reference to the tick, the compositor and the
// click handler. Grid, camera and object index are rebuilt together every
// tick so no reader ever sees them disagree.
// =============================================================================

use glam::{IVec2, UVec2};
use log::{debug, info, warn};

use crate::audio::{AudioService, Clip, SilentAudio};
use crate::camera::Camera;
use crate::config::GameConfig;
use crate::doors::{Destination, DoorLinkRegistry};
use crate::error::LoadError;
use crate::lesson::{Lesson, Subject};
use crate::map::{MapCatalog, MapId, TileMap};
use crate::objects::{GameObject, MoveRules, ObjectId, ObjectIndex, Step};
use crate::ui::menu_table::HitContext;
use crate::ui::{MenuTable, TextBox, UiLayers};

/// The player is always the first object.
pub const PLAYER: ObjectId = 0;

pub const NEW_GAME_TEXT: &str = "Today is my first day at#Brooklands Academy... I#hope it will be okay...";

/// Inventory counts: `items[pocket][slot]`.
pub type Items = [[u32; 4]; 3];

/// Full-screen states that replace normal rendering until dismissed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecialFlags {
    pub new_game: bool,
    pub new_day: bool,
    pub after_activity: bool,
}

impl SpecialFlags {
    pub fn any(&self) -> bool {
        self.new_game || self.new_day || self.after_activity
    }
}

/// What the compositor draws this frame, in priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    NewGame,
    NewDay,
    AfterActivity,
    TransitionFade,
    Normal,
}

pub struct WorldState {
    config: GameConfig,
    catalog: MapCatalog,
    doors: DoorLinkRegistry,
    map: TileMap,
    objects: Vec<GameObject>,
    index: ObjectIndex,
    camera: Camera,
    transition: u32,
    audio: Box<dyn AudioService>,

    pub ui: UiLayers,
    pub menus: MenuTable,
    pub flags: SpecialFlags,
    pub lesson: Option<Lesson>,
    pub items: Items,
    /// Accumulated grade value per [`Subject`].
    pub grades: [u32; 5],
    pub day: u32,
    pub time: u32,
}

impl WorldState {
    /// Start on `map` with the player at `start`. Uses the school door table,
    /// the standard menus and silent audio until replaced.
    pub fn new(config: GameConfig, catalog: MapCatalog, map: MapId, start: IVec2) -> Result<Self, LoadError> {
        let active = catalog.get(map).cloned().ok_or(LoadError::UnknownMap(map))?;
        let tile = config.tile_size;
        let mut world = Self {
            camera: Camera::compute(start * tile as i32, config.viewport_cells, active.grid().size(), tile),
            config,
            catalog,
            doors: DoorLinkRegistry::school().clone(),
            map: active,
            objects: vec![GameObject::player(start, tile)],
            index: ObjectIndex::new(),
            transition: 0,
            audio: Box::new(SilentAudio),
            ui: UiLayers::default(),
            menus: MenuTable::standard(),
            flags: SpecialFlags::default(),
            lesson: None,
            items: [[0; 4]; 3],
            grades: [0; 5],
            day: 1,
            time: 0,
        };
        world.spawn_npcs();
        world.refresh_camera();
        info!("world started on map {} '{}' at {}", map, world.map.name(), start);
        Ok(world)
    }

    pub fn with_doors(mut self, doors: DoorLinkRegistry) -> Self {
        self.doors = doors;
        self
    }

    pub fn with_audio(mut self, audio: Box<dyn AudioService>) -> Self {
        self.audio = audio;
        self
    }

    pub fn with_menus(mut self, menus: MenuTable) -> Self {
        self.menus = menus;
        self
    }

    pub fn config(&self) -> &GameConfig { &self.config }
    pub fn map(&self) -> &TileMap { &self.map }
    pub fn map_id(&self) -> MapId { self.map.id() }
    pub fn catalog(&self) -> &MapCatalog { &self.catalog }
    pub fn doors(&self) -> &DoorLinkRegistry { &self.doors }
    pub fn camera(&self) -> &Camera { &self.camera }
    pub fn objects(&self) -> &[GameObject] { &self.objects }
    pub fn index(&self) -> &ObjectIndex { &self.index }
    pub fn player(&self) -> &GameObject { &self.objects[PLAYER] }
    pub fn player_mut(&mut self) -> &mut GameObject { &mut self.objects[PLAYER] }
    pub fn transition_remaining(&self) -> u32 { self.transition }
    pub fn audio(&mut self) -> &mut dyn AudioService { self.audio.as_mut() }

    /// Logical framebuffer size in pixels.
    pub fn screen_size(&self) -> UVec2 {
        self.config.logical_size()
    }

    /// Append an object; it draws on top of everything added before it.
    pub fn spawn(&mut self, object: GameObject) -> ObjectId {
        self.objects.push(object);
        self.index.rebuild(&self.objects);
        self.objects.len() - 1
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    pub fn object_at(&self, cell: IVec2) -> Option<&GameObject> {
        self.index.occupant(cell).and_then(|id| self.objects.get(id))
    }

    pub fn object_at_mut(&mut self, cell: IVec2) -> Option<&mut GameObject> {
        self.index.occupant(cell).and_then(|id| self.objects.get_mut(id))
    }

    // ── Screens ──────────────────────────────────────────────────────────────

    pub fn screen(&self) -> Screen {
        if self.flags.new_game {
            Screen::NewGame
        } else if self.flags.new_day {
            Screen::NewDay
        } else if self.flags.after_activity {
            Screen::AfterActivity
        } else if self.transition > 0 {
            Screen::TransitionFade
        } else {
            Screen::Normal
        }
    }

    /// The player may start moves only on the normal screen with no UI up.
    pub fn movement_allowed(&self) -> bool {
        self.screen() == Screen::Normal && self.ui.is_empty()
    }

    pub fn begin_new_game(&mut self) {
        self.enter_text_screen(NEW_GAME_TEXT.to_string());
        self.flags.new_game = true;
        self.audio.loop_music(Clip::Title);
    }

    pub fn begin_new_day(&mut self, text: impl Into<String>) {
        self.enter_text_screen(text.into());
        self.flags.new_day = true;
    }

    pub fn begin_after_activity(&mut self, text: impl Into<String>) {
        self.enter_text_screen(text.into());
        self.flags.after_activity = true;
    }

    /// Black out the screen for the configured number of ticks.
    pub fn begin_transition(&mut self) {
        self.transition = self.config.transition_ticks.max(1);
    }

    fn enter_text_screen(&mut self, text: String) {
        self.ui.close_menu();
        self.ui.open_text(TextBox::new(0, text));
    }

    // ── Tick ─────────────────────────────────────────────────────────────────

    /// Advance the world by one fixed step.
    pub fn tick(&mut self) {
        self.index.rebuild(&self.objects);

        if !self.movement_allowed() {
            self.objects[PLAYER].intents = Default::default();
        }

        let rules = MoveRules {
            tile_size: self.config.tile_size as i32,
            speed: self.config.walk_speed as i32,
        };
        let mut door = None;
        for (id, obj) in self.objects.iter_mut().enumerate() {
            let step = obj.update(id, &self.map, &mut self.index, rules);
            if let (PLAYER, Step::Arrived(cell)) = (id, step) {
                door = self.doors.lookup(self.map.id(), cell);
            }
        }
        if let Some(dest) = door {
            self.transition_to(dest);
        } else if self.transition > 0 {
            self.transition -= 1;
        }

        if let Some(text_box) = self.ui.text_box.as_mut() {
            text_box.advance(self.config.text_speed);
        }

        self.refresh_camera();
    }

    fn refresh_camera(&mut self) {
        self.camera = Camera::compute(
            self.objects[PLAYER].pixel(),
            self.config.viewport_cells,
            self.map.grid().size(),
            self.config.tile_size,
        );
    }

    // ── Maps ─────────────────────────────────────────────────────────────────

    /// Move the player to `dest`, swapping in the destination map and its
    /// NPCs. Returns `false` (and changes nothing) if the map is unknown.
    pub fn transition_to(&mut self, dest: Destination) -> bool {
        let Some(map) = self.catalog.get(dest.map).cloned() else {
            warn!("door leads to unknown map {}; ignoring", dest.map);
            return false;
        };
        debug!("map {} -> map {} at {}", self.map.id(), dest.map, dest.position);
        self.map = map;
        self.objects.truncate(1);
        self.objects[PLAYER].relocate(dest.position, self.config.tile_size);
        self.spawn_npcs();
        self.begin_transition();
        self.audio.play(Clip::Door);
        self.refresh_camera();
        true
    }

    /// Put the active map's NPCs back on their spawn cells.
    pub fn reset_npcs(&mut self) {
        self.objects.truncate(1);
        self.spawn_npcs();
    }

    fn spawn_npcs(&mut self) {
        let tile = self.config.tile_size;
        let npcs: Vec<GameObject> = self
            .map
            .npcs()
            .iter()
            .map(|n| GameObject::npc(n.id, n.sprite.clone(), n.position, n.facing, tile))
            .collect();
        self.objects.extend(npcs);
        self.index.rebuild(&self.objects);
    }

    // ── Lessons ──────────────────────────────────────────────────────────────

    pub fn start_lesson(&mut self, subject: Subject) {
        let lesson = Lesson::start(subject, self.grades[subject.index()], self.time);
        info!("{} lesson at grade {}", subject.name(), lesson.grade);
        self.reset_npcs();
        self.time = subject.period();
        self.lesson = Some(lesson);
        self.ui.open_menu(subject.menu());
        self.audio.loop_music(Clip::Lesson);
    }

    /// End the running lesson: bank the grade increase, move the clock on
    /// and fade back to school. Returns the increase, or `None` if no lesson
    /// was running.
    pub fn finish_lesson(&mut self) -> Option<u32> {
        let lesson = self.lesson.take()?;
        let increase = lesson.grade_increase();
        self.grades[lesson.subject.index()] += increase;
        self.time = lesson.resume_time + 1;
        self.ui.close_all();
        self.begin_transition();
        self.audio.loop_music(Clip::School);
        info!("{} lesson finished: +{}", lesson.subject.name(), increase);
        Some(increase)
    }

    // ── Menus ────────────────────────────────────────────────────────────────

    pub fn hit_context(&self) -> HitContext<'_> {
        HitContext {
            screen_width: self.screen_size().x as i32,
            items: &self.items,
            feedback_pending: self.lesson.as_ref().is_some_and(|l| l.feedback),
        }
    }

    /// Where the "you are here" icon goes on floor plan `floor`: the active
    /// map's icon anchor if the map is drawn on that plan.
    pub fn minimap_marker(&self, floor: u32) -> Option<IVec2> {
        (self.map.minimap_id() == floor).then(|| self.map.icon())
    }

    /// Status-bar label for the current time slot.
    pub fn period_label(&self) -> &'static str {
        match self.time {
            0 => "Morning",
            1 => "Break",
            2 => "Lunch",
            t @ 3..=7 => Subject::from_index(t as usize - 3).map_or("Lesson", Subject::name),
            8 => "After School",
            _ => "Evening",
        }
    }
}
