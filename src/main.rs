use std::path::PathBuf;

use anyhow::Context;
use log::{info, warn};

use brooklands::audio::{Clip, KiraAudio};
use brooklands::config::GameConfig;
use brooklands::engine::Engine;
use brooklands::hooks::{GameHooks, HomeActivity, NpcRole, npc_portrait};
use brooklands::lesson::{Subject, question_count};
use brooklands::map::{FileMapLoader, MapCatalog};
use brooklands::render::{Font, ImageLibrary};
use brooklands::ui::{Picture, TextBox};
use brooklands::ui::menu_table;
use brooklands::world::WorldState;

// ── Demo rules ───────────────────────────────────────────────────────────────

/// Just enough game to walk the school, talk to people and sit a lesson.
#[derive(Default)]
struct SchoolHooks;

fn say(world: &mut WorldState, portrait: u8, text: &str) {
    world.ui.close_all();
    world.ui.open_text(TextBox::new(portrait, text));
}

impl GameHooks for SchoolHooks {
    fn npc_interaction(&mut self, world: &mut WorldState, npc: u32) {
        let question = match NpcRole::for_npc(npc) {
            NpcRole::Activity => "Want to hang out after school?",
            NpcRole::Gift => "Got anything for me?",
            NpcRole::Lesson => "Ready for the lesson?",
            NpcRole::Lunch => "Hungry?",
        };
        world.ui.open_text(TextBox::prompt(npc_portrait(npc), question));
        world.ui.open_menu(menu_table::NPC_CHOICE);
    }

    fn npc_answer(&mut self, world: &mut WorldState, npc: u32, role: NpcRole, yes: bool) {
        if !yes {
            world.ui.close_all();
            return;
        }
        match role {
            NpcRole::Activity => {
                world.ui.close_all();
                world.time = 8;
                world.begin_after_activity("We spent the afternoon#at the park.");
            }
            NpcRole::Gift => {
                world.ui.text_box = None;
                world.ui.open_menu(menu_table::GIFT_SNACKS);
            }
            NpcRole::Lesson => {
                world.ui.close_all();
                let subject = Subject::from_index((npc - 5) as usize).unwrap_or(Subject::DesignTech);
                world.start_lesson(subject);
            }
            NpcRole::Lunch => {
                world.time = world.time.max(3);
                say(world, npc_portrait(npc), "That was delicious.");
            }
        }
    }

    fn npc_gift_item(&mut self, world: &mut WorldState, npc: u32, slot: u8) {
        let pocket = if world.ui.menu_id() == Some(menu_table::GIFT_TOOLS) { 1 } else { 2 };
        let count = &mut world.items[pocket][slot as usize % 4];
        *count = count.saturating_sub(1);
        world.audio().play(Clip::Item);
        say(world, npc_portrait(npc), "Thanks! You're the best.");
    }

    fn load_map_image(&mut self, world: &mut WorldState, floor: u32) {
        let marker = world.minimap_marker(floor);
        world.ui.show_picture(Picture { image: format!("minimap_{floor}"), marker });
    }

    fn load_friend(&mut self, world: &mut WorldState, friend: u8) {
        world.ui.show_picture(Picture { image: format!("friend_{friend}"), marker: None });
    }

    fn load_grade(&mut self, world: &mut WorldState, subject: u8) {
        let Some(subject) = Subject::from_index(subject as usize) else { return };
        let value = world.grades[subject.index()];
        say(world, 0, &format!("{}: {} points", subject.name(), value));
    }

    fn lesson_action(&mut self, world: &mut WorldState, action: u8) {
        world.ui.text_box = None;
        let Some(lesson) = world.lesson.as_mut() else { return };
        lesson.record_round(if action == 0 { 1.0 } else { 0.4 });
        if lesson.rounds >= question_count(lesson.grade) {
            lesson.mark_finished();
            say(world, 0, "The bell rings. Class#dismissed!");
        } else {
            lesson.show_feedback();
            let text = if action == 0 { "Correct!" } else { "Not quite..." };
            world.ui.open_text(TextBox::prompt(0, text));
        }
    }

    fn go_home(&mut self, world: &mut WorldState, yes: bool) {
        world.ui.close_all();
        if yes {
            world.time = 9;
            world.begin_after_activity("Home at last.");
        }
    }

    fn home_activity(&mut self, world: &mut WorldState, activity: HomeActivity) {
        world.ui.close_all();
        match activity {
            HomeActivity::Sleep => {
                world.day += 1;
                world.time = 0;
                world.begin_new_day(format!("Day {}", world.day));
            }
            HomeActivity::Study => world.begin_after_activity("An evening of revision."),
            HomeActivity::Game => world.begin_after_activity("Just one more level..."),
            HomeActivity::Manual => {}
        }
    }

    fn new_game_finished(&mut self, world: &mut WorldState) {
        world.begin_transition();
        world.audio().loop_music(Clip::School);
    }

    fn new_day_finished(&mut self, world: &mut WorldState) {
        world.reset_npcs();
        world.audio().loop_music(Clip::School);
    }
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref()).context("failed to load config")?;

    let loader = FileMapLoader::open(config.maps_dir()).context("failed to open map manifest")?;
    let catalog = MapCatalog::load_all(&loader).context("failed to load maps")?;

    let mut images = ImageLibrary::new();
    images.load_folder(config.tiles_dir());
    images.load_folder(config.sprites_dir());

    let font = match Font::load(config.fonts_dir()) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("{e}; text will not be drawn");
            None
        }
    };

    let audio = KiraAudio::new(config.sounds_dir());
    if !audio.is_available() {
        warn!("no audio device; continuing silently");
    }

    let (start_map, start_cell) = (config.start_map, config.start_cell);
    let mut world = WorldState::new(config, catalog, start_map, start_cell)
        .context("failed to create world")?
        .with_audio(Box::new(audio));
    world.begin_new_game();
    info!("starting on map {start_map} at {start_cell}");

    Engine::new(world, Box::new(SchoolHooks))
        .with_images(images)
        .with_font(font)
        .run()
}
