use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
};
use log::{debug, info, warn};

/// Every sound the game plays.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Clip {
    // Music
    Bedroom,
    Exam,
    Heist,
    Lesson,
    School,
    Title,
    Results,
    // Effects
    Buff,
    Click,
    Debuff,
    Door,
    GotAnswers,
    Item,
    Menu,
    PaAnnouncement,
    PcHack,
    Save,
    UseStinkbomb,
}

impl Clip {
    pub const ALL: [Clip; 18] = [
        Clip::Bedroom, Clip::Exam, Clip::Heist, Clip::Lesson, Clip::School, Clip::Title, Clip::Results,
        Clip::Buff, Clip::Click, Clip::Debuff, Clip::Door, Clip::GotAnswers, Clip::Item, Clip::Menu,
        Clip::PaAnnouncement, Clip::PcHack, Clip::Save, Clip::UseStinkbomb,
    ];

    /// File stem under `sounds/`.
    pub fn name(self) -> &'static str {
        match self {
            Clip::Bedroom => "bedroom",
            Clip::Exam => "exam",
            Clip::Heist => "heist",
            Clip::Lesson => "lesson",
            Clip::School => "school",
            Clip::Title => "title",
            Clip::Results => "results",
            Clip::Buff => "buff",
            Clip::Click => "click",
            Clip::Debuff => "debuff",
            Clip::Door => "door",
            Clip::GotAnswers => "got_answers",
            Clip::Item => "item",
            Clip::Menu => "menu",
            Clip::PaAnnouncement => "pa_announcement",
            Clip::PcHack => "pc_hack",
            Clip::Save => "save",
            Clip::UseStinkbomb => "use_stinkbomb",
        }
    }

    pub fn is_music(self) -> bool {
        matches!(
            self,
            Clip::Bedroom | Clip::Exam | Clip::Heist | Clip::Lesson | Clip::School | Clip::Title | Clip::Results
        )
    }
}

/// Fire-and-forget playback. Implementations must never panic or block the
/// tick loop; failures are logged and dropped.
pub trait AudioService {
    /// Play a clip once.
    fn play(&mut self, clip: Clip);
    /// Stop the current track and loop `clip` from its start.
    fn loop_music(&mut self, clip: Clip);
    /// Stop the current track.
    fn stop(&mut self);
}

/// Plays nothing. Used headless and in tests.
#[derive(Copy, Clone, Debug, Default)]
pub struct SilentAudio;

impl AudioService for SilentAudio {
    fn play(&mut self, _clip: Clip) {}
    fn loop_music(&mut self, _clip: Clip) {}
    fn stop(&mut self) {}
}

/// `kira`-backed audio with every clip preloaded into memory.
pub struct KiraAudio {
    /// `None` when audio hardware is unavailable (headless / CI / no audio device).
    manager: Option<AudioManager>,
    sounds: HashMap<Clip, StaticSoundData>,
    active_music: Option<StaticSoundHandle>,
}

impl KiraAudio {
    /// Open the default output and load `dir/<clip>.wav` (or `.ogg`) for
    /// every clip. Missing files and devices are logged, never fatal.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!("failed to initialise audio output: {e}; audio disabled");
                None
            }
        };
        let mut audio = Self { manager, sounds: HashMap::new(), active_music: None };
        if audio.is_available() {
            for clip in Clip::ALL {
                audio.load(clip, dir.as_ref());
            }
            info!("loaded {} of {} sound clips", audio.sounds.len(), Clip::ALL.len());
        }
        audio
    }

    /// Returns true if audio hardware is available.
    pub fn is_available(&self) -> bool { self.manager.is_some() }

    fn load(&mut self, clip: Clip, dir: &Path) {
        let found = ["wav", "ogg"]
            .iter()
            .map(|ext| dir.join(format!("{}.{ext}", clip.name())))
            .find(|p| p.is_file());
        let Some(path) = found else {
            warn!("sound clip '{}' not found in {}", clip.name(), dir.display());
            return;
        };
        match StaticSoundData::from_file(&path) {
            Ok(sound) => { self.sounds.insert(clip, sound); }
            Err(e) => warn!("failed to load '{}' from '{}': {e}", clip.name(), path.display()),
        }
    }

    fn fade_out_music(&mut self) {
        if let Some(mut handle) = self.active_music.take() {
            let _ = handle.stop(Tween {
                duration: Duration::from_millis(100),
                ..Default::default()
            });
        }
    }
}

impl AudioService for KiraAudio {
    fn play(&mut self, clip: Clip) {
        let Some(manager) = self.manager.as_mut() else { return; };
        let Some(data) = self.sounds.get(&clip) else { return; };
        if let Err(e) = manager.play(data.clone()) {
            debug!("failed to play '{}': {e}", clip.name());
        }
    }

    fn loop_music(&mut self, clip: Clip) {
        if self.manager.is_none() { return; }
        self.fade_out_music();
        let (Some(manager), Some(data)) = (self.manager.as_mut(), self.sounds.get(&clip)) else { return; };
        let settings = StaticSoundSettings::new().loop_region(0.0..);
        match manager.play(data.clone().with_settings(settings)) {
            Ok(handle) => self.active_music = Some(handle),
            Err(e) => warn!("failed to play music '{}': {e}", clip.name()),
        }
    }

    fn stop(&mut self) {
        self.fade_out_music();
    }
}
