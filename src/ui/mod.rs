// ── UI layers & pure helpers ─────────────────────────────────────────────────

pub mod menu_table;

use glam::IVec2;

pub use menu_table::{MenuAction, MenuId, MenuRegion, MenuSpec, MenuTable, ScreenRect};

/// Line-break marker inside text-box strings.
pub const LINE_BREAK: char = '#';

pub const NOTHING_HERE: &str = "There's nothing here.";

/// Word-wrap `text` so every returned line is at most `max_cols` characters.
/// Words are split on ASCII whitespace; a word longer than `max_cols` is
/// hard-split across lines.
pub fn word_wrap(text: &str, max_cols: usize) -> Vec<String> {
    if max_cols == 0 { return vec![]; }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let space = if current.is_empty() { 0 } else { 1 };
        if !current.is_empty() && current.chars().count() + space + word.chars().count() > max_cols {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() { current.push(' '); }
        current.push_str(word);
        while current.chars().count() > max_cols {
            let split = current.char_indices().nth(max_cols).map_or(current.len(), |(i, _)| i);
            let rest = current.split_off(split);
            lines.push(std::mem::replace(&mut current, rest));
        }
    }
    if !current.is_empty() { lines.push(current); }
    lines
}

/// Returns `true` if `(px, py)` falls inside the rectangle at `(rx, ry)` with
/// size `(rw, rh)`, using half-open intervals.
pub fn rect_contains(rx: i32, ry: i32, rw: i32, rh: i32, px: i32, py: i32) -> bool {
    px >= rx && px < rx + rw && py >= ry && py < ry + rh
}

// ── TextBox ───────────────────────────────────────────────────────────────────

/// Modal message at the bottom of the screen, revealed a few characters per
/// tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBox {
    portrait: u8,
    text: String,
    revealed: usize,
    total: usize,
    prompt: bool,
}

impl TextBox {
    pub fn new(portrait: u8, text: impl Into<String>) -> Self {
        let text = text.into();
        let total = text.chars().filter(|&c| c != LINE_BREAK).count();
        Self { portrait, text, revealed: 0, total, prompt: false }
    }

    /// A box that only captions an open menu: the menu keeps receiving
    /// clicks while it is shown.
    pub fn prompt(portrait: u8, text: impl Into<String>) -> Self {
        Self { prompt: true, ..Self::new(portrait, text) }
    }

    pub fn portrait(&self) -> u8 { self.portrait }
    pub fn text(&self) -> &str { &self.text }
    pub fn is_prompt(&self) -> bool { self.prompt }

    /// Reveal up to `chars` more characters (line breaks are free).
    pub fn advance(&mut self, chars: usize) {
        self.revealed = (self.revealed + chars).min(self.total);
    }

    pub fn reveal_all(&mut self) {
        self.revealed = self.total;
    }

    /// True once the whole text is on screen; a click then dismisses the box.
    pub fn is_skippable(&self) -> bool {
        self.revealed >= self.total
    }

    /// Revealed text split at line breaks.
    pub fn visible_lines(&self) -> Vec<String> {
        let mut left = self.revealed;
        let mut lines = Vec::new();
        for line in self.text.split(LINE_BREAK) {
            let shown: String = line.chars().take(left).collect();
            left -= shown.chars().count();
            lines.push(shown);
            if left == 0 { break; }
        }
        lines
    }
}

// ── Layers ────────────────────────────────────────────────────────────────────

/// Image shown beside the open menu (a floor plan, a friend's page), with an
/// optional marker in the picture's own pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picture {
    pub image: String,
    pub marker: Option<IVec2>,
}

/// An open menu screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    pub id: MenuId,
}

/// Which layer currently interprets clicks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UiState {
    NoUi,
    TextBox,
    Menu(MenuId),
}

/// At most one text box and one menu. A picture belongs to the menu and
/// goes away with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiLayers {
    pub text_box: Option<TextBox>,
    pub menu: Option<Menu>,
    pub picture: Option<Picture>,
}

impl UiLayers {
    /// A text box suspends any menu beneath it, unless it is a prompt
    /// captioning that menu.
    pub fn state(&self) -> UiState {
        match (&self.text_box, self.menu) {
            (Some(tb), Some(menu)) if tb.is_prompt() => UiState::Menu(menu.id),
            (Some(_), _) => UiState::TextBox,
            (None, Some(menu)) => UiState::Menu(menu.id),
            (None, None) => UiState::NoUi,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text_box.is_none() && self.menu.is_none()
    }

    pub fn open_text(&mut self, text_box: TextBox) {
        self.text_box = Some(text_box);
    }

    pub fn open_menu(&mut self, id: MenuId) {
        self.menu = Some(Menu { id });
        self.picture = None;
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
        self.picture = None;
    }

    pub fn close_all(&mut self) {
        self.text_box = None;
        self.close_menu();
    }

    /// Show `picture` beside the open menu. Ignored with no menu open.
    pub fn show_picture(&mut self, picture: Picture) {
        if self.menu.is_some() {
            self.picture = Some(picture);
        }
    }

    pub fn menu_id(&self) -> Option<MenuId> {
        self.menu.map(|m| m.id)
    }
}
