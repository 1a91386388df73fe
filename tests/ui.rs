use brooklands::ui::{LINE_BREAK, Picture, TextBox, UiLayers, UiState, menu_table, rect_contains, word_wrap};
use glam::IVec2;

// ── word_wrap ────────────────────────────────────────────────────────────────

#[test]
fn wrap_empty_string_returns_no_lines() {
    assert!(word_wrap("", 10).is_empty());
}

#[test]
fn wrap_two_words_break_at_boundary() {
    assert_eq!(word_wrap("hello world", 8), vec!["hello", "world"]);
}

#[test]
fn wrap_exactly_at_limit_keeps_on_one_line() {
    assert_eq!(word_wrap("ab cd", 5), vec!["ab cd"]);
}

#[test]
fn wrap_long_paragraph_no_line_exceeds_max_cols() {
    let text = "I hope it will be okay... the bell rings at nine and the hall is already full";
    for line in word_wrap(text, 15) {
        assert!(line.chars().count() <= 15, "line too long: '{line}'");
    }
}

#[test]
fn wrap_single_word_longer_than_max_gets_split() {
    assert_eq!(word_wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
}

#[test]
fn wrap_counts_characters_not_bytes() {
    assert_eq!(word_wrap("café crème", 4), vec!["café", "crèm", "e"]);
}

#[test]
fn wrap_zero_max_cols_returns_empty() {
    assert!(word_wrap("anything", 0).is_empty());
}

// ── rect_contains ────────────────────────────────────────────────────────────

#[test]
fn rect_contains_is_half_open() {
    assert!(rect_contains(10, 10, 5, 5, 10, 10));
    assert!(rect_contains(10, 10, 5, 5, 14, 14));
    assert!(!rect_contains(10, 10, 5, 5, 15, 12));
    assert!(!rect_contains(10, 10, 5, 5, 12, 15));
    assert!(!rect_contains(10, 10, 5, 5, 9, 12));
}

// ── TextBox ──────────────────────────────────────────────────────────────────

#[test]
fn text_reveals_over_ticks() {
    let text = format!("Hello{LINE_BREAK}there");
    let mut tb = TextBox::new(2, text);
    assert_eq!(tb.visible_lines(), vec![String::new()]);
    tb.advance(7);
    assert_eq!(tb.visible_lines(), vec!["Hello".to_string(), "th".to_string()]);
    assert!(!tb.is_skippable());
    tb.advance(100);
    assert!(tb.is_skippable());
    assert_eq!(tb.visible_lines(), vec!["Hello".to_string(), "there".to_string()]);
}

#[test]
fn reveal_all_makes_box_skippable() {
    let mut tb = TextBox::new(0, "Long message");
    tb.reveal_all();
    assert!(tb.is_skippable());
}

// ── Layers ───────────────────────────────────────────────────────────────────

#[test]
fn text_box_suspends_menu_beneath() {
    let mut ui = UiLayers::default();
    assert_eq!(ui.state(), UiState::NoUi);
    ui.open_menu(menu_table::ROOT);
    assert_eq!(ui.state(), UiState::Menu(menu_table::ROOT));
    ui.open_text(TextBox::new(0, "Hi"));
    assert_eq!(ui.state(), UiState::TextBox);
    ui.text_box = None;
    assert_eq!(ui.state(), UiState::Menu(menu_table::ROOT));
}

#[test]
fn prompt_leaves_menu_in_charge() {
    let mut ui = UiLayers::default();
    ui.open_menu(menu_table::CONFIRM);
    ui.open_text(TextBox::prompt(0, "Go to sleep?"));
    assert_eq!(ui.state(), UiState::Menu(menu_table::CONFIRM));
    ui.close_all();
    assert!(ui.is_empty());
}

#[test]
fn lone_prompt_still_captures_clicks() {
    let mut ui = UiLayers::default();
    ui.open_text(TextBox::prompt(0, "Hmm"));
    assert_eq!(ui.state(), UiState::TextBox);
}

// ── Pictures ─────────────────────────────────────────────────────────────────

fn floor_plan() -> Picture {
    Picture { image: "minimap_1".into(), marker: Some(IVec2::new(40, 50)) }
}

#[test]
fn picture_needs_an_open_menu() {
    let mut ui = UiLayers::default();
    ui.show_picture(floor_plan());
    assert_eq!(ui.picture, None);

    ui.open_text(TextBox::new(0, "Hi"));
    ui.show_picture(floor_plan());
    assert_eq!(ui.picture, None);

    ui.open_menu(menu_table::MAP);
    ui.show_picture(floor_plan());
    assert_eq!(ui.picture, Some(floor_plan()));
}

#[test]
fn picture_goes_with_its_menu() {
    let mut ui = UiLayers::default();
    ui.open_menu(menu_table::MAP);
    ui.show_picture(floor_plan());
    ui.open_menu(menu_table::ROOT);
    assert_eq!(ui.picture, None);

    ui.open_menu(menu_table::FRIENDS);
    ui.show_picture(floor_plan());
    ui.close_menu();
    assert_eq!(ui.picture, None);

    ui.open_menu(menu_table::MAP);
    ui.show_picture(floor_plan());
    ui.close_all();
    assert_eq!(ui.picture, None);
    assert_eq!(ui.state(), UiState::NoUi);
}
