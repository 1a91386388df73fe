use brooklands::window::*;
use glam::IVec2;

#[test]
fn default_is_640x480_shown_at_2x() {
    let cfg = WindowConfig::default();
    assert_eq!(cfg.physical_width,  1280);
    assert_eq!(cfg.physical_height, 960);
    assert_eq!(cfg.logical_width,   640);
    assert_eq!(cfg.logical_height,  480);
    assert_eq!(cfg.mode, WindowMode::Windowed);
}

#[test]
fn aspect_ratio_640x480() {
    let ratio = WindowConfig::default().aspect_ratio();
    assert!((ratio - 4.0 / 3.0).abs() < 1e-5, "expected 4/3, got {ratio}");
}

#[test]
fn aspect_ratio_zero_height_returns_zero() {
    let cfg = WindowConfig { logical_width: 640, logical_height: 0, ..WindowConfig::default() };
    assert_eq!(cfg.aspect_ratio(), 0.0);
}

#[test]
fn mode_parses_from_snake_case() {
    let cfg: WindowConfig = serde_json::from_str(r#"{ "mode": "borderless", "physical_width": 1920 }"#).unwrap();
    assert_eq!(cfg.mode, WindowMode::Borderless);
    assert_eq!(cfg.physical_width, 1920);
    assert_eq!(cfg.physical_height, 960);
}

// ── Letterbox ────────────────────────────────────────────────────────────────

#[test]
fn letterbox_in_tall_window() {
    // 640×480 in 800×1000 → scale 1.25, 800×600, bars of 200 top and bottom.
    let cfg = WindowConfig { physical_width: 800, physical_height: 1000, ..WindowConfig::default() };
    let v = letterbox_viewport(&cfg);
    assert_eq!(v.x, 0.0);
    assert!((v.y - 200.0).abs() < 1e-3, "y={}", v.y);
    assert!((v.height - 600.0).abs() < 1e-3, "h={}", v.height);
}

#[test]
fn letterbox_keeps_aspect() {
    for (pw, ph) in [(1280, 720), (1024, 1024), (333, 999), (1920, 1080)] {
        let cfg = WindowConfig { physical_width: pw, physical_height: ph, ..WindowConfig::default() };
        let v = letterbox_viewport(&cfg);
        assert!((v.width / v.height - cfg.aspect_ratio()).abs() < 1e-3, "{pw}x{ph}");
        assert!(v.width <= pw as f32 + 1e-3 && v.height <= ph as f32 + 1e-3);
    }
}

#[test]
fn cursor_in_tall_window_maps_past_bar() {
    let cfg = WindowConfig { physical_width: 800, physical_height: 1000, ..WindowConfig::default() };
    assert_eq!(physical_to_logical(&cfg, (400.0, 100.0)), None);
    assert_eq!(physical_to_logical(&cfg, (400.0, 200.0)), Some(IVec2::new(320, 0)));
    assert_eq!(physical_to_logical(&cfg, (799.0, 799.0)), Some(IVec2::new(639, 479)));
    assert_eq!(physical_to_logical(&cfg, (400.0, 800.0)), None);
}
