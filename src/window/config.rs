use serde::{Deserialize, Serialize};

// ── WindowMode ────────────────────────────────────────────────────────────────

/// Controls how the OS window is presented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Standard decorated window at the configured resolution.
    #[default]
    Windowed,
    /// Exclusive hardware fullscreen at the configured resolution.
    Fullscreen,
    /// Borderless window sized to match the monitor's native resolution.
    Borderless,
}

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window configuration snapshot.
///
/// - **physical** dimensions are the pixel size of the OS window. They
///   change on resize and fullscreen switches.
/// - **logical** dimensions are the game's fixed framebuffer resolution
///   (viewport cells × tile size); everything is painted and hit-tested in
///   this space and then letterboxed into the window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub physical_width: u32,
    pub physical_height: u32,
    pub logical_width: u32,
    pub logical_height: u32,
    pub mode: WindowMode,
}

impl Default for WindowConfig {
    /// 640 × 480 logical (20 × 15 cells of 32 px), shown at 2× in a window.
    fn default() -> Self {
        Self {
            title:           "Brooklands Academy".to_string(),
            physical_width:  1280,
            physical_height: 960,
            logical_width:   640,
            logical_height:  480,
            mode:            WindowMode::Windowed,
        }
    }
}

impl WindowConfig {
    /// Aspect ratio of the **logical** resolution (`logical_width / logical_height`).
    ///
    /// Returns `0.0` when `logical_height` is zero to avoid division by zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.logical_height == 0 {
            return 0.0;
        }
        self.logical_width as f32 / self.logical_height as f32
    }
}
