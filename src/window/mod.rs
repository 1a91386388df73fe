pub mod config;
pub mod letterbox;

pub use config::{WindowConfig, WindowMode};
pub use letterbox::{Viewport, letterbox_viewport, physical_to_logical};

use log::{debug, warn};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::window::{CursorIcon, Fullscreen, Window, WindowAttributes};

use crate::interaction::Cursor;

/// Attributes for creating the game window from `config`.
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.physical_width, config.physical_height))
        .with_min_inner_size(LogicalSize::new(config.logical_width, config.logical_height))
        .with_resizable(true)
}

/// Apply `config.mode` to `window`.
///
/// Windowed restores decorations and requests the configured physical size.
/// Fullscreen picks the monitor video mode closest in area to the physical
/// size, or borderless if the monitor reports none. Borderless sizes the
/// window to the monitor; the logical resolution never changes.
pub fn apply_window_settings(window: &Window, config: &WindowConfig) {
    debug!("window mode {:?} at {}x{}", config.mode, config.physical_width, config.physical_height);
    match config.mode {
        WindowMode::Windowed => {
            window.set_fullscreen(None);
            window.set_decorations(true);
            // The resize arrives later as `WindowEvent::Resized` when not applied synchronously.
            let _ = window.request_inner_size(PhysicalSize::new(
                config.physical_width,
                config.physical_height,
            ));
        }

        WindowMode::Fullscreen => {
            let fullscreen = match window.current_monitor() {
                Some(monitor) => {
                    let target_area =
                        config.physical_width as u64 * config.physical_height as u64;

                    let best = monitor.video_modes().min_by_key(|vm| {
                        let s = vm.size();
                        (s.width as u64 * s.height as u64).abs_diff(target_area)
                    });

                    match best {
                        Some(vm) => Fullscreen::Exclusive(vm),
                        None => {
                            warn!("monitor reports no video modes; using borderless fullscreen");
                            Fullscreen::Borderless(Some(monitor))
                        }
                    }
                }
                None => Fullscreen::Borderless(None),
            };

            window.set_fullscreen(Some(fullscreen));
        }

        WindowMode::Borderless => {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }
}

/// Show the pointer affordance chosen by hover hit-testing.
pub fn apply_cursor(window: &Window, cursor: Cursor) {
    window.set_cursor(match cursor {
        Cursor::Default => CursorIcon::Default,
        Cursor::Hand => CursorIcon::Pointer,
    });
}
