// =============================================================================
// ENGINE: winit event loop driving one WorldState
//
// Per redraw: feed elapsed time to the fixed timestep, run the due ticks with
// the held movement keys as player intents, apply the clicks that arrived
// since the last frame, paint into the CPU framebuffer and present it.
// =============================================================================

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use image::RgbaImage;
use log::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::clock::FixedTimestep;
use crate::geometry::Direction;
use crate::hooks::GameHooks;
use crate::input::{ActionMap, InputState};
use crate::interaction::{self, Cursor, MouseButton};
use crate::render::{self, Font, FrameBuffer, ImageLibrary, Presenter};
use crate::window::{self, WindowConfig, physical_to_logical};
use crate::world::WorldState;

// ── Engine (builder) ─────────────────────────────────────────────────────────

/// Owns everything needed to open the window and run the game.
pub struct Engine {
    world: WorldState,
    hooks: Box<dyn GameHooks>,
    images: ImageLibrary,
    font: Option<Font>,
    movement: ActionMap<Direction>,
}

impl Engine {
    pub fn new(world: WorldState, hooks: Box<dyn GameHooks>) -> Self {
        Self {
            world,
            hooks,
            images: ImageLibrary::new(),
            font: None,
            movement: ActionMap::movement(),
        }
    }

    pub fn with_images(mut self, images: ImageLibrary) -> Self { self.images = images; self }
    pub fn with_font(mut self, font: Option<Font>) -> Self { self.font = font; self }
    pub fn with_movement(mut self, movement: ActionMap<Direction>) -> Self { self.movement = movement; self }

    /// Open the window and block until it closes.
    pub fn run(self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let config = self.world.config();
        let logical = config.logical_size();
        let mut app = App {
            window: config.window.clone(),
            clock: FixedTimestep::new(config.ups),
            frame: RgbaImage::new(logical.x, logical.y),
            engine: self,
            input: InputState::new(),
            presenter: None,
            last_instant: None,
            cursor: Cursor::Default,
        };
        event_loop.run_app(&mut app).context("event loop failed")?;
        Ok(())
    }
}

// ── App (winit ApplicationHandler) ───────────────────────────────────────────

struct App {
    engine: Engine,
    /// Live window settings; physical size follows `Resized`.
    window: WindowConfig,
    clock: FixedTimestep,
    input: InputState,
    frame: RgbaImage,
    presenter: Option<Presenter>,
    last_instant: Option<Instant>,
    cursor: Cursor,
}

impl App {
    fn update(&mut self, elapsed: std::time::Duration) {
        let due = self.clock.advance(elapsed);
        let engine = &mut self.engine;
        for _ in 0..due {
            engine.world.player_mut().intents = engine.movement.intents(&self.input);
            engine.world.tick();
        }

        for (button, point) in std::mem::take(&mut self.input.clicks) {
            interaction::handle_click(&mut engine.world, engine.hooks.as_mut(), button, point);
        }
    }

    fn draw(&mut self) {
        let Some(presenter) = self.presenter.as_mut() else { return };
        {
            let mut canvas = FrameBuffer::new(&mut self.frame, &self.engine.images, self.engine.font.as_ref());
            render::paint(&self.engine.world, &mut canvas);
        }
        match presenter.present(&self.frame, &self.window) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let size = presenter.window.inner_size();
                presenter.resize(size);
            }
            Err(e) => error!("present failed: {e}"),
        }
    }

    fn refresh_cursor(&mut self) {
        let cursor = match self.input.mouse_pos {
            Some(point) => interaction::hover(&self.engine.world, point),
            None => Cursor::Default,
        };
        if cursor != self.cursor {
            self.cursor = cursor;
            if let Some(presenter) = &self.presenter {
                window::apply_cursor(&presenter.window, cursor);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            return;
        }
        let window = match event_loop.create_window(window::window_attributes(&self.window)) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        window::apply_window_settings(&window, &self.window);

        let size = window.inner_size();
        self.window.physical_width = size.width;
        self.window.physical_height = size.height;

        let logical = self.engine.world.config().logical_size();
        match pollster::block_on(Presenter::new(window, logical)) {
            Ok(presenter) => {
                info!("window open at {}x{}, logical {}x{}", size.width, size.height, logical.x, logical.y);
                self.presenter = Some(presenter);
            }
            Err(e) => {
                error!("failed to initialise renderer: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(presenter) = self.presenter.as_ref() {
            presenter.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.resize(size);
                }
                self.window.physical_width = size.width;
                self.window.physical_height = size.height;
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.mouse_pos = physical_to_logical(&self.window, (position.x, position.y));
                self.refresh_cursor();
            }

            WindowEvent::CursorLeft { .. } => {
                self.input.mouse_pos = None;
                self.refresh_cursor();
            }

            WindowEvent::MouseInput { button, state: ElementState::Pressed, .. } => {
                match button {
                    winit::event::MouseButton::Left => self.input.click(MouseButton::Primary),
                    winit::event::MouseButton::Right => self.input.click(MouseButton::Secondary),
                    _ => {}
                }
            }

            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key: PhysicalKey::Code(code), state, repeat, .. },
                ..
            } => match state {
                ElementState::Pressed if code == KeyCode::Escape => event_loop.exit(),
                ElementState::Pressed if !repeat => self.input.press(code),
                ElementState::Pressed => {}
                ElementState::Released => self.input.release(code),
            },

            WindowEvent::Focused(false) => {
                // Keys released while unfocused never arrive.
                self.input.keys_held.clear();
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let elapsed = match self.last_instant {
                    Some(prev) => now.duration_since(prev),
                    None => self.clock.step(),
                };
                self.last_instant = Some(now);

                self.update(elapsed);
                self.refresh_cursor();
                self.draw();
                self.input.clear_frame_state();
            }

            _ => {}
        }
    }
}
