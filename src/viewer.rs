//! Standalone globe window backed by winit.
//!
//! The window drives the full controller loop against a
//! [`HeadlessScene`]: input → [`InputProcessor`] → [`ViewController`],
//! one tick per redraw, with assets streaming in from a background
//! [`AssetLoader`]. The current mode, focus and frame rate are shown in
//! the window title.
//!
//! ```no_run
//! # use globeview::Viewer;
//! Viewer::builder()
//!     .with_title("Globe")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Duration};

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    assets::{self, AssetLoader, AssetRegistry, DefaultFetcher},
    error::GlobeError,
    input::{InputEvent, InputProcessor, MouseButton},
    options::Options,
    scene::{BodyKind, Camera, HeadlessScene, SceneHandles},
    starfield::Starfield,
    util::{frame_timing::FrameClock, geo::unit_to_lat_lng},
    view::{ViewController, ViewMode},
};

/// Pixels per wheel "line", matching what browsers report for one notch.
const LINE_PIXELS: f32 = 100.0;

/// How often the title bar readout refreshes.
const TITLE_REFRESH: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Globe", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Globe".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing the interactive globe.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`GlobeError::Viewer`] if the event loop cannot be created
    /// or exits with an error.
    pub fn run(self) -> Result<(), GlobeError> {
        let event_loop =
            EventLoop::new().map_err(|e| GlobeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp::new(self.options, self.title);

        event_loop
            .run_app(&mut app)
            .map_err(|e| GlobeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    view: ViewController,
    input: InputProcessor,
    scene: HeadlessScene,
    handles: SceneHandles,
    loader: Option<AssetLoader>,
    registry: AssetRegistry,
    clock: FrameClock,
    title: String,
    last_title_update: Instant,
    /// Shift held: the wheel drives the page-scroll boost instead.
    shift: bool,
    /// Synthetic page offset fed by shift+wheel.
    page_scroll_y: f32,
}

impl ViewerApp {
    fn new(options: Options, title: String) -> Self {
        let mut scene =
            HeadlessScene::new(Camera::from_options(&options.camera, 1.0));
        let mut handles = SceneHandles::default();
        let _ = handles.assign(
            BodyKind::Atmosphere,
            scene.spawn(BodyKind::Atmosphere),
        );

        let stars = Starfield::generate(&options.starfield);
        let _ = scene.spawn(BodyKind::Stars);
        log::info!("generated {} background stars", stars.stars().len());

        let loader = if options.assets.load_on_start {
            match AssetLoader::spawn(DefaultFetcher) {
                Ok(loader) => {
                    loader.submit_all(assets::default_catalog(&options.assets));
                    Some(loader)
                }
                Err(e) => {
                    log::error!("asset loader unavailable: {e}");
                    None
                }
            }
        } else {
            None
        };

        let input =
            InputProcessor::with_key_bindings(options.keybindings.clone());

        Self {
            window: None,
            view: ViewController::new(options),
            input,
            scene,
            handles,
            loader,
            registry: AssetRegistry::new(),
            clock: FrameClock::default(),
            title,
            last_title_update: Instant::now(),
            shift: false,
            page_scroll_y: 0.0,
        }
    }

    /// Feed one event through the processor into the controller.
    fn dispatch(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event, &self.scene) {
            self.view.execute(command, self.clock.now_ms());
        }
    }

    /// Install finished assets and unlock the bodies that needed them.
    fn poll_assets(&mut self) {
        let Some(loader) = &self.loader else {
            return;
        };
        for name in self.registry.poll(loader) {
            if let Some(kind) = assets::body_for_asset(&name) {
                let handle = self.scene.spawn(kind);
                let _ = self.handles.assign(kind, handle);
                log::debug!("{kind:?} is now drawable");
            }
        }
    }

    fn frame(&mut self) {
        self.poll_assets();

        let tick = self.clock.tick();
        let pose = self.view.tick(tick.now_ms, tick.dt_ms);
        pose.apply(&mut self.scene, &self.handles);

        let now = Instant::now();
        if now.duration_since(self.last_title_update) >= TITLE_REFRESH {
            self.last_title_update = now;
            if let Some(window) = &self.window {
                window.set_title(&self.title_text());
            }
        }
    }

    fn title_text(&self) -> String {
        let fps = self.clock.fps();
        match self.view.mode() {
            ViewMode::Free => format!("{} · free · {fps:.0} fps", self.title),
            ViewMode::ZoomFocus => {
                let (lat, lng) =
                    unit_to_lat_lng(self.view.state().zoom.target_point);
                format!(
                    "{} · focus {lat:.2}°, {lng:.2}° · {fps:.0} fps",
                    self.title
                )
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 800));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        self.dispatch(InputEvent::Resized {
            width: inner.width,
            height: inner.height,
        });
        self.scene.resize(inner.width, inner.height);
        log::info!("viewer started at {}x{}", inner.width, inner.height);

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if self.window.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                self.scene.resize(size.width, size.height);
                self.dispatch(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }

            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let button = MouseButton::from(button);
                let event = if state == ElementState::Pressed {
                    let (x, y) = self.cursor();
                    InputEvent::PointerDown { x, y, button }
                } else {
                    InputEvent::PointerUp { button }
                };
                self.dispatch(event);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.dispatch(InputEvent::PointerMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // Browser convention: positive delta scrolls down.
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => {
                        (-x * LINE_PIXELS, -y * LINE_PIXELS)
                    }
                    MouseScrollDelta::PixelDelta(pos) => {
                        (-pos.x as f32, -pos.y as f32)
                    }
                };
                if self.shift {
                    self.page_scroll_y = (self.page_scroll_y + dy).max(0.0);
                    self.dispatch(InputEvent::Scroll {
                        y: self.page_scroll_y,
                    });
                } else {
                    self.dispatch(InputEvent::Wheel { dx, dy });
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift = modifiers.state().shift_key();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(command) = self.input.handle_key_press(&key_str) {
                    self.view.execute(command, self.clock.now_ms());
                }
            }

            _ => (),
        }
    }
}

impl ViewerApp {
    /// Last cursor position seen by the processor, in physical pixels.
    fn cursor(&self) -> (f32, f32) {
        self.input.cursor().map_or((0.0, 0.0), |p| (p.x, p.y))
    }
}
