//! Core engine implementation

use crate::{
    application::{Application, AppEvent},
    events::EventSource,
    foundation::time::{FramePacer, Timer},
    input::InputManager,
    render::{Camera, FrameStats, Hud, RenderError, Renderer, Surface},
    scene::Scene,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One scheduled frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Zero-based frame number
    pub index: u64,
    /// Wall-clock time since the previous frame in seconds (informational)
    pub delta_seconds: f32,
}

/// What the driver should do after the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Schedule another frame
    Continue,
    /// Render this frame, then stop scheduling
    Halt,
}

/// Why the main loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The application halted frame scheduling
    Halted,
    /// The window (or console) asked to close
    CloseRequested,
    /// `max_frames` was reached
    FrameLimit,
}

/// Summary returned by [`Engine::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Frames updated and rendered
    pub frames: u64,
    /// Why the loop ended
    pub stop_reason: StopReason,
}

/// Main engine struct
///
/// Owns the retained scene, the camera and the input state, and drives the
/// cooperative main loop: drain events, update, render, wait for the next
/// frame slot.
pub struct Engine {
    /// Retained-mode scene drawn every frame
    pub scene: Scene,

    /// Active camera
    pub camera: Camera,

    /// Status text region
    pub hud: Hud,

    /// Input handling system
    pub input: InputManager,

    surface: Surface,
    pending_resize: bool,
    timer: Timer,
    frame_index: u64,
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine for '{}'...", config.window.title);

        if config.window.width == 0 || config.window.height == 0 {
            return Err(EngineError::InitializationFailed(format!(
                "Surface must have a non-zero size, got {}x{}",
                config.window.width, config.window.height
            )));
        }

        let surface = Surface::new(config.window.width, config.window.height);
        let mut camera = Camera::default();
        camera.set_aspect_ratio(surface.aspect());

        Ok(Self {
            scene: Scene::new(),
            camera,
            hud: Hud::default(),
            input: InputManager::new(),
            surface,
            pending_resize: false,
            timer: Timer::new(),
            frame_index: 0,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(
        config: EngineConfig,
        app: &mut T,
        events: &mut dyn EventSource,
        renderer: &mut dyn Renderer,
    ) -> Result<RunReport, EngineError> {
        let mut engine = Self::new(&config)?;
        renderer.resize(engine.surface);

        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop...");

        let mut pacer = FramePacer::new(config.target_fps);
        let stop_reason = loop {
            engine.input.update();
            for event in events.poll() {
                app.handle_event(&mut engine, event)
                    .map_err(|e| EngineError::ApplicationError(format!("App event: {}", e)))?;
            }
            if !engine.running {
                break StopReason::CloseRequested;
            }

            engine.timer.update();
            let tick = FrameTick {
                index: engine.frame_index,
                delta_seconds: engine.timer.delta_time(),
            };

            let control = app.update(&mut engine, tick)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {}", e)))?;

            if engine.pending_resize {
                renderer.resize(engine.surface);
                engine.pending_resize = false;
            }
            app.render(&mut engine, renderer)
                .map_err(|e| EngineError::ApplicationError(format!("App render: {}", e)))?;
            engine.frame_index += 1;

            if control == FrameControl::Halt {
                log::info!("Frame scheduling halted after frame {}", tick.index);
                break StopReason::Halted;
            }
            if config.max_frames.is_some_and(|max| engine.frame_index >= max) {
                break StopReason::FrameLimit;
            }

            pacer.wait_for_next_frame();
        };

        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} frames ({:.1} fps average)",
            engine.frame_index,
            engine.timer.average_fps()
        );
        Ok(RunReport {
            frames: engine.frame_index,
            stop_reason,
        })
    }

    /// Render the current frame
    pub fn render(&mut self, renderer: &mut dyn Renderer) -> Result<FrameStats, RenderError> {
        renderer.render(&self.scene, &self.camera, &self.hud)
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WindowCloseRequested => {
                self.quit();
            }
            AppEvent::WindowResized { width, height } => {
                self.resize(width, height);
            }
            AppEvent::KeyInput { key, pressed } => {
                self.input.handle_key_input(key, pressed);
            }
            AppEvent::MouseButton { button, pressed } => {
                self.input.handle_mouse_button(button, pressed);
            }
            AppEvent::MouseMoved { x, y } => {
                self.input.handle_mouse_move(x, y);
            }
            AppEvent::MouseDrag { dx, dy } => {
                self.input.add_drag(dx, dy);
            }
            AppEvent::TouchTap(_) => {}
        }
    }

    /// Resize the drawable surface; the camera aspect follows
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return;
        }
        self.surface = Surface::new(width, height);
        self.camera.set_aspect_ratio(self.surface.aspect());
        self.pending_resize = true;
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Current drawable surface
    pub fn surface(&self) -> Surface {
        self.surface
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Frames per second the driver paces to; `0` runs unpaced
    pub target_fps: u32,

    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            target_fps: 60,
            max_frames: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Scene Engine Application".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::events::ScriptedEvents;
    use crate::render::ConsoleRenderer;

    struct CountingApp {
        halt_at: Option<u64>,
        updates: u64,
        events: Vec<AppEvent>,
        cleaned_up: bool,
    }

    impl CountingApp {
        fn new(halt_at: Option<u64>) -> Self {
            Self { halt_at, updates: 0, events: Vec::new(), cleaned_up: false }
        }
    }

    impl Application for CountingApp {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            Ok(())
        }

        fn update(&mut self, _engine: &mut Engine, frame: FrameTick) -> Result<FrameControl, AppError> {
            assert_eq!(frame.index, self.updates);
            self.updates += 1;
            if self.halt_at == Some(frame.index) {
                Ok(FrameControl::Halt)
            } else {
                Ok(FrameControl::Continue)
            }
        }

        fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
            self.events.push(event.clone());
            engine.handle_event(event);
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    fn unpaced(max_frames: Option<u64>) -> EngineConfig {
        EngineConfig { target_fps: 0, max_frames, ..EngineConfig::default() }
    }

    #[test]
    fn test_halt_stops_scheduling() {
        let mut app = CountingApp::new(Some(4));
        let mut events = ScriptedEvents::new();
        let mut renderer = ConsoleRenderer::new(Vec::new());

        let report = Engine::run(unpaced(Some(100)), &mut app, &mut events, &mut renderer).unwrap();

        assert_eq!(report, RunReport { frames: 5, stop_reason: StopReason::Halted });
        assert_eq!(app.updates, 5);
        assert_eq!(renderer.frames_rendered(), 5);
        assert!(app.cleaned_up);
    }

    #[test]
    fn test_frame_limit() {
        let mut app = CountingApp::new(None);
        let mut events = ScriptedEvents::new();
        let mut renderer = ConsoleRenderer::new(Vec::new());

        let report = Engine::run(unpaced(Some(3)), &mut app, &mut events, &mut renderer).unwrap();
        assert_eq!(report.stop_reason, StopReason::FrameLimit);
        assert_eq!(report.frames, 3);
    }

    #[test]
    fn test_close_request_ends_loop_before_update() {
        let mut app = CountingApp::new(None);
        let mut events = ScriptedEvents::new().at(2, AppEvent::WindowCloseRequested);
        let mut renderer = ConsoleRenderer::new(Vec::new());

        let report = Engine::run(unpaced(None), &mut app, &mut events, &mut renderer).unwrap();
        assert_eq!(report, RunReport { frames: 2, stop_reason: StopReason::CloseRequested });
        assert_eq!(app.events, vec![AppEvent::WindowCloseRequested]);
    }

    #[test]
    fn test_resize_updates_surface_and_camera() {
        let mut engine = Engine::new(&EngineConfig::default()).unwrap();
        engine.handle_event(AppEvent::WindowResized { width: 800, height: 400 });

        assert_eq!(engine.surface(), Surface::new(800, 400));
        assert!((engine.camera.aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_sized_surface_rejected() {
        let mut config = EngineConfig::default();
        config.window.width = 0;
        assert!(matches!(Engine::new(&config), Err(EngineError::InitializationFailed(_))));
    }
}
