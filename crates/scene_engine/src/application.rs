//! The [`Application`] trait implemented by every demo and game

use crate::engine::{Engine, EngineError, FrameControl, FrameTick};
use crate::render::{RenderError, Renderer};
use crate::input::{Direction, KeyCode, MouseButton};
use thiserror::Error;

/// Hooks the frame driver calls into
///
/// The engine calls `update` then `render` exactly once per frame, never
/// concurrently.
pub trait Application {
    /// Build the scene and initial state
    ///
    /// Called once, before the first frame.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Advance the application by one frame
    ///
    /// Return [`FrameControl::Halt`] to stop scheduling frames after this one
    /// has been rendered.
    fn update(&mut self, engine: &mut Engine, frame: FrameTick) -> Result<FrameControl, AppError>;

    /// Draw the frame
    ///
    /// Called after update. The default implementation draws the engine's
    /// scene from the engine's camera.
    fn render(&mut self, engine: &mut Engine, renderer: &mut dyn Renderer) -> Result<(), AppError> {
        engine.render(renderer)?;
        Ok(())
    }

    /// React to one input or window event
    ///
    /// Called for each event drained between frames.
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        engine.handle_event(event);
        Ok(())
    }

    /// Tear down after the loop ends
    ///
    /// Called once when the main loop has ended.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Errors an application hook can return
#[derive(Error, Debug)]
pub enum AppError {
    /// The engine failed underneath the application
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Rendering failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Window was resized
    WindowResized {
        /// New window width
        width: u32,
        /// New window height
        height: u32,
    },

    /// The window (or console input) asked to close
    WindowCloseRequested,

    /// Key input event
    KeyInput {
        /// Key that changed
        key: KeyCode,
        /// `true` on press, `false` on release
        pressed: bool,
    },

    /// Mouse button event
    MouseButton {
        /// Button that changed
        button: MouseButton,
        /// `true` on press, `false` on release
        pressed: bool,
    },

    /// Mouse movement
    MouseMoved {
        /// New X coordinate
        x: f64,
        /// New Y coordinate
        y: f64,
    },

    /// Relative drag in pixels, as if moved with the left button held
    MouseDrag {
        /// Horizontal drag
        dx: f64,
        /// Vertical drag
        dy: f64,
    },

    /// Tap on one of the on-screen direction buttons
    TouchTap(Direction),
}
