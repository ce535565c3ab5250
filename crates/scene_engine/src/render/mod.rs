//! Rendering
//!
//! Renderers consume the retained scene once per frame; they never mutate it.

mod camera;
mod console;
mod frustum;

pub use camera::{Camera, OrbitCamera};
pub use console::ConsoleRenderer;
pub use frustum::{Frustum, Plane};

use crate::scene::Scene;
use thiserror::Error;

/// The drawable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Surface {
    /// Create a surface description
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// On-screen overlay: the status text region and the touch buttons
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    /// Status text; empty while nothing needs saying
    pub status: String,
    /// Labels of on-screen buttons currently shown
    pub buttons: Vec<&'static str>,
}

impl Hud {
    /// Replace the status text
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

/// What a renderer drew for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number as counted by the renderer
    pub frame: u64,
    /// Visible mesh nodes in the scene
    pub meshes: usize,
    /// Meshes inside the camera frustum
    pub drawn: usize,
    /// Triangles of the drawn meshes
    pub triangles: u64,
    /// Active lights
    pub lights: usize,
}

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Output could not be written
    #[error("Render output failed: {0}")]
    Output(#[from] std::io::Error),

    /// Camera produced a degenerate projection
    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// A consumer of scene state, called once per frame
pub trait Renderer {
    /// The drawable surface changed size
    fn resize(&mut self, surface: Surface);

    /// Draw the scene from the camera with the overlay on top
    fn render(&mut self, scene: &Scene, camera: &Camera, hud: &Hud) -> Result<FrameStats, RenderError>;
}
