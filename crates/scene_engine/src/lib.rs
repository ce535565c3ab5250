//! # Scene Engine
//!
//! A small retained-mode scene engine with a cooperative, frame-driven main loop.
//!
//! ## Features
//!
//! - **Scene Graph**: Persistent nodes (meshes and lights) mutated in place every frame
//! - **Frame Driver**: One update and one render per tick, no overlapping frames
//! - **Headless Rendering**: Frustum-culled frame statistics and a status text region
//! - **Configuration**: TOML/RON configuration files through serde
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, frame: FrameTick) -> Result<FrameControl, AppError> {
//!         Ok(FrameControl::Continue)
//!     }
//!
//!     fn cleanup(&mut self, engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut events = ScriptedEvents::new();
//!     let mut renderer = ConsoleRenderer::stdout();
//!     Engine::run(config, &mut MyApp, &mut events, &mut renderer)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod events;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{Application, AppError, AppEvent};
pub use engine::{Engine, EngineConfig, EngineError, FrameControl, FrameTick, RunReport, StopReason, WindowConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError, AppEvent,
        Engine, EngineConfig, EngineError, FrameControl, FrameTick, WindowConfig,
        config::{Config, ConfigError},
        events::{ConsoleEvents, EventSource, ScriptedEvents},
        foundation::math::{Vec3, Mat4, Transform},
        input::{Direction, InputManager, KeyCode, MouseButton, TouchControls},
        render::{Camera, ConsoleRenderer, Hud, OrbitCamera, Renderer, Surface},
        scene::{Color, Geometry, Light, Material, NodeId, Scene, SceneNode},
    };
}
