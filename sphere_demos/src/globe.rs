//! A lit globe viewed through an orbit camera
//!
//! Arrow keys orbit by a fixed step, `+`/`-` (or W/S) zoom, a mouse drag
//! orbits in proportion to the pixels moved, and space toggles auto-rotation.

use scene_engine::assets::TextureCache;
use scene_engine::foundation::math::Vec3;
use scene_engine::input::{Direction, KeyCode};
use scene_engine::render::{Camera, OrbitCamera};
use scene_engine::scene::{Geometry, Light, NodeId, SceneNode};
use scene_engine::{AppError, AppEvent, Application, Engine, FrameControl, FrameTick};

use crate::config::GlobeConfig;
use crate::surface_material;

const BACKGROUND: u32 = 0x000000;

/// Globe viewer demo
pub struct GlobeApp {
    config: GlobeConfig,
    orbit: OrbitCamera,
    auto_rotate: bool,
    textures: TextureCache,
    globe: Option<NodeId>,
}

impl GlobeApp {
    /// Viewer for `config`, auto-rotating from the start when `auto_rotate` is non-zero
    pub fn new(config: GlobeConfig) -> Self {
        let orbit = OrbitCamera::new(Vec3::zeros(), config.camera_distance, config.min_distance, config.max_distance);
        Self {
            auto_rotate: config.auto_rotate != 0.0,
            config,
            orbit,
            textures: TextureCache::new(),
            globe: None,
        }
    }

    /// Current orbit
    pub fn orbit(&self) -> &OrbitCamera {
        &self.orbit
    }

    /// Globe node, once initialized
    pub fn globe(&self) -> Option<NodeId> {
        self.globe
    }

    fn on_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Plus | KeyCode::W => self.orbit.zoom(1.0 / self.config.zoom_step),
            KeyCode::Minus | KeyCode::S => self.orbit.zoom(self.config.zoom_step),
            KeyCode::Space if self.config.auto_rotate == 0.0 => {
                log::info!("Auto-rotation unavailable: auto_rotate rate is 0");
            }
            KeyCode::Space => {
                self.auto_rotate = !self.auto_rotate;
                log::info!("Auto-rotation {}", if self.auto_rotate { "on" } else { "off" });
            }
            _ => {
                if let Some(direction) = Direction::from_key(key) {
                    let (x, y) = direction.offset();
                    let step = self.config.rotate_step();
                    self.orbit.rotate(x * step, y * step);
                }
            }
        }
    }
}

impl Application for GlobeApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!("Initializing globe viewer...");

        engine.scene.set_background(BACKGROUND);
        engine.camera = Camera::perspective(
            self.orbit.eye(),
            self.config.fov_degrees,
            engine.surface().aspect(),
            0.1,
            1000.0,
        );
        self.orbit.apply(&mut engine.camera);

        let material = surface_material(self.config.texture.as_deref(), self.config.fallback_color, true, &mut self.textures);
        let geometry = Geometry::sphere(self.config.radius, self.config.segments, self.config.segments);
        self.globe = Some(engine.scene.add(SceneNode::mesh("globe", geometry, material)));

        engine.scene.add(SceneNode::light("ambient", Light::ambient(0x333333, 1.0)));
        engine.scene.add(SceneNode::light("sun", Light::directional(0xffffff, 1.0, Vec3::new(-5.0, -3.0, -5.0))));
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _frame: FrameTick) -> Result<FrameControl, AppError> {
        let (dx, dy) = engine.input.drag_delta();
        if dx != 0.0 || dy != 0.0 {
            let sensitivity = self.config.drag_sensitivity;
            // Dragging right pulls the globe right, so the camera moves left
            self.orbit.rotate(-(dx as f32) * sensitivity, dy as f32 * sensitivity);
        }
        if self.auto_rotate {
            self.orbit.rotate(self.config.auto_rotate, 0.0);
        }

        self.orbit.apply(&mut engine.camera);
        Ok(FrameControl::Continue)
    }

    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        match event {
            AppEvent::KeyInput { key, pressed } => {
                if engine.input.handle_key_input(key, pressed) {
                    if key == KeyCode::Escape {
                        engine.quit();
                    } else {
                        self.on_key(key);
                    }
                }
            }
            other => engine.handle_event(other),
        }
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        log::info!(
            "Globe viewer closed at distance {:.1}, azimuth {:.2}, elevation {:.2}",
            self.orbit.radius,
            self.orbit.azimuth,
            self.orbit.elevation
        );
    }
}
