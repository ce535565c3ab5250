//! A sphere turning in front of a fixed camera

use scene_engine::assets::TextureCache;
use scene_engine::foundation::math::Vec3;
use scene_engine::render::Camera;
use scene_engine::scene::{Geometry, NodeId, SceneNode};
use scene_engine::{AppError, Application, Engine, FrameControl, FrameTick};

use crate::config::SpinningConfig;
use crate::surface_material;

/// Spinning sphere demo
pub struct SpinningSphereApp {
    config: SpinningConfig,
    textures: TextureCache,
    sphere: Option<NodeId>,
    final_rotation: Option<Vec3>,
}

impl SpinningSphereApp {
    /// Demo for `config`; the scene is built in `initialize`
    pub fn new(config: SpinningConfig) -> Self {
        Self {
            config,
            textures: TextureCache::new(),
            sphere: None,
            final_rotation: None,
        }
    }

    /// The sphere node, once initialized
    pub fn sphere(&self) -> Option<NodeId> {
        self.sphere
    }

    /// Euler rotation the sphere had when the run stopped
    pub fn final_rotation(&self) -> Option<Vec3> {
        self.final_rotation
    }
}

impl Application for SpinningSphereApp {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!("Initializing spinning sphere demo...");

        engine.camera = Camera::perspective(
            Vec3::new(0.0, 0.0, self.config.camera_distance),
            self.config.fov_degrees,
            engine.surface().aspect(),
            0.1,
            1000.0,
        );

        let material = surface_material(self.config.texture.as_deref(), self.config.color, false, &mut self.textures);
        let geometry = Geometry::sphere(self.config.radius, self.config.width_segments, self.config.height_segments);
        self.sphere = Some(engine.scene.add(SceneNode::mesh("sphere", geometry, material)));
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _frame: FrameTick) -> Result<FrameControl, AppError> {
        if let Some(sphere) = self.sphere {
            let [x, y] = self.config.spin_per_frame;
            engine.scene.rotate_euler(sphere, Vec3::new(x, y, 0.0));
        }
        Ok(FrameControl::Continue)
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        if let Some(node) = self.sphere.and_then(|id| engine.scene.get(id)) {
            log::info!("Sphere stopped at rotation {:?}", node.transform.rotation);
            self.final_rotation = Some(node.transform.rotation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scene_engine::events::ScriptedEvents;
    use scene_engine::render::ConsoleRenderer;
    use scene_engine::{EngineConfig, StopReason};

    #[test]
    fn test_sphere_spins_every_frame() {
        let config = EngineConfig { target_fps: 0, max_frames: Some(100), ..EngineConfig::default() };
        let mut app = SpinningSphereApp::new(SpinningConfig::default());
        let mut renderer = ConsoleRenderer::new(Vec::new());

        let report = Engine::run(config, &mut app, &mut ScriptedEvents::new(), &mut renderer).unwrap();
        assert_eq!(report.stop_reason, StopReason::FrameLimit);
        assert_eq!(report.frames, 100);
        assert!(app.sphere().is_some());

        let rotation = app.final_rotation().unwrap();
        assert_relative_eq!(rotation.x, 1.0, epsilon = 1e-4);
        assert_relative_eq!(rotation.y, 1.0, epsilon = 1e-4);
        assert_relative_eq!(rotation.z, 0.0);
    }

    #[test]
    fn test_sphere_fills_view() {
        let mut engine = Engine::new(&EngineConfig::default()).unwrap();
        let mut app = SpinningSphereApp::new(SpinningConfig::default());
        app.initialize(&mut engine).unwrap();

        let mut renderer = ConsoleRenderer::new(Vec::new());
        let stats = engine.render(&mut renderer).unwrap();
        assert_eq!(stats.drawn, 1);
        assert_eq!(stats.triangles, 32 * 2 + 32 * 30 * 2);
    }
}
