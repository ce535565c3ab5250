//! Scene construction and per-frame synchronisation
//!
//! The scene is a read-only view of [`FlightState`]: `sync` copies positions
//! out of the game state and never writes back.

use scene_engine::assets::TextureCache;
use scene_engine::foundation::math::{Transform, Vec3};
use scene_engine::render::Camera;
use scene_engine::scene::{Color, Geometry, Light, Material, NodeId, Scene, SceneNode};

use crate::config::GameConfig;
use crate::flight::FlightState;

const SHIP_COLOR: u32 = 0xffffff;
const ASTEROID_COLOR: u32 = 0x8b7d6b;
const BACKGROUND: u32 = 0x000010;

/// Handles of the nodes the game moves every frame
#[derive(Debug, Clone)]
pub struct FlightScene {
    ship: NodeId,
    planet: NodeId,
    camera_offset: Vec3,
    planet_spin: f32,
}

impl FlightScene {
    /// Populate `scene` with the ship, planet, asteroids and lights
    pub fn build(scene: &mut Scene, state: &FlightState, config: &GameConfig, textures: &mut TextureCache) -> Self {
        scene.set_background(BACKGROUND);

        let ship = scene.add(
            SceneNode::mesh("ship", Geometry::sphere(0.3, 16, 8), Material::basic(SHIP_COLOR))
                .at(state.ship().position),
        );

        let planet = scene.add(
            SceneNode::mesh(
                "planet",
                Geometry::sphere(config.planet.radius, 32, 32),
                planet_material(config, textures),
            )
            .at(state.goal().position),
        );

        for (index, obstacle) in state.obstacles().iter().enumerate() {
            scene.add(
                SceneNode::mesh(
                    format!("asteroid_{index}"),
                    Geometry::sphere(1.0, 8, 6),
                    Material::Lambert { color: Color::from_hex(ASTEROID_COLOR), texture: None },
                )
                .with_transform(Transform::from_position(obstacle.position).with_uniform_scale(obstacle.scale)),
            );
        }

        scene.add(SceneNode::light("ambient", Light::ambient(0x404040, 1.0)));
        scene.add(SceneNode::light("sun", Light::directional(0xffffff, 1.0, Vec3::new(-1.0, -1.0, -1.0))));

        log::info!("Flight scene built with {} nodes", scene.len());

        Self {
            ship,
            planet,
            camera_offset: Vec3::from(config.camera.offset),
            planet_spin: config.planet.spin_per_frame,
        }
    }

    /// Copy game state into the scene and move the chase camera
    pub fn sync(&self, scene: &mut Scene, camera: &mut Camera, state: &FlightState) {
        let ship = state.ship().position;
        scene.set_position(self.ship, ship);
        if !state.is_terminal() {
            scene.rotate_euler(self.planet, Vec3::new(0.0, self.planet_spin, 0.0));
        }

        camera.set_position(ship + self.camera_offset);
        camera.set_target(ship);
    }

    /// Ship node
    pub fn ship(&self) -> NodeId {
        self.ship
    }

    /// Planet node
    pub fn planet(&self) -> NodeId {
        self.planet
    }
}

/// Configure `camera` as the chase camera for this game
pub fn chase_camera(config: &GameConfig, aspect: f32, state: &FlightState) -> Camera {
    let mut camera = Camera::perspective(
        state.ship().position + Vec3::from(config.camera.offset),
        config.camera.fov_degrees,
        aspect,
        config.camera.near,
        config.camera.far,
    );
    camera.set_target(state.ship().position);
    camera
}

fn planet_material(config: &GameConfig, textures: &mut TextureCache) -> Material {
    let color = Color::from_hex(config.planet.color);
    let texture = config.planet.texture.as_ref().and_then(|path| match textures.load(path) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("Planet texture unavailable, using flat color: {}", e);
            None
        }
    });
    match texture {
        Some(texture) => Material::Lambert { color: Color::WHITE, texture: Some(texture) },
        None => Material::Lambert { color, texture: None },
    }
}
