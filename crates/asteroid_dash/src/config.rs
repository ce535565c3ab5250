//! Game configuration
//!
//! Loaded from `$ASTEROID_DASH_CONFIG`, then `config/asteroid_dash.toml`
//! (or `.ron`), falling back to built-in defaults. Every section and field is
//! optional in the file.

use scene_engine::config::{Config, ConfigError};
use scene_engine::foundation::math::Vec3;
use scene_engine::{EngineConfig, WindowConfig};
use serde::{Deserialize, Serialize};

use crate::flight::{forward_axis, FlightRules};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "ASTEROID_DASH_CONFIG";

/// Config files tried when the environment variable is unset
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config/asteroid_dash.toml", "config/asteroid_dash.ron"];

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window and frame pacing
    pub engine: EngineConfig,

    /// Movement and collision constants
    pub flight: FlightConfig,

    /// Asteroid placement
    pub field: FieldConfig,

    /// Chase camera
    pub camera: CameraConfig,

    /// Input options
    pub controls: ControlsConfig,

    /// Planet appearance
    pub planet: PlanetConfig,
}

/// Movement and collision constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Forward drift per frame
    pub forward_step: f32,

    /// Move per directional command
    pub lateral_step: f32,

    /// Crash distance to an asteroid
    pub obstacle_threshold: f32,

    /// Arrival distance to the planet
    pub goal_threshold: f32,

    /// Ship start position
    pub ship_start: [f32; 3],

    /// Planet distance ahead of the start along the forward axis
    pub goal_distance: f32,
}

/// Asteroid placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of asteroids
    pub count: usize,

    /// Lower corner of the placement box
    pub min: [f32; 3],

    /// Upper corner of the placement box
    pub max: [f32; 3],

    /// Smallest visual scale
    pub min_scale: f32,

    /// Largest visual scale
    pub max_scale: f32,

    /// Fixed seed for a repeatable field; random when absent
    pub seed: Option<u64>,
}

/// Chase camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position relative to the ship
    pub offset: [f32; 3],

    /// Vertical field of view in degrees
    pub fov_degrees: f32,

    /// Near clipping distance
    pub near: f32,

    /// Far clipping distance
    pub far: f32,
}

/// Input options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Whether the host reports touch support; shows on-screen buttons
    pub touch_supported: bool,
}

/// Planet appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetConfig {
    /// Visual radius
    pub radius: f32,

    /// Color used when no texture is set or it fails to load
    pub color: u32,

    /// Optional surface texture
    pub texture: Option<String>,

    /// Cosmetic spin per frame in radians
    pub spin_per_frame: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                window: WindowConfig {
                    title: "Asteroid Dash".to_string(),
                    ..WindowConfig::default()
                },
                ..EngineConfig::default()
            },
            flight: FlightConfig::default(),
            field: FieldConfig::default(),
            camera: CameraConfig::default(),
            controls: ControlsConfig::default(),
            planet: PlanetConfig::default(),
        }
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            forward_step: 0.1,
            lateral_step: 0.5,
            obstacle_threshold: 1.0,
            goal_threshold: 3.0,
            ship_start: [0.0, 0.0, 0.0],
            goal_distance: 50.0,
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 50,
            min: [-10.0, -10.0, -45.0],
            max: [10.0, 10.0, -5.0],
            min_scale: 0.3,
            max_scale: 0.8,
            seed: None,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: [0.0, 1.0, 5.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            color: 0x3366ff,
            texture: None,
            spin_per_frame: 0.005,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load from the environment-named file or the default paths, then validate
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::load_from_file(&path)?,
            _ => Self::load_or_default(&DEFAULT_CONFIG_PATHS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let flight = &self.flight;
        let positive = [
            ("flight.forward_step", flight.forward_step),
            ("flight.lateral_step", flight.lateral_step),
            ("flight.obstacle_threshold", flight.obstacle_threshold),
            ("flight.goal_threshold", flight.goal_threshold),
            ("flight.goal_distance", flight.goal_distance),
            ("camera.near", self.camera.near),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if flight.goal_threshold <= flight.obstacle_threshold {
            return Err(ConfigError::Invalid(format!(
                "flight.goal_threshold ({}) must be larger than flight.obstacle_threshold ({})",
                flight.goal_threshold, flight.obstacle_threshold
            )));
        }
        if !flight.ship_start.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::Invalid(format!("flight.ship_start {:?} must be finite", flight.ship_start)));
        }

        let camera = &self.camera;
        if !camera.far.is_finite() || camera.far <= camera.near {
            return Err(ConfigError::Invalid(format!(
                "camera.far ({}) must be finite and beyond camera.near ({})",
                camera.far, camera.near
            )));
        }
        let fov = camera.fov_degrees;
        if !fov.is_finite() || fov <= 0.0 || fov >= 180.0 {
            return Err(ConfigError::Invalid(format!(
                "camera.fov_degrees must be in (0, 180), got {fov}"
            )));
        }
        let offset = Vec3::from(camera.offset);
        if !offset.iter().all(|v| v.is_finite()) || offset.cross(&Vec3::y()).norm_squared() <= f32::EPSILON {
            return Err(ConfigError::Invalid(format!(
                "camera.offset {:?} must be finite and not along the vertical axis",
                camera.offset
            )));
        }

        let field = &self.field;
        let bounds_ok = field
            .min
            .iter()
            .zip(field.max.iter())
            .all(|(lo, hi)| lo <= hi && (hi - lo).is_finite());
        if !bounds_ok {
            return Err(ConfigError::Invalid(format!(
                "field.min {:?} must be finite and not exceed field.max {:?}",
                field.min, field.max
            )));
        }
        let (min_scale, max_scale) = (field.min_scale, field.max_scale);
        if !max_scale.is_finite() || min_scale.is_nan() || min_scale <= 0.0 || min_scale > max_scale {
            return Err(ConfigError::Invalid(format!(
                "field scale range [{min_scale}, {max_scale}] is invalid"
            )));
        }

        Ok(())
    }

    /// Flight constants in world terms
    pub fn rules(&self) -> FlightRules {
        let ship_start = Vec3::from(self.flight.ship_start);
        FlightRules {
            forward_step: self.flight.forward_step,
            lateral_step: self.flight.lateral_step,
            obstacle_threshold: self.flight.obstacle_threshold,
            goal_threshold: self.flight.goal_threshold,
            ship_start,
            goal_position: ship_start + forward_axis() * self.flight.goal_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid_and_match_rules() {
        let config = GameConfig::default();
        config.validate().unwrap();

        assert_eq!(config.rules(), FlightRules::default());
        assert_eq!(config.field.count, 50);
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config: GameConfig = toml_from_str(
            r#"
            [flight]
            forward_step = 0.25

            [field]
            seed = 7
            "#,
        );

        assert_eq!(config.flight.forward_step, 0.25);
        assert_eq!(config.flight.goal_threshold, 3.0);
        assert_eq!(config.field.seed, Some(7));
        assert_eq!(config.field.count, 50);
        assert_eq!(config.engine.window.title, "Asteroid Dash");
    }

    #[test]
    fn test_goal_threshold_must_exceed_obstacle_threshold() {
        let mut config = GameConfig::default();
        config.flight.goal_threshold = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_positive_step_rejected() {
        let mut config = GameConfig::default();
        config.flight.forward_step = 0.0;
        assert!(config.validate().is_err());

        config.flight.forward_step = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_field_rejected() {
        let mut config = GameConfig::default();
        config.field.min[2] = 0.0;
        config.field.max[2] = -10.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_field_values_rejected() {
        let config = toml_from_str("[field]\nmin_scale = nan\n");
        assert!(config.field.min_scale.is_nan());
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.field.min[0] = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.field.max[1] = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.field.min[2] = -f32::MAX;
        config.field.max[2] = f32::MAX;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.field.max_scale = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unusable_camera_rejected() {
        let mut config = GameConfig::default();
        config.camera.far = f32::NAN;
        assert!(config.validate().is_err());

        for fov in [0.0, 180.0, -30.0, f32::NAN] {
            let mut config = GameConfig::default();
            config.camera.fov_degrees = fov;
            assert!(config.validate().is_err(), "fov {fov} accepted");
        }

        for offset in [[0.0, 0.0, 0.0], [0.0, 4.0, 0.0], [f32::NAN, 1.0, 5.0]] {
            let mut config = GameConfig::default();
            config.camera.offset = offset;
            assert!(config.validate().is_err(), "offset {offset:?} accepted");
        }
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("asteroid_dash_{}.toml", std::process::id()));
        let mut config = GameConfig::default();
        config.field.seed = Some(42);
        config.planet.texture = Some("resources/textures/planet.png".to_string());
        config.save_to_file(&path).unwrap();

        assert_eq!(GameConfig::load_from_file(&path).unwrap(), config);
        std::fs::remove_file(&path).ok();
    }

    fn toml_from_str(text: &str) -> GameConfig {
        let path = std::env::temp_dir().join(format!(
            "asteroid_dash_partial_{}_{}.toml",
            std::process::id(),
            text.len()
        ));
        std::fs::write(&path, text).unwrap();
        let config = GameConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        config
    }
}
