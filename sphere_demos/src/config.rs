//! Demo configuration
//!
//! Read from `$SPHERE_DEMO_CONFIG`, then `config/sphere_demos.toml` (or
//! `.ron`), otherwise defaults. Both demos share one file.

use scene_engine::config::{Config, ConfigError};
use scene_engine::foundation::math::utils;
use scene_engine::{EngineConfig, WindowConfig};
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SPHERE_DEMO_CONFIG";

/// Config files tried when the environment variable is unset
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config/sphere_demos.toml", "config/sphere_demos.ron"];

/// Configuration for both demos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window and frame pacing
    pub engine: EngineConfig,
    /// Spinning sphere demo
    pub spinning: SpinningConfig,
    /// Globe viewer demo
    pub globe: GlobeConfig,
}

/// Spinning sphere demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinningConfig {
    /// Sphere radius in world units
    pub radius: f32,
    /// Segments around the equator
    pub width_segments: u32,
    /// Segments from pole to pole
    pub height_segments: u32,
    /// Flat color, also the fallback when the texture is missing
    pub color: u32,
    /// Optional texture path, replaces `color` when it loads
    pub texture: Option<String>,
    /// Camera distance along +Z
    pub camera_distance: f32,
    /// Vertical field of view
    pub fov_degrees: f32,
    /// Rotation added to the X and Y axes every frame, in radians
    pub spin_per_frame: [f32; 2],
}

/// Globe viewer demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Globe radius in world units
    pub radius: f32,
    /// Segments in both directions
    pub segments: u32,
    /// Color used when the texture cannot be loaded
    pub fallback_color: u32,
    /// Surface texture path
    pub texture: Option<String>,
    /// Vertical field of view
    pub fov_degrees: f32,
    /// Starting camera distance from the globe center
    pub camera_distance: f32,
    /// Closest zoom
    pub min_distance: f32,
    /// Farthest zoom
    pub max_distance: f32,
    /// Orbit angle per arrow key press, in degrees
    pub rotate_step_degrees: f32,
    /// Distance multiplier per zoom-out press; zoom-in divides by it
    pub zoom_step: f32,
    /// Orbit radians per pixel of mouse drag
    pub drag_sensitivity: f32,
    /// Azimuth added every frame in radians; toggled with space
    pub auto_rotate: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                window: WindowConfig {
                    title: "Sphere Demos".to_string(),
                    ..WindowConfig::default()
                },
                ..EngineConfig::default()
            },
            spinning: SpinningConfig::default(),
            globe: GlobeConfig::default(),
        }
    }
}

impl Default for SpinningConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            width_segments: 32,
            height_segments: 32,
            color: 0xff0000,
            texture: None,
            camera_distance: 10.0,
            fov_degrees: 75.0,
            spin_per_frame: [0.01, 0.01],
        }
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            segments: 64,
            fallback_color: 0x2a6fdb,
            texture: Some("resources/textures/earth.png".to_string()),
            fov_degrees: 45.0,
            camera_distance: 15.0,
            min_distance: 6.0,
            max_distance: 50.0,
            rotate_step_degrees: 5.0,
            zoom_step: 1.1,
            drag_sensitivity: 0.005,
            auto_rotate: 0.002,
        }
    }
}

impl Config for DemoConfig {}

impl DemoConfig {
    /// Load from the environment-named file or the default paths, then validate
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::load_from_file(&path)?,
            _ => Self::load_or_default(&DEFAULT_CONFIG_PATHS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the demos cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spinning = &self.spinning;
        if spinning.radius <= 0.0 || spinning.camera_distance <= 0.0 {
            return Err(ConfigError::Invalid("spinning radius and camera_distance must be positive".to_string()));
        }
        if spinning.width_segments < 3 || spinning.height_segments < 2 {
            return Err(ConfigError::Invalid(format!(
                "spinning sphere needs at least 3x2 segments, got {}x{}",
                spinning.width_segments, spinning.height_segments
            )));
        }

        let globe = &self.globe;
        if globe.radius <= 0.0 || globe.segments < 3 {
            return Err(ConfigError::Invalid("globe radius must be positive with at least 3 segments".to_string()));
        }
        if globe.min_distance <= globe.radius || globe.max_distance < globe.min_distance {
            return Err(ConfigError::Invalid(format!(
                "globe distance range [{}, {}] must lie outside radius {}",
                globe.min_distance, globe.max_distance, globe.radius
            )));
        }
        if globe.zoom_step <= 1.0 {
            return Err(ConfigError::Invalid(format!("globe.zoom_step must exceed 1, got {}", globe.zoom_step)));
        }
        Ok(())
    }
}

impl GlobeConfig {
    /// Arrow key orbit step in radians
    pub fn rotate_step(&self) -> f32 {
        utils::deg_to_rad(self.rotate_step_degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = DemoConfig::default();
        config.validate().unwrap();
        assert_eq!(config.spinning.radius, 5.0);
        assert_eq!(config.spinning.spin_per_frame, [0.01, 0.01]);
        assert_relative_eq!(config.globe.rotate_step(), 5.0_f32.to_radians(), epsilon = 1e-6);
    }

    #[test]
    fn test_camera_inside_globe_rejected() {
        let mut config = DemoConfig::default();
        config.globe.min_distance = 4.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_ron_round_trip() {
        let path = std::env::temp_dir().join(format!("sphere_demos_{}.ron", std::process::id()));
        let mut config = DemoConfig::default();
        config.globe.auto_rotate = 0.0;
        config.spinning.texture = Some("resources/textures/checker.png".to_string());
        config.save_to_file(&path).unwrap();

        assert_eq!(DemoConfig::load_from_file(&path).unwrap(), config);
        std::fs::remove_file(&path).ok();
    }
}
