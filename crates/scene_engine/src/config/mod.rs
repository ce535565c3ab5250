//! Configuration system

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Configuration trait
///
/// File format is picked from the extension: `.toml` or `.ron`.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load from the first existing candidate path, or fall back to defaults
    ///
    /// A file that exists but fails to parse is an error; a missing file is not.
    fn load_or_default<P: AsRef<Path>>(candidates: &[P]) -> Result<Self, ConfigError> {
        for candidate in candidates {
            let path = candidate.as_ref();
            if path.is_file() {
                log::info!("Loading configuration from {}", path.display());
                return Self::load_from_file(path);
            }
        }
        log::info!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        name: String,
        fps: u32,
    }

    impl Config for Sample {}

    fn temp_path(file: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("scene_engine_{}_{file}", std::process::id()))
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("sample.toml");
        let sample = Sample { name: "globe".to_string(), fps: 60 };
        sample.save_to_file(&path).unwrap();

        let loaded = Sample::load_from_file(&path).unwrap();
        assert_eq!(loaded, sample);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("sample.ron");
        let sample = Sample { name: "sphere".to_string(), fps: 30 };
        sample.save_to_file(&path).unwrap();

        let loaded = Sample::load_from_file(&path).unwrap();
        assert_eq!(loaded, sample);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unsupported_extension() {
        let result = Sample::default().save_to_file(temp_path("sample.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_candidates_fall_back_to_default() {
        let loaded = Sample::load_or_default(&[temp_path("does_not_exist.toml")]).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "fps = 24\n").unwrap();

        let loaded = Sample::load_or_default(&[&path]).unwrap();
        assert_eq!(loaded, Sample { name: String::new(), fps: 24 });
        std::fs::remove_file(&path).ok();
    }
}
