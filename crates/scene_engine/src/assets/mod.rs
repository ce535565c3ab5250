//! Asset management
//!
//! Textures are loaded once at startup and referenced from materials through
//! lightweight handles.

mod image_loader;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use image_loader::TextureData;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// File does not exist
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// File exists but could not be decoded
    #[error("Asset load failed: {0}")]
    LoadFailed(String),
}

/// Reference to a texture held by a [`TextureCache`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    id: u32,
    width: u32,
    height: u32,
}

impl TextureHandle {
    /// Cache-local identifier
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Texture size in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Owns decoded textures; loading the same path twice returns the same handle
#[derive(Debug, Default)]
pub struct TextureCache {
    textures: Vec<TextureData>,
    by_path: HashMap<PathBuf, TextureHandle>,
}

impl TextureCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a texture from disk, reusing an earlier load of the same path
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<TextureHandle, AssetError> {
        let path = path.as_ref();
        if let Some(handle) = self.by_path.get(path) {
            return Ok(handle.clone());
        }
        let handle = self.insert(TextureData::from_file(path)?);
        self.by_path.insert(path.to_path_buf(), handle.clone());
        Ok(handle)
    }

    /// Register already decoded texture data
    pub fn insert(&mut self, data: TextureData) -> TextureHandle {
        let handle = TextureHandle {
            id: self.textures.len() as u32,
            width: data.width,
            height: data.height,
        };
        self.textures.push(data);
        handle
    }

    /// Number of textures held
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether no texture has been loaded
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_hands_out_sequential_handles() {
        let mut cache = TextureCache::new();
        let first = cache.insert(TextureData::solid_color(2, 2, [255, 0, 0, 255]));
        let second = cache.insert(TextureData::solid_color(4, 1, [0, 0, 255, 255]));

        assert_eq!((first.id(), first.dimensions()), (0, (2, 2)));
        assert_eq!((second.id(), second.dimensions()), (1, (4, 1)));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_same_path_loaded_once() {
        let path = std::env::temp_dir().join(format!("scene_engine_{}_cache.png", std::process::id()));
        image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255])).save(&path).unwrap();

        let mut cache = TextureCache::new();
        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_texture_is_not_cached() {
        let mut cache = TextureCache::new();
        assert!(cache.load("missing/earth.png").is_err());
        assert!(cache.is_empty());
    }
}
