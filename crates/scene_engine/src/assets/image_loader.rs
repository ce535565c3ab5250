//! Decoding image files into RGBA8 texture data

use std::path::Path;

use image::DynamicImage;

use super::AssetError;

/// Decoded RGBA8 image
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    /// Raw RGBA pixel data, row-major
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl TextureData {
    /// Decode the image at `path`
    ///
    /// A missing file is [`AssetError::NotFound`] so callers can tell it apart
    /// from a corrupt one.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        log::debug!("Decoding texture {}", path.display());
        let decoded = image::open(path)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        let texture = Self::from_image(decoded);
        log::info!("Loaded texture {} ({}x{})", path.display(), texture.width, texture.height);
        Ok(texture)
    }

    /// Decode an encoded image held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        image::load_from_memory(bytes)
            .map(Self::from_image)
            .map_err(|e| AssetError::LoadFailed(format!("in-memory image: {}", e)))
    }

    fn from_image(image: DynamicImage) -> Self {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            data: rgba.into_raw(),
            width,
            height,
        }
    }

    /// Create a solid color image
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            data: color.repeat((width * height) as usize),
            width,
            height,
        }
    }

    /// RGBA value at `(x, y)`, if inside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        self.data.get(offset..offset + 4).and_then(|px| px.try_into().ok())
    }
}
