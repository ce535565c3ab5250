//! Sphere demos
//!
//! Two small scenes on top of `scene_engine`: a sphere spinning in front of a
//! fixed camera, and a lit globe viewed through an orbit camera.

#![warn(missing_docs)]

pub mod config;
pub mod globe;
pub mod spinning;

use scene_engine::assets::TextureCache;
use scene_engine::scene::{Color, Material};

pub use config::DemoConfig;
pub use globe::GlobeApp;
pub use spinning::SpinningSphereApp;

/// Textured material when `texture` loads, otherwise a flat `fallback` color
///
/// `lit` picks a Lambert material over an unlit basic one for the fallback.
pub fn surface_material(texture: Option<&str>, fallback: u32, lit: bool, textures: &mut TextureCache) -> Material {
    if let Some(path) = texture {
        match textures.load(path) {
            Ok(handle) => return Material::Lambert { color: Color::WHITE, texture: Some(handle) },
            Err(e) => log::warn!("Texture unavailable, using flat color: {}", e),
        }
    }

    if lit {
        Material::Lambert { color: Color::from_hex(fallback), texture: None }
    } else {
        Material::basic(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_texture_falls_back() {
        let mut textures = TextureCache::new();
        assert_eq!(surface_material(Some("missing.png"), 0xff0000, false, &mut textures), Material::basic(0xff0000));
        assert!(surface_material(None, 0xff0000, true, &mut textures).is_lit());
        assert!(textures.is_empty());
    }
}
