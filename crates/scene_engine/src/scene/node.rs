//! Scene node types: geometry, materials and lights

use crate::assets::TextureHandle;
use crate::foundation::math::{utils, Point3, Transform, Vec3};
use crate::physics::BoundingSphere;

/// Linear RGB color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0.0 - 1.0)
    pub r: f32,
    /// Green component (0.0 - 1.0)
    pub g: f32,
    /// Blue component (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// White
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    /// Create a color from components
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let [r, g, b] = utils::hex_to_rgb(hex);
        Self { r, g, b }
    }
}

/// Procedural geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// UV sphere centred on the node origin
    Sphere {
        /// Sphere radius
        radius: f32,
        /// Segments around the equator
        width_segments: u32,
        /// Segments from pole to pole
        height_segments: u32,
    },
}

impl Geometry {
    /// Sphere shorthand
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Geometry::Sphere { radius, width_segments, height_segments }
    }

    /// Radius of a sphere enclosing the untransformed geometry
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Geometry::Sphere { radius, .. } => *radius,
        }
    }

    /// Triangles a renderer would submit for this geometry
    pub fn triangle_count(&self) -> u32 {
        match self {
            // Pole rows are fans, every other row is a strip of quads
            Geometry::Sphere { width_segments, height_segments, .. } => {
                let w = (*width_segments).max(3);
                let h = (*height_segments).max(2);
                w * 2 + w * (h - 2) * 2
            }
        }
    }
}

/// Surface material
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Unlit flat color
    Basic {
        /// Surface color
        color: Color,
    },
    /// Diffuse-lit surface, optionally textured
    Lambert {
        /// Base color, multiplied with the texture if present
        color: Color,
        /// Diffuse texture
        texture: Option<TextureHandle>,
    },
}

impl Material {
    /// Unlit material from a packed color
    pub fn basic(hex: u32) -> Self {
        Material::Basic { color: Color::from_hex(hex) }
    }

    /// Whether this material reacts to scene lights
    pub fn is_lit(&self) -> bool {
        matches!(self, Material::Lambert { .. })
    }

    /// Texture bound to this material, if any
    pub fn texture(&self) -> Option<&TextureHandle> {
        match self {
            Material::Lambert { texture, .. } => texture.as_ref(),
            Material::Basic { .. } => None,
        }
    }
}

/// Light source
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Uniform light from every direction
    Ambient {
        /// Light color
        color: Color,
        /// Intensity multiplier
        intensity: f32,
    },
    /// Parallel rays, like sunlight
    Directional {
        /// Light color
        color: Color,
        /// Intensity multiplier
        intensity: f32,
        /// Direction the light travels in (normalized on creation)
        direction: Vec3,
    },
}

impl Light {
    /// Ambient light shorthand
    pub fn ambient(hex: u32, intensity: f32) -> Self {
        Light::Ambient { color: Color::from_hex(hex), intensity }
    }

    /// Directional light shorthand
    pub fn directional(hex: u32, intensity: f32, direction: Vec3) -> Self {
        Light::Directional {
            color: Color::from_hex(hex),
            intensity,
            direction: direction.normalize(),
        }
    }
}

/// What a node contributes to the frame
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Drawable mesh
    Mesh {
        /// Shape
        geometry: Geometry,
        /// Surface
        material: Material,
    },
    /// Light source
    Light(Light),
}

/// One retained scene node
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Lookup name (not required to be unique)
    pub name: String,
    /// Local-to-world transform
    pub transform: Transform,
    /// Payload
    pub kind: NodeKind,
    /// Hidden nodes are skipped by renderers
    pub visible: bool,
}

impl SceneNode {
    /// Create a mesh node at the origin
    pub fn mesh(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            kind: NodeKind::Mesh { geometry, material },
            visible: true,
        }
    }

    /// Create a light node at the origin
    pub fn light(name: impl Into<String>, light: Light) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            kind: NodeKind::Light(light),
            visible: true,
        }
    }

    /// Place the node (builder style)
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Replace the node transform (builder style)
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// World-space bounding sphere for mesh nodes
    pub fn world_bounds(&self) -> Option<BoundingSphere> {
        let NodeKind::Mesh { geometry, .. } = &self.kind else {
            return None;
        };
        let center = self.transform.to_matrix().transform_point(&Point3::origin());
        Some(BoundingSphere::new(center.coords, geometry.bounding_radius() * self.transform.max_scale()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_triangle_count() {
        // 32 x 32 sphere: two fan rows of 32 plus 30 quad rows of 32
        assert_eq!(Geometry::sphere(5.0, 32, 32).triangle_count(), 64 + 30 * 64);
    }

    #[test]
    fn test_world_bounds_scale_with_transform() {
        let node = SceneNode::mesh("rock", Geometry::sphere(1.0, 8, 8), Material::basic(0x888888))
            .with_transform(Transform::from_position(Vec3::new(1.0, 2.0, 3.0)).with_uniform_scale(0.5));

        let bounds = node.world_bounds().unwrap();
        assert!((bounds.center - Vec3::new(1.0, 2.0, 3.0)).norm() < 1e-6);
        assert!((bounds.radius - 0.5).abs() < 1e-6);

        let light = SceneNode::light("sun", Light::ambient(0xffffff, 1.0));
        assert!(light.world_bounds().is_none());
    }

    #[test]
    fn test_directional_light_normalized() {
        let Light::Directional { direction, .. } = Light::directional(0xffffff, 1.0, Vec3::new(0.0, -3.0, 0.0)) else {
            panic!("expected directional light");
        };
        assert!((direction.norm() - 1.0).abs() < 1e-6);
    }
}
