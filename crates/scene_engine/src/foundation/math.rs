//! Vector and matrix aliases over nalgebra, plus the scene [`Transform`]

pub use nalgebra::{Matrix4, Point3, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Transform representing position, Euler rotation, and scale
///
/// Rotation is stored as Euler angles in radians and applied in X, Y, Z order,
/// so per-axis increments accumulate exactly (`rotation.x += 0.01`).
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Euler rotation in radians (X, then Y, then Z)
    pub rotation: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set a uniform scale (builder style)
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::new(scale, scale, scale);
        self
    }

    /// Convert to a transformation matrix (T * Rx * Ry * Rz * S)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * Mat4::rotation_x(self.rotation.x)
            * Mat4::rotation_y(self.rotation.y)
            * Mat4::rotation_z(self.rotation.z)
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Largest scale component, used to scale bounding radii
    pub fn max_scale(&self) -> f32 {
        self.scale.x.abs().max(self.scale.y.abs()).max(self.scale.z.abs())
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Clamp `value` into `[min, max]`
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        value.max(min).min(max)
    }

    /// Wrap an angle into `[0, TAU)`
    pub fn wrap_angle(angle: f32) -> f32 {
        angle.rem_euclid(constants::TAU)
    }

    /// Convert a packed `0xRRGGBB` color to linear `[0, 1]` components
    pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        ]
    }
}

/// Matrix constructors used by the camera and scene transforms
pub trait Mat4Ext {
    /// Right-handed rotation of `angle` radians about +X
    fn rotation_x(angle: f32) -> Mat4;

    /// Right-handed rotation of `angle` radians about +Y
    fn rotation_y(angle: f32) -> Mat4;

    /// Right-handed rotation of `angle` radians about +Z
    fn rotation_z(angle: f32) -> Mat4;

    /// Perspective projection with depth in `[0, 1]`, for use after
    /// [`Mat4Ext::clip_space_flip`]
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// View matrix for an eye at `eye` looking at `target`
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;

    /// Flip Y and Z so view space (Y-up, looking down -Z) maps to clip
    /// conventions (Y-down, depth increasing away from the viewer)
    fn clip_space_flip() -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let focal = 1.0 / (fov_y * 0.5).tan();
        let depth = far / (far - near);

        let mut m = Mat4::zeros();
        m[(0, 0)] = focal / aspect;
        m[(1, 1)] = focal;
        m[(2, 2)] = depth;
        m[(2, 3)] = -near * depth;
        m[(3, 2)] = 1.0;
        m
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }

    fn clip_space_flip() -> Mat4 {
        Mat4::from_diagonal(&Vec4::new(1.0, -1.0, -1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_transform_matrix() {
        assert_relative_eq!(Transform::identity().to_matrix(), Mat4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_transform_applies_translation_after_rotation() {
        let mut transform = Transform::from_position(Vec3::new(0.0, 0.0, -5.0));
        transform.rotation.y = constants::HALF_PI;

        let point = transform.to_matrix().transform_point(&nalgebra::Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(point.coords, Vec3::new(0.0, 0.0, -6.0), epsilon = 1e-5);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(utils::hex_to_rgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(utils::hex_to_rgb(0x0000ff), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_look_at_puts_target_on_negative_z() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::zeros(), Vec3::y());
        let origin = view.transform_point(&Point3::origin());
        assert_relative_eq!(origin.coords, Vec3::new(0.0, 0.0, -10.0), epsilon = 1e-5);
    }

    #[test]
    fn test_wrap_angle() {
        assert_relative_eq!(utils::wrap_angle(-constants::HALF_PI), 1.5 * constants::PI, epsilon = 1e-5);
        assert_relative_eq!(utils::wrap_angle(constants::TAU + 1.0), 1.0, epsilon = 1e-5);
    }
}
