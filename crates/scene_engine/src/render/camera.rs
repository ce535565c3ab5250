//! # 3D Camera System
//!
//! Perspective camera plus an orbit controller that positions it on a sphere
//! around a target.
//!
//! ## Coordinate System
//! World space is right-handed and Y-up. The view-projection chain is
//! P × X × V, where X flips Y and Z so that depth grows away from the viewer
//! and lands in `[0, 1]` after the perspective divide.

use super::frustum::Frustum;
use crate::foundation::math::{constants, utils, Mat4, Mat4Ext, Vec3};

/// 3D perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Update camera target (look-at point)
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        log::trace!("Camera target updated to: {:?}", target);
    }

    /// Update camera aspect ratio for viewport changes
    ///
    /// Only logs changes larger than 0.01 to keep resize storms quiet.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// World-to-view transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Perspective projection
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined view-projection: P × X × V
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * Mat4::clip_space_flip() * self.view_matrix()
    }

    /// Frustum planes of the current view
    pub fn frustum(&self) -> Frustum {
        Frustum::from_matrix(&self.view_projection_matrix())
    }

    /// Whether position and target coincide or the projection is degenerate
    pub fn is_degenerate(&self) -> bool {
        (self.target - self.position).norm_squared() <= f32::EPSILON
            || self.near <= 0.0
            || self.far <= self.near
            || self.aspect <= 0.0
    }
}

impl Default for Camera {
    /// 45 degree camera above and behind the origin, 16:9, near 0.1, far 1000
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 3.0),
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Keeps a camera on a sphere around a target point
///
/// Azimuth is measured around +Y starting from +Z; elevation is the angle
/// above the XZ plane and stops just short of the poles so the view never
/// flips over.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Point orbited and looked at
    pub target: Vec3,
    /// Distance from the target
    pub radius: f32,
    /// Angle around +Y in radians, wrapped to `[0, TAU)`
    pub azimuth: f32,
    /// Angle above the horizon in radians
    pub elevation: f32,
    /// Closest allowed distance
    pub min_radius: f32,
    /// Farthest allowed distance
    pub max_radius: f32,
}

impl OrbitCamera {
    /// Margin kept from the poles
    pub const POLE_MARGIN: f32 = 0.01;

    /// Create an orbit at `radius` looking at `target` from +Z
    pub fn new(target: Vec3, radius: f32, min_radius: f32, max_radius: f32) -> Self {
        Self {
            target,
            radius: utils::clamp(radius, min_radius, max_radius),
            azimuth: 0.0,
            elevation: 0.0,
            min_radius,
            max_radius,
        }
    }

    /// Rotate around the target
    pub fn rotate(&mut self, delta_azimuth: f32, delta_elevation: f32) {
        let limit = constants::HALF_PI - Self::POLE_MARGIN;
        self.azimuth = utils::wrap_angle(self.azimuth + delta_azimuth);
        self.elevation = utils::clamp(self.elevation + delta_elevation, -limit, limit);
    }

    /// Scale the distance to the target (`< 1` moves closer)
    pub fn zoom(&mut self, factor: f32) {
        if factor > 0.0 {
            self.radius = utils::clamp(self.radius * factor, self.min_radius, self.max_radius);
        }
    }

    /// Camera position for the current angles
    pub fn eye(&self) -> Vec3 {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target + Vec3::new(sin_az * cos_el, sin_el, cos_az * cos_el) * self.radius
    }

    /// Move `camera` onto the orbit, looking at the target
    pub fn apply(&self, camera: &mut Camera) {
        camera.set_position(self.eye());
        camera.set_target(self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_in_front_projects_to_center() {
        let camera = Camera::perspective(Vec3::new(0.0, 0.0, 10.0), 75.0, 1.0, 0.1, 1000.0);
        let clip = camera.view_projection_matrix() * nalgebra::Vector4::new(0.0, 0.0, 0.0, 1.0);

        assert!(clip.w > 0.0);
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-5);
        let depth = clip.z / clip.w;
        assert!(depth > 0.0 && depth < 1.0);
    }

    #[test]
    fn test_point_behind_camera_has_negative_w() {
        let camera = Camera::perspective(Vec3::new(0.0, 0.0, 10.0), 75.0, 1.0, 0.1, 1000.0);
        let clip = camera.view_projection_matrix() * nalgebra::Vector4::new(0.0, 0.0, 20.0, 1.0);
        assert!(clip.w < 0.0);
    }

    #[test]
    fn test_orbit_eye_positions() {
        let mut orbit = OrbitCamera::new(Vec3::zeros(), 15.0, 6.0, 50.0);
        assert_relative_eq!(orbit.eye(), Vec3::new(0.0, 0.0, 15.0), epsilon = 1e-5);

        orbit.rotate(constants::HALF_PI, 0.0);
        assert_relative_eq!(orbit.eye(), Vec3::new(15.0, 0.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn test_orbit_elevation_clamped_short_of_pole() {
        let mut orbit = OrbitCamera::new(Vec3::zeros(), 10.0, 1.0, 20.0);
        orbit.rotate(0.0, 10.0);
        assert_relative_eq!(orbit.elevation, constants::HALF_PI - OrbitCamera::POLE_MARGIN);

        orbit.rotate(0.0, -20.0);
        assert_relative_eq!(orbit.elevation, -(constants::HALF_PI - OrbitCamera::POLE_MARGIN));
    }

    #[test]
    fn test_orbit_zoom_clamped() {
        let mut orbit = OrbitCamera::new(Vec3::zeros(), 10.0, 6.0, 20.0);
        orbit.zoom(0.1);
        assert_relative_eq!(orbit.radius, 6.0);
        orbit.zoom(100.0);
        assert_relative_eq!(orbit.radius, 20.0);
        orbit.zoom(-1.0);
        assert_relative_eq!(orbit.radius, 20.0);
    }

    #[test]
    fn test_apply_moves_camera() {
        let orbit = OrbitCamera::new(Vec3::new(1.0, 0.0, 0.0), 5.0, 1.0, 10.0);
        let mut camera = Camera::default();
        orbit.apply(&mut camera);
        assert_relative_eq!(camera.position, Vec3::new(1.0, 0.0, 5.0), epsilon = 1e-5);
        assert_eq!(camera.target, Vec3::new(1.0, 0.0, 0.0));
    }
}
