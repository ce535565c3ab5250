//! View frustum for visibility culling

use crate::foundation::math::{Mat4, Vec3};

/// Plane defined by normal and distance from origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Normal vector (normalized, pointing into the frustum)
    pub normal: Vec3,
    /// Distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from `a*x + b*y + c*z + d = 0`, normalizing it
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let normal = Vec3::new(a, b, c);
        let length = normal.norm();
        if length <= f32::EPSILON {
            return Self { normal: Vec3::zeros(), distance: d };
        }
        Self {
            normal: normal / length,
            distance: d / length,
        }
    }

    /// Calculate signed distance from plane to point
    pub fn distance_to_point(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Frustum for visibility culling
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// Six planes (left, right, bottom, top, near, far)
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix
    ///
    /// Gribb-Hartmann extraction for clip space with `-w <= x, y <= w` and
    /// `0 <= z <= w`.
    pub fn from_matrix(vp: &Mat4) -> Self {
        let row = |i: usize| vp.row(i).transpose();
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        let plane = |v: nalgebra::Vector4<f32>| Plane::from_coefficients(v.x, v.y, v.z, v.w);
        Self {
            planes: [
                plane(r3 + r0),
                plane(r3 - r0),
                plane(r3 + r1),
                plane(r3 - r1),
                plane(r2),
                plane(r3 - r2),
            ],
        }
    }

    /// Whether a sphere is at least partly inside the frustum
    pub fn intersects_sphere(&self, center: &Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Camera;

    fn camera() -> Camera {
        Camera::perspective(Vec3::new(0.0, 0.0, 10.0), 75.0, 1.0, 0.1, 100.0)
    }

    #[test]
    fn test_sphere_in_front_is_visible() {
        let frustum = camera().frustum();
        assert!(frustum.intersects_sphere(&Vec3::zeros(), 5.0));
        assert!(frustum.intersects_sphere(&Vec3::new(0.0, 0.0, -50.0), 2.0));
    }

    #[test]
    fn test_sphere_behind_camera_is_culled() {
        let frustum = camera().frustum();
        assert!(!frustum.intersects_sphere(&Vec3::new(0.0, 0.0, 20.0), 1.0));
    }

    #[test]
    fn test_sphere_beyond_far_plane_is_culled() {
        let frustum = camera().frustum();
        assert!(!frustum.intersects_sphere(&Vec3::new(0.0, 0.0, -200.0), 1.0));
    }

    #[test]
    fn test_sphere_off_to_the_side() {
        let frustum = camera().frustum();
        // Half-angle 37.5 degrees: at 10 units out the frustum is ~7.7 units wide
        assert!(!frustum.intersects_sphere(&Vec3::new(30.0, 0.0, 0.0), 1.0));
        // Straddling the left plane still counts
        assert!(frustum.intersects_sphere(&Vec3::new(-8.0, 0.0, 0.0), 1.0));
    }
}
