//! Primitive collision shapes and distance tests

use crate::foundation::math::Vec3;

/// Whether two points are strictly closer than `threshold`
///
/// Compares squared lengths; a distance exactly equal to the threshold does
/// not count.
pub fn within_distance(a: &Vec3, b: &Vec3, threshold: f32) -> bool {
    (a - b).norm_squared() < threshold * threshold
}

/// Sphere enclosing a shape, for overlap tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// World-space center
    pub center: Vec3,
    /// Radius
    pub radius: f32,
}

impl BoundingSphere {
    /// Sphere at `center`
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point lies strictly inside the sphere
    pub fn contains_point(&self, point: &Vec3) -> bool {
        within_distance(&self.center, point, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_distance_is_strict() {
        let origin = Vec3::zeros();
        assert!(within_distance(&origin, &Vec3::new(0.0, 0.0, -2.9), 3.0));
        assert!(!within_distance(&origin, &Vec3::new(0.0, 3.0, 0.0), 3.0));
        assert!(!within_distance(&origin, &Vec3::new(4.0, 0.0, 0.0), 3.0));
    }

    #[test]
    fn test_contains_point_excludes_surface() {
        let sphere = BoundingSphere::new(Vec3::new(0.0, 0.0, -50.0), 3.0);
        assert!(sphere.contains_point(&Vec3::new(0.0, 0.0, -48.0)));
        assert!(!sphere.contains_point(&Vec3::new(0.0, 0.0, -47.0)));
    }
}
