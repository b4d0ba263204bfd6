//! Ray representation for 3D ray casting.
//!
//! A ray is defined as r(t) = origin + t * direction. Each ray also carries the
//! colour it has accumulated so far, which the shading stage updates in place.

use crate::vec3::{Color, Vec3};

/// Ray in 3D space defined by origin and direction, plus its current colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, a surface point for reflected
    /// and shadow rays.
    pub origin: Vec3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized. Intersection distances are measured in
    /// multiples of this vector, so they scale inversely with its length.
    pub direction: Vec3,

    /// Colour carried by the ray, black for freshly cast rays.
    pub color: Color,
}

impl Ray {
    /// Create a new black ray with origin and direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            color: Color::ZERO,
        }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Mirror this ray about `normal` at `hit_point`.
    ///
    /// `normal` does not have to be unit length; its magnitude cancels out.
    /// The returned ray starts at `hit_point` and is black.
    pub fn reflect(&self, hit_point: Vec3, normal: Vec3) -> Ray {
        Ray::new(hit_point, reflect(self.direction, normal))
    }
}

/// Reflect `incident` about `normal` using the law of reflection.
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    let perpendicular = ((incident * normal) / (normal * normal)) * normal;
    incident - 2.0 * perpendicular
}
