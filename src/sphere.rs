//! Sphere primitives for ray casting.
//!
//! Implements closed-form ray-sphere intersection from the quadratic
//! `t²(D·D) + 2t(D·co) + (co·co - r²) = 0` with `co = origin - center`.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{Color, Vec3};

/// Sphere defined by center and radius.
///
/// The radius is expected to be positive. [`crate::scene::Scene::validate`]
/// rejects anything else before rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub const fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Distance along `ray` to the nearest intersection beyond `epsilon`.
    ///
    /// Returns the smaller root when it lies beyond `epsilon`, otherwise the
    /// larger one, otherwise `None` (miss, or sphere entirely behind the
    /// origin). The epsilon guard keeps rays cast from a surface point from
    /// hitting that same surface at `t ≈ 0`.
    pub fn intersect(&self, ray: &Ray, epsilon: f64) -> Option<f64> {
        let co = ray.origin - self.center;
        let d_dot_co = ray.direction * co;
        let d_squared = ray.direction * ray.direction;
        let delta = d_dot_co * d_dot_co - d_squared * (co * co - self.radius * self.radius);

        if delta < 0.0 {
            return None;
        }

        let sqrt_delta = delta.sqrt();
        let t_minus = (-d_dot_co - sqrt_delta) / d_squared;
        let t_plus = (-d_dot_co + sqrt_delta) / d_squared;

        let forward = Interval::forward(epsilon);
        if forward.surrounds(t_minus) {
            Some(t_minus)
        } else if forward.surrounds(t_plus) {
            Some(t_plus)
        } else {
            None
        }
    }

    /// Outward (unnormalised) surface normal at `point`.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        point - self.center
    }
}

/// A sphere with a surface colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredSphere {
    /// Geometry of the sphere.
    pub sphere: Sphere,
    /// Surface colour.
    pub color: Color,
}

impl ColoredSphere {
    /// Create a coloured sphere from its geometry and colour.
    pub const fn new(center: Vec3, radius: f64, color: Color) -> Self {
        Self {
            sphere: Sphere::new(center, radius),
            color,
        }
    }
}
