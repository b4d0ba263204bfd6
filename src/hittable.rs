//! Ray queries against a list of spheres.
//!
//! Closest-hit search for primary and reflected rays, and the occluder scan
//! used by shadow rays. Both are brute-force linear scans.

use crate::ray::Ray;
use crate::sphere::ColoredSphere;

/// Closest intersection found along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray, in multiples of its direction vector
    pub t: f64,
    /// Index of the sphere that was hit
    pub index: usize,
}

/// Find the nearest sphere hit by `ray`.
///
/// On exactly equal distances the sphere enumerated first wins, since a
/// later hit only replaces the current one when strictly closer.
pub fn closest_hit(ray: &Ray, spheres: &[ColoredSphere], epsilon: f64) -> Option<Hit> {
    let mut closest: Option<Hit> = None;

    for (index, object) in spheres.iter().enumerate() {
        if let Some(t) = object.sphere.intersect(ray, epsilon) {
            if closest.map_or(true, |hit| t < hit.t) {
                closest = Some(Hit { t, index });
            }
        }
    }

    closest
}

/// Count the spheres `ray` intersects anywhere beyond `epsilon`.
///
/// No distance limit applies: spheres beyond the ray's target still count.
pub fn count_occluders(ray: &Ray, spheres: &[ColoredSphere], epsilon: f64) -> usize {
    spheres
        .iter()
        .filter(|object| object.sphere.intersect(ray, epsilon).is_some())
        .count()
}
