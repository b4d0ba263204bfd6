//! Pinhole camera for primary ray generation.

use std::f64::consts::FRAC_PI_2;

use glam::{DMat3, DVec3};

use crate::ray::Ray;
use crate::vec3::Vec3;

/// Pinhole camera described by a position and a local basis in world space.
///
/// `v_x`, `v_y` and `v_z` should form a right-handed, roughly orthonormal
/// basis: `v_x` spans the image horizontally, `v_y` vertically (image rows
/// grow along `+v_y`) and `v_z` is the viewing direction. Nothing enforces
/// this; a skewed basis simply produces a skewed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Horizontal image axis
    pub v_x: Vec3,
    /// Vertical image axis
    pub v_y: Vec3,
    /// Viewing direction
    pub v_z: Vec3,
    /// Horizontal field of view in radians
    pub fov: f64,
}

impl Default for Camera {
    /// Camera at `(0, -35, 30)` pitched by -30° about x, 90° field of view.
    fn default() -> Self {
        Self::looking_along_pitch(Vec3::new(0.0, -35.0, 30.0), -30f64.to_radians(), FRAC_PI_2)
    }
}

impl Camera {
    /// Camera whose basis is the world axes rotated by `pitch` radians about x.
    pub fn looking_along_pitch(position: Vec3, pitch: f64, fov: f64) -> Self {
        let rotation = DMat3::from_rotation_x(pitch);
        Self {
            position,
            v_x: (rotation * DVec3::X).into(),
            v_y: (rotation * DVec3::Y).into(),
            v_z: (rotation * DVec3::Z).into(),
            fov,
        }
    }

    /// Distance from the pinhole to the image plane for a unit-wide image.
    fn focal_length(&self) -> f64 {
        0.5 / (self.fov * 0.5).tan()
    }

    /// Direction through normalized image coordinates `u, v ∈ [0, 1)`.
    ///
    /// `aspect_ratio` is width / height. The vertical offset is divided by it
    /// so the image plane keeps square pixels whatever the resolution.
    pub fn ray_direction(&self, u: f64, v: f64, aspect_ratio: f64) -> Vec3 {
        (u - 0.5) * self.v_x + ((v - 0.5) / aspect_ratio) * self.v_y + self.focal_length() * self.v_z
    }

    /// Primary ray from the camera position through `(u, v)`.
    pub fn primary_ray(&self, u: f64, v: f64, aspect_ratio: f64) -> Ray {
        Ray::new(self.position, self.ray_direction(u, v, aspect_ratio))
    }
}
