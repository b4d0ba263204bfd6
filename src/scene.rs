//! Scene description: camera, spheres and a single point light.

use std::f64::consts::PI;

use log::warn;

use crate::camera::Camera;
use crate::error::SceneError;
use crate::sphere::ColoredSphere;
use crate::vec3::{Color, Vec3};

/// Everything a render reads. Immutable for the duration of a render.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Viewpoint
    pub camera: Camera,
    /// Spheres in enumeration order; earlier spheres win exact distance ties
    pub spheres: Vec<ColoredSphere>,
    /// Point light position
    pub light: Vec3,
}

impl Scene {
    /// Create a scene.
    pub fn new(camera: Camera, spheres: Vec<ColoredSphere>, light: Vec3) -> Self {
        Self {
            camera,
            spheres,
            light,
        }
    }

    /// The built-in scene: three coloured spheres resting near a huge white
    /// ground sphere, lit from the upper left.
    pub fn demo() -> Self {
        Self::new(
            Camera::default(),
            vec![
                ColoredSphere::new(Vec3::new(0.0, -10.0, 100.0), 15.0, Color::new(0.0, 0.6, 0.0)),
                ColoredSphere::new(Vec3::new(25.0, 0.0, 90.0), 10.0, Color::new(0.0, 0.0, 0.6)),
                ColoredSphere::new(Vec3::new(-20.0, -5.0, 80.0), 5.0, Color::new(0.5, 0.0, 0.0)),
                ColoredSphere::new(Vec3::new(0.0, 1000.0, 0.0), 993.0, Color::new(1.0, 1.0, 1.0)),
            ],
            Vec3::new(-60.0, -100.0, 90.0),
        )
    }

    /// Reject scenes the renderer cannot produce a meaningful image for.
    ///
    /// An empty sphere list is accepted (the image is simply black) but logged.
    pub fn validate(&self) -> Result<(), SceneError> {
        let camera = &self.camera;
        for (name, v) in [
            ("position", camera.position),
            ("v_x", camera.v_x),
            ("v_y", camera.v_y),
            ("v_z", camera.v_z),
        ] {
            if !v.is_finite() {
                return Err(SceneError::NonFiniteCamera(name));
            }
        }
        if !(camera.fov > 0.0 && camera.fov < PI) {
            return Err(SceneError::FieldOfView(camera.fov));
        }
        if !self.light.is_finite() {
            return Err(SceneError::NonFiniteLight);
        }

        for (index, object) in self.spheres.iter().enumerate() {
            let radius = object.sphere.radius;
            if !radius.is_finite() || radius <= 0.0 {
                return Err(SceneError::Radius { index, radius });
            }
            if !object.sphere.center.is_finite() || !object.color.is_finite() {
                return Err(SceneError::NonFiniteSphere(index));
            }
        }

        if self.spheres.is_empty() {
            warn!("Scene has no spheres; the image will be entirely black");
        }

        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::demo()
    }
}
