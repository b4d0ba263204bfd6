//! Shading: closest hit, single-bounce reflection and hard shadows.
//!
//! A primary ray that hits a sphere spawns a mirror-reflected ray carrying
//! the surface colour scaled by the cosine between the inverted incident
//! direction and the surface normal. That reflected ray is coloured one level
//! deep by blending in the colour of whatever it hits. Finally a shadow ray
//! toward the light darkens the result for every sphere it crosses.

use serde::Deserialize;

use crate::hittable::{closest_hit, count_occluders};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vec3::Color;

/// How shadow attenuation combines when a shadow ray crosses several spheres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowPolicy {
    /// Attenuate once per occluding sphere, so two occluders give `0.3²`.
    #[default]
    PerOccluder,
    /// Attenuate once if any sphere occludes the light.
    Once,
}

/// Named constants driving intersection and shading.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadingParams {
    /// Minimum accepted hit distance, guards against self-intersection
    pub epsilon: f64,
    /// Colour multiplier applied for shadowed points
    pub shadow_attenuation: f64,
    /// Weight of the reflected ray's own colour when it hits another sphere;
    /// the hit sphere contributes `1 - reflection_blend`
    pub reflection_blend: f64,
    /// Attenuation rule for multiple occluders
    pub shadow_policy: ShadowPolicy,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            shadow_attenuation: 0.3,
            reflection_blend: 0.7,
            shadow_policy: ShadowPolicy::PerOccluder,
        }
    }
}

impl ShadingParams {
    /// Colour seen along a primary ray. Background is black.
    ///
    /// The cosine factor is not clamped: a surface seen from behind its
    /// normal (camera inside a sphere) yields negative channels, which only
    /// quantization clamps away.
    pub fn shade(&self, ray: &Ray, scene: &Scene) -> Color {
        let Some(hit) = closest_hit(ray, &scene.spheres, self.epsilon) else {
            return Color::ZERO;
        };

        let object = &scene.spheres[hit.index];
        let incident = ray.direction;
        let hit_point = ray.at(hit.t);
        let normal = object.sphere.normal_at(hit_point);

        let mut reflected = ray.reflect(hit_point, normal);
        let cos_factor = -(incident * normal) / (incident.norm() * normal.norm());
        reflected.color = object.color * cos_factor;
        self.reflect_color(&mut reflected, scene);

        let shadow_ray = Ray::new(hit_point, scene.light - hit_point);
        let occluders = count_occluders(&shadow_ray, &scene.spheres, self.epsilon);
        self.apply_shadow(reflected.color, occluders)
    }

    /// Blend the colour of the sphere hit by a reflected ray into the ray.
    ///
    /// Recursion stops here: no further reflection and no shadow test.
    /// A reflected ray that escapes the scene keeps its colour.
    pub fn reflect_color(&self, ray: &mut Ray, scene: &Scene) {
        if let Some(hit) = closest_hit(ray, &scene.spheres, self.epsilon) {
            let blend = self.reflection_blend;
            ray.color = blend * ray.color + (1.0 - blend) * scene.spheres[hit.index].color;
        }
    }

    fn apply_shadow(&self, mut color: Color, occluders: usize) -> Color {
        match self.shadow_policy {
            ShadowPolicy::PerOccluder => {
                for _ in 0..occluders {
                    color *= self.shadow_attenuation;
                }
            }
            ShadowPolicy::Once if occluders > 0 => color *= self.shadow_attenuation,
            ShadowPolicy::Once => {}
        }
        color
    }
}
