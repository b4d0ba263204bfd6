//! spheretracer: a recursive ray caster for sphere scenes
//!
//! One primary ray per pixel from a pinhole camera, a single mirror bounce,
//! cosine-weighted surface colour and hard shadows from one point light.
//! Outputs plain-text PPM, PNG and EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vec3;
pub mod interval;
pub mod ray;
pub mod sphere;
pub mod hittable;
pub mod camera;
pub mod scene;
pub mod shading;
pub mod render;
pub mod output;
pub mod config;
pub mod error;

pub use camera::Camera;
pub use error::{RenderError, RenderResult, SceneError};
pub use render::{draw_image, Framebuffer, Renderer};
pub use scene::Scene;
pub use shading::{ShadingParams, ShadowPolicy};
pub use sphere::{ColoredSphere, Sphere};
pub use vec3::{Color, Vec3};
