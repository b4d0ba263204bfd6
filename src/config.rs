//! TOML configuration: image settings, shading constants and an optional scene.
//!
//! Every section is optional. A file without a `[scene]` table renders the
//! built-in demo scene.
//!
//! ```toml
//! [image]
//! width = 640
//! height = 360
//! output = "image.ppm"
//!
//! [shading]
//! shadow_policy = "once"
//!
//! [scene]
//! light = [-60.0, -100.0, 90.0]
//!
//! [scene.camera]
//! position = [0.0, -35.0, 30.0]
//! pitch_degrees = -30.0
//! fov_degrees = 90.0
//!
//! [[scene.spheres]]
//! center = [0.0, -10.0, 100.0]
//! radius = 15.0
//! color = [0.0, 0.6, 0.0]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::camera::Camera;
use crate::scene::Scene;
use crate::shading::ShadingParams;
use crate::sphere::ColoredSphere;
use crate::vec3::{Color, Vec3};

/// Image width used when neither the command line nor the file sets one.
pub const DEFAULT_WIDTH: u32 = 2560;
/// Image height used when neither the command line nor the file sets one.
pub const DEFAULT_HEIGHT: u32 = 1440;
/// Output path used when neither the command line nor the file sets one.
pub const DEFAULT_OUTPUT: &str = "image.ppm";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Resolution and destination
    pub image: ImageSettings,
    /// Shading constants
    pub shading: ShadingParams,
    /// Scene to render; the demo scene when absent
    pub scene: Option<SceneSettings>,
}

/// `[image]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageSettings {
    /// Image width in pixels
    pub width: Option<u32>,
    /// Image height in pixels
    pub height: Option<u32>,
    /// Output file; the extension selects the format
    pub output: Option<PathBuf>,
}

/// `[scene]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneSettings {
    /// Camera placement
    #[serde(default)]
    pub camera: CameraSettings,
    /// Spheres in enumeration order
    #[serde(default)]
    pub spheres: Vec<SphereSettings>,
    /// Point light position
    pub light: Vec3,
}

/// `[scene.camera]` table. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraSettings {
    /// Camera position
    pub position: Vec3,
    /// Rotation of the world axes about x
    pub pitch_degrees: f64,
    /// Horizontal field of view
    pub fov_degrees: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, -35.0, 30.0),
            pitch_degrees: -30.0,
            fov_degrees: 90.0,
        }
    }
}

/// One `[[scene.spheres]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereSettings {
    /// Sphere center
    pub center: Vec3,
    /// Sphere radius
    pub radius: f64,
    /// Surface colour
    pub color: Color,
}

impl From<&CameraSettings> for Camera {
    fn from(settings: &CameraSettings) -> Self {
        Camera::looking_along_pitch(
            settings.position,
            settings.pitch_degrees.to_radians(),
            settings.fov_degrees.to_radians(),
        )
    }
}

impl From<&SceneSettings> for Scene {
    fn from(settings: &SceneSettings) -> Self {
        let spheres = settings
            .spheres
            .iter()
            .map(|s| ColoredSphere::new(s.center, s.radius, s.color))
            .collect();
        Scene::new(Camera::from(&settings.camera), spheres, settings.light)
    }
}

impl RenderConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Reject values that can never render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image.width == Some(0) || self.image.height == Some(0) {
            return Err(ConfigError::Validation(
                "image width and height must be positive".to_string(),
            ));
        }
        let shading = &self.shading;
        if !(shading.epsilon.is_finite() && shading.epsilon >= 0.0) {
            return Err(ConfigError::Validation(format!(
                "shading.epsilon must be finite and non-negative, got {}",
                shading.epsilon
            )));
        }
        if !shading.shadow_attenuation.is_finite() || !shading.reflection_blend.is_finite() {
            return Err(ConfigError::Validation(
                "shading constants must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// The configured scene, or the demo scene.
    pub fn scene(&self) -> Scene {
        self.scene.as_ref().map(Scene::from).unwrap_or_else(Scene::demo)
    }

    /// Final image settings: `overrides` (from the command line) win over the
    /// file, which wins over the built-in defaults.
    pub fn resolve_image(&self, overrides: &ImageSettings) -> ResolvedImage {
        ResolvedImage {
            width: overrides.width.or(self.image.width).unwrap_or(DEFAULT_WIDTH),
            height: overrides.height.or(self.image.height).unwrap_or(DEFAULT_HEIGHT),
            output: overrides
                .output
                .clone()
                .or_else(|| self.image.output.clone())
                .unwrap_or_else(|| DEFAULT_OUTPUT.into()),
        }
    }
}

/// Image settings with every value filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Output file
    pub output: PathBuf,
}

impl std::str::FromStr for RenderConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: RenderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file does not exist.
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// The file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but holds unusable values.
    #[error("Configuration validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::ShadowPolicy;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: RenderConfig = "".parse().unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.shading, ShadingParams::default());
        assert_eq!(config.scene(), Scene::demo());
    }

    #[test]
    fn test_full_config() {
        let config: RenderConfig = r#"
            [image]
            width = 320
            height = 200
            output = "out.png"

            [shading]
            epsilon = 1e-5
            shadow_attenuation = 0.5
            reflection_blend = 0.6
            shadow_policy = "once"

            [scene]
            light = [1.0, 2.0, 3.0]

            [scene.camera]
            position = [0.0, 0.0, -5.0]
            pitch_degrees = 0.0
            fov_degrees = 60.0

            [[scene.spheres]]
            center = [0.0, 0.0, 10.0]
            radius = 2.0
            color = [1.0, 0.0, 0.0]

            [[scene.spheres]]
            center = [3.0, 0.0, 12.0]
            radius = 1
            color = [0, 0, 1]
        "#
        .parse()
        .unwrap();

        assert_eq!(config.image.width, Some(320));
        assert_eq!(config.image.height, Some(200));
        assert_eq!(config.image.output, Some(PathBuf::from("out.png")));
        assert_eq!(config.shading.shadow_policy, ShadowPolicy::Once);
        assert_eq!(config.shading.reflection_blend, 0.6);

        let scene = config.scene();
        assert_eq!(scene.light, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.camera.position, Vec3::new(0.0, 0.0, -5.0));
        assert!((scene.camera.fov - 60f64.to_radians()).abs() < 1e-15);
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[1].sphere.radius, 1.0);
        assert_eq!(scene.spheres[1].color, Color::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_partial_shading_keeps_other_defaults() {
        let config: RenderConfig = "[shading]\nshadow_attenuation = 0.25\n".parse().unwrap();
        assert_eq!(config.shading.shadow_attenuation, 0.25);
        assert_eq!(config.shading.epsilon, 1e-6);
        assert_eq!(config.shading.reflection_blend, 0.7);
    }

    #[test]
    fn test_scene_camera_defaults() {
        let config: RenderConfig = "[scene]\nlight = [0.0, 0.0, 0.0]\n".parse().unwrap();
        let scene = config.scene();
        assert!(scene.spheres.is_empty());

        let expected = Camera::default();
        assert_eq!(scene.camera.position, expected.position);
        assert!((scene.camera.v_z - expected.v_z).norm() < 1e-12);
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let result = "[image]\ndepth = 3\n".parse::<RenderConfig>();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let result = "[image]\nwidth = 0\n".parse::<RenderConfig>();
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_bad_shading_constants_are_rejected() {
        for content in [
            "[shading]\nepsilon = -1.0\n",
            "[shading]\nepsilon = inf\n",
            "[shading]\nepsilon = nan\n",
            "[shading]\nshadow_attenuation = nan\n",
            "[shading]\nreflection_blend = -inf\n",
        ] {
            let result = content.parse::<RenderConfig>();
            assert!(
                matches!(result, Err(ConfigError::Validation(_))),
                "{content:?} gave {result:?}"
            );
        }

        let config: RenderConfig = "[shading]\nepsilon = 0.0\n".parse().unwrap();
        assert_eq!(config.shading.epsilon, 0.0);
    }

    #[test]
    fn test_resolve_image_precedence() {
        let config: RenderConfig = "[image]\nwidth = 320\noutput = \"file.png\"\n"
            .parse()
            .unwrap();

        let resolved = config.resolve_image(&ImageSettings::default());
        assert_eq!(
            resolved,
            ResolvedImage {
                width: 320,
                height: DEFAULT_HEIGHT,
                output: PathBuf::from("file.png"),
            }
        );

        let overrides = ImageSettings {
            width: Some(64),
            height: Some(48),
            output: Some(PathBuf::from("cli.ppm")),
        };
        let resolved = config.resolve_image(&overrides);
        assert_eq!(resolved.width, 64);
        assert_eq!(resolved.height, 48);
        assert_eq!(resolved.output, PathBuf::from("cli.ppm"));

        let resolved = RenderConfig::default().resolve_image(&ImageSettings::default());
        assert_eq!(resolved.width, DEFAULT_WIDTH);
        assert_eq!(resolved.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_load_missing_config() {
        let result = RenderConfig::from_file("/nonexistent/spheretracer.toml");
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[image]\nwidth = 64\nheight = 48\n").unwrap();

        let config = RenderConfig::from_file(&path).unwrap();
        assert_eq!(config.image.width, Some(64));
        assert_eq!(config.image.height, Some(48));
        assert_eq!(config.image.output, None);
    }
}
