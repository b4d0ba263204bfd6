//! Error types.

use std::path::PathBuf;

/// Scene data the renderer refuses to work with.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A sphere radius is zero, negative or not finite.
    #[error("sphere {index} has invalid radius {radius}; radius must be positive and finite")]
    Radius {
        /// Position of the sphere in the scene list
        index: usize,
        /// The rejected radius
        radius: f64,
    },

    /// A sphere center or colour has NaN or infinite components.
    #[error("sphere {0} has a non-finite center or colour")]
    NonFiniteSphere(usize),

    /// The field of view is not strictly between 0 and π.
    #[error("field of view {0} rad is outside (0, π)")]
    FieldOfView(f64),

    /// The named camera vector has NaN or infinite components.
    #[error("camera {0} has non-finite components")]
    NonFiniteCamera(&'static str),

    /// The light position has NaN or infinite components.
    #[error("light position has non-finite components")]
    NonFiniteLight,
}

/// Rendering and image output errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The scene failed validation.
    #[error("invalid scene: {0}")]
    InvalidScene(#[from] SceneError),

    /// Width or height is zero.
    #[error("invalid image size {width}x{height}; both dimensions must be positive")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// The output destination could not be opened or written.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    /// EXR encoding failed.
    #[error("failed to write EXR image: {0}")]
    Exr(#[from] exr::error::Error),

    /// The output path has an extension no writer handles.
    #[error("unsupported output format for {}; use .ppm, .png or .exr", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Result alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
