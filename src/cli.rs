use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use spheretracer::config::ImageSettings;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros.
///
/// Image options given here override the configuration file.
#[derive(Debug, Parser)]
#[command(name = "spheretracer")]
#[command(about = "Ray cast a scene of spheres into a PPM, PNG or EXR image")]
pub struct Args {
    /// TOML configuration file (image size, shading constants, scene)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, help = "Image width in pixels [default: 2560]")]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long, help = "Image height in pixels [default: 1440]")]
    pub height: Option<u32>,

    /// Output file path (.ppm plain text, .png 8-bit, .exr linear HDR)
    #[arg(short, long, help = "Output file path (.ppm, .png or .exr) [default: image.ppm]")]
    pub output: Option<PathBuf>,

    /// Number of rendering threads (defaults to one per CPU core)
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    /// Image options given on the command line, to lay over the config file.
    pub fn image_overrides(&self) -> ImageSettings {
        ImageSettings {
            width: self.width,
            height: self.height,
            output: self.output.clone(),
        }
    }
}
