use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use spheretracer::config::RenderConfig;
use spheretracer::output::save_image;
use spheretracer::Renderer;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("spheretracer - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    let config = match &args.config {
        Some(path) => RenderConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => RenderConfig::default(),
    };
    debug!("Configuration: {:?}", config);

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring the rendering thread pool")?;
    }

    let image = config.resolve_image(&args.image_overrides());
    let output = image.output;

    let scene = config.scene();
    let renderer = Renderer {
        image_width: image.width,
        image_height: image.height,
        shading: config.shading,
        show_progress: !args.no_progress,
    };

    let image = renderer.render(&scene).context("rendering scene")?;
    save_image(&image, &output).with_context(|| format!("writing {}", output.display()))?;

    Ok(())
}
