//! Gloam command line renderer.
//!
//! Loads a scene description (or generates the random cover scene), path
//! traces it and writes the result as PNG or PPM.

mod cli;
mod output;

use anyhow::Context;
use clap::Parser;
use gloam_core::{random_cover_scene, SceneDescription};
use gloam_renderer::{build_world, render, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli::Args;

fn init_logger(args: &Args) {
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();
}

fn load_scene(args: &Args) -> anyhow::Result<SceneDescription> {
    if let Some(path) = &args.scene {
        return SceneDescription::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()));
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = random_cover_scene(&mut rng, args.grid);
    log::info!(
        "Generated cover scene: {} spheres, {} materials",
        scene.spheres.len(),
        scene.materials.len()
    );
    Ok(scene)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(&args);

    if args.width == 0 || args.height == 0 {
        anyhow::bail!("Image size must be non-zero, got {}x{}", args.width, args.height);
    }

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let scene = load_scene(&args)?;
    if let Some(path) = &args.save_scene {
        scene
            .save(path)
            .with_context(|| format!("Failed to save scene {}", path.display()))?;
    }

    let aspect = args.width as f32 / args.height as f32;
    let (world, camera) = build_world(&scene, aspect).context("Invalid scene")?;

    let config = RenderConfig {
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        ..Default::default()
    };
    let image = render(&world, &camera, args.width, args.height, &config);

    output::save_image(&image, &args.output)
}
