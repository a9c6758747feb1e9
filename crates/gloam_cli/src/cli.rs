use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "gloam")]
#[command(about = "Path traces a scene of spheres to an image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 20)]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = gloam_renderer::MAX_DEPTH)]
    pub max_depth: u32,

    /// Scene description (JSON); renders the random cover scene when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Seed for the random cover scene
    #[arg(long)]
    pub seed: Option<u64>,

    /// Half extent of the cover scene's grid of small spheres
    #[arg(long, default_value_t = gloam_core::COVER_GRID_HALF_EXTENT)]
    pub grid: i32,

    /// Worker threads (0 = one per core)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Output file (.png, or .ppm for plain-text PPM)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Also write the rendered scene description to this JSON file
    #[arg(long)]
    pub save_scene: Option<PathBuf>,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
