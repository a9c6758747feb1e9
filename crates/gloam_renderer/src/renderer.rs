//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a hard bounce limit
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction
//! - Parallel bucket rendering on the rayon pool

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use gloam_math::{gen_f32, Interval};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Color, Hittable, Ray};

/// Maximum number of bounces a path may take.
pub const MAX_DEPTH: u32 = 50;

/// What a ray sees when it leaves the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Background {
    /// White at the horizon fading to sky blue overhead
    #[default]
    SkyGradient,
    /// A single flat color
    Solid(Color),
}

impl Background {
    /// Color seen along a ray that escapes the scene.
    pub fn sample(&self, ray: &Ray) -> Color {
        match self {
            Background::SkyGradient => sky_gradient(ray),
            Background::Solid(color) => *color,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Color of rays that miss every object
    pub background: Background,
    /// Side length of the square tiles handed to worker threads
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: MAX_DEPTH,
            background: Background::SkyGradient,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Create a config with the given sample count and default everything else.
    pub fn with_samples(samples_per_pixel: u32) -> Self {
        Self {
            samples_per_pixel,
            ..Default::default()
        }
    }

    /// Copy with zero counts raised to one.
    fn sanitized(&self) -> Self {
        if self.samples_per_pixel == 0 {
            log::warn!("samples_per_pixel is 0, rendering with 1 sample");
        }
        Self {
            samples_per_pixel: self.samples_per_pixel.max(1),
            bucket_size: self.bucket_size.max(1),
            ..self.clone()
        }
    }
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and multiplying in their attenuation.
/// `depth` counts the bounces taken so far, starting from 0.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    // Out of bounces: no light gathered. Checked before the scene query,
    // so a ray at the limit is black even if it would escape.
    if depth >= config.max_depth {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::FORWARD) else {
        return config.background.sample(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => {
            result.attenuation * ray_color(&result.scattered, world, depth + 1, config, rng)
        }
        // Absorbed
        None => Color::ZERO,
    }
}

/// Compute sky gradient background.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - t) * white + t * blue
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Gamma-correct an averaged linear color and clamp it to [0, 1].
pub fn finish_pixel(linear: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(linear_to_gamma(linear.x)),
        Interval::UNIT.clamp(linear_to_gamma(linear.y)),
        Interval::UNIT.clamp(linear_to_gamma(linear.z)),
    )
}

/// Convert a display channel in [0, 1] to 8 bits.
#[inline]
pub fn quantize(channel: f32) -> u8 {
    (255.99 * Interval::UNIT.clamp(channel)) as u8
}

/// Render a single pixel with multi-sampling.
///
/// `y` counts rows from the top of the image. Returns the linear average
/// of all samples.
#[allow(clippy::too_many_arguments)]
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    image_width: u32,
    image_height: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = config.samples_per_pixel.max(1);
    let row = (image_height - 1 - y) as f32;
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let u = (x as f32 + gen_f32(rng)) / image_width as f32;
        let v = (row + gen_f32(rng)) / image_height as f32;
        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(&ray, world, 0, config, rng);
    }

    // Average the samples
    pixel_color / samples as f32
}

/// Number of pixels in a `width` x `height` image, without `u32` overflow.
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Image buffer holding gamma-corrected colors in [0, 1], row 0 at the top.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; pixel_count(width, height)],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Copy a finished bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Get the 8-bit RGB value of the pixel at (x, y).
    pub fn get_rgb8(&self, x: u32, y: u32) -> [u8; 3] {
        let color = self.get(x, y);
        [quantize(color.x), quantize(color.y), quantize(color.z)]
    }

    /// Convert to packed RGB bytes, row-major from the top.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(pixel_count(self.width, self.height) * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&[quantize(color.x), quantize(color.y), quantize(color.z)]);
        }
        bytes
    }

    /// Convert to an `image` crate buffer for saving.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.get_rgb8(x, y))
        })
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are rendered in parallel; every rayon worker draws from its own
/// random generator, and every pixel is written by exactly one bucket.
pub fn render(
    world: &dyn Hittable,
    camera: &Camera,
    image_width: u32,
    image_height: u32,
    config: &RenderConfig,
) -> ImageBuffer {
    let config = config.sanitized();
    let mut image = ImageBuffer::new(image_width, image_height);
    if image_width == 0 || image_height == 0 {
        return image;
    }

    let buckets = generate_buckets(image_width, image_height, config.bucket_size);
    let bucket_count = buckets.len();
    let finished = AtomicUsize::new(0);

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}: {} buckets on {} threads",
        image_width,
        image_height,
        config.samples_per_pixel,
        config.max_depth,
        bucket_count,
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .into_par_iter()
        .map_init(StdRng::from_entropy, |rng, bucket| {
            let pixels = render_bucket(
                &bucket,
                camera,
                world,
                image_width,
                image_height,
                &config,
                rng,
            );
            let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
            log::debug!("Bucket {} done ({}/{})", bucket.index, done, bucket_count);
            BucketResult::new(bucket, pixels)
        })
        .collect();

    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
