//! Gloam Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for scenes made of spheres with diffuse,
//! metallic and dielectric materials. Every pixel averages many jittered
//! camera rays; each ray bounces through the scene until it escapes to the
//! sky, is absorbed, or runs out of depth.

mod bucket;
mod camera;
mod hittable;
mod material;
mod renderer;
mod sphere;
mod world;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{
    finish_pixel, linear_to_gamma, quantize, ray_color, render, render_pixel, Background,
    ImageBuffer, RenderConfig, MAX_DEPTH,
};
pub use sphere::Sphere;
pub use world::{build_world, material_from_desc};

/// Re-export Vec3 and common math types from gloam_math
pub use gloam_math::{Color, Interval, Ray, Vec3};
