//! Camera for ray generation.

use gloam_math::{random_in_unit_disk, Ray, Vec3};
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Screen coordinates are normalized: (0, 0) is the lower-left corner of the
/// image and (1, 1) the upper-right one.
#[derive(Debug, Clone)]
pub struct Camera {
    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens settings
    vfov: f32,       // Vertical field of view in degrees
    aspect: f32,     // Width / height
    aperture: f32,   // Lens diameter, 0 for a pinhole
    focus_dist: f32, // Distance from camera to plane of perfect focus

    // Cached computed values (kept current by every builder)
    lower_left: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Create a pinhole camera.
    pub fn new(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect: f32) -> Self {
        let mut camera = Self {
            look_from,
            look_at,
            vup,
            vfov,
            aspect,
            aperture: 0.0,
            focus_dist: 1.0,
            lower_left: Vec3::ZERO,
            horizontal: Vec3::ZERO,
            vertical: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            lens_radius: 0.0,
        };
        camera.initialize();
        camera
    }

    /// Set lens settings for depth of field.
    pub fn with_defocus(mut self, aperture: f32, focus_dist: f32) -> Self {
        self.aperture = aperture;
        self.focus_dist = focus_dist;
        self.initialize();
        self
    }

    /// Recompute the basis and viewport from the current settings.
    fn initialize(&mut self) {
        let theta = self.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = self.aspect * half_height;

        // Calculate camera basis vectors
        self.w = (self.look_from - self.look_at).normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        // Viewport lies on the focus plane
        self.lower_left = self.look_from
            - half_width * self.focus_dist * self.u
            - half_height * self.focus_dist * self.v
            - self.focus_dist * self.w;
        self.horizontal = 2.0 * half_width * self.focus_dist * self.u;
        self.vertical = 2.0 * half_height * self.focus_dist * self.v;
        self.lens_radius = self.aperture / 2.0;
    }

    /// Ray through screen point (u, v) from the center of the lens.
    pub fn ray_for(&self, u: f32, v: f32) -> Ray {
        let target = self.lower_left + u * self.horizontal + v * self.vertical;
        Ray::new(self.look_from, target - self.look_from)
    }

    /// Ray through screen point (u, v), jittered across the lens.
    ///
    /// Identical to [`Camera::ray_for`] when the aperture is zero.
    pub fn get_ray(&self, u: f32, v: f32, rng: &mut dyn RngCore) -> Ray {
        if self.lens_radius <= 0.0 {
            return self.ray_for(u, v);
        }

        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;
        let origin = self.look_from + offset;
        let target = self.lower_left + u * self.horizontal + v * self.vertical;

        Ray::new(origin, target - origin)
    }

    /// Camera position.
    pub fn origin(&self) -> Vec3 {
        self.look_from
    }

    /// Aspect ratio the viewport was built for.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }
}
