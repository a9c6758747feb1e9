//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use gloam_math::{Interval, Ray, Vec3};

/// A sphere primitive.
///
/// The material is shared: any number of spheres may hold the same handle.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    fn record(&self, ray: &Ray, t: f32) -> HitRecord<'_> {
        let p = ray.at(t);
        HitRecord {
            t,
            p,
            normal: (p - self.center) / self.radius,
            material: self.material.as_ref(),
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root first
        let near = (-b - sqrtd) / a;
        if ray_t.surrounds(near) {
            return Some(self.record(ray, near));
        }

        let far = (-b + sqrtd) / a;
        if ray_t.surrounds(far) {
            return Some(self.record(ray, far));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Arc::new(Lambertian::new(Vec3::splat(0.5))))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Vec3::new(0.5, 0.5, 0.5))),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();

        assert!((rec.t - 0.5).abs() < 0.001); // Should hit at t=0.5
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere();

        // Ray passing well above the sphere
        let ray = Ray::new(Vec3::new(0.0, 3.0, -5.0), Vec3::Z);
        assert!(sphere.hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_sphere_diameter_hit() {
        let sphere = unit_sphere();

        // Along the z axis through the center: roots at t = 4 and t = 6
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();

        assert_eq!(rec.t, 4.0);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, -1.0));
        assert!((rec.normal.length() - 1.0).abs() < 1e-6);
        // Normal is parallel to the hit point for a sphere at the origin
        assert!(rec.normal.cross(rec.p).length() < 1e-6);
        assert!(rec.normal.dot(rec.p) > 0.0);
    }

    #[test]
    fn test_sphere_scaled_direction() {
        let sphere = unit_sphere();

        // t is measured in units of the (non-normalized) direction
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 2.0));
        let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();

        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_sphere_far_root_from_inside() {
        let sphere = unit_sphere();

        // Starting at the center, only the far root is ahead of the ray
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();

        assert_eq!(rec.t, 1.0);
        // The normal keeps pointing outward, along the ray
        assert!(rec.normal.dot(ray.direction()) > 0.0);
    }

    #[test]
    fn test_sphere_tangent_is_miss() {
        let sphere = unit_sphere();

        // Grazes the sphere at (0, 1, 0): discriminant is exactly zero
        let ray = Ray::new(Vec3::new(0.0, 1.0, -5.0), Vec3::Z);
        assert!(sphere.hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_sphere_interval_is_open() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);

        // t_max equal to the near root excludes it; the far root is out of range too
        assert!(sphere.hit(&ray, Interval::new(0.001, 4.0)).is_none());
        // t_min equal to the near root skips to the far root
        let rec = sphere.hit(&ray, Interval::new(4.0, 100.0)).unwrap();
        assert_eq!(rec.t, 6.0);
    }
}
