// Re-export glam for convenience
pub use glam::*;

// Gloam math types
mod interval;
mod ray;
mod sampling;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use sampling::{gen_f32, random_in_unit_disk, random_in_unit_sphere};
pub use vector::{reflect, refract};

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_color_is_componentwise() {
        let attenuation = Color::new(0.5, 0.25, 1.0);
        let incoming = Color::new(0.5, 1.0, 0.5);
        assert_eq!(attenuation * incoming, Color::new(0.25, 0.25, 0.5));
    }
}
