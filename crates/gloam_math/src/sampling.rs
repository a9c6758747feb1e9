//! Random sampling helpers.
//!
//! Every function takes the caller's generator explicitly so each render
//! worker can own an independent stream.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Random point strictly inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random point strictly inside the unit disk in the XY plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_f32(rng) * 2.0 - 1.0, gen_f32(rng) * 2.0 - 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let x = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_random_in_unit_sphere() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut mean = Vec3::ZERO;
        for _ in 0..2000 {
            let p = random_in_unit_sphere(&mut rng);
            assert!(p.length_squared() < 1.0);
            mean += p;
        }
        // Symmetric distribution should average near the origin
        assert!((mean / 2000.0).length() < 0.1);
    }

    #[test]
    fn test_random_in_unit_disk() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = random_in_unit_disk(&mut rng);
            assert!(p.length_squared() < 1.0);
            assert_eq!(p.z, 0.0);
        }
    }
}
