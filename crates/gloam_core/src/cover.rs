//! The random "cover" scene: a field of small spheres around three large ones.

use gloam_math::{gen_f32, Color, Vec3};
use rand::RngCore;

use crate::scene::{MaterialDesc, SceneDescription};

/// Half the side length of the grid of small spheres in the classic layout.
pub const COVER_GRID_HALF_EXTENT: i32 = 11;

const SMALL_RADIUS: f32 = 0.2;

// No small sphere lands within 0.9 of this point, next to the metal sphere
const KEEP_CLEAR: Vec3 = Vec3::new(4.0, 0.22, 0.0);

/// Build the cover scene.
///
/// Small spheres are placed on a jittered grid spanning
/// `-grid_half_extent..grid_half_extent` in X and Z. Diffuse and metal ones
/// get their own material, glass ones share one. The ground and the three
/// feature spheres are fixed.
pub fn random_cover_scene(rng: &mut dyn RngCore, grid_half_extent: i32) -> SceneDescription {
    let mut scene = SceneDescription::new();

    let ground = scene.add_material(MaterialDesc::Lambertian {
        albedo: Color::splat(0.5),
    });
    scene.add_sphere(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground);

    let small_glass = scene.add_material(MaterialDesc::Dielectric { ior: 1.5 });

    for a in -grid_half_extent..grid_half_extent {
        for b in -grid_half_extent..grid_half_extent {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                SMALL_RADIUS,
                b as f32 + 0.9 * gen_f32(rng),
            );

            if (center - KEEP_CLEAR).length() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                // Diffuse
                let albedo = Color::new(
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                );
                scene.add_material(MaterialDesc::Lambertian { albedo })
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = Color::new(
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                    0.5 * (1.0 + gen_f32(rng)),
                );
                let fuzz = 0.5 * gen_f32(rng);
                scene.add_material(MaterialDesc::Metal { albedo, fuzz })
            } else {
                small_glass
            };

            scene.add_sphere(center, SMALL_RADIUS, material);
        }
    }

    let glass = scene.add_material(MaterialDesc::Dielectric { ior: 1.5 });
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, glass);

    let brown = scene.add_material(MaterialDesc::Lambertian {
        albedo: Color::new(0.4, 0.2, 0.1),
    });
    scene.add_sphere(Vec3::new(-4.0, 1.0, 0.0), 1.0, brown);

    let mirror = scene.add_material(MaterialDesc::Metal {
        albedo: Color::new(0.7, 0.6, 0.5),
        fuzz: 0.0,
    });
    scene.add_sphere(Vec3::new(4.0, 1.0, 0.0), 1.0, mirror);

    scene
}
