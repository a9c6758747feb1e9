//! Conversion from a scene description to a renderable world.

use std::sync::Arc;

use gloam_core::{MaterialDesc, SceneDescription, SceneResult};

use crate::{Camera, Dielectric, HittableList, Lambertian, Material, Metal, Sphere};

/// Instantiate a material from its description.
pub fn material_from_desc(desc: &MaterialDesc) -> Arc<dyn Material> {
    match *desc {
        MaterialDesc::Lambertian { albedo } => Arc::new(Lambertian::new(albedo)),
        MaterialDesc::Metal { albedo, fuzz } => Arc::new(Metal::new(albedo, fuzz)),
        MaterialDesc::Dielectric { ior } => Arc::new(Dielectric::new(ior)),
    }
}

/// Build the world and camera for a scene.
///
/// Each entry of the material table is instantiated once; spheres that
/// reference the same `MaterialId` share it.
pub fn build_world(scene: &SceneDescription, aspect: f32) -> SceneResult<(HittableList, Camera)> {
    scene.validate()?;

    let materials: Vec<Arc<dyn Material>> =
        scene.materials.iter().map(material_from_desc).collect();

    let mut world = HittableList::new();
    for sphere in &scene.spheres {
        let material = Arc::clone(&materials[sphere.material.0]);
        world.add(Box::new(Sphere::new(sphere.center, sphere.radius, material)));
    }

    let desc = &scene.camera;
    let camera = Camera::new(desc.look_from, desc.look_at, desc.vup, desc.vfov, aspect)
        .with_defocus(desc.aperture, desc.focus_distance());

    log::debug!(
        "Built world: {} spheres sharing {} materials",
        world.len(),
        materials.len()
    );

    Ok((world, camera))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HitRecord, Hittable};
    use gloam_core::{MaterialId, SceneError};
    use gloam_math::{Color, Interval, Ray, Vec3};

    fn material_addr(rec: &HitRecord) -> *const () {
        rec.material as *const _ as *const ()
    }

    #[test]
    fn test_build_world_shares_materials() {
        let mut scene = SceneDescription::new();
        let red = scene.add_material(MaterialDesc::Lambertian {
            albedo: Color::new(0.8, 0.1, 0.1),
        });
        let chrome = scene.add_material(MaterialDesc::Metal {
            albedo: Color::splat(0.9),
            fuzz: 0.0,
        });
        scene.add_sphere(Vec3::new(-2.0, 0.0, -5.0), 1.0, red);
        scene.add_sphere(Vec3::new(2.0, 0.0, -5.0), 1.0, red);
        scene.add_sphere(Vec3::new(0.0, 0.0, -5.0), 0.5, chrome);

        let (world, _camera) = build_world(&scene, 1.0).unwrap();
        assert_eq!(world.len(), 3);

        let hit = |x: f32| {
            let ray = Ray::new(Vec3::new(x, 0.0, 0.0), Vec3::NEG_Z);
            world.hit(&ray, Interval::FORWARD).unwrap()
        };
        let left = hit(-2.0);
        let right = hit(2.0);
        let middle = hit(0.0);

        assert_eq!(material_addr(&left), material_addr(&right));
        assert_ne!(material_addr(&left), material_addr(&middle));
    }

    #[test]
    fn test_build_world_camera() {
        let mut scene = SceneDescription::new();
        let grey = scene.add_material(MaterialDesc::Lambertian {
            albedo: Color::splat(0.5),
        });
        scene.add_sphere(Vec3::ZERO, 1.0, grey);

        let (_world, camera) = build_world(&scene, 2.0).unwrap();

        assert_eq!(camera.origin(), scene.camera.look_from);
        assert_eq!(camera.aspect(), 2.0);
        let center = camera.ray_for(0.5, 0.5).direction().normalize();
        let expected = (scene.camera.look_at - scene.camera.look_from).normalize();
        assert!((center - expected).length() < 1e-5);
    }

    #[test]
    fn test_build_world_rejects_invalid_scene() {
        let mut scene = SceneDescription::new();
        scene.add_sphere(Vec3::ZERO, 1.0, MaterialId(3));

        assert!(matches!(
            build_world(&scene, 1.0),
            Err(SceneError::UnknownMaterial { .. })
        ));
    }
}
