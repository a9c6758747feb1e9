//! Scene description types for Gloam.
//!
//! A scene is plain data: a camera, a table of materials and a list of
//! spheres that index into that table. The renderer turns it into its own
//! intersectable world; nothing here knows how rays are traced.

use std::fs;
use std::path::Path;

use gloam_math::{Color, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {sphere} references unknown material {material}")]
    UnknownMaterial { sphere: usize, material: usize },

    #[error("Scene contains no spheres")]
    NoGeometry,
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Index of a material in [`SceneDescription::materials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub usize);

/// Surface material parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDesc {
    /// Ideal diffuse reflector.
    Lambertian { albedo: Color },

    /// Specular reflector; `fuzz` is the roughness (0 = mirror, 1 = rough).
    Metal { albedo: Color, fuzz: f32 },

    /// Clear refractive material such as glass.
    Dielectric { ior: f32 },
}

/// A sphere placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

/// Camera placement and lens settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Lens diameter; 0 gives a pinhole camera
    pub aperture: f32,
    /// Distance to the plane of perfect focus; defaults to |look_from - look_at|
    pub focus_dist: Option<f32>,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            look_from: Vec3::new(13.0, 2.0, 3.0),
            look_at: Vec3::ZERO,
            vup: Vec3::Y,
            vfov: 20.0,
            aperture: 0.0,
            focus_dist: None,
        }
    }
}

impl CameraDesc {
    /// Focus distance, falling back to the look-at distance.
    pub fn focus_distance(&self) -> f32 {
        self.focus_dist
            .unwrap_or_else(|| (self.look_from - self.look_at).length())
    }
}

/// A complete scene: camera, material table and spheres.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDesc,
    pub materials: Vec<MaterialDesc>,
    pub spheres: Vec<SphereDesc>,
}

impl SceneDescription {
    /// Create an empty scene with the default camera.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material to the table and return its id.
    pub fn add_material(&mut self, material: MaterialDesc) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Add a sphere using a previously added material.
    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: MaterialId) {
        self.spheres.push(SphereDesc {
            center,
            radius,
            material,
        });
    }

    /// Look up a material by id.
    pub fn material(&self, id: MaterialId) -> Option<&MaterialDesc> {
        self.materials.get(id.0)
    }

    /// Check that the scene can be rendered.
    ///
    /// Dangling material references and empty scenes are errors. Degenerate
    /// spheres are only reported; they render as corrupted pixels.
    pub fn validate(&self) -> SceneResult<()> {
        if self.spheres.is_empty() {
            return Err(SceneError::NoGeometry);
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            if self.material(sphere.material).is_none() {
                return Err(SceneError::UnknownMaterial {
                    sphere: index,
                    material: sphere.material.0,
                });
            }
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 || !sphere.center.is_finite() {
                log::warn!(
                    "Sphere {} is degenerate (center {:?}, radius {})",
                    index,
                    sphere.center,
                    sphere.radius
                );
            }
        }

        if self.camera.look_from == self.camera.look_at {
            log::warn!("Camera look_from equals look_at; view direction is undefined");
        }

        Ok(())
    }

    /// Parse and validate a scene from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        let scene: SceneDescription = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let scene = Self::from_json_str(&json)?;

        log::info!(
            "Loaded {} spheres, {} materials from {}",
            scene.spheres.len(),
            scene.materials.len(),
            path.display()
        );

        Ok(scene)
    }

    /// Serialize the scene to pretty-printed JSON.
    pub fn to_json_string(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the scene to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
