//! Gloam Core - renderer-agnostic scene description.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `MaterialDesc`,
//!   `SphereDesc`, `CameraDesc`
//! - **JSON support**: loading and saving scene files
//! - **Procedural scenes**: the random "cover" scene of spheres
//!
//! Materials live in a table owned by the scene; spheres refer to them by
//! `MaterialId`, so any number of spheres can share one material.
//!
//! # Example
//!
//! ```ignore
//! use gloam_core::SceneDescription;
//!
//! let scene = SceneDescription::load("scene.json")?;
//! println!("Loaded {} spheres, {} materials",
//!     scene.spheres.len(),
//!     scene.materials.len());
//! ```

pub mod cover;
pub mod scene;

// Re-export commonly used types
pub use cover::{random_cover_scene, COVER_GRID_HALF_EXTENT};
pub use scene::{
    CameraDesc, MaterialDesc, MaterialId, SceneDescription, SceneError, SceneResult, SphereDesc,
};
