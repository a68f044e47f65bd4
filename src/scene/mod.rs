//! Read-only scene capability interface.
//!
//! The exporter never talks to a host runtime directly. It consumes these
//! traits, so any scene graph (or a synthetic in-memory scene in tests) can
//! feed the pipeline by implementing them.

pub mod memory;

pub use memory::{
    MemoryMaterial, MemoryMesh, MemoryScene, MemorySpecular, MemoryTexture, MemoryTextures,
};

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Which meshes an export run visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// Every qualifying mesh in the scene.
    All,
    /// Only qualifying meshes in the current selection. Selection semantics
    /// are delegated entirely to the scene adapter.
    Selection,
}

/// One face's topology: per-face-vertex indices into the mesh attribute pools.
///
/// Normal and UV indices may differ from position indices because normals can
/// be split at hard edges and UVs at seams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    /// Vertex (position) indices.
    pub vertices: Vec<u32>,
    /// Per-face-vertex normal indices.
    #[serde(default)]
    pub normals: Vec<u32>,
    /// Per-face-vertex UV indices.
    #[serde(default)]
    pub uvs: Vec<u32>,
}

impl Face {
    /// A triangulated face has exactly three vertices.
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }
}

/// A mesh's placement, read from its parent transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// World-space translation.
    pub translation: DVec3,
    /// World-space rotation.
    pub rotation: DQuat,
    /// Local scale.
    pub scale: DVec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
        }
    }
}

/// Specular attributes of a specular-capable material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecularAttrs {
    /// Specular color (RGB).
    pub color: [f64; 3],
    /// Reflectivity coefficient.
    pub reflectivity: f64,
    /// Specular exponent (cosine power).
    pub cosine_power: f64,
}

/// Texture map slots a material may have connections on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    Diffuse,
    Specular,
    Bump,
}

/// An upstream texture connection on a material attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureConnection {
    /// Source file path; only the file name ends up in the document.
    pub file_path: String,
    /// The connection's default color, if it reports one. Overrides the
    /// material's own diffuse/specular color in the exported record.
    pub default_color: Option<[f64; 3]>,
}

/// Query interface for one mesh shape.
pub trait MeshQuery {
    /// Mesh name (also the source of the dedupe key).
    fn name(&self) -> &str;

    /// Faces in the mesh's native iteration order.
    fn faces(&self) -> Vec<Face>;

    /// All points in object space.
    fn points(&self) -> Vec<DVec3>;

    /// The per-mesh normal pool.
    fn normals(&self) -> Vec<DVec3>;

    /// The first UV set as parallel U and V arrays.
    fn uvs(&self) -> (Vec<f64>, Vec<f64>);

    /// The parent transform's placement.
    fn placement(&self) -> Placement;

    /// Name of the material assigned to the given face, if any. A per-face
    /// assignment overrides a whole-mesh assignment.
    fn face_material(&self, face: usize) -> Option<&str>;
}

/// Query interface for one material.
pub trait MaterialQuery {
    /// Material name, used to resolve per-face material indices.
    fn name(&self) -> &str;

    /// Shading model name, e.g. "Lambert" or "Phong".
    fn shading_model(&self) -> &str;

    /// Diffuse color (RGB), before coefficient scaling.
    fn diffuse_color(&self) -> [f64; 3];

    /// Diffuse coefficient applied to the color on export.
    fn diffuse_coeff(&self) -> f64;

    /// Opacity in [0, 1]; anything below 1 marks the material transparent.
    fn opacity(&self) -> f64;

    /// Specular attributes, for specular-capable shading models only.
    fn specular(&self) -> Option<SpecularAttrs>;

    /// The upstream texture connection on the given slot, if connected.
    fn texture(&self, slot: TextureSlot) -> Option<TextureConnection>;
}

/// Query interface for the scene as a whole.
pub trait SceneQuery {
    /// Mesh-bearing nodes to visit, in scene order.
    fn meshes(&self, mode: AccessMode) -> Vec<&dyn MeshQuery>;

    /// All materials in the scene, in export order. Export order defines the
    /// material index other parts of the document reference.
    fn materials(&self) -> Vec<&dyn MaterialQuery>;
}
