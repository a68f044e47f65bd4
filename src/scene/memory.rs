//! Synthetic in-memory scene.
//!
//! [`MemoryScene`] implements the capability traits over plain data, so the
//! exporter can be driven without a host runtime: from unit tests, or from
//! a scene description JSON file via the CLI.

use super::{
    AccessMode, Face, MaterialQuery, MeshQuery, Placement, SceneQuery, SpecularAttrs,
    TextureConnection, TextureSlot,
};
use crate::error::Result;
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A complete scene held in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryScene {
    /// Materials in export order.
    #[serde(default)]
    pub materials: Vec<MemoryMaterial>,
    /// Mesh-bearing nodes in scene order.
    #[serde(default)]
    pub meshes: Vec<MemoryMesh>,
    /// Names of currently selected meshes.
    #[serde(default)]
    pub selection: Vec<String>,
}

impl MemoryScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a scene description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene description from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_material(mut self, material: MemoryMaterial) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_mesh(mut self, mesh: MemoryMesh) -> Self {
        self.meshes.push(mesh);
        self
    }

    pub fn with_selection(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.selection = names.into_iter().map(Into::into).collect();
        self
    }
}

impl SceneQuery for MemoryScene {
    fn meshes(&self, mode: AccessMode) -> Vec<&dyn MeshQuery> {
        self.meshes
            .iter()
            .filter(|mesh| match mode {
                AccessMode::All => true,
                AccessMode::Selection => self.selection.iter().any(|name| *name == mesh.name),
            })
            .map(|mesh| mesh as &dyn MeshQuery)
            .collect()
    }

    fn materials(&self) -> Vec<&dyn MaterialQuery> {
        self.materials
            .iter()
            .map(|material| material as &dyn MaterialQuery)
            .collect()
    }
}

/// One mesh with its attribute pools, topology, and placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryMesh {
    pub name: String,
    /// Object-space points.
    #[serde(default)]
    pub points: Vec<[f64; 3]>,
    /// Normal pool; faces index into it independently of points.
    #[serde(default)]
    pub normals: Vec<[f64; 3]>,
    /// First UV set, U components.
    #[serde(default)]
    pub us: Vec<f64>,
    /// First UV set, V components.
    #[serde(default)]
    pub vs: Vec<f64>,
    /// Faces in native iteration order.
    #[serde(default)]
    pub faces: Vec<Face>,
    /// Whole-mesh material assignment.
    #[serde(default)]
    pub material: Option<String>,
    /// Per-face assignments overriding the whole-mesh one.
    #[serde(default)]
    pub face_materials: HashMap<usize, String>,
    /// World-space translation of the parent transform.
    #[serde(default)]
    pub translation: [f64; 3],
    /// World-space rotation quaternion (x, y, z, w).
    #[serde(default = "identity_quaternion")]
    pub rotation: [f64; 4],
    /// Local scale of the parent transform.
    #[serde(default = "unit_scale")]
    pub scale: [f64; 3],
}

fn identity_quaternion() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn unit_scale() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

impl MemoryMesh {
    /// Create an empty mesh with an identity placement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
            normals: Vec::new(),
            us: Vec::new(),
            vs: Vec::new(),
            faces: Vec::new(),
            material: None,
            face_materials: HashMap::new(),
            translation: [0.0; 3],
            rotation: identity_quaternion(),
            scale: unit_scale(),
        }
    }

    pub fn with_points(mut self, points: Vec<[f64; 3]>) -> Self {
        self.points = points;
        self
    }

    pub fn with_normals(mut self, normals: Vec<[f64; 3]>) -> Self {
        self.normals = normals;
        self
    }

    pub fn with_uvs(mut self, us: Vec<f64>, vs: Vec<f64>) -> Self {
        self.us = us;
        self.vs = vs;
        self
    }

    pub fn with_faces(mut self, faces: Vec<Face>) -> Self {
        self.faces = faces;
        self
    }

    /// Append a triangle whose normal and UV indices follow its vertex indices.
    pub fn with_triangle(mut self, vertices: [u32; 3]) -> Self {
        self.faces.push(Face {
            vertices: vertices.to_vec(),
            normals: vertices.to_vec(),
            uvs: vertices.to_vec(),
        });
        self
    }

    pub fn with_material(mut self, name: impl Into<String>) -> Self {
        self.material = Some(name.into());
        self
    }

    pub fn with_face_material(mut self, face: usize, name: impl Into<String>) -> Self {
        self.face_materials.insert(face, name.into());
        self
    }

    pub fn with_translation(mut self, translation: [f64; 3]) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation(mut self, rotation: [f64; 4]) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: [f64; 3]) -> Self {
        self.scale = scale;
        self
    }
}

impl MeshQuery for MemoryMesh {
    fn name(&self) -> &str {
        &self.name
    }

    fn faces(&self) -> Vec<Face> {
        self.faces.clone()
    }

    fn points(&self) -> Vec<DVec3> {
        self.points.iter().copied().map(DVec3::from_array).collect()
    }

    fn normals(&self) -> Vec<DVec3> {
        self.normals.iter().copied().map(DVec3::from_array).collect()
    }

    fn uvs(&self) -> (Vec<f64>, Vec<f64>) {
        (self.us.clone(), self.vs.clone())
    }

    fn placement(&self) -> Placement {
        Placement {
            translation: DVec3::from_array(self.translation),
            rotation: DQuat::from_xyzw(
                self.rotation[0],
                self.rotation[1],
                self.rotation[2],
                self.rotation[3],
            ),
            scale: DVec3::from_array(self.scale),
        }
    }

    fn face_material(&self, face: usize) -> Option<&str> {
        self.face_materials
            .get(&face)
            .map(String::as_str)
            .or(self.material.as_deref())
    }
}

/// One material's surface attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryMaterial {
    pub name: String,
    /// Shading model name, e.g. "Lambert" or "Phong".
    #[serde(default = "default_shading_model")]
    pub shading_model: String,
    /// Diffuse color before coefficient scaling.
    #[serde(default = "default_color")]
    pub color: [f64; 3],
    #[serde(default = "default_diffuse_coeff")]
    pub diffuse_coeff: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Present only on specular-capable materials.
    #[serde(default)]
    pub specular: Option<MemorySpecular>,
    #[serde(default)]
    pub textures: MemoryTextures,
}

fn default_shading_model() -> String {
    "Lambert".to_string()
}

fn default_color() -> [f64; 3] {
    [0.5, 0.5, 0.5]
}

fn default_diffuse_coeff() -> f64 {
    0.8
}

fn default_opacity() -> f64 {
    1.0
}

/// Specular attributes of a specular-capable material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorySpecular {
    pub color: [f64; 3],
    #[serde(default)]
    pub reflectivity: f64,
    #[serde(default = "default_cosine_power")]
    pub cosine_power: f64,
}

fn default_cosine_power() -> f64 {
    20.0
}

/// Texture connections per slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryTextures {
    #[serde(default)]
    pub diffuse: Option<MemoryTexture>,
    #[serde(default)]
    pub specular: Option<MemoryTexture>,
    #[serde(default)]
    pub bump: Option<MemoryTexture>,
}

/// One texture connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryTexture {
    pub file: String,
    #[serde(default)]
    pub default_color: Option<[f64; 3]>,
}

impl MemoryMaterial {
    /// Create a Lambert material with default attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shading_model: default_shading_model(),
            color: default_color(),
            diffuse_coeff: default_diffuse_coeff(),
            opacity: default_opacity(),
            specular: None,
            textures: MemoryTextures::default(),
        }
    }

    /// Turn this material into a Phong with the given specular attributes.
    pub fn with_specular(mut self, specular: MemorySpecular) -> Self {
        self.shading_model = "Phong".to_string();
        self.specular = Some(specular);
        self
    }

    pub fn with_color(mut self, color: [f64; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_diffuse_coeff(mut self, coeff: f64) -> Self {
        self.diffuse_coeff = coeff;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_texture(mut self, slot: TextureSlot, texture: MemoryTexture) -> Self {
        match slot {
            TextureSlot::Diffuse => self.textures.diffuse = Some(texture),
            TextureSlot::Specular => self.textures.specular = Some(texture),
            TextureSlot::Bump => self.textures.bump = Some(texture),
        }
        self
    }
}

impl MaterialQuery for MemoryMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn shading_model(&self) -> &str {
        &self.shading_model
    }

    fn diffuse_color(&self) -> [f64; 3] {
        self.color
    }

    fn diffuse_coeff(&self) -> f64 {
        self.diffuse_coeff
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn specular(&self) -> Option<SpecularAttrs> {
        self.specular.map(|s| SpecularAttrs {
            color: s.color,
            reflectivity: s.reflectivity,
            cosine_power: s.cosine_power,
        })
    }

    fn texture(&self, slot: TextureSlot) -> Option<TextureConnection> {
        let texture = match slot {
            TextureSlot::Diffuse => self.textures.diffuse.as_ref(),
            TextureSlot::Specular => self.textures.specular.as_ref(),
            TextureSlot::Bump => self.textures.bump.as_ref(),
        }?;
        Some(TextureConnection {
            file_path: texture.file.clone(),
            default_color: texture.default_color,
        })
    }
}
