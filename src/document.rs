//! Output document records.
//!
//! These structs mirror the JSON wire format exactly; field names and array
//! layouts are a compatibility surface downstream renderers depend on, so
//! serde renames are spelled out rather than inferred. Optional fields are
//! omitted from the output entirely, never emitted as empty arrays.

use indexmap::IndexMap;
use serde::Serialize;

/// Exporter name stamped into document metadata.
pub const EXPORTER_NAME: &str = "scene-json-export";

/// Document format version stamped into metadata.
pub const FORMAT_VERSION: f64 = 0.0;

/// The complete export document.
///
/// Assembled once per run. Field order here is the key order of compact
/// output; the pretty profile re-sorts keys lexicographically.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub metadata: Metadata,
    pub materials: Vec<MaterialRecord>,
    pub instances: Vec<InstanceRecord>,
    /// Geometries by dedupe key, in first-export order.
    pub geometries: IndexMap<String, GeometryRecord>,
}

impl Document {
    /// An empty document carrying only metadata.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            materials: Vec::new(),
            instances: Vec::new(),
            geometries: IndexMap::new(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document provenance.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub exporter: String,
    pub version: f64,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            exporter: EXPORTER_NAME.to_string(),
            version: FORMAT_VERSION,
        }
    }
}

/// One exported material.
///
/// Identified by its position in the document's material array; no name
/// lookup happens at render time. Map sub-records are flattened onto the
/// material with prefixed keys, matching the established wire format.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MaterialRecord {
    #[serde(rename = "DbgName")]
    pub dbg_name: String,
    pub blending: String,
    #[serde(rename = "colorDiffuse")]
    pub color_diffuse: [f64; 3],
    #[serde(rename = "depthTest")]
    pub depth_test: bool,
    #[serde(rename = "depthWrite")]
    pub depth_write: bool,
    pub shading: String,
    pub opacity: f64,
    pub transparent: bool,
    #[serde(rename = "vertexColors")]
    pub vertex_colors: bool,

    // Specular-capable shading models only.
    #[serde(rename = "colorSpecular", skip_serializing_if = "Option::is_none")]
    pub color_specular: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflectivity: Option<f64>,
    #[serde(rename = "specularCoef", skip_serializing_if = "Option::is_none")]
    pub specular_coef: Option<f64>,

    #[serde(rename = "mapDiffuse", skip_serializing_if = "Option::is_none")]
    pub map_diffuse: Option<String>,
    #[serde(rename = "mapDiffuseRepeat", skip_serializing_if = "Option::is_none")]
    pub map_diffuse_repeat: Option<[u32; 2]>,
    #[serde(rename = "mapDiffuseWrap", skip_serializing_if = "Option::is_none")]
    pub map_diffuse_wrap: Option<[String; 2]>,
    #[serde(rename = "mapDiffuseAnisotropy", skip_serializing_if = "Option::is_none")]
    pub map_diffuse_anisotropy: Option<u32>,

    #[serde(rename = "mapSpecular", skip_serializing_if = "Option::is_none")]
    pub map_specular: Option<String>,
    #[serde(rename = "mapSpecularRepeat", skip_serializing_if = "Option::is_none")]
    pub map_specular_repeat: Option<[u32; 2]>,
    #[serde(rename = "mapSpecularWrap", skip_serializing_if = "Option::is_none")]
    pub map_specular_wrap: Option<[String; 2]>,
    #[serde(rename = "mapSpecularAnisotropy", skip_serializing_if = "Option::is_none")]
    pub map_specular_anisotropy: Option<u32>,

    #[serde(rename = "mapNormal", skip_serializing_if = "Option::is_none")]
    pub map_normal: Option<String>,
    #[serde(rename = "mapNormalRepeat", skip_serializing_if = "Option::is_none")]
    pub map_normal_repeat: Option<[u32; 2]>,
    #[serde(rename = "mapNormalWrap", skip_serializing_if = "Option::is_none")]
    pub map_normal_wrap: Option<[String; 2]>,
    #[serde(rename = "mapNormalAnisotropy", skip_serializing_if = "Option::is_none")]
    pub map_normal_anisotropy: Option<u32>,
    #[serde(rename = "mapNormalFactor", skip_serializing_if = "Option::is_none")]
    pub map_normal_factor: Option<f64>,
}

/// One exported geometry, shared by every instance referencing its key.
///
/// Every field is gated by an export option; a disabled option omits both
/// the data array and its index array.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeometryRecord {
    /// Flat positions: [x0, y0, z0, x1, ...], rounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec<f64>>,
    /// Vertex indices, 3 per triangle, in native face order.
    #[serde(rename = "positionIndices", skip_serializing_if = "Option::is_none")]
    pub position_indices: Option<Vec<u32>>,
    /// Flat normals, rounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<Vec<f64>>,
    /// Per-face-vertex normal indices.
    #[serde(rename = "normalIndices", skip_serializing_if = "Option::is_none")]
    pub normal_indices: Option<Vec<u32>>,
    /// Interleaved UVs: [u0, v0, u1, v1, ...].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv: Option<Vec<f64>>,
    /// Per-face-vertex UV indices.
    #[serde(rename = "uvIndices", skip_serializing_if = "Option::is_none")]
    pub uv_indices: Option<Vec<u32>>,
    /// Material run groups, partitioning the triangle index range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupRecord>>,
}

/// A contiguous run of triangle indices sharing one material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    /// Triangle index offset, a multiple of 3.
    pub start: usize,
    /// Run length in indices, a multiple of 3.
    pub count: usize,
    /// Index into the document's material array, or -1 if unresolved.
    #[serde(rename = "materialIndex")]
    pub material_index: i32,
}

/// One placement of a geometry in the scene.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceRecord {
    /// Key of the geometry this instance references.
    pub id: String,
    /// Instance name.
    pub name: String,
    /// World translation, rounded.
    pub position: [f64; 3],
    /// Local scale, unrounded.
    pub scale: [f64; 3],
    /// World rotation quaternion (x, y, z, w), rounded.
    pub quaternion: [f64; 4],
}
