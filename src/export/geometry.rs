//! Geometry record export.
//!
//! Flattens one mesh's attribute pools into the document's flat arrays.
//! Positions and normals are rounded to [`FLOAT_PRECISION`] decimals to bound
//! floating-point noise and output size; UVs are emitted raw. Index arrays
//! are plain per-face concatenation, with no re-indexing or vertex splitting.

use super::groups::{material_runs, MaterialIndex};
use crate::document::GeometryRecord;
use crate::options::ExportOptions;
use crate::scene::MeshQuery;
use glam::DVec3;

/// Fractional digits kept in rounded coordinates.
pub const FLOAT_PRECISION: u32 = 8;

/// Round a coordinate to [`FLOAT_PRECISION`] fractional digits.
///
/// Ties round half away from zero, `f64::round`'s rule.
pub fn round_coord(value: f64) -> f64 {
    let scale = 10f64.powi(FLOAT_PRECISION as i32);
    (value * scale).round() / scale
}

/// Round each component of a vector.
pub fn round_vec3(v: DVec3) -> [f64; 3] {
    [round_coord(v.x), round_coord(v.y), round_coord(v.z)]
}

/// Produce one geometry record, populated per the active option flags.
///
/// Assumes every face has exactly three vertices; the triangulation gate
/// upstream guarantees it.
pub fn export_geometry(
    mesh: &dyn MeshQuery,
    options: &ExportOptions,
    materials: &MaterialIndex,
) -> GeometryRecord {
    let faces = mesh.faces();
    let mut record = GeometryRecord::default();

    if options.vertices {
        record.position = Some(
            mesh.points()
                .into_iter()
                .flat_map(round_vec3)
                .collect(),
        );
        record.position_indices = Some(
            faces
                .iter()
                .flat_map(|face| face.vertices.iter().copied())
                .collect(),
        );
    }

    if options.normals {
        record.normal = Some(
            mesh.normals()
                .into_iter()
                .flat_map(round_vec3)
                .collect(),
        );
        record.normal_indices = Some(
            faces
                .iter()
                .flat_map(|face| face.normals.iter().copied())
                .collect(),
        );
    }

    if options.uvs {
        let (us, vs) = mesh.uvs();
        record.uv = Some(
            us.iter()
                .zip(vs.iter())
                .flat_map(|(&u, &v)| [u, v])
                .collect(),
        );
        record.uv_indices = Some(
            faces
                .iter()
                .flat_map(|face| face.uvs.iter().copied())
                .collect(),
        );
    }

    if options.groups {
        let face_materials: Vec<i32> = (0..faces.len())
            .map(|face| materials.resolve(mesh.face_material(face)))
            .collect();
        record.groups = Some(material_runs(&face_materials));
    }

    record
}
