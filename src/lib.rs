//! # Scene JSON Export
//!
//! A Rust library for exporting triangulated mesh scenes to a compact,
//! versioned JSON document consumable by downstream 3D renderers.
//!
//! ## Overview
//!
//! This library takes a read-only view of a scene (meshes, materials,
//! placements) and produces a single JSON document: repeated geometry is
//! deduplicated into shared definitions, per-face material assignments are
//! grouped into contiguous triangle runs, vertex attributes are flattened
//! into flat numeric arrays with fixed-precision rounding, and every mesh
//! occurrence becomes an instance record referencing its geometry key.
//!
//! ## Quick Start
//!
//! ```ignore
//! use scene_json_export::{export_to_path, AccessMode, ExportOptions, MemoryScene};
//!
//! // Load a scene description (or implement SceneQuery over your own scene graph)
//! let scene = MemoryScene::from_path("scene.json")?;
//!
//! // Export everything, pretty-printed
//! let output = export_to_path(&scene, ExportOptions::all(), AccessMode::All, "out.json")?;
//!
//! for name in &output.skipped {
//!     eprintln!("skipped non-triangulated mesh {name}");
//! }
//! ```
//!
//! ## Library Integration
//!
//! Host scene graphs plug in by implementing the [`SceneQuery`],
//! [`MeshQuery`], and [`MaterialQuery`] capability traits; the exporter
//! never assumes a specific runtime. [`MemoryScene`] is a ready-made
//! implementation over plain data, used by the CLI and the test suite.

pub mod document;
pub mod error;
pub mod export;
pub mod options;
pub mod scene;
pub mod writer;

// Re-export main types for convenience
pub use document::{Document, GeometryRecord, GroupRecord, InstanceRecord, MaterialRecord};
pub use error::{ExportError, Result};
pub use export::{Exporter, ExportOutput, FLOAT_PRECISION};
pub use options::ExportOptions;
pub use scene::{
    AccessMode, Face, MaterialQuery, MemoryMaterial, MemoryMesh, MemoryScene, MemorySpecular,
    MemoryTexture, MeshQuery, Placement, SceneQuery, SpecularAttrs, TextureConnection,
    TextureSlot,
};
pub use writer::{to_json, write_to_path};

use std::path::Path;

/// Export a scene into a document.
pub fn export_scene(
    scene: &dyn SceneQuery,
    options: ExportOptions,
    mode: AccessMode,
) -> ExportOutput {
    Exporter::new(scene, options).export(mode)
}

/// Export a scene and write the document to `path` atomically.
///
/// The serialization profile follows `options.pretty_output`.
pub fn export_to_path<P: AsRef<Path>>(
    scene: &dyn SceneQuery,
    options: ExportOptions,
    mode: AccessMode,
    path: P,
) -> Result<ExportOutput> {
    let pretty = options.pretty_output;
    let output = Exporter::new(scene, options).export(mode);
    writer::write_to_path(&output.document, path.as_ref(), pretty)?;
    Ok(output)
}
