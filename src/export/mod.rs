//! The export run.
//!
//! One [`Exporter`] invocation is a single sequential pass over the scene:
//! non-triangulated meshes are filtered out first, materials (when enabled)
//! are exported up front so the name→index lookup is complete and
//! order-stable, then each surviving mesh resolves its dedupe key, exports
//! its geometry on first occurrence, and always produces an instance record.

pub mod dedupe;
pub mod geometry;
pub mod groups;
pub mod instance;
pub mod material;

pub use geometry::{export_geometry, FLOAT_PRECISION};
pub use groups::{material_runs, MaterialIndex};
pub use instance::build_instance;
pub use material::export_material;

use crate::document::Document;
use crate::options::ExportOptions;
use crate::scene::{AccessMode, MeshQuery, SceneQuery};
use dedupe::DedupeResolver;
use log::{debug, info, warn};

/// Outcome of one export run.
#[derive(Debug)]
pub struct ExportOutput {
    /// The assembled document.
    pub document: Document,
    /// Names of meshes skipped because they are not triangulated.
    pub skipped: Vec<String>,
}

/// Runs the scene-to-document transformation.
pub struct Exporter<'a> {
    scene: &'a dyn SceneQuery,
    options: ExportOptions,
}

impl<'a> Exporter<'a> {
    pub fn new(scene: &'a dyn SceneQuery, options: ExportOptions) -> Self {
        Self { scene, options }
    }

    /// Export the scene into a document.
    ///
    /// Per-mesh defects are recovered (skipped and reported); this operation
    /// itself cannot fail. Serialization and file output are separate steps
    /// (see [`crate::writer`]).
    pub fn export(&self, mode: AccessMode) -> ExportOutput {
        let mut document = Document::new();
        let mut skipped = Vec::new();

        match mode {
            AccessMode::All => info!("Export all..."),
            AccessMode::Selection => info!("Export selection..."),
        }

        let meshes: Vec<&dyn MeshQuery> = self
            .scene
            .meshes(mode)
            .into_iter()
            .filter(|mesh| {
                let triangulated = mesh.faces().iter().all(|face| face.is_triangle());
                if !triangulated {
                    warn!("Skipping {} since it is not triangulated", mesh.name());
                    skipped.push(mesh.name().to_string());
                }
                triangulated
            })
            .collect();
        info!("Exporting {} meshes", meshes.len());

        // Materials first: geometry grouping needs the complete lookup.
        let material_index = if self.options.materials {
            info!("Exporting all materials...");
            document.materials = self
                .scene
                .materials()
                .into_iter()
                .map(|material| export_material(material, &self.options))
                .collect();
            MaterialIndex::from_records(&document.materials)
        } else {
            MaterialIndex::empty()
        };

        let mut resolver = DedupeResolver::new(self.options.dedupe);
        for mesh in meshes {
            let resolution = resolver.resolve(mesh.name());
            if resolution.needs_geometry {
                debug!("Exporting geometry {}", mesh.name());
                document.geometries.insert(
                    resolution.geometry_key.clone(),
                    export_geometry(mesh, &self.options, &material_index),
                );
            }
            document.instances.push(build_instance(
                mesh,
                resolution.geometry_key,
                resolution.instance_name,
            ));
        }

        ExportOutput { document, skipped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Face, MemoryMaterial, MemoryMesh, MemoryScene};

    fn rock(name: &str) -> MemoryMesh {
        MemoryMesh::new(name)
            .with_points(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]])
            .with_normals(vec![[0.0, 1.0, 0.0]])
            .with_uvs(vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0])
            .with_triangle([0, 1, 2])
    }

    fn quad(name: &str) -> MemoryMesh {
        MemoryMesh::new(name)
            .with_points(vec![[0.0; 3]; 4])
            .with_faces(vec![Face {
                vertices: vec![0, 1, 2, 3],
                normals: vec![0, 0, 0, 0],
                uvs: vec![0, 1, 2, 3],
            }])
    }

    #[test]
    fn test_dedupe_idempotence() {
        let scene = MemoryScene::new()
            .with_mesh(rock("rock_a"))
            .with_mesh(rock("rock_b"))
            .with_mesh(rock("rock_c"));

        let output = Exporter::new(&scene, ExportOptions::all()).export(AccessMode::All);
        let document = output.document;

        assert_eq!(document.geometries.len(), 1);
        assert!(document.geometries.contains_key("rock"));
        assert_eq!(document.instances.len(), 3);
        for instance in &document.instances {
            assert_eq!(instance.id, "rock");
        }
        let names: Vec<&str> = document.instances.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_dedupe_disabled_keeps_distinct_geometries() {
        let scene = MemoryScene::new()
            .with_mesh(rock("rock_a"))
            .with_mesh(rock("rock_b"))
            .with_mesh(rock("rock_c"));

        let options = ExportOptions {
            dedupe: false,
            ..ExportOptions::all()
        };
        let document = Exporter::new(&scene, options).export(AccessMode::All).document;

        assert_eq!(document.geometries.len(), 3);
        assert_eq!(document.instances.len(), 3);
        for instance in &document.instances {
            assert!(document.geometries.contains_key(&instance.id));
            assert_eq!(instance.id, instance.name);
        }
    }

    #[test]
    fn test_triangulation_gate() {
        let scene = MemoryScene::new()
            .with_mesh(rock("valid"))
            .with_mesh(quad("billboard"));

        let output = Exporter::new(&scene, ExportOptions::all()).export(AccessMode::All);

        assert_eq!(output.skipped, ["billboard"]);
        assert!(!output.document.geometries.contains_key("billboard"));
        assert!(output
            .document
            .instances
            .iter()
            .all(|instance| instance.name != "billboard"));
        // The sibling mesh still exports normally
        assert!(output.document.geometries.contains_key("valid"));
        assert_eq!(output.document.instances.len(), 1);
    }

    #[test]
    fn test_selection_mode_exports_only_selected() {
        let scene = MemoryScene::new()
            .with_mesh(rock("a"))
            .with_mesh(rock("b"))
            .with_selection(["a"]);

        let document = Exporter::new(&scene, ExportOptions::all())
            .export(AccessMode::Selection)
            .document;

        assert_eq!(document.geometries.len(), 1);
        assert!(document.geometries.contains_key("a"));
        assert_eq!(document.instances.len(), 1);
    }

    #[test]
    fn test_materials_exported_up_front_in_order() {
        let scene = MemoryScene::new()
            .with_material(MemoryMaterial::new("first"))
            .with_material(MemoryMaterial::new("second"))
            .with_mesh(rock("m").with_material("second"));

        let document = Exporter::new(&scene, ExportOptions::all())
            .export(AccessMode::All)
            .document;

        assert_eq!(document.materials.len(), 2);
        assert_eq!(document.materials[0].dbg_name, "first");
        assert_eq!(document.materials[1].dbg_name, "second");

        let groups = document.geometries["m"].groups.as_ref().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].material_index, 1);
    }

    #[test]
    fn test_materials_disabled_yields_unresolved_groups() {
        let scene = MemoryScene::new()
            .with_material(MemoryMaterial::new("stone"))
            .with_mesh(rock("m").with_material("stone"));

        let options = ExportOptions {
            materials: false,
            ..ExportOptions::all()
        };
        let document = Exporter::new(&scene, options).export(AccessMode::All).document;

        assert!(document.materials.is_empty());
        let groups = document.geometries["m"].groups.as_ref().unwrap();
        assert_eq!(groups[0].material_index, -1);
    }

    #[test]
    fn test_single_material_mesh_fast_path() {
        let mesh = rock("m")
            .with_triangle([0, 1, 2])
            .with_triangle([0, 1, 2])
            .with_material("stone");
        let scene = MemoryScene::new()
            .with_material(MemoryMaterial::new("ignored"))
            .with_material(MemoryMaterial::new("stone"))
            .with_mesh(mesh);

        let document = Exporter::new(&scene, ExportOptions::all())
            .export(AccessMode::All)
            .document;

        let groups = document.geometries["m"].groups.as_ref().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].start, 0);
        assert_eq!(groups[0].count, 9);
        assert_eq!(groups[0].material_index, 1);
    }

    #[test]
    fn test_empty_scene_exports_empty_document() {
        let scene = MemoryScene::new();
        let output = Exporter::new(&scene, ExportOptions::all()).export(AccessMode::All);

        assert!(output.document.geometries.is_empty());
        assert!(output.document.instances.is_empty());
        assert!(output.document.materials.is_empty());
        assert!(output.skipped.is_empty());
    }
}
