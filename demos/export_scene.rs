//! Example: Export a small scene to the JSON document
//!
//! This example demonstrates the full pipeline:
//! 1. Build an in-memory scene with materials and instanced meshes
//! 2. Export it with deduplication enabled
//! 3. Write compact and pretty documents

use scene_json_export::{
    export_scene, to_json, write_to_path, AccessMode, ExportOptions, MemoryMaterial, MemoryMesh,
    MemoryScene, MemorySpecular,
};

fn rock(name: &str, translation: [f64; 3]) -> MemoryMesh {
    MemoryMesh::new(name)
        .with_points(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.5, 1.0, 0.0],
            [0.5, 0.0, 1.0],
        ])
        .with_normals(vec![
            [0.0, 0.0, -1.0],
            [-0.6, 0.4, 0.6],
            [0.6, 0.4, 0.6],
            [0.0, -1.0, 0.0],
        ])
        .with_uvs(vec![0.0, 1.0, 0.5, 0.5], vec![0.0, 0.0, 1.0, 0.5])
        .with_triangle([0, 1, 2])
        .with_triangle([0, 2, 3])
        .with_triangle([1, 3, 2])
        .with_triangle([0, 3, 1])
        .with_material("granite")
        .with_translation(translation)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scene = MemoryScene::new()
        .with_material(MemoryMaterial::new("granite").with_color([0.45, 0.42, 0.4]))
        .with_material(
            MemoryMaterial::new("chrome")
                .with_color([0.8, 0.8, 0.85])
                .with_specular(MemorySpecular {
                    color: [1.0, 1.0, 1.0],
                    reflectivity: 0.9,
                    cosine_power: 60.0,
                }),
        )
        .with_mesh(rock("rock_01", [0.0, 0.0, 0.0]))
        .with_mesh(rock("rock_02", [3.0, 0.0, 1.0]))
        .with_mesh(rock("rock_03", [-2.0, 0.0, 4.0]));

    let output = export_scene(&scene, ExportOptions::all(), AccessMode::All);
    println!(
        "Exported {} geometries and {} instances",
        output.document.geometries.len(),
        output.document.instances.len()
    );

    let compact = to_json(&output.document, false)?;
    println!("Compact document is {} bytes", compact.len());

    write_to_path(&output.document, "scene_export.json".as_ref(), true)?;
    println!("Wrote scene_export.json");

    Ok(())
}
