//! Scene JSON Export CLI
//!
//! Export scene description files to the renderer-facing JSON document.

use clap::{Parser, Subcommand};
use scene_json_export::{export_to_path, AccessMode, ExportOptions, MemoryScene};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scene-json-export")]
#[command(author, version, about = "Export mesh scenes to a compact JSON document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a scene description to a document
    Export {
        /// Input scene description JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Output document path
        #[arg(short, long)]
        output: PathBuf,

        /// Export only the scene's current selection
        #[arg(long)]
        selection: bool,

        /// Legacy host option string (substring membership enables flags);
        /// overrides the individual flags below
        #[arg(long)]
        legacy_options: Option<String>,

        /// Skip vertex positions
        #[arg(long)]
        no_vertices: bool,

        /// Skip normals
        #[arg(long)]
        no_normals: bool,

        /// Skip UV coordinates
        #[arg(long)]
        no_uvs: bool,

        /// Skip material run groups
        #[arg(long)]
        no_groups: bool,

        /// Skip materials
        #[arg(long)]
        no_materials: bool,

        /// Disable geometry deduplication by naming convention
        #[arg(long)]
        no_dedupe: bool,

        /// Skip diffuse texture map records
        #[arg(long)]
        no_diffuse_maps: bool,

        /// Skip specular texture map records
        #[arg(long)]
        no_specular_maps: bool,

        /// Skip bump texture map records
        #[arg(long)]
        no_bump_maps: bool,

        /// Pretty-print the document (sorted keys, 4-space indent)
        #[arg(long)]
        pretty: bool,
    },

    /// Show information about a scene description
    Info {
        /// Input scene description JSON file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            selection,
            legacy_options,
            no_vertices,
            no_normals,
            no_uvs,
            no_groups,
            no_materials,
            no_dedupe,
            no_diffuse_maps,
            no_specular_maps,
            no_bump_maps,
            pretty,
        } => {
            let options = match legacy_options {
                Some(legacy) => ExportOptions::from_option_string(&legacy),
                None => ExportOptions {
                    vertices: !no_vertices,
                    normals: !no_normals,
                    uvs: !no_uvs,
                    groups: !no_groups,
                    materials: !no_materials,
                    dedupe: !no_dedupe,
                    diffuse_maps: !no_diffuse_maps,
                    specular_maps: !no_specular_maps,
                    bump_maps: !no_bump_maps,
                    pretty_output: pretty,
                },
            };
            let mode = if selection {
                AccessMode::Selection
            } else {
                AccessMode::All
            };

            let scene = MemoryScene::from_path(&input)?;
            let result = export_to_path(&scene, options, mode, &output)?;

            println!(
                "Exported {} geometries, {} instances, {} materials to {}",
                result.document.geometries.len(),
                result.document.instances.len(),
                result.document.materials.len(),
                output.display()
            );
            if !result.skipped.is_empty() {
                println!(
                    "Skipped {} non-triangulated meshes: {}",
                    result.skipped.len(),
                    result.skipped.join(", ")
                );
            }
        }
        Commands::Info { input } => {
            show_scene_info(&input)?;
        }
    }

    Ok(())
}

fn show_scene_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let scene = MemoryScene::from_path(input)?;

    println!("Scene: {}", input.display());
    println!("  Materials: {}", scene.materials.len());
    for material in &scene.materials {
        println!("    {} ({})", material.name, material.shading_model);
    }

    println!("  Meshes: {}", scene.meshes.len());
    for mesh in &scene.meshes {
        let triangulated = mesh.faces.iter().all(|face| face.is_triangle());
        println!(
            "    {}: {} points, {} faces{}",
            mesh.name,
            mesh.points.len(),
            mesh.faces.len(),
            if triangulated { "" } else { " (NOT TRIANGULATED)" }
        );
    }

    if !scene.selection.is_empty() {
        println!("  Selection: {}", scene.selection.join(", "));
    }

    Ok(())
}
