//! Material record export.
//!
//! Materials are exported once per run, up front, independent of geometry.
//! Specular fields appear only on materials reporting specular attributes;
//! texture-map sub-records only when the corresponding option flag is set
//! and the material has an upstream connection on that slot.

use crate::document::MaterialRecord;
use crate::options::ExportOptions;
use crate::scene::{MaterialQuery, TextureConnection, TextureSlot};
use std::path::Path;

/// Produce one material record per the active option flags.
pub fn export_material(material: &dyn MaterialQuery, options: &ExportOptions) -> MaterialRecord {
    let [r, g, b] = material.diffuse_color();
    let coeff = material.diffuse_coeff();
    let opacity = material.opacity();

    let mut record = MaterialRecord {
        dbg_name: material.name().to_string(),
        blending: "NormalBlending".to_string(),
        color_diffuse: [r * coeff, g * coeff, b * coeff],
        depth_test: true,
        depth_write: true,
        shading: material.shading_model().to_string(),
        opacity,
        transparent: opacity != 1.0,
        vertex_colors: false,
        ..Default::default()
    };

    if let Some(specular) = material.specular() {
        record.color_specular = Some(specular.color);
        record.reflectivity = Some(specular.reflectivity);
        record.specular_coef = Some(specular.cosine_power);

        if options.specular_maps {
            if let Some(connection) = material.texture(TextureSlot::Specular) {
                if let Some(color) = connection.default_color {
                    record.color_specular = Some(color);
                }
                record.map_specular = Some(map_file_name(&connection));
                record.map_specular_repeat = Some(MAP_REPEAT);
                record.map_specular_wrap = Some(map_wrap());
                record.map_specular_anisotropy = Some(MAP_ANISOTROPY);
            }
        }
    }

    if options.bump_maps {
        if let Some(connection) = material.texture(TextureSlot::Bump) {
            record.map_normal_factor = Some(1.0);
            record.map_normal = Some(map_file_name(&connection));
            record.map_normal_repeat = Some(MAP_REPEAT);
            record.map_normal_wrap = Some(map_wrap());
            record.map_normal_anisotropy = Some(MAP_ANISOTROPY);
        }
    }

    if options.diffuse_maps {
        if let Some(connection) = material.texture(TextureSlot::Diffuse) {
            if let Some(color) = connection.default_color {
                record.color_diffuse = color;
            }
            record.map_diffuse = Some(map_file_name(&connection));
            record.map_diffuse_repeat = Some(MAP_REPEAT);
            record.map_diffuse_wrap = Some(map_wrap());
            record.map_diffuse_anisotropy = Some(MAP_ANISOTROPY);
        }
    }

    record
}

const MAP_REPEAT: [u32; 2] = [1, 1];
const MAP_ANISOTROPY: u32 = 4;

fn map_wrap() -> [String; 2] {
    ["repeat".to_string(), "repeat".to_string()]
}

/// Only the file name of the source path is written to the document.
fn map_file_name(connection: &TextureConnection) -> String {
    Path::new(&connection.file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| connection.file_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{MemoryMaterial, MemorySpecular, MemoryTexture};

    fn phong() -> MemoryMaterial {
        MemoryMaterial::new("metal").with_specular(MemorySpecular {
            color: [1.0, 0.9, 0.8],
            reflectivity: 0.5,
            cosine_power: 30.0,
        })
    }

    #[test]
    fn test_base_record_fields() {
        let material = MemoryMaterial::new("stone")
            .with_color([0.5, 0.25, 1.0])
            .with_diffuse_coeff(0.5);
        let record = export_material(&material, &ExportOptions::all());

        assert_eq!(record.dbg_name, "stone");
        assert_eq!(record.blending, "NormalBlending");
        assert_eq!(record.shading, "Lambert");
        assert_eq!(record.color_diffuse, [0.25, 0.125, 0.5]);
        assert!(record.depth_test);
        assert!(record.depth_write);
        assert!(!record.vertex_colors);
        assert!(!record.transparent);
    }

    #[test]
    fn test_transparent_flag_tracks_opacity() {
        let material = MemoryMaterial::new("glass").with_opacity(0.3);
        let record = export_material(&material, &ExportOptions::all());
        assert_eq!(record.opacity, 0.3);
        assert!(record.transparent);
    }

    #[test]
    fn test_lambert_has_no_specular_fields() {
        let record = export_material(&MemoryMaterial::new("stone"), &ExportOptions::all());
        assert!(record.color_specular.is_none());
        assert!(record.reflectivity.is_none());
        assert!(record.specular_coef.is_none());
    }

    #[test]
    fn test_phong_specular_fields() {
        let record = export_material(&phong(), &ExportOptions::all());
        assert_eq!(record.shading, "Phong");
        assert_eq!(record.color_specular, Some([1.0, 0.9, 0.8]));
        assert_eq!(record.reflectivity, Some(0.5));
        assert_eq!(record.specular_coef, Some(30.0));
    }

    #[test]
    fn test_map_requires_flag_and_connection() {
        let texture = MemoryTexture {
            file: "textures/stone_diffuse.png".to_string(),
            default_color: None,
        };
        let with_connection =
            MemoryMaterial::new("stone").with_texture(TextureSlot::Diffuse, texture);

        // Flag on, connection present
        let record = export_material(&with_connection, &ExportOptions::all());
        assert_eq!(record.map_diffuse.as_deref(), Some("stone_diffuse.png"));
        assert_eq!(record.map_diffuse_repeat, Some([1, 1]));
        assert_eq!(
            record.map_diffuse_wrap,
            Some(["repeat".to_string(), "repeat".to_string()])
        );
        assert_eq!(record.map_diffuse_anisotropy, Some(4));

        // Flag off, connection present
        let options = ExportOptions {
            diffuse_maps: false,
            ..ExportOptions::all()
        };
        let record = export_material(&with_connection, &options);
        assert!(record.map_diffuse.is_none());

        // Flag on, no connection
        let record = export_material(&MemoryMaterial::new("bare"), &ExportOptions::all());
        assert!(record.map_diffuse.is_none());
    }

    #[test]
    fn test_map_default_color_overrides_diffuse() {
        let material = MemoryMaterial::new("painted")
            .with_color([0.2, 0.2, 0.2])
            .with_diffuse_coeff(1.0)
            .with_texture(
                TextureSlot::Diffuse,
                MemoryTexture {
                    file: "paint.png".to_string(),
                    default_color: Some([1.0, 0.0, 0.0]),
                },
            );
        let record = export_material(&material, &ExportOptions::all());
        assert_eq!(record.color_diffuse, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_bump_map_sets_normal_factor() {
        let material = phong().with_texture(
            TextureSlot::Bump,
            MemoryTexture {
                file: "bump.png".to_string(),
                default_color: None,
            },
        );
        let record = export_material(&material, &ExportOptions::all());
        assert_eq!(record.map_normal.as_deref(), Some("bump.png"));
        assert_eq!(record.map_normal_factor, Some(1.0));
    }

    #[test]
    fn test_specular_map_only_on_specular_materials() {
        let texture = MemoryTexture {
            file: "spec.png".to_string(),
            default_color: None,
        };
        let lambert =
            MemoryMaterial::new("flat").with_texture(TextureSlot::Specular, texture.clone());
        let record = export_material(&lambert, &ExportOptions::all());
        assert!(record.map_specular.is_none());

        let record = export_material(
            &phong().with_texture(TextureSlot::Specular, texture),
            &ExportOptions::all(),
        );
        assert_eq!(record.map_specular.as_deref(), Some("spec.png"));
    }
}
