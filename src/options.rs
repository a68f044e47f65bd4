//! Export options.
//!
//! The host passes a single free-form option string; flags are enabled by
//! substring membership. That legacy contract is isolated here; the rest of
//! the crate only ever sees the typed [`ExportOptions`] struct.

/// Boolean toggles controlling which parts of the scene are written.
///
/// Constructed once per export run and immutable afterwards. Each attribute
/// flag gates both the data array and its index array; a disabled flag omits
/// the keys from the output entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Emit vertex positions and position indices.
    pub vertices: bool,
    /// Emit normals and normal indices.
    pub normals: bool,
    /// Emit per-material triangle run groups.
    pub groups: bool,
    /// Emit UV coordinates and UV indices.
    pub uvs: bool,
    /// Share geometry between meshes named `base_suffix`.
    pub dedupe: bool,
    /// Export materials (and resolve per-face material indices).
    pub materials: bool,
    /// Emit diffuse texture map records.
    pub diffuse_maps: bool,
    /// Emit specular texture map records.
    pub specular_maps: bool,
    /// Emit bump (normal) texture map records.
    pub bump_maps: bool,
    /// Pretty-print the document (sorted keys, 4-space indent).
    pub pretty_output: bool,
}

impl ExportOptions {
    /// All flags enabled.
    pub fn all() -> Self {
        Self {
            vertices: true,
            normals: true,
            groups: true,
            uvs: true,
            dedupe: true,
            materials: true,
            diffuse_maps: true,
            specular_maps: true,
            bump_maps: true,
            pretty_output: true,
        }
    }

    /// Parse the legacy host option string.
    ///
    /// A flag is enabled when its name appears anywhere in the string;
    /// order does not matter and unrecognized content is ignored. The host's
    /// default option string is `"0"`, which enables nothing.
    pub fn from_option_string(options: &str) -> Self {
        Self {
            vertices: options.contains("vertices"),
            normals: options.contains("normals"),
            groups: options.contains("groups"),
            uvs: options.contains("uvs"),
            dedupe: options.contains("dedupe"),
            materials: options.contains("materials"),
            diffuse_maps: options.contains("diffuseMaps"),
            specular_maps: options.contains("specularMaps"),
            bump_maps: options.contains("bumpMaps"),
            pretty_output: options.contains("prettyOutput"),
        }
    }
}
