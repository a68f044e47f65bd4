//! Geometry dedup resolution.
//!
//! The naming convention `baseName_instanceSuffix` signals repeated
//! placements of one base geometry: `rock_01` and `rock_02` share geometry
//! `rock`. The resolver derives the geometry key from the mesh name and
//! tracks which keys have already been exported this run.

use log::info;
use std::collections::HashSet;

/// How one mesh occurrence maps onto the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Key of the geometry this occurrence references.
    pub geometry_key: String,
    /// Name stored on the instance record.
    pub instance_name: String,
    /// True when this occurrence must export the geometry; false when the
    /// key was already exported and only an instance record is produced.
    pub needs_geometry: bool,
}

/// Derives geometry keys and tracks seen keys for one export run.
#[derive(Debug)]
pub struct DedupeResolver {
    enabled: bool,
    seen: HashSet<String>,
}

impl DedupeResolver {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            seen: HashSet::new(),
        }
    }

    /// Resolve one mesh occurrence.
    ///
    /// With dedupe enabled and at least one underscore in the name, the key
    /// is the part before the **last** underscore and the instance name the
    /// part after it; otherwise both are the full mesh name.
    pub fn resolve(&mut self, mesh_name: &str) -> Resolution {
        let (geometry_key, instance_name) = match mesh_name.rfind('_') {
            Some(split) if self.enabled => (
                mesh_name[..split].to_string(),
                mesh_name[split + 1..].to_string(),
            ),
            _ => (mesh_name.to_string(), mesh_name.to_string()),
        };

        let needs_geometry = self.seen.insert(geometry_key.clone());
        if !needs_geometry {
            info!("Repeating instance {mesh_name}");
        }

        Resolution {
            geometry_key,
            instance_name,
            needs_geometry,
        }
    }
}
