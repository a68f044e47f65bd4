//! Per-material triangle run grouping.
//!
//! Faces are scanned in native iteration order and maximal runs of the same
//! material index become one group each. No sorting or reordering happens:
//! group quality depends on same-material faces being contiguous in the
//! source face order, and consumers rely on group order matching face
//! traversal order.

use crate::document::{GroupRecord, MaterialRecord};
use std::collections::HashMap;

/// Name→index lookup over the exported material sequence.
///
/// Built exactly once per run, after materials are exported and before any
/// geometry export begins. An empty lookup (materials disabled, or none in
/// the scene) resolves everything to -1.
#[derive(Debug, Default)]
pub struct MaterialIndex {
    by_name: HashMap<String, i32>,
}

impl MaterialIndex {
    /// Build the lookup from the exported material sequence. Export order
    /// defines the index.
    pub fn from_records(materials: &[MaterialRecord]) -> Self {
        Self {
            by_name: materials
                .iter()
                .enumerate()
                .map(|(index, material)| (material.dbg_name.clone(), index as i32))
                .collect(),
        }
    }

    /// An empty lookup that resolves every assignment to -1.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Resolve a material name to its export-order index, or -1.
    pub fn resolve(&self, name: Option<&str>) -> i32 {
        name.and_then(|name| self.by_name.get(name).copied()).unwrap_or(-1)
    }
}

/// Partition a per-face material index sequence into contiguous runs.
///
/// Output groups cover exactly `[0, 3 * face_count)` in face order; start and
/// count are triangle-index offsets (multiples of 3). An empty input yields
/// no groups.
pub fn material_runs(face_materials: &[i32]) -> Vec<GroupRecord> {
    let Some(&first) = face_materials.first() else {
        return Vec::new();
    };

    // Whole mesh on one material
    if face_materials.iter().all(|&id| id == first) {
        return vec![GroupRecord {
            start: 0,
            count: face_materials.len() * 3,
            material_index: first,
        }];
    }

    let mut groups = Vec::new();
    let mut run_id = first;
    let mut run_start = 0;
    for (face, &id) in face_materials.iter().enumerate() {
        if id != run_id {
            groups.push(GroupRecord {
                start: run_start * 3,
                count: (face - run_start) * 3,
                material_index: run_id,
            });
            run_id = id;
            run_start = face;
        }
    }
    groups.push(GroupRecord {
        start: run_start * 3,
        count: (face_materials.len() - run_start) * 3,
        material_index: run_id,
    });
    groups
}
