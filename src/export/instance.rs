//! Instance record construction.

use super::geometry::{round_coord, round_vec3};
use crate::document::InstanceRecord;
use crate::scene::MeshQuery;

/// Build one instance record for a mesh occurrence.
///
/// Translation and quaternion components are rounded to the same precision
/// as geometry positions; scale is emitted unrounded.
pub fn build_instance(
    mesh: &dyn MeshQuery,
    geometry_key: String,
    instance_name: String,
) -> InstanceRecord {
    let placement = mesh.placement();
    InstanceRecord {
        id: geometry_key,
        name: instance_name,
        position: round_vec3(placement.translation),
        scale: placement.scale.to_array(),
        quaternion: [
            round_coord(placement.rotation.x),
            round_coord(placement.rotation.y),
            round_coord(placement.rotation.z),
            round_coord(placement.rotation.w),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MemoryMesh;

    #[test]
    fn test_instance_references_geometry_key() {
        let mesh = MemoryMesh::new("rock_01");
        let record = build_instance(&mesh, "rock".to_string(), "01".to_string());
        assert_eq!(record.id, "rock");
        assert_eq!(record.name, "01");
    }

    #[test]
    fn test_translation_and_quaternion_rounded() {
        let mesh = MemoryMesh::new("m")
            .with_translation([1.0000000049, 2.0, 3.0000000051])
            .with_rotation([0.0000000051, 0.0, 0.0, 0.9999999949]);
        let record = build_instance(&mesh, "m".to_string(), "m".to_string());

        assert_eq!(record.position, [1.0, 2.0, 3.00000001]);
        assert_eq!(record.quaternion, [0.00000001, 0.0, 0.0, 0.99999999]);
    }

    #[test]
    fn test_scale_unrounded() {
        let mesh = MemoryMesh::new("m").with_scale([1.0000000049, 1.0, 2.0000000051]);
        let record = build_instance(&mesh, "m".to_string(), "m".to_string());
        assert_eq!(record.scale, [1.0000000049, 1.0, 2.0000000051]);
    }
}
