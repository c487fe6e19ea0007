//! # Cuboid Primitive
//!
//! Generates an axis-aligned rectangular prism from a centre and half-extents.

use super::Caps;
use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned rectangular prism.
///
/// The four side faces are always emitted; `caps` controls the faces at the
/// lower and upper z bound.
///
/// # Arguments
///
/// * `center` - Centre of the prism
/// * `half_extents` - Half the size along each axis (all positive)
/// * `caps` - Which z faces to emit
///
/// # Returns
///
/// A mesh with 8 vertices and up to 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use wheel_mesh::primitives::{create_cuboid, Caps};
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::ZERO, DVec3::splat(5.0), Caps::BOTH).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cuboid(center: DVec3, half_extents: DVec3, caps: Caps) -> Result<Mesh, MeshError> {
    if !(half_extents.x > 0.0 && half_extents.y > 0.0 && half_extents.z > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cuboid half-extents must be positive: {half_extents:?}"
        )));
    }

    let min = center - half_extents;
    let max = center + half_extents;

    let mut mesh = Mesh::with_capacity(8, 12);

    // Bottom corners (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top corners (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    if caps.bottom {
        mesh.add_triangle(v0, v2, v1);
        mesh.add_triangle(v0, v3, v2);
    }

    if caps.top {
        mesh.add_triangle(v4, v5, v6);
        mesh.add_triangle(v4, v6, v7);
    }

    // Front (y = min.y)
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // Back (y = max.y)
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // Left (x = min.x)
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // Right (x = max.x)
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}
