//! # Frustum Primitive
//!
//! Generates a truncated cone along an arbitrary axis. A cylinder is the
//! special case of equal radii.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Builds a right-handed orthonormal pair `(u, v)` perpendicular to `axis`,
/// with `u × v = axis`.
///
/// The reference vector switches from +Z to +X when the axis is nearly
/// vertical, so the cross product never collapses.
fn ring_basis(axis: DVec3) -> (DVec3, DVec3) {
    let reference = if axis.z.abs() < 0.9 { DVec3::Z } else { DVec3::X };
    let u = reference.cross(axis).normalize();
    let v = axis.cross(u);
    (u, v)
}

/// Creates a frustum mesh.
///
/// # Arguments
///
/// * `base_center` - Centre of the base ring
/// * `axis` - Direction from base to tip (normalized internally)
/// * `height` - Distance from base to tip along `axis`
/// * `base_radius` - Radius of the base ring
/// * `tip_radius` - Radius of the tip ring
/// * `segments` - Number of facets around the circumference
///
/// # Returns
///
/// A closed mesh: `2 * segments` side triangles plus a fan of `segments`
/// triangles at each end.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::primitives::create_frustum;
/// use glam::DVec3;
///
/// let mesh = create_frustum(DVec3::ZERO, DVec3::X, 8.0, 0.8, 0.3, 16).unwrap();
/// assert_eq!(mesh.triangle_count(), 64);
/// assert!(mesh.is_closed_manifold());
/// ```
pub fn create_frustum(
    base_center: DVec3,
    axis: DVec3,
    height: f64,
    base_radius: f64,
    tip_radius: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !(height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Frustum height must be positive: {height}"
        )));
    }

    if !(base_radius > 0.0 && tip_radius > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Frustum radii must be positive: r1={base_radius}, r2={tip_radius}"
        )));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Frustum segments must be at least 3: {segments}"
        )));
    }

    let axis = axis.try_normalize().ok_or_else(|| {
        MeshError::degenerate(format!("Frustum axis must be non-zero: {axis:?}"))
    })?;
    let (u, v) = ring_basis(axis);
    let tip_center = base_center + axis * height;

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n + 2, 4 * n);

    for (center, radius) in [(base_center, base_radius), (tip_center, tip_radius)] {
        for j in 0..n {
            let theta = 2.0 * PI * j as f64 / n as f64;
            mesh.add_vertex(center + radius * (theta.cos() * u + theta.sin() * v));
        }
    }

    // Side faces: quads between the two rings
    for j in 0..n {
        let j_next = (j + 1) % n;
        let (b0, b1) = (j as u32, j_next as u32);
        let (t0, t1) = ((n + j) as u32, (n + j_next) as u32);
        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    // Base cap faces -axis
    let base = mesh.add_vertex(base_center);
    for j in 0..n {
        mesh.add_triangle(base, ((j + 1) % n) as u32, j as u32);
    }

    // Tip cap faces +axis
    let tip = mesh.add_vertex(tip_center);
    for j in 0..n {
        mesh.add_triangle(tip, (n + j) as u32, (n + (j + 1) % n) as u32);
    }

    Ok(mesh)
}

/// Creates a cylinder mesh: a frustum with equal radii.
pub fn create_cylinder(
    base_center: DVec3,
    axis: DVec3,
    height: f64,
    radius: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    create_frustum(base_center, axis, height, radius, radius, segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_basis_is_orthonormal() {
        for axis in [
            DVec3::X,
            DVec3::Y,
            DVec3::Z,
            -DVec3::Z,
            DVec3::new(1.0, 1.0, 0.2).normalize(),
        ] {
            let (u, v) = ring_basis(axis);
            assert_relative_eq!(u.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(u.dot(axis), 0.0, epsilon = 1e-12);
            assert_relative_eq!(u.cross(v).dot(axis), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cylinder_volume_and_orientation() {
        let mesh = create_cylinder(DVec3::ZERO, DVec3::Z, 10.0, 5.0, 256).unwrap();
        assert!(mesh.validate());
        assert!(mesh.is_closed_manifold());
        let expected = PI * 25.0 * 10.0;
        assert_relative_eq!(mesh.signed_volume(), expected, max_relative = 1e-3);
    }

    #[test]
    fn test_frustum_along_horizontal_axis() {
        let mesh = create_frustum(DVec3::new(1.0, 2.0, 3.0), DVec3::Y, 8.0, 1.0, 0.5, 32).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(max.y, 10.0, epsilon = 1e-12);
        assert!(max.x <= 2.0 + 1e-12);
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_frustum_axis_is_normalized() {
        let a = create_frustum(DVec3::ZERO, DVec3::X * 5.0, 4.0, 1.0, 0.5, 12).unwrap();
        let b = create_frustum(DVec3::ZERO, DVec3::X, 4.0, 1.0, 0.5, 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_frustum_invalid_inputs() {
        assert!(create_frustum(DVec3::ZERO, DVec3::Z, 0.0, 1.0, 1.0, 12).is_err());
        assert!(create_frustum(DVec3::ZERO, DVec3::Z, 1.0, 0.0, 1.0, 12).is_err());
        assert!(create_frustum(DVec3::ZERO, DVec3::ZERO, 1.0, 1.0, 1.0, 12).is_err());
        assert!(create_frustum(DVec3::ZERO, DVec3::Z, 1.0, 1.0, 1.0, 2).is_err());
    }
}
