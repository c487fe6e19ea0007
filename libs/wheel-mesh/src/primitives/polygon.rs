//! # Polygon Extrusion
//!
//! Extrudes a 2D polygon between two z levels into a prism.
//!
//! Caps are triangle fans around the vertex centroid, so an n-gon prism with
//! both caps has `2n` side triangles plus `n` per cap: `4n` in total. The fan
//! is valid for any polygon that is star-shaped about its centroid, which
//! covers every convex outline the builders produce.

use super::Caps;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::approx_zero;
use glam::DVec2;
use std::f64::consts::PI;

/// Signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise vertex order.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::primitives::signed_area;
/// use glam::DVec2;
///
/// let ccw = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// assert_eq!(signed_area(&ccw), 1.0);
/// ```
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

/// Vertices of a regular polygon inscribed in a circle, starting on +X and
/// going counter-clockwise.
pub fn circle_points(radius: f64, segments: u32) -> Vec<DVec2> {
    (0..segments)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / segments as f64;
            DVec2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Extrudes a simple polygon along Z between `z0` and `z1`.
///
/// The vertex order is normalized to counter-clockwise first, so the bottom
/// cap always faces -Z, the top cap +Z and every side quad faces away from
/// the polygon interior, whatever order the caller supplied.
///
/// # Arguments
///
/// * `points` - Polygon outline (at least 3 vertices, non-self-intersecting)
/// * `z0`, `z1` - Lower and upper z bounds (`z0 < z1`)
/// * `caps` - Which ends to close
///
/// # Example
///
/// ```rust
/// use wheel_mesh::primitives::{extrude_polygon, Caps};
/// use glam::DVec2;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// let mesh = extrude_polygon(&square, 0.0, 2.0, Caps::BOTH).unwrap();
/// assert_eq!(mesh.triangle_count(), 16);
/// assert!(mesh.is_closed_manifold());
/// ```
pub fn extrude_polygon(points: &[DVec2], z0: f64, z1: f64, caps: Caps) -> Result<Mesh, MeshError> {
    if points.len() < 3 {
        return Err(MeshError::degenerate(format!(
            "Polygon must have at least 3 vertices: got {}",
            points.len()
        )));
    }

    if !(z1 > z0) {
        return Err(MeshError::degenerate(format!(
            "Extrusion interval is empty: [{z0}, {z1}]"
        )));
    }

    let area = signed_area(points);
    if approx_zero(area) {
        return Err(MeshError::degenerate("Polygon has zero area"));
    }

    let mut outline = points.to_vec();
    if area < 0.0 {
        outline.reverse();
    }

    let n = outline.len();
    let mut mesh = Mesh::with_capacity(2 * n + 2, 4 * n);

    for z in [z0, z1] {
        for p in &outline {
            mesh.add_vertex(p.extend(z));
        }
    }

    // Side quads, two triangles each
    for i in 0..n {
        let j = (i + 1) % n;
        let (b0, b1) = (i as u32, j as u32);
        let (t0, t1) = ((n + i) as u32, (n + j) as u32);
        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    let centroid = outline.iter().copied().sum::<DVec2>() / n as f64;

    if caps.bottom {
        let c = mesh.add_vertex(centroid.extend(z0));
        for i in 0..n {
            mesh.add_triangle(c, ((i + 1) % n) as u32, i as u32);
        }
    }

    if caps.top {
        let c = mesh.add_vertex(centroid.extend(z1));
        for i in 0..n {
            mesh.add_triangle(c, (n + i) as u32, (n + (i + 1) % n) as u32);
        }
    }

    Ok(mesh)
}
