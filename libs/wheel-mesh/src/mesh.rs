//! # Mesh Data Structure
//!
//! Indexed triangle mesh shared by every builder. Winding follows the
//! right-hand rule: counter-clockwise seen from outside the material.

use config::constants::{EPSILON, NORMAL_EPSILON};
use glam::{DMat4, DVec3};
use std::collections::HashMap;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64. Vertices are never deduplicated across
/// merged parts, so every sub-solid keeps its own closed boundary.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds a free-standing triangle with its own three vertices.
    pub fn push_triangle(&mut self, [a, b, c]: [DVec3; 3]) {
        let i0 = self.add_vertex(a);
        let i1 = self.add_vertex(b);
        let i2 = self.add_vertex(c);
        self.add_triangle(i0, i1, i2);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the corner positions of the triangle at the given index.
    #[inline]
    pub fn triangle_points(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Iterates over triangles as corner positions.
    pub fn facets(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        (0..self.triangles.len()).map(|i| self.triangle_points(i))
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Transforms all vertices by an affine 4x4 matrix.
    ///
    /// Mirroring transforms (negative determinant) would turn the surface
    /// inside out, so the winding is reversed to keep normals outward.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        if matrix.determinant() < 0.0 {
            self.flip_winding();
        }
    }

    /// Reverses the winding of every triangle.
    ///
    /// Turns a solid boundary into a cavity boundary: normals then face into
    /// the enclosed volume, which is the outside of the surrounding material.
    pub fn flip_winding(&mut self) {
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
            (b - a).cross(c - a).length() >= EPSILON
        })
    }

    /// Returns true when every edge is shared by exactly two triangles that
    /// traverse it in opposite directions.
    ///
    /// This is the closed, consistently oriented 2-manifold check. It works
    /// on vertex indices, so it only applies to meshes built with shared
    /// vertices (every primitive in this crate is).
    pub fn is_closed_manifold(&self) -> bool {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in &self.triangles {
            for k in 0..3 {
                *directed.entry((tri[k], tri[(k + 1) % 3])).or_default() += 1;
            }
        }

        !directed.is_empty()
            && directed
                .iter()
                .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }

    /// Signed volume enclosed by the surface (divergence theorem).
    ///
    /// Positive for a closed mesh with outward normals, negative for a
    /// cavity boundary.
    pub fn signed_volume(&self) -> f64 {
        self.facets()
            .map(|[a, b, c]| a.dot(b.cross(c)) / 6.0)
            .sum()
    }
}

/// Computes the unit normal of a triangle from the cross product of two of
/// its edges.
///
/// Sliver triangles whose cross product is shorter than
/// [`NORMAL_EPSILON`] yield the zero vector instead of a division by zero.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::mesh::triangle_normal;
/// use glam::DVec3;
///
/// let n = triangle_normal([DVec3::ZERO, DVec3::X, DVec3::Y]);
/// assert_eq!(n, DVec3::Z);
///
/// let degenerate = triangle_normal([DVec3::ZERO, DVec3::X, DVec3::X * 2.0]);
/// assert_eq!(degenerate, DVec3::ZERO);
/// ```
pub fn triangle_normal([a, b, c]: [DVec3; 3]) -> DVec3 {
    let normal = (b - a).cross(c - a);
    let length = normal.length();
    if length < NORMAL_EPSILON {
        DVec3::ZERO
    } else {
        normal / length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_vertex(DVec3::Z);
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(0, 1, 3);
        mesh.add_triangle(0, 3, 2);
        mesh.add_triangle(1, 2, 3);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_zero_area() {
        let mut mesh = Mesh::new();
        mesh.push_triangle([DVec3::ZERO, DVec3::X, DVec3::X * 2.0]);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_merge_offsets_indices() {
        let mut mesh1 = tetrahedron();
        let mesh2 = tetrahedron();
        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 8);
        assert_eq!(mesh1.triangle_count(), 8);
        assert_eq!(mesh1.triangles()[4], [4, 6, 5]);
    }

    #[test]
    fn test_tetrahedron_is_closed_and_outward() {
        let mesh = tetrahedron();
        assert!(mesh.validate());
        assert!(mesh.is_closed_manifold());
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_open_mesh_is_not_manifold() {
        let mut mesh = Mesh::new();
        mesh.push_triangle([DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert!(!mesh.is_closed_manifold());
    }

    #[test]
    fn test_flip_winding_negates_volume() {
        let mut mesh = tetrahedron();
        mesh.flip_winding();
        assert!(mesh.is_closed_manifold());
        assert_relative_eq!(mesh.signed_volume(), -1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mirror_transform_keeps_outward_winding() {
        let mut mesh = tetrahedron();
        mesh.transform(&DMat4::from_scale(DVec3::new(-1.0, 1.0, 1.0)));
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_translation() {
        let mut mesh = tetrahedron();
        mesh.transform(&DMat4::from_translation(DVec3::new(10.0, 0.0, 0.0)));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.x, 10.0);
        assert_eq!(max.x, 11.0);
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_triangle_normal_unit_length() {
        let n = triangle_normal([
            DVec3::ZERO,
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 3.0),
        ]);
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.y, -1.0, epsilon = 1e-12);
    }
}
