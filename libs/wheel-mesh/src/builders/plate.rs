//! # Plate Builder
//!
//! Regular N-gon base plate extruded to a fixed thickness.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{extrude_polygon, Caps};
use glam::DVec2;
use std::f64::consts::PI;

/// Vertices of the plate outline: `face_count` points on the circumcircle at
/// angles `2πi/N`.
pub fn plate_outline(face_count: usize, across_flats: f64) -> Vec<DVec2> {
    let circumradius = across_flats / (2.0 * (PI / face_count as f64).cos());
    (0..face_count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / face_count as f64;
            DVec2::new(circumradius * angle.cos(), circumradius * angle.sin())
        })
        .collect()
}

/// Creates the plate prism between z = 0 and z = `thickness`.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::builders::plate::create_plate;
///
/// let plate = create_plate(8, 60.0, 4.0).unwrap();
/// assert_eq!(plate.triangle_count(), 32);
/// assert!(plate.is_closed_manifold());
/// ```
pub fn create_plate(
    face_count: usize,
    across_flats: f64,
    thickness: f64,
) -> Result<Mesh, MeshError> {
    if face_count < 3 {
        return Err(MeshError::degenerate(format!(
            "Plate needs at least 3 faces: {face_count}"
        )));
    }

    extrude_polygon(
        &plate_outline(face_count, across_flats),
        0.0,
        thickness,
        Caps::BOTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::face_frames;
    use approx::assert_relative_eq;

    #[test]
    fn test_plate_triangle_count() {
        for n in 3..12 {
            let plate = create_plate(n, 50.0, 3.0).unwrap();
            assert_eq!(plate.triangle_count(), 4 * n);
            assert!(plate.is_closed_manifold());
        }
    }

    #[test]
    fn test_plate_volume() {
        let n = 6;
        let apothem = 25.0;
        let plate = create_plate(n, 2.0 * apothem, 3.0).unwrap();
        let area = n as f64 * apothem * apothem * (PI / n as f64).tan();
        assert_relative_eq!(plate.signed_volume(), area * 3.0, max_relative = 1e-9);
    }

    #[test]
    fn test_face_midpoints_lie_on_apothem() {
        let n = 8;
        let outline = plate_outline(n, 60.0);
        let midpoints: Vec<DVec2> = (0..n)
            .map(|i| (outline[i] + outline[(i + 1) % n]) / 2.0)
            .collect();
        for frame in face_frames(n, 30.0) {
            let c = frame.center.truncate();
            assert!(midpoints.iter().any(|m| m.distance(c) < 1e-9));
        }
    }

    #[test]
    fn test_plate_spans_thickness() {
        let plate = create_plate(5, 40.0, 2.5).unwrap();
        let (min, max) = plate.bounding_box();
        assert_eq!(min.z, 0.0);
        assert_eq!(max.z, 2.5);
    }

    #[test]
    fn test_plate_rejects_two_faces() {
        assert!(create_plate(2, 40.0, 2.5).is_err());
    }
}
