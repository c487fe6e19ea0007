//! # Face Frames
//!
//! Local coordinate frame of one plate face.
//!
//! Face `i` of an N-face plate has normal angle `-2π(i + 0.5)/N`. The half
//! step puts the frame on the face midpoint rather than a vertex, and the
//! negative sign walks the faces clockwise when seen from above.

use glam::{DMat4, DVec3, DVec4};
use std::f64::consts::PI;

/// Outward, tangential and thickness axes of a plate face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrame {
    /// Face index, `0 <= index < N`.
    pub index: usize,
    /// Normal angle in radians.
    pub angle: f64,
    /// Unit vector pointing away from the plate centre.
    pub outward: DVec3,
    /// Unit vector along the face edge.
    pub tangent: DVec3,
    /// Midpoint of the face edge at z = 0.
    pub center: DVec3,
}

impl FaceFrame {
    /// Derives the frame of face `index` on a plate with `face_count` faces
    /// and the given apothem.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wheel_mesh::frame::FaceFrame;
    ///
    /// let frame = FaceFrame::new(0, 4, 10.0);
    /// assert!((frame.center.length() - 10.0).abs() < 1e-12);
    /// assert!(frame.outward.dot(frame.tangent).abs() < 1e-12);
    /// ```
    pub fn new(index: usize, face_count: usize, apothem: f64) -> Self {
        let angle = -2.0 * PI * (index as f64 + 0.5) / face_count as f64;
        let outward = DVec3::new(angle.cos(), angle.sin(), 0.0);
        let tangent = DVec3::new(-angle.sin(), angle.cos(), 0.0);
        Self {
            index,
            angle,
            outward,
            tangent,
            center: apothem * outward,
        }
    }

    /// Point on the plate plane at a lateral offset along the tangent and a
    /// radial offset along the outward axis, both measured from the face
    /// midpoint.
    #[inline]
    pub fn point(&self, lateral: f64, radial: f64) -> DVec3 {
        self.center + lateral * self.tangent + radial * self.outward
    }

    /// Affine map from a local frame (x = tangent, y = outward, z = thickness)
    /// to world space, with its origin at `radius` along the outward axis.
    ///
    /// The basis `(tangent, outward, Z)` is left-handed, so the matrix has a
    /// negative determinant; [`Mesh::transform`](crate::Mesh::transform)
    /// compensates by reversing the winding.
    pub fn local_to_world(&self, radius: f64) -> DMat4 {
        let origin = radius * self.outward;
        DMat4::from_cols(
            self.tangent.extend(0.0),
            self.outward.extend(0.0),
            DVec4::Z,
            DVec4::new(origin.x, origin.y, 0.0, 1.0),
        )
    }
}

/// Frames for every face of an N-face plate, in placement order.
pub fn face_frames(face_count: usize, apothem: f64) -> Vec<FaceFrame> {
    (0..face_count)
        .map(|i| FaceFrame::new(i, face_count, apothem))
        .collect()
}
