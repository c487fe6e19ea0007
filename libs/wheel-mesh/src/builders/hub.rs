//! # Hub Pocket
//!
//! Shallow cylindrical thumb well at the plate centre, open at the top face.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{circle_points, extrude_polygon, Caps};

/// Creates the cavity boundary of the thumb well.
///
/// The wall spans `[thickness - depth, thickness]` and the floor disc sits at
/// `thickness - depth`. No top cap is emitted. Winding is inverted so the
/// wall and floor face into the pocket.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::builders::hub::create_hub_pocket;
///
/// let pocket = create_hub_pocket(18.0, 1.5, 4.0, 32).unwrap();
/// assert_eq!(pocket.triangle_count(), 3 * 32);
/// assert!(pocket.signed_volume() < 0.0);
/// ```
pub fn create_hub_pocket(
    diameter: f64,
    depth: f64,
    thickness: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !(depth > 0.0 && depth < thickness) {
        return Err(MeshError::degenerate(format!(
            "Hub pocket depth must be in (0, {thickness}): {depth}"
        )));
    }

    let outline = circle_points(diameter / 2.0, segments);
    let mut pocket = extrude_polygon(&outline, thickness - depth, thickness, Caps::BOTTOM)?;
    pocket.flip_winding();
    Ok(pocket)
}
