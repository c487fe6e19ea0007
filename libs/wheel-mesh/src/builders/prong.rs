//! # Prong Builder
//!
//! Two prongs per face, placed at ± half the requested separation along the
//! face tangent and sunk into the plate by the root overlap.

use crate::error::MeshError;
use crate::frame::FaceFrame;
use crate::mesh::Mesh;
use crate::params::{ProngStyle, WheelParams};
use crate::primitives::{create_frustum, extrude_polygon, Caps};
use tracing::trace;

/// Prong sizing shared by both prongs of every face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProngSpec {
    /// Flat triangle or round frustum.
    pub style: ProngStyle,
    /// Root-to-tip length.
    pub length: f64,
    /// Diameter (flat: width) at the root.
    pub base_diameter: f64,
    /// Diameter at the tip; round prongs only.
    pub tip_diameter: f64,
    /// Inward displacement of the root from the face.
    pub root_overlap: f64,
    /// Plate thickness.
    pub thickness: f64,
    /// Facet count for round prongs.
    pub segments: u32,
}

impl ProngSpec {
    /// Extracts the prong sizing from a parameter set.
    pub fn from_params(params: &WheelParams) -> Self {
        let g = params.geometry();
        Self {
            style: g.prong_style,
            length: g.prong_length,
            base_diameter: g.prong_base_d,
            tip_diameter: g.prong_tip_d,
            root_overlap: g.prong_root_overlap,
            thickness: g.thickness,
            segments: g.facet_count,
        }
    }
}

/// Builds one prong with its root centred at lateral offset `lateral` from
/// the face midpoint.
pub fn create_prong(frame: &FaceFrame, lateral: f64, spec: &ProngSpec) -> Result<Mesh, MeshError> {
    match spec.style {
        ProngStyle::Flat => {
            let half_width = spec.base_diameter / 2.0;
            let tip_radial = spec.length - spec.root_overlap;
            let outline = [
                frame.point(lateral - half_width, -spec.root_overlap),
                frame.point(lateral + half_width, -spec.root_overlap),
                frame.point(lateral, tip_radial),
            ]
            .map(|p| p.truncate());
            extrude_polygon(&outline, 0.0, spec.thickness, Caps::BOTH)
        }
        ProngStyle::Round => {
            let mut root = frame.point(lateral, -spec.root_overlap);
            root.z = spec.thickness / 2.0;
            create_frustum(
                root,
                frame.outward,
                spec.length,
                spec.base_diameter / 2.0,
                spec.tip_diameter / 2.0,
                spec.segments,
            )
        }
    }
}

/// Builds the prong pair of one face: `[-separation/2, +separation/2]`.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::builders::prong::{create_prong_pair, ProngSpec};
/// use wheel_mesh::frame::FaceFrame;
/// use wheel_mesh::params::WheelParams;
///
/// let params = WheelParams::with_defaults(vec![5.0; 6]).unwrap();
/// let frame = FaceFrame::new(0, 6, params.apothem());
/// let [left, right] = create_prong_pair(&frame, 5.0, &ProngSpec::from_params(&params)).unwrap();
/// assert!(left.is_closed_manifold() && right.is_closed_manifold());
/// ```
pub fn create_prong_pair(
    frame: &FaceFrame,
    separation: f64,
    spec: &ProngSpec,
) -> Result<[Mesh; 2], MeshError> {
    trace!(face = frame.index, separation, style = %spec.style, "building prong pair");
    let half = separation / 2.0;
    Ok([
        create_prong(frame, -half, spec)?,
        create_prong(frame, half, spec)?,
    ])
}
