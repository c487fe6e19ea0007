//! # Label Engraver
//!
//! Turns a face's rounded distance into seven-segment cavities. Each segment
//! rectangle becomes a cuboid boundary in the label frame, with the glyph's
//! horizontal axis along the face tangent and its vertical axis along the
//! outward direction.

use super::glyph::{label_text, layout_text, GlyphMetrics, Rect};
use crate::error::MeshError;
use crate::frame::FaceFrame;
use crate::mesh::Mesh;
use crate::params::{LabelSides, LabelStyle, WheelParams};
use crate::primitives::{create_cuboid, Caps};
use tracing::trace;

/// Label sizing shared by every face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelSpec {
    pub style: LabelStyle,
    pub sides: LabelSides,
    pub metrics: GlyphMetrics,
    /// Engraving depth, already clamped below half the thickness.
    pub depth: f64,
    pub thickness: f64,
    /// Distance of the label centre from the plate centre.
    pub radius: f64,
}

impl LabelSpec {
    pub fn from_params(params: &WheelParams) -> Self {
        let g = params.geometry();
        Self {
            style: g.label_style,
            sides: g.label_sides,
            metrics: GlyphMetrics::new(g.label_height),
            depth: params.label_depth(),
            thickness: params.thickness(),
            radius: g.label_radial_fraction * params.apothem(),
        }
    }

    /// z ranges and open ends of the cavities cut for each segment.
    fn slabs(&self) -> Vec<(f64, f64, Caps)> {
        match self.style {
            LabelStyle::ThroughCut => vec![(0.0, self.thickness, Caps::NONE)],
            LabelStyle::Engraved => {
                let mut slabs = Vec::with_capacity(2);
                if self.sides.top() {
                    slabs.push((self.thickness - self.depth, self.thickness, Caps::BOTTOM));
                }
                if self.sides.bottom() {
                    slabs.push((0.0, self.depth, Caps::TOP));
                }
                slabs
            }
        }
    }
}

/// One face's label: the rendered text and its cavity boundary.
#[derive(Debug, Clone)]
pub struct Label {
    pub text: String,
    pub mesh: Mesh,
}

fn segment_cavity(rect: &Rect, z0: f64, z1: f64, caps: Caps) -> Result<Mesh, MeshError> {
    let center = rect.center().extend((z0 + z1) / 2.0);
    let half = (rect.size() / 2.0).extend((z1 - z0) / 2.0);
    let mut cavity = create_cuboid(center, half, caps)?;
    cavity.flip_winding();
    Ok(cavity)
}

/// Builds the label of `frame` for the given distance.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::builders::label::{create_label, LabelSpec};
/// use wheel_mesh::frame::FaceFrame;
/// use wheel_mesh::params::WheelParams;
///
/// let params = WheelParams::with_defaults(vec![10.0; 4]).unwrap();
/// let frame = FaceFrame::new(0, 4, params.apothem());
/// let label = create_label(&frame, 10.0, &LabelSpec::from_params(&params)).unwrap();
/// assert_eq!(label.text, "10");
/// // "1" + "0" = 8 segments, engraved on both faces, 10 triangles each
/// assert_eq!(label.mesh.triangle_count(), 8 * 2 * 10);
/// ```
pub fn create_label(
    frame: &FaceFrame,
    distance: f64,
    spec: &LabelSpec,
) -> Result<Label, MeshError> {
    let text = label_text(distance);
    let placed = layout_text(&text, &spec.metrics)?;
    let slabs = spec.slabs();

    let cuboids = placed.len() * slabs.len();
    let mut mesh = Mesh::with_capacity(cuboids * 8, cuboids * 12);
    for segment in &placed {
        for &(z0, z1, caps) in &slabs {
            mesh.merge(&segment_cavity(&segment.rect, z0, z1, caps)?);
        }
    }
    mesh.transform(&frame.local_to_world(spec.radius));

    trace!(face = frame.index, text = %text, segments = placed.len(), "engraved label");
    Ok(Label { text, mesh })
}
