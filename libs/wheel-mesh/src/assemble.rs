//! # Mesh Assembler
//!
//! Builds every component of a wheel and concatenates the results into one
//! triangle soup, keeping a ledger of which triangles came from which part.
//!
//! ```text
//! plate → [per face, in parallel: prong pair + label] → hub pocket
//! ```
//!
//! Per-face parts are independent, so they are built with rayon and merged
//! back in face order. The output is identical to a sequential build.

use crate::builders::{create_hub_pocket, create_label, create_plate, create_prong_pair};
use crate::builders::{LabelSpec, ProngSpec};
use crate::error::MeshError;
use crate::frame::face_frames;
use crate::mesh::Mesh;
use crate::params::WheelParams;
use rayon::prelude::*;
use std::ops::Range;
use tracing::{debug, info};

/// Kind of sub-solid recorded in the part ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Plate,
    Prong,
    HubPocket,
    Label,
}

impl PartKind {
    /// True for parts that are cavity boundaries rather than solids.
    pub fn is_cavity(self) -> bool {
        matches!(self, PartKind::HubPocket | PartKind::Label)
    }
}

/// One entry in the part ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub kind: PartKind,
    /// Face the part belongs to, if any.
    pub face: Option<usize>,
    /// Rendered label text (labels only).
    pub text: Option<String>,
    /// Triangle indices of this part in the assembled mesh.
    pub triangles: Range<usize>,
}

/// The assembled wheel and its part ledger.
#[derive(Debug, Clone)]
pub struct Assembly {
    mesh: Mesh,
    parts: Vec<Part>,
}

impl Assembly {
    fn new() -> Self {
        Self {
            mesh: Mesh::new(),
            parts: Vec::new(),
        }
    }

    fn push(&mut self, kind: PartKind, face: Option<usize>, text: Option<String>, mesh: &Mesh) {
        let start = self.mesh.triangle_count();
        self.mesh.merge(mesh);
        self.parts.push(Part {
            kind,
            face,
            text,
            triangles: start..self.mesh.triangle_count(),
        });
    }

    /// The assembled mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Consumes the assembly, returning the mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Part ledger in merge order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of parts of the given kind.
    pub fn count(&self, kind: PartKind) -> usize {
        self.parts.iter().filter(|p| p.kind == kind).count()
    }
}

/// Per-face output built off the main thread.
struct FaceParts {
    prongs: [Mesh; 2],
    label: Mesh,
    text: String,
}

/// Builds the complete wheel.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::assemble::{assemble, PartKind};
/// use wheel_mesh::params::WheelParams;
///
/// let params = WheelParams::with_defaults(vec![3.0, 6.0, 9.0]).unwrap();
/// let wheel = assemble(&params).unwrap();
/// assert_eq!(wheel.count(PartKind::Plate), 1);
/// assert_eq!(wheel.count(PartKind::Prong), 6);
/// assert_eq!(wheel.count(PartKind::HubPocket), 1);
/// assert_eq!(wheel.count(PartKind::Label), 3);
/// ```
pub fn assemble(params: &WheelParams) -> Result<Assembly, MeshError> {
    let n = params.face_count();
    let g = params.geometry();
    let mut assembly = Assembly::new();

    let plate = create_plate(n, g.across_flats, g.thickness)?;
    debug!(faces = n, triangles = plate.triangle_count(), "built plate");
    assembly.push(PartKind::Plate, None, None, &plate);

    let prong_spec = ProngSpec::from_params(params);
    let label_spec = LabelSpec::from_params(params);
    let frames = face_frames(n, params.apothem());

    let faces: Vec<FaceParts> = frames
        .par_iter()
        .zip(params.distances().par_iter())
        .map(|(frame, &distance)| {
            let prongs = create_prong_pair(frame, distance, &prong_spec)?;
            let label = create_label(frame, distance, &label_spec)?;
            Ok(FaceParts {
                prongs,
                label: label.mesh,
                text: label.text,
            })
        })
        .collect::<Result<_, MeshError>>()?;

    for (index, face) in faces.into_iter().enumerate() {
        for prong in &face.prongs {
            assembly.push(PartKind::Prong, Some(index), None, prong);
        }
        assembly.push(PartKind::Label, Some(index), Some(face.text), &face.label);
    }
    debug!(faces = n, style = %g.prong_style, "built prongs and labels");

    let pocket = create_hub_pocket(
        g.hub_diameter,
        params.hub_pocket_depth(),
        g.thickness,
        params.facet_count(),
    )?;
    debug!(triangles = pocket.triangle_count(), "built hub pocket");
    assembly.push(PartKind::HubPocket, None, None, &pocket);

    info!(
        faces = n,
        parts = assembly.parts.len(),
        triangles = assembly.mesh.triangle_count(),
        "assembled wheel"
    );
    Ok(assembly)
}
