//! # Wheel Mesh
//!
//! Mesh generation for two-point discrimination wheels: a regular N-gon
//! plate with a pair of prongs on every face, spaced at that face's test
//! distance, a thumb-well pocket at the centre and a seven-segment label per
//! face.
//!
//! ## Architecture
//!
//! ```text
//! distances + GeometryConfig → WheelParams
//!     → builders (plate, prongs, hub pocket, labels)
//!     → assemble (Mesh + part ledger)
//!     → stl (ASCII text)
//! ```
//!
//! Cavities are not subtracted. Pocket and label boundaries are emitted with
//! inverted winding inside the plate volume.
//!
//! ## Usage
//!
//! ```rust
//! use wheel_mesh::{generate_stl, WheelParams};
//!
//! let params = WheelParams::with_defaults(vec![2.0, 4.0, 6.0, 8.0]).unwrap();
//! let stl = generate_stl(&params, "wheel").unwrap();
//! assert!(stl.starts_with("solid wheel\n"));
//! ```

pub mod assemble;
pub mod backend;
pub mod builders;
pub mod error;
pub mod frame;
pub mod mesh;
pub mod params;
pub mod primitives;
pub mod stl;

pub use assemble::{assemble, Assembly, Part, PartKind};
pub use backend::{MeshBackend, NativeBackend};
pub use error::{MeshError, ParamError};
pub use mesh::Mesh;
pub use params::{parse_distances, GeometryConfig, LabelSides, LabelStyle, ProngStyle, WheelParams};

/// Builds the wheel with the native engine and serializes it as ASCII STL.
///
/// Validation has already happened in [`WheelParams::new`], so the only
/// failures left are degenerate geometry from extreme sizes.
pub fn generate_stl(params: &WheelParams, name: &str) -> Result<String, MeshError> {
    render_with(&NativeBackend, params, name)
}

/// Builds the wheel with `backend` and serializes it as ASCII STL.
pub fn render_with<B: MeshBackend + ?Sized>(
    backend: &B,
    params: &WheelParams,
    name: &str,
) -> Result<String, MeshError> {
    tracing::debug!(backend = backend.name(), faces = params.face_count(), "rendering wheel");
    let mesh = backend.build(params)?;
    stl::to_ascii_string(&mesh, name)
}
