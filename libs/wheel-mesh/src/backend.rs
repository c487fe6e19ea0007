//! # Mesh Backends
//!
//! A backend turns a validated parameter set into a mesh. The native backend
//! runs the builders in this crate; other crates can plug in alternatives
//! (for example an external CAD compiler) behind the same contract.

use crate::assemble::assemble;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::WheelParams;

/// Parameter set in, mesh out.
pub trait MeshBackend {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Builds the wheel mesh.
    fn build(&self, params: &WheelParams) -> Result<Mesh, MeshError>;
}

/// Builds meshes with the in-process geometry engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl MeshBackend for NativeBackend {
    fn name(&self) -> &'static str {
        "native"
    }

    fn build(&self, params: &WheelParams) -> Result<Mesh, MeshError> {
        Ok(assemble(params)?.into_mesh())
    }
}

impl<B: MeshBackend + ?Sized> MeshBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn build(&self, params: &WheelParams) -> Result<Mesh, MeshError> {
        (**self).build(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_matches_assembler() {
        let params = WheelParams::with_defaults(vec![4.0, 8.0, 12.0]).unwrap();
        let mesh = NativeBackend.build(&params).unwrap();
        assert_eq!(&mesh, assemble(&params).unwrap().mesh());
    }

    #[test]
    fn test_boxed_backend_delegates() {
        let backend: Box<dyn MeshBackend> = Box::new(NativeBackend);
        assert_eq!(backend.name(), "native");
        let params = WheelParams::with_defaults(vec![5.0; 3]).unwrap();
        assert!(!backend.build(&params).unwrap().is_empty());
    }
}
