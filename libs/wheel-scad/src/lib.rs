//! # Wheel SCAD
//!
//! Alternate wheel backend that delegates geometry to OpenSCAD.
//!
//! ## Architecture
//!
//! ```text
//! WheelParams → script::generate_script → openscad -o out.stl in.scad
//!     → wheel_mesh::stl::parse_ascii → Mesh
//! ```
//!
//! Unlike the native engine, OpenSCAD performs real boolean subtraction, so
//! the resulting mesh is geometrically similar but not identical.

pub mod error;
pub mod script;

pub use error::ScadError;
pub use script::generate_script;

use config::constants::OPENSCAD_EXECUTABLE;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};
use wheel_mesh::stl::parse_ascii;
use wheel_mesh::{Mesh, MeshBackend, MeshError, WheelParams};

/// Runs an OpenSCAD executable on a generated script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenScadBackend {
    executable: PathBuf,
    args: Vec<String>,
}

impl Default for OpenScadBackend {
    fn default() -> Self {
        Self::new(OPENSCAD_EXECUTABLE)
    }
}

impl OpenScadBackend {
    /// Uses the given executable (a bare name is looked up on `PATH`).
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments placed before `-o <output> <script>`.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The configured executable.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Renders `params` and returns the parsed mesh.
    ///
    /// The script and the exported STL live in a temporary directory that
    /// is removed when this returns.
    pub fn render(&self, params: &WheelParams) -> Result<Mesh, ScadError> {
        let source = generate_script(params)?;
        let dir = tempfile::tempdir()?;
        let script_path = dir.path().join("wheel.scad");
        let output_path = dir.path().join("wheel.stl");
        fs::write(&script_path, source)?;

        debug!(
            executable = %self.executable.display(),
            args = ?self.args,
            script = %script_path.display(),
            "running openscad"
        );
        let output = Command::new(&self.executable)
            .args(&self.args)
            .arg("-o")
            .arg(&output_path)
            .arg(&script_path)
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ScadError::NotFound {
                    executable: self.executable.clone(),
                },
                _ => ScadError::Spawn {
                    executable: self.executable.clone(),
                    source,
                },
            })?;

        if !output.status.success() {
            return Err(ScadError::Failed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = match fs::read_to_string(&output_path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ScadError::MissingOutput { path: output_path });
            }
            Err(e) => return Err(e.into()),
        };
        let solid = parse_ascii(&text)?;
        info!(
            triangles = solid.mesh.triangle_count(),
            "openscad render finished"
        );
        Ok(solid.mesh)
    }
}

impl MeshBackend for OpenScadBackend {
    fn name(&self) -> &'static str {
        "openscad"
    }

    fn build(&self, params: &WheelParams) -> Result<Mesh, MeshError> {
        self.render(params)
            .map_err(|e| MeshError::backend(self.name(), e))
    }
}
