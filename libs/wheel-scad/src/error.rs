//! # SCAD Backend Errors

use std::path::PathBuf;
use thiserror::Error;
use wheel_mesh::MeshError;

/// Errors raised while rendering through OpenSCAD.
#[derive(Debug, Error)]
pub enum ScadError {
    /// The executable could not be located.
    #[error("OpenSCAD executable not found: {}", executable.display())]
    NotFound { executable: PathBuf },

    /// The process could not be started for another reason.
    #[error("Failed to start {}: {source}", executable.display())]
    Spawn {
        executable: PathBuf,
        source: std::io::Error,
    },

    /// OpenSCAD ran but reported failure.
    #[error("OpenSCAD exited with {}: {stderr}", status.map_or_else(|| "signal".to_string(), |c| format!("code {c}")))]
    Failed { status: Option<i32>, stderr: String },

    /// OpenSCAD succeeded but wrote no STL file.
    #[error("OpenSCAD produced no output at {}", path.display())]
    MissingOutput { path: PathBuf },

    /// The exported STL could not be parsed.
    #[error("Unreadable OpenSCAD output: {0}")]
    Parse(#[from] MeshError),

    /// Script generation failed.
    #[error("Script formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Temporary file handling failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
