//! # Wheel CLI
//!
//! Library half of the `wheel` binary: argument types, command dispatch and
//! output handling. `main.rs` only parses arguments, sets up logging and
//! calls [`run`].

pub mod args;
pub mod output;

pub use args::{BackendKind, Cli, Commands, WheelArgs};

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wheel_mesh::stl::{parse_ascii, StlSolid};
use wheel_mesh::{render_with, MeshBackend, NativeBackend};
use wheel_scad::{generate_script, OpenScadBackend};

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Executes a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            wheel,
            output,
            name,
            backend,
            openscad,
        } => {
            let params = wheel.params()?;
            let backend: Box<dyn MeshBackend> = match backend {
                BackendKind::Native => Box::new(NativeBackend),
                BackendKind::Openscad => Box::new(OpenScadBackend::new(openscad)),
            };
            let stl = render_with(&backend, &params, &name)?;
            output::emit(&output, stl.as_bytes())?;
            if !output::is_stdout(&output) {
                info!(path = %output.display(), faces = params.face_count(), "wrote wheel");
            }
        }
        Commands::Scad { wheel, output } => {
            let script = generate_script(&wheel.params()?)?;
            output::emit(&output, script.as_bytes())?;
        }
        Commands::Inspect { file } => {
            println!("{}", inspect(&file)?);
        }
    }
    Ok(())
}

/// Facts reported by `wheel inspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct StlSummary {
    pub name: String,
    pub triangles: usize,
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl From<&StlSolid> for StlSummary {
    fn from(solid: &StlSolid) -> Self {
        let (min, max) = solid.mesh.bounding_box();
        Self {
            name: solid.name.clone(),
            triangles: solid.mesh.triangle_count(),
            min: min.to_array(),
            max: max.to_array(),
        }
    }
}

impl fmt::Display for StlSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x0, y0, z0] = self.min;
        let [x1, y1, z1] = self.max;
        writeln!(f, "solid:     {}", self.name)?;
        writeln!(f, "triangles: {}", self.triangles)?;
        writeln!(f, "min:       {x0:.3} {y0:.3} {z0:.3}")?;
        write!(f, "max:       {x1:.3} {y1:.3} {z1:.3}")
    }
}

/// Reads and summarizes an ASCII STL file.
pub fn inspect(path: &Path) -> Result<StlSummary> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let solid = parse_ascii(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(StlSummary::from(&solid))
}
