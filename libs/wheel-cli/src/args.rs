//! Command-line arguments.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use config::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_SOLID_NAME, OPENSCAD_EXECUTABLE};
use std::fs;
use std::path::PathBuf;
use wheel_mesh::{parse_distances, GeometryConfig, LabelSides, LabelStyle, ProngStyle, WheelParams};

#[derive(Debug, Parser)]
#[command(name = "wheel")]
#[command(about = "Generate two-point discrimination wheel STL files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the wheel and write it as ASCII STL
    Generate {
        #[command(flatten)]
        wheel: WheelArgs,

        /// Output file, or "-" for stdout
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Solid name written into the STL header
        #[arg(long, default_value = DEFAULT_SOLID_NAME)]
        name: String,

        /// Geometry engine
        #[arg(long, value_enum, default_value_t = BackendKind::Native)]
        backend: BackendKind,

        /// OpenSCAD executable used by the openscad backend
        #[arg(long, default_value = OPENSCAD_EXECUTABLE)]
        openscad: PathBuf,
    },
    /// Print the equivalent OpenSCAD script
    Scad {
        #[command(flatten)]
        wheel: WheelArgs,

        /// Output file, or "-" for stdout
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },
    /// Summarize an ASCII STL file
    Inspect {
        /// STL file to read
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// Built-in mesh engine
    Native,
    /// External OpenSCAD subprocess
    Openscad,
}

/// Distances plus geometry overrides.
#[derive(Debug, Clone, Args)]
pub struct WheelArgs {
    /// Comma-separated separations, one per face, e.g. "2,4,6,8"
    #[arg(allow_hyphen_values = true)]
    pub distances: String,

    /// JSON file with geometry options; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Expected face count (must match the number of distances)
    #[arg(long)]
    pub faces: Option<usize>,

    #[arg(long)]
    pub across_flats: Option<f64>,

    #[arg(long)]
    pub thickness: Option<f64>,

    /// flat | round
    #[arg(long)]
    pub prong_style: Option<ProngStyle>,

    #[arg(long)]
    pub prong_length: Option<f64>,

    #[arg(long)]
    pub prong_base_d: Option<f64>,

    #[arg(long)]
    pub prong_tip_d: Option<f64>,

    #[arg(long)]
    pub prong_root_overlap: Option<f64>,

    #[arg(long)]
    pub hub_diameter: Option<f64>,

    #[arg(long)]
    pub hub_pocket_depth: Option<f64>,

    #[arg(long)]
    pub label_height: Option<f64>,

    #[arg(long)]
    pub label_depth: Option<f64>,

    #[arg(long)]
    pub label_radial_fraction: Option<f64>,

    /// engraved | through-cut
    #[arg(long)]
    pub label_style: Option<LabelStyle>,

    /// top | bottom | both
    #[arg(long)]
    pub label_sides: Option<LabelSides>,

    /// Facets for round primitives
    #[arg(long)]
    pub facets: Option<u32>,
}

fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl WheelArgs {
    /// Geometry from the config file (or defaults) with flag overrides.
    pub fn geometry(&self) -> Result<GeometryConfig> {
        let mut g = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => GeometryConfig::default(),
        };

        if self.faces.is_some() {
            g.face_count = self.faces;
        }
        apply(&mut g.across_flats, self.across_flats);
        apply(&mut g.thickness, self.thickness);
        apply(&mut g.prong_style, self.prong_style);
        apply(&mut g.prong_length, self.prong_length);
        apply(&mut g.prong_base_d, self.prong_base_d);
        apply(&mut g.prong_tip_d, self.prong_tip_d);
        apply(&mut g.prong_root_overlap, self.prong_root_overlap);
        apply(&mut g.hub_diameter, self.hub_diameter);
        apply(&mut g.hub_pocket_depth, self.hub_pocket_depth);
        apply(&mut g.label_height, self.label_height);
        apply(&mut g.label_depth, self.label_depth);
        apply(&mut g.label_radial_fraction, self.label_radial_fraction);
        apply(&mut g.label_style, self.label_style);
        apply(&mut g.label_sides, self.label_sides);
        apply(&mut g.facet_count, self.facets);
        Ok(g)
    }

    /// Parses the distances and validates the full parameter set.
    pub fn params(&self) -> Result<WheelParams> {
        let distances = parse_distances(&self.distances)?;
        let params = WheelParams::new(distances, self.geometry()?)?;
        Ok(params)
    }
}
