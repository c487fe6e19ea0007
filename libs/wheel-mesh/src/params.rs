//! # Parameter Set
//!
//! Validated, immutable configuration for one wheel generation request.
//!
//! [`GeometryConfig`] is the loose, serde-friendly input (every field has a
//! default). [`WheelParams::new`] checks it together with the distance list
//! and freezes the result; builders only ever see a `WheelParams`.

use crate::error::ParamError;
use config::constants::{
    max_cavity_depth, DEFAULT_ACROSS_FLATS, DEFAULT_FACETS, DEFAULT_HUB_DIAMETER,
    DEFAULT_HUB_POCKET_DEPTH, DEFAULT_LABEL_DEPTH, DEFAULT_LABEL_HEIGHT,
    DEFAULT_LABEL_RADIAL_FRACTION, DEFAULT_PRONG_BASE_DIAMETER, DEFAULT_PRONG_LENGTH,
    DEFAULT_PRONG_ROOT_OVERLAP, DEFAULT_PRONG_TIP_DIAMETER, DEFAULT_THICKNESS, MAX_FACETS,
    MIN_FACES, MIN_FACETS,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

// =============================================================================
// STYLE ENUMS
// =============================================================================

/// Shape of the prongs standing on each face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProngStyle {
    /// Isosceles triangle extruded through the plate thickness.
    #[default]
    Flat,
    /// Tapered frustum along the face normal.
    Round,
}

/// How label segments are carved into the plate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Blind pocket on one or both plate faces.
    #[default]
    Engraved,
    /// Opening through the full plate thickness.
    #[serde(alias = "through-cut")]
    ThroughCut,
}

/// Which plate faces carry engraved labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSides {
    /// Engrave the face at z = thickness.
    Top,
    /// Engrave the face at z = 0.
    Bottom,
    /// Engrave both faces.
    #[default]
    Both,
}

impl LabelSides {
    /// Returns true when the top face is engraved.
    pub fn top(self) -> bool {
        matches!(self, Self::Top | Self::Both)
    }

    /// Returns true when the bottom face is engraved.
    pub fn bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::Both)
    }
}

impl FromStr for ProngStyle {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "round" => Ok(Self::Round),
            other => Err(ParamError::UnknownOption {
                kind: "prong style",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for LabelStyle {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "engraved" => Ok(Self::Engraved),
            "through-cut" | "through_cut" | "throughcut" => Ok(Self::ThroughCut),
            other => Err(ParamError::UnknownOption {
                kind: "label style",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for LabelSides {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "both" => Ok(Self::Both),
            other => Err(ParamError::UnknownOption {
                kind: "label sides",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProngStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flat => "flat",
            Self::Round => "round",
        })
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Engraved => "engraved",
            Self::ThroughCut => "through-cut",
        })
    }
}

impl fmt::Display for LabelSides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Both => "both",
        })
    }
}

// =============================================================================
// GEOMETRY CONFIG
// =============================================================================

/// Geometry options for one wheel. All lengths in mm.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::params::{GeometryConfig, ProngStyle};
///
/// let config: GeometryConfig =
///     serde_json::from_str(r#"{ "prong_style": "round", "thickness": 5.0 }"#).unwrap();
/// assert_eq!(config.prong_style, ProngStyle::Round);
/// assert_eq!(config.thickness, 5.0);
/// assert_eq!(config.across_flats, GeometryConfig::default().across_flats);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeometryConfig {
    /// Expected number of faces; must match the distance count when set.
    pub face_count: Option<usize>,
    /// Plate width measured flat-to-flat.
    pub across_flats: f64,
    /// Plate extrusion height.
    pub thickness: f64,
    /// Prong shape.
    pub prong_style: ProngStyle,
    /// Prong length from root to tip.
    pub prong_length: f64,
    /// Prong diameter at the root (flat prongs: base width).
    pub prong_base_d: f64,
    /// Prong diameter at the tip (round prongs only).
    pub prong_tip_d: f64,
    /// How far the prong root is sunk into the plate.
    pub prong_root_overlap: f64,
    /// Thumb-well diameter.
    pub hub_diameter: f64,
    /// Thumb-well depth, measured down from the top face.
    pub hub_pocket_depth: f64,
    /// Glyph height.
    pub label_height: f64,
    /// Engraving depth (ignored for through-cut labels).
    pub label_depth: f64,
    /// Label centre distance from the plate centre, as a fraction of the apothem.
    pub label_radial_fraction: f64,
    /// Engraved or through-cut labels.
    pub label_style: LabelStyle,
    /// Faces that carry engraved labels.
    pub label_sides: LabelSides,
    /// Tessellation density for round primitives.
    pub facet_count: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            face_count: None,
            across_flats: DEFAULT_ACROSS_FLATS,
            thickness: DEFAULT_THICKNESS,
            prong_style: ProngStyle::default(),
            prong_length: DEFAULT_PRONG_LENGTH,
            prong_base_d: DEFAULT_PRONG_BASE_DIAMETER,
            prong_tip_d: DEFAULT_PRONG_TIP_DIAMETER,
            prong_root_overlap: DEFAULT_PRONG_ROOT_OVERLAP,
            hub_diameter: DEFAULT_HUB_DIAMETER,
            hub_pocket_depth: DEFAULT_HUB_POCKET_DEPTH,
            label_height: DEFAULT_LABEL_HEIGHT,
            label_depth: DEFAULT_LABEL_DEPTH,
            label_radial_fraction: DEFAULT_LABEL_RADIAL_FRACTION,
            label_style: LabelStyle::default(),
            label_sides: LabelSides::default(),
            facet_count: DEFAULT_FACETS,
        }
    }
}

// =============================================================================
// WHEEL PARAMS
// =============================================================================

/// A validated parameter set.
///
/// Constructed once per request and never mutated. Cavity depths are stored
/// already clamped so top and bottom pockets cannot meet.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::params::{GeometryConfig, WheelParams};
///
/// let params = WheelParams::new(vec![2.0, 4.0, 6.0], GeometryConfig::default()).unwrap();
/// assert_eq!(params.face_count(), 3);
///
/// assert!(WheelParams::new(vec![2.0, 4.0], GeometryConfig::default()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WheelParams {
    distances: Vec<f64>,
    geometry: GeometryConfig,
    hub_pocket_depth: f64,
    label_depth: f64,
}

impl WheelParams {
    /// Validates the distance list and geometry and freezes them.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamError`] found. Checks run in a fixed order:
    /// distance count, distance values, lengths, depths, ranges.
    pub fn new(distances: Vec<f64>, geometry: GeometryConfig) -> Result<Self, ParamError> {
        validate_distances(&distances, geometry.face_count)?;

        let g = &geometry;
        for (name, value) in [
            ("across_flats", g.across_flats),
            ("thickness", g.thickness),
            ("prong_length", g.prong_length),
            ("prong_base_d", g.prong_base_d),
            ("prong_tip_d", g.prong_tip_d),
            ("prong_root_overlap", g.prong_root_overlap),
            ("hub_diameter", g.hub_diameter),
            ("hub_pocket_depth", g.hub_pocket_depth),
            ("label_height", g.label_height),
            ("label_depth", g.label_depth),
        ] {
            require_positive(name, value)?;
        }

        for (name, depth) in [
            ("hub_pocket_depth", g.hub_pocket_depth),
            ("label_depth", g.label_depth),
        ] {
            if depth >= g.thickness {
                return Err(ParamError::DepthTooLarge {
                    name,
                    depth,
                    thickness: g.thickness,
                });
            }
        }

        if g.hub_diameter >= g.across_flats {
            return Err(ParamError::HubTooLarge {
                diameter: g.hub_diameter,
                across_flats: g.across_flats,
            });
        }

        if !(g.label_radial_fraction > 0.0 && g.label_radial_fraction <= 1.0) {
            return Err(ParamError::RadialFractionOutOfRange {
                value: g.label_radial_fraction,
            });
        }

        if !(MIN_FACETS..=MAX_FACETS).contains(&g.facet_count) {
            return Err(ParamError::FacetCount {
                count: g.facet_count,
                min: MIN_FACETS,
                max: MAX_FACETS,
            });
        }

        let hub_pocket_depth = clamp_depth("hub_pocket_depth", g.hub_pocket_depth, g.thickness);
        let label_depth = clamp_depth("label_depth", g.label_depth, g.thickness);

        Ok(Self {
            distances,
            geometry,
            hub_pocket_depth,
            label_depth,
        })
    }

    /// Convenience constructor using default geometry.
    pub fn with_defaults(distances: Vec<f64>) -> Result<Self, ParamError> {
        Self::new(distances, GeometryConfig::default())
    }

    /// Number of plate faces (and prong pairs).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.distances.len()
    }

    /// Target separations, one per face, in placement order.
    #[inline]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// The geometry options as supplied (depths unclamped).
    #[inline]
    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Plate thickness.
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.geometry.thickness
    }

    /// Centre-to-face distance: half the across-flats width.
    #[inline]
    pub fn apothem(&self) -> f64 {
        self.geometry.across_flats / 2.0
    }

    /// Centre-to-vertex distance of the plate polygon.
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.geometry.across_flats / (2.0 * (PI / self.face_count() as f64).cos())
    }

    /// Hub pocket depth after clamping below the mid-plane.
    #[inline]
    pub fn hub_pocket_depth(&self) -> f64 {
        self.hub_pocket_depth
    }

    /// Label engraving depth after clamping below the mid-plane.
    #[inline]
    pub fn label_depth(&self) -> f64 {
        self.label_depth
    }

    /// Tessellation density for round primitives.
    #[inline]
    pub fn facet_count(&self) -> u32 {
        self.geometry.facet_count
    }
}

fn validate_distances(distances: &[f64], face_count: Option<usize>) -> Result<(), ParamError> {
    if distances.is_empty() {
        return Err(ParamError::EmptyDistances);
    }

    if let Some(expected) = face_count {
        if expected < MIN_FACES {
            return Err(ParamError::TooFewFaces {
                count: expected,
                min: MIN_FACES,
            });
        }
        if expected != distances.len() {
            return Err(ParamError::FaceCountMismatch {
                expected,
                actual: distances.len(),
            });
        }
    }

    if distances.len() < MIN_FACES {
        return Err(ParamError::TooFewFaces {
            count: distances.len(),
            min: MIN_FACES,
        });
    }

    match distances
        .iter()
        .enumerate()
        .find(|(_, d)| !(d.is_finite() && **d > 0.0))
    {
        Some((index, &value)) => Err(ParamError::InvalidDistance { index, value }),
        None => Ok(()),
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamError::NonPositive { name, value })
    }
}

fn clamp_depth(name: &'static str, depth: f64, thickness: f64) -> f64 {
    let limit = max_cavity_depth(thickness);
    if depth > limit {
        warn!(field = name, depth, limit, "clamping cavity depth below plate mid-plane");
        limit
    } else {
        depth
    }
}

/// Parses a comma-separated distance list such as `"2, 4, 6.5"`.
///
/// Entries are trimmed and blank entries are skipped, so trailing commas are
/// harmless. Values are not range-checked here; [`WheelParams::new`] does
/// that.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::params::parse_distances;
///
/// assert_eq!(parse_distances("2, 4,,6 ,").unwrap(), vec![2.0, 4.0, 6.0]);
/// assert!(parse_distances("2, four").is_err());
/// ```
pub fn parse_distances(input: &str) -> Result<Vec<f64>, ParamError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<f64>().map_err(|_| ParamError::InvalidNumber {
                input: entry.to_string(),
            })
        })
        .collect()
}
