//! # Configuration Constants
//!
//! Centralized constants for the wheel pipeline. Plate and prong defaults,
//! tessellation limits, seven-segment glyph proportions and precision values
//! are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Facet counts for round primitives
//! - **Geometry**: Default plate, prong, hub and label dimensions
//! - **Glyphs**: Seven-segment proportions relative to glyph height
//! - **Output**: Serialization and file defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used to decide whether a polygon area or a vector length is effectively
/// zero.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let area: f64 = 1e-12;
/// assert!(area.abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Threshold below which a facet normal is replaced with the zero vector.
///
/// The cross product of two edges of a sliver triangle can be arbitrarily
/// small; normalizing it would amplify noise or divide by zero.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMAL_EPSILON;
///
/// let length: f64 = 1e-15;
/// let usable = length >= NORMAL_EPSILON;
/// assert!(!usable);
/// ```
pub const NORMAL_EPSILON: f64 = 1e-12;

/// Number of digits printed after the decimal point for every number in the
/// STL text output.
///
/// # Example
///
/// ```rust
/// use config::constants::COORDINATE_DECIMALS;
///
/// let text = format!("{:.*}", COORDINATE_DECIMALS, 1.0);
/// assert_eq!(text, "1.000000");
/// ```
pub const COORDINATE_DECIMALS: usize = 6;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default number of facets used to tessellate cylinders, frustums and the
/// hub pocket wall.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FACETS;
///
/// let facets = None.unwrap_or(DEFAULT_FACETS);
/// assert_eq!(facets, 64);
/// ```
pub const DEFAULT_FACETS: u32 = 64;

/// Minimum facet count for any round primitive.
///
/// Three facets is the smallest closed ring.
pub const MIN_FACETS: u32 = 3;

/// Maximum facet count for any round primitive.
///
/// Safety limit against runaway tessellation of the 2N prongs.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_FACETS;
///
/// let requested = 100_000u32;
/// assert_eq!(requested.min(MAX_FACETS), MAX_FACETS);
/// ```
pub const MAX_FACETS: u32 = 1000;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Minimum number of plate faces. A regular polygon needs three sides.
pub const MIN_FACES: usize = 3;

/// Default plate width measured flat-to-flat (mm).
pub const DEFAULT_ACROSS_FLATS: f64 = 60.0;

/// Default plate thickness (mm).
pub const DEFAULT_THICKNESS: f64 = 4.0;

/// Default prong length measured outward from the plate face (mm).
pub const DEFAULT_PRONG_LENGTH: f64 = 8.0;

/// Default prong diameter at the root (mm).
///
/// For flat prongs this is the width of the triangle base.
pub const DEFAULT_PRONG_BASE_DIAMETER: f64 = 1.6;

/// Default prong diameter at the tip (mm). Used by round prongs only.
pub const DEFAULT_PRONG_TIP_DIAMETER: f64 = 0.6;

/// Default distance a prong root is sunk into the plate body (mm).
pub const DEFAULT_PRONG_ROOT_OVERLAP: f64 = 1.0;

/// Default thumb-well diameter (mm).
pub const DEFAULT_HUB_DIAMETER: f64 = 18.0;

/// Default thumb-well depth (mm).
pub const DEFAULT_HUB_POCKET_DEPTH: f64 = 1.5;

/// Default label glyph height (mm).
pub const DEFAULT_LABEL_HEIGHT: f64 = 5.0;

/// Default engraving depth (mm).
pub const DEFAULT_LABEL_DEPTH: f64 = 0.6;

/// Default label position as a fraction of the apothem.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_ACROSS_FLATS, DEFAULT_LABEL_RADIAL_FRACTION};
///
/// let apothem = DEFAULT_ACROSS_FLATS / 2.0;
/// let label_radius = DEFAULT_LABEL_RADIAL_FRACTION * apothem;
/// assert!(label_radius < apothem);
/// ```
pub const DEFAULT_LABEL_RADIAL_FRACTION: f64 = 0.7;

/// Fraction of the plate thickness kept as material between a cavity floor
/// and the plate mid-plane.
pub const DEPTH_MARGIN_FRACTION: f64 = 0.05;

// =============================================================================
// GLYPH CONSTANTS
// =============================================================================

/// Seven-segment stroke width as a fraction of glyph height.
pub const GLYPH_STROKE_RATIO: f64 = 0.18;

/// Seven-segment body width as a fraction of glyph height.
pub const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Horizontal gap between adjacent digits as a fraction of glyph height.
pub const GLYPH_GAP_RATIO: f64 = 0.2;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Model name written after `solid` / `endsolid`.
pub const DEFAULT_SOLID_NAME: &str = "wheel";

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "wheel.stl";

/// Executable looked up on `PATH` by the OpenSCAD backend.
pub const OPENSCAD_EXECUTABLE: &str = "openscad";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the deepest cavity allowed in a plate of the given thickness.
///
/// Pockets cut from the top and the bottom of the plate must never meet, so
/// each is limited to half the thickness minus a safety margin.
///
/// # Example
///
/// ```rust
/// use config::constants::max_cavity_depth;
///
/// let depth = max_cavity_depth(4.0);
/// assert!((depth - 1.8).abs() < 1e-12);
/// ```
#[inline]
pub fn max_cavity_depth(thickness: f64) -> f64 {
    thickness * (0.5 - DEPTH_MARGIN_FRACTION)
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
