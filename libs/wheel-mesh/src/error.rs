//! # Mesh Errors
//!
//! Error types for parameter validation, mesh generation and STL I/O.

use thiserror::Error;

/// Errors raised while validating a wheel parameter set.
///
/// Validation happens before any geometry is built, so none of these can
/// leave a partial mesh behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// No distances were supplied.
    #[error("Distance list is empty")]
    EmptyDistances,

    /// Fewer than three faces were requested.
    #[error("Face count must be at least {min}: got {count}")]
    TooFewFaces { count: usize, min: usize },

    /// An explicit face count disagrees with the number of distances.
    #[error("Face count {expected} does not match {actual} distances")]
    FaceCountMismatch { expected: usize, actual: usize },

    /// A distance is non-finite, zero or negative.
    #[error("Distance #{index} must be a finite positive number: {value}")]
    InvalidDistance { index: usize, value: f64 },

    /// A distance entry could not be parsed as a number.
    #[error("Distance entry is not a number: {input:?}")]
    InvalidNumber { input: String },

    /// A geometric length is non-finite, zero or negative.
    #[error("{name} must be a finite positive number: {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A cavity depth reaches through the whole plate.
    #[error("{name} ({depth}) must be smaller than the plate thickness ({thickness})")]
    DepthTooLarge {
        name: &'static str,
        depth: f64,
        thickness: f64,
    },

    /// The thumb well is wider than the plate.
    #[error("Hub diameter ({diameter}) must be smaller than the plate width ({across_flats})")]
    HubTooLarge { diameter: f64, across_flats: f64 },

    /// Label position lies outside the plate.
    #[error("Label radial fraction must be in (0, 1]: {value}")]
    RadialFractionOutOfRange { value: f64 },

    /// Facet count outside the supported tessellation range.
    #[error("Facet count must be between {min} and {max}: got {count}")]
    FacetCount { count: u32, min: u32, max: u32 },

    /// Unrecognized style or side keyword.
    #[error("Unknown {kind}: {value:?}")]
    UnknownOption { kind: &'static str, value: String },
}

/// Errors that can occur during mesh generation and serialization.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Parameter set rejected before generation started
    #[error("Invalid parameters: {0}")]
    Params(#[from] ParamError),

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Character without a seven-segment mapping
    #[error("Unsupported glyph: {ch:?}")]
    UnsupportedGlyph { ch: char },

    /// Malformed STL text
    #[error("Invalid STL at line {line}: {message}")]
    InvalidStl { line: usize, message: String },

    /// Alternate backend failure
    #[error("{backend} backend failed: {source}")]
    Backend {
        backend: &'static str,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Text formatting failed
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an STL parse error for the given 1-based line.
    pub fn invalid_stl(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidStl {
            line,
            message: message.into(),
        }
    }

    /// Wraps an error raised by an alternate backend.
    pub fn backend(
        backend: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            backend,
            source: Box::new(source),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
