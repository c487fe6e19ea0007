//! # Primitives
//!
//! Reusable building blocks: polygon prisms, frustums/cylinders along an
//! arbitrary axis and axis-aligned rectangular prisms. Every function returns
//! a fresh [`Mesh`](crate::Mesh) with outward winding.

pub mod cuboid;
pub mod frustum;
pub mod polygon;

pub use cuboid::create_cuboid;
pub use frustum::{create_cylinder, create_frustum};
pub use polygon::{circle_points, extrude_polygon, signed_area};

/// Selects which end caps a prism emits.
///
/// Closed solids use [`Caps::BOTH`]. Cavity boundaries leave the end that
/// opens onto a plate face uncovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caps {
    /// Cap at the lower z bound.
    pub bottom: bool,
    /// Cap at the upper z bound.
    pub top: bool,
}

impl Caps {
    /// Both ends closed.
    pub const BOTH: Caps = Caps {
        bottom: true,
        top: true,
    };
    /// Side walls only.
    pub const NONE: Caps = Caps {
        bottom: false,
        top: false,
    };
    /// Only the lower end closed.
    pub const BOTTOM: Caps = Caps {
        bottom: true,
        top: false,
    };
    /// Only the upper end closed.
    pub const TOP: Caps = Caps {
        bottom: false,
        top: true,
    };
}
