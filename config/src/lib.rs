//! # Config Crate
//!
//! Centralized configuration constants for the discrimination wheel
//! generator. Default geometry, tessellation limits, glyph proportions and
//! numeric tolerances are defined here so the mesh engine, the OpenSCAD
//! backend and the command line agree on a single set of values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{max_cavity_depth, DEFAULT_THICKNESS, DEFAULT_FACETS};
//!
//! // Cavities never reach the plate mid-plane
//! assert!(max_cavity_depth(DEFAULT_THICKNESS) < DEFAULT_THICKNESS / 2.0);
//!
//! // Round primitives are tessellated with a fixed facet count
//! assert!(DEFAULT_FACETS >= 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetres**: Every length is expressed in mm
//! - **Printable Defaults**: Defaults produce a wheel that prints on a hobby FDM printer

pub mod constants;
