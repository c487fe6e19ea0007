//! # Component Builders
//!
//! One builder per wheel component. Each consumes the primitives and returns
//! a standalone [`Mesh`](crate::Mesh); the assembler concatenates them.
//!
//! Additive parts (plate, prongs) are closed outward-facing solids. Cavity
//! parts (hub pocket, labels) are open boundaries with inverted winding,
//! positioned inside the plate instead of being subtracted from it.

pub mod glyph;
pub mod hub;
pub mod label;
pub mod plate;
pub mod prong;

pub use hub::create_hub_pocket;
pub use label::{create_label, Label, LabelSpec};
pub use plate::create_plate;
pub use prong::{create_prong, create_prong_pair, ProngSpec};
