//! # ASCII STL
//!
//! Text triangle-mesh exchange format.
//!
//! ```text
//! solid name
//!  facet normal nx ny nz
//!   outer loop
//!    vertex x y z
//!    vertex x y z
//!    vertex x y z
//!   endloop
//!  endfacet
//!  ...
//! endsolid name
//! ```
//!
//! Every number is written with six digits after the decimal point. Facet
//! normals are recomputed from the vertex order on write and ignored on read.

use crate::error::MeshError;
use crate::mesh::{triangle_normal, Mesh};
use config::constants::{COORDINATE_DECIMALS, DEFAULT_SOLID_NAME};
use glam::DVec3;
use std::fmt::Write as _;

/// Solid name as written after `solid`/`endsolid`: whitespace becomes `_`,
/// an empty name falls back to the default.
pub fn sanitize_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_SOLID_NAME.to_string();
    }
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Writes `x y z` at fixed precision. Negative zero is printed as zero.
fn write_triple(out: &mut String, v: DVec3) -> std::fmt::Result {
    let p = COORDINATE_DECIMALS;
    write!(
        out,
        "{:.p$} {:.p$} {:.p$}",
        v.x + 0.0,
        v.y + 0.0,
        v.z + 0.0
    )
}

/// Serializes a mesh into an ASCII STL string.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::{stl, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push_triangle([DVec3::ZERO, DVec3::X, DVec3::Y]);
///
/// let text = stl::to_ascii_string(&mesh, "tri").unwrap();
/// assert!(text.starts_with("solid tri\n facet normal 0.000000 0.000000 1.000000\n"));
/// assert!(text.ends_with("endsolid tri\n"));
/// ```
pub fn to_ascii_string(mesh: &Mesh, name: &str) -> Result<String, MeshError> {
    let name = sanitize_name(name);
    // ~7 lines of ~40 bytes per facet
    let mut out = String::with_capacity(64 + mesh.triangle_count() * 280);

    writeln!(out, "solid {name}")?;
    for tri in mesh.facets() {
        out.push_str(" facet normal ");
        write_triple(&mut out, triangle_normal(tri))?;
        out.push_str("\n  outer loop\n");
        for v in tri {
            out.push_str("   vertex ");
            write_triple(&mut out, v)?;
            out.push('\n');
        }
        out.push_str("  endloop\n endfacet\n");
    }
    writeln!(out, "endsolid {name}")?;

    Ok(out)
}

/// A parsed ASCII STL document.
#[derive(Debug, Clone, PartialEq)]
pub struct StlSolid {
    pub name: String,
    pub mesh: Mesh,
}

fn parse_triple(fields: &[&str], line: usize) -> Result<DVec3, MeshError> {
    if fields.len() != 3 {
        return Err(MeshError::invalid_stl(
            line,
            format!("expected 3 numbers, found {}", fields.len()),
        ));
    }
    let mut xyz = [0.0; 3];
    for (slot, field) in xyz.iter_mut().zip(fields) {
        *slot = field
            .parse()
            .map_err(|_| MeshError::invalid_stl(line, format!("invalid number {field:?}")))?;
    }
    Ok(DVec3::from_array(xyz))
}

/// Parses an ASCII STL document.
///
/// Keywords are matched case-insensitively and indentation is ignored.
/// Each facet must contain exactly three vertices. Vertices are not shared
/// between facets in the resulting mesh.
///
/// # Errors
///
/// [`MeshError::InvalidStl`] with the 1-based line of the first problem.
pub fn parse_ascii(text: &str) -> Result<StlSolid, MeshError> {
    let mut name = None;
    let mut mesh = Mesh::new();
    let mut facet: Option<Vec<DVec3>> = None;
    let mut in_loop = false;
    let mut ended = false;
    let mut last_line = 0;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        last_line = line;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        let Some(keyword) = fields.first() else {
            continue;
        };
        if ended {
            return Err(MeshError::invalid_stl(line, "content after endsolid"));
        }

        match keyword.to_ascii_lowercase().as_str() {
            "solid" if name.is_none() => {
                name = Some(fields[1..].join(" "));
            }
            _ if name.is_none() => {
                return Err(MeshError::invalid_stl(line, "expected 'solid'"));
            }
            "facet" if facet.is_none() => {
                if fields.get(1).map(|f| f.eq_ignore_ascii_case("normal")) != Some(true) {
                    return Err(MeshError::invalid_stl(line, "expected 'facet normal'"));
                }
                parse_triple(&fields[2..], line)?;
                facet = Some(Vec::with_capacity(3));
            }
            "outer" if facet.is_some() && !in_loop => {
                if fields.get(1).map(|f| f.eq_ignore_ascii_case("loop")) != Some(true) {
                    return Err(MeshError::invalid_stl(line, "expected 'outer loop'"));
                }
                in_loop = true;
            }
            "vertex" if in_loop => {
                let vertex = parse_triple(&fields[1..], line)?;
                if let Some(points) = facet.as_mut() {
                    if points.len() == 3 {
                        return Err(MeshError::invalid_stl(line, "more than 3 vertices in facet"));
                    }
                    points.push(vertex);
                }
            }
            "endloop" if in_loop => {
                in_loop = false;
            }
            "endfacet" if facet.is_some() && !in_loop => {
                let points = facet.take().unwrap_or_default();
                match <[DVec3; 3]>::try_from(points) {
                    Ok(tri) => mesh.push_triangle(tri),
                    Err(points) => {
                        return Err(MeshError::invalid_stl(
                            line,
                            format!("facet has {} vertices", points.len()),
                        ))
                    }
                }
            }
            "endsolid" if facet.is_none() => {
                ended = true;
            }
            other => {
                return Err(MeshError::invalid_stl(line, format!("unexpected {other:?}")));
            }
        }
    }

    match name {
        Some(name) if ended => Ok(StlSolid { name, mesh }),
        Some(_) => Err(MeshError::invalid_stl(last_line, "missing endsolid")),
        None => Err(MeshError::invalid_stl(last_line.max(1), "empty document")),
    }
}
