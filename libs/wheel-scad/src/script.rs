//! # Script Generation
//!
//! Renders a parameter set as a self-contained OpenSCAD program. Every
//! option becomes a top-level variable. Label glyphs are expanded here with
//! the same seven-segment layout the native engine uses, so both backends
//! print identical digits.
//!
//! Inside `face(i)` the local frame is rotated so that +X is the face's
//! outward axis and +Y its tangent.

use crate::error::ScadError;
use std::fmt::Write as _;
use wheel_mesh::builders::glyph::{label_text, layout_text};
use wheel_mesh::builders::LabelSpec;
use wheel_mesh::{LabelStyle, ProngStyle, WheelParams};

/// Overshoot applied to cutters so CSG faces never coincide.
pub const CUT_EPSILON: f64 = 0.01;

fn list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Generates the OpenSCAD source for `params`.
///
/// # Example
///
/// ```rust
/// use wheel_mesh::WheelParams;
/// use wheel_scad::script::generate_script;
///
/// let params = WheelParams::with_defaults(vec![2.0, 4.0, 6.0]).unwrap();
/// let source = generate_script(&params).unwrap();
/// assert!(source.contains("distances = [2, 4, 6];"));
/// assert!(source.contains("difference()"));
/// ```
pub fn generate_script(params: &WheelParams) -> Result<String, ScadError> {
    let g = params.geometry();
    let label = LabelSpec::from_params(params);
    let mut out = String::new();

    writeln!(out, "// Two-point discrimination wheel")?;
    writeln!(out)?;
    writeln!(out, "distances = {};", list(params.distances()))?;
    writeln!(out, "across_flats = {};", g.across_flats)?;
    writeln!(out, "thickness = {};", g.thickness)?;
    writeln!(out, "prong_style = \"{}\";", g.prong_style)?;
    writeln!(out, "prong_length = {};", g.prong_length)?;
    writeln!(out, "prong_base_d = {};", g.prong_base_d)?;
    writeln!(out, "prong_tip_d = {};", g.prong_tip_d)?;
    writeln!(out, "prong_root_overlap = {};", g.prong_root_overlap)?;
    writeln!(out, "hub_diameter = {};", g.hub_diameter)?;
    writeln!(out, "hub_pocket_depth = {};", params.hub_pocket_depth())?;
    writeln!(out, "label_height = {};", g.label_height)?;
    writeln!(out, "label_depth = {};", params.label_depth())?;
    writeln!(out, "label_radial_fraction = {};", g.label_radial_fraction)?;
    writeln!(out, "label_style = \"{}\";", g.label_style)?;
    writeln!(out, "label_sides = \"{}\";", g.label_sides)?;
    writeln!(out, "eps = {CUT_EPSILON};")?;
    writeln!(out, "$fn = {};", g.facet_count)?;
    writeln!(out)?;
    writeln!(out, "N = len(distances);")?;
    writeln!(out, "apothem = across_flats / 2;")?;
    writeln!(out, "circumradius = apothem / cos(180 / N);")?;
    writeln!(out, "label_radius = label_radial_fraction * apothem;")?;
    writeln!(out)?;

    out.push_str(MODULES);
    out.push_str(match g.prong_style {
        ProngStyle::Flat => FLAT_PRONG,
        ProngStyle::Round => ROUND_PRONG,
    });
    writeln!(out)?;

    // Label cutters: one module per face, segments in (outward, tangent)
    let slabs: Vec<(&str, &str)> = match g.label_style {
        LabelStyle::ThroughCut => vec![("-eps", "thickness + 2 * eps")],
        LabelStyle::Engraved => {
            let mut slabs = Vec::new();
            if g.label_sides.top() {
                slabs.push(("thickness - label_depth", "label_depth + eps"));
            }
            if g.label_sides.bottom() {
                slabs.push(("-eps", "label_depth + eps"));
            }
            slabs
        }
    };
    for (i, &distance) in params.distances().iter().enumerate() {
        let text = label_text(distance);
        writeln!(out, "// face {i}: \"{text}\"")?;
        writeln!(out, "module label_{i}() {{")?;
        for segment in layout_text(&text, &label.metrics)? {
            let size = segment.rect.size();
            for (z, height) in &slabs {
                writeln!(
                    out,
                    "    translate([label_radius + {}, {}, {z}]) cube([{}, {}, {height}]);",
                    segment.rect.min.y, segment.rect.min.x, size.y, size.x
                )?;
            }
        }
        writeln!(out, "}}")?;
    }
    writeln!(out)?;

    writeln!(out, "difference() {{")?;
    writeln!(out, "    union() {{")?;
    writeln!(out, "        plate();")?;
    writeln!(out, "        for (i = [0 : N - 1]) face(i) prong_pair(distances[i]);")?;
    writeln!(out, "    }}")?;
    writeln!(out, "    hub_pocket();")?;
    for i in 0..params.face_count() {
        writeln!(out, "    face({i}) label_{i}();")?;
    }
    writeln!(out, "}}")?;

    Ok(out)
}

const MODULES: &str = r#"module face(i) {
    rotate([0, 0, -360 * (i + 0.5) / N]) children();
}

module plate() {
    linear_extrude(height = thickness) circle(r = circumradius, $fn = N);
}

module hub_pocket() {
    translate([0, 0, thickness - hub_pocket_depth])
        cylinder(d = hub_diameter, h = hub_pocket_depth + eps);
}

module prong_pair(separation) {
    for (side = [-1, 1]) prong(side * separation / 2);
}

"#;

const FLAT_PRONG: &str = r#"module prong(lateral) {
    translate([apothem, 0, 0])
        linear_extrude(height = thickness)
            polygon([
                [-prong_root_overlap, lateral - prong_base_d / 2],
                [-prong_root_overlap, lateral + prong_base_d / 2],
                [prong_length - prong_root_overlap, lateral],
            ]);
}
"#;

const ROUND_PRONG: &str = r#"module prong(lateral) {
    translate([apothem - prong_root_overlap, lateral, thickness / 2])
        rotate([0, 90, 0])
            cylinder(h = prong_length, d1 = prong_base_d, d2 = prong_tip_d);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use wheel_mesh::builders::glyph::digit_segments;
    use wheel_mesh::{GeometryConfig, LabelSides};

    fn script(distances: Vec<f64>, geometry: GeometryConfig) -> String {
        generate_script(&WheelParams::new(distances, geometry).unwrap()).unwrap()
    }

    #[test]
    fn test_variables_are_declared() {
        let source = script(vec![2.5, 4.0, 6.0, 8.0], GeometryConfig::default());
        for name in [
            "distances", "across_flats", "thickness", "prong_style", "prong_length",
            "prong_base_d", "prong_tip_d", "prong_root_overlap", "hub_diameter",
            "hub_pocket_depth", "label_height", "label_depth", "label_radial_fraction",
            "label_style", "label_sides", "$fn",
        ] {
            assert!(source.contains(&format!("\n{name} = ")), "{name}");
        }
        assert!(source.contains("distances = [2.5, 4, 6, 8];"));
        assert!(source.contains("$fn = 64;"));
    }

    #[test]
    fn test_one_label_module_per_face() {
        let source = script(vec![2.0, 4.0, 6.0, 8.0, 10.0], GeometryConfig::default());
        for i in 0..5 {
            assert!(source.contains(&format!("module label_{i}()")));
            assert!(source.contains(&format!("face({i}) label_{i}();")));
        }
        assert!(source.contains("// face 4: \"10\""));
    }

    #[test]
    fn test_cutter_count_matches_segments() {
        let geometry = GeometryConfig {
            label_sides: LabelSides::Top,
            ..Default::default()
        };
        let source = script(vec![8.0, 11.0, 7.0], geometry);
        let expected: usize = "8117".chars().map(|c| digit_segments(c).unwrap().len()).sum();
        assert_eq!(source.matches("cube([").count(), expected);
    }

    #[test]
    fn test_both_sides_doubles_cutters() {
        let top_only = GeometryConfig {
            label_sides: LabelSides::Top,
            ..Default::default()
        };
        let top = script(vec![8.0; 3], top_only);
        let both = script(vec![8.0; 3], GeometryConfig::default());
        assert_eq!(both.matches("cube([").count(), 2 * top.matches("cube([").count());
    }

    #[test]
    fn test_style_selects_prong_module() {
        let flat = script(vec![3.0; 3], GeometryConfig::default());
        assert!(flat.contains("polygon(["));
        assert!(!flat.contains("d1 = prong_base_d"));

        let round = script(
            vec![3.0; 3],
            GeometryConfig {
                prong_style: ProngStyle::Round,
                ..Default::default()
            },
        );
        assert!(round.contains("d1 = prong_base_d"));
        assert!(round.contains("prong_style = \"round\";"));
    }

    #[test]
    fn test_through_cut_spans_plate() {
        let source = script(
            vec![3.0; 3],
            GeometryConfig {
                label_style: LabelStyle::ThroughCut,
                ..Default::default()
            },
        );
        assert!(source.contains("label_style = \"through-cut\";"));
        assert!(source.contains(", -eps]) cube(["));
        assert!(source.contains(", thickness + 2 * eps]);"));
        assert!(!source.contains("thickness - label_depth"));
    }

    #[test]
    fn test_clamped_depths_are_emitted() {
        let source = script(
            vec![3.0; 3],
            GeometryConfig {
                thickness: 4.0,
                hub_pocket_depth: 3.0,
                ..Default::default()
            },
        );
        assert!(source.contains("hub_pocket_depth = 1.8;"));
    }

    #[test]
    fn test_braces_balance() {
        let source = script(vec![2.0, 4.0, 6.0, 8.0], GeometryConfig::default());
        assert_eq!(source.matches('{').count(), source.matches('}').count());
        assert_eq!(source.matches('[').count(), source.matches(']').count());
    }
}
