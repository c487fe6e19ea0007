//! End-to-end tests for wheel generation.

use approx::assert_relative_eq;
use wheel_mesh::builders::glyph::{digit_segments, label_text};
use wheel_mesh::frame::FaceFrame;
use wheel_mesh::stl::{parse_ascii, to_ascii_string};
use wheel_mesh::{
    assemble, generate_stl, GeometryConfig, LabelSides, LabelStyle, MeshError, ParamError,
    PartKind, ProngStyle, WheelParams,
};

const DISTANCES: [f64; 8] = [2.0, 4.0, 6.0, 8.0, 10.0, 15.0, 20.0, 25.0];

fn default_params() -> WheelParams {
    WheelParams::with_defaults(DISTANCES.to_vec()).unwrap()
}

#[test]
fn test_reference_wheel_composition() {
    let wheel = assemble(&default_params()).unwrap();

    assert_eq!(wheel.count(PartKind::Plate), 1);
    assert_eq!(wheel.count(PartKind::Prong), 16);
    assert_eq!(wheel.count(PartKind::HubPocket), 1);
    assert_eq!(wheel.count(PartKind::Label), 8);

    let labels: Vec<(usize, String)> = wheel
        .parts()
        .iter()
        .filter(|p| p.kind == PartKind::Label)
        .map(|p| (p.face.unwrap(), p.text.clone().unwrap()))
        .collect();
    let expected: Vec<(usize, String)> = DISTANCES
        .iter()
        .enumerate()
        .map(|(i, d)| (i, label_text(*d)))
        .collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_reference_wheel_label_triangles() {
    let wheel = assemble(&default_params()).unwrap();
    for part in wheel.parts().iter().filter(|p| p.kind == PartKind::Label) {
        let text = part.text.as_deref().unwrap();
        let segments: usize = text
            .chars()
            .map(|c| digit_segments(c).unwrap().len())
            .sum();
        // both faces engraved, 4 walls + floor per segment
        assert_eq!(part.triangles.len(), segments * 2 * 10, "label {text}");
    }
}

#[test]
fn test_prong_pairs_straddle_face_midpoints() {
    let params = default_params();
    let wheel = assemble(&params).unwrap();
    let mesh = wheel.mesh();

    for (face, distance) in DISTANCES.iter().enumerate() {
        let frame = FaceFrame::new(face, 8, params.apothem());
        let centers: Vec<f64> = wheel
            .parts()
            .iter()
            .filter(|p| p.kind == PartKind::Prong && p.face == Some(face))
            .map(|p| {
                let pts: Vec<_> = p
                    .triangles
                    .clone()
                    .flat_map(|t| mesh.triangle_points(t))
                    .collect();
                let sum: f64 = pts.iter().map(|v| (*v - frame.center).dot(frame.tangent)).sum();
                sum / pts.len() as f64
            })
            .collect();
        assert_eq!(centers.len(), 2);
        assert_relative_eq!(centers[1] - centers[0], *distance, epsilon = 1e-9);
    }
}

#[test]
fn test_solids_are_closed_and_cavities_inverted() {
    let wheel = assemble(&default_params()).unwrap();
    let mesh = wheel.mesh();
    for part in wheel.parts() {
        let mut sub = wheel_mesh::Mesh::new();
        for t in part.triangles.clone() {
            sub.push_triangle(mesh.triangle_points(t));
        }
        match part.kind {
            PartKind::Plate | PartKind::Prong => assert!(sub.signed_volume() > 0.0),
            PartKind::HubPocket => assert!(sub.signed_volume() < 0.0),
            PartKind::Label => {}
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let params = default_params();
    let first = generate_stl(&params, "wheel").unwrap();
    let second = generate_stl(&params, "wheel").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_stl_round_trip_precision() {
    let mesh = assemble(&default_params()).unwrap().into_mesh();
    let parsed = parse_ascii(&to_ascii_string(&mesh, "wheel").unwrap()).unwrap();

    assert_eq!(parsed.name, "wheel");
    assert_eq!(parsed.mesh.triangle_count(), mesh.triangle_count());
    for (a, b) in mesh.facets().zip(parsed.mesh.facets()) {
        for (p, q) in a.iter().zip(b.iter()) {
            assert!((*p - *q).abs().max_element() <= 5e-7, "{p} vs {q}");
        }
    }
}

#[test]
fn test_every_number_has_six_decimals() {
    let text = generate_stl(&default_params(), "wheel").unwrap();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let numbers = if let Some(rest) = trimmed.strip_prefix("facet normal ") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("vertex ") {
            rest
        } else {
            continue;
        };
        for field in numbers.split(' ') {
            let (_, decimals) = field.split_once('.').unwrap();
            assert_eq!(decimals.len(), 6, "{line}");
        }
    }
}

#[test]
fn test_three_faces_is_enough() {
    let wheel = assemble(&WheelParams::with_defaults(vec![5.0, 10.0, 15.0]).unwrap()).unwrap();
    assert_eq!(wheel.count(PartKind::Prong), 6);
}

#[test]
fn test_rejected_inputs_build_nothing() {
    assert!(matches!(
        WheelParams::with_defaults(vec![5.0, 10.0]),
        Err(ParamError::TooFewFaces { count: 2, .. })
    ));
    assert!(matches!(
        WheelParams::with_defaults(vec![5.0, 0.0, 10.0]),
        Err(ParamError::InvalidDistance { index: 1, .. })
    ));
    assert!(matches!(
        WheelParams::with_defaults(vec![-1.0, 5.0, 10.0]),
        Err(ParamError::InvalidDistance { index: 0, .. })
    ));
    assert!(matches!(
        WheelParams::with_defaults(vec![f64::NAN, 5.0, 10.0]),
        Err(ParamError::InvalidDistance { index: 0, .. })
    ));
    assert!(matches!(
        WheelParams::with_defaults(vec![]),
        Err(ParamError::EmptyDistances)
    ));

    let err: MeshError = ParamError::EmptyDistances.into();
    assert!(err.to_string().contains("Distance list is empty"));
}

#[test]
fn test_round_through_cut_variant() {
    let geometry = GeometryConfig {
        prong_style: ProngStyle::Round,
        label_style: LabelStyle::ThroughCut,
        facet_count: 24,
        ..Default::default()
    };
    let params = WheelParams::new(DISTANCES.to_vec(), geometry).unwrap();
    let wheel = assemble(&params).unwrap();

    assert_eq!(wheel.count(PartKind::Prong), 16);
    for part in wheel.parts() {
        match part.kind {
            PartKind::Prong => assert_eq!(part.triangles.len(), 4 * 24),
            PartKind::HubPocket => assert_eq!(part.triangles.len(), 3 * 24),
            _ => {}
        }
    }

    let (min, max) = wheel.mesh().bounding_box();
    assert_relative_eq!(min.z, 0.0);
    assert_relative_eq!(max.z, params.thickness());
}

#[test]
fn test_deep_cavities_are_clamped() {
    let geometry = GeometryConfig {
        thickness: 4.0,
        hub_pocket_depth: 3.5,
        label_depth: 3.0,
        label_sides: LabelSides::Both,
        ..Default::default()
    };
    let params = WheelParams::new(DISTANCES.to_vec(), geometry).unwrap();
    let wheel = assemble(&params).unwrap();
    let mesh = wheel.mesh();

    for part in wheel.parts().iter().filter(|p| p.kind.is_cavity()) {
        for t in part.triangles.clone() {
            for p in mesh.triangle_points(t) {
                // nothing reaches the mid-plane
                assert!((p.z - 2.0).abs() > 0.1, "{:?} at {p}", part.kind);
            }
        }
    }
}
