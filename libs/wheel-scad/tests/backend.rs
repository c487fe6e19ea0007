//! Subprocess backend tests.
//!
//! None of these need OpenSCAD installed. The Unix-only cases stand in a
//! `sh -c` program for the executable; it receives `-o <out> <script>` as
//! `$1 $2 $3`.

use wheel_mesh::{MeshBackend, MeshError, WheelParams};
use wheel_scad::{OpenScadBackend, ScadError};

fn params() -> WheelParams {
    WheelParams::with_defaults(vec![2.0, 4.0, 6.0]).unwrap()
}

#[test]
fn test_missing_executable() {
    let backend = OpenScadBackend::new("/nonexistent/dir/openscad-not-installed");
    match backend.render(&params()) {
        Err(ScadError::NotFound { executable }) => {
            assert!(executable.ends_with("openscad-not-installed"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_missing_executable_through_trait() {
    let backend = OpenScadBackend::new("/nonexistent/dir/openscad-not-installed");
    let err = backend.build(&params()).unwrap_err();
    assert!(matches!(err, MeshError::Backend { backend: "openscad", .. }));
    assert!(err.to_string().contains("not found"));
}

#[cfg(unix)]
fn fake(program: &str) -> OpenScadBackend {
    OpenScadBackend::new("sh").with_args(["-c", program, "openscad"])
}

#[cfg(unix)]
#[test]
fn test_fake_openscad_output_is_parsed() {
    let backend = fake(
        r#"test "$1" = "-o" || exit 9
grep -q "difference()" "$3" || exit 8
printf 'solid OpenSCAD_Model\n facet normal 0 0 1\n  outer loop\n   vertex 0 0 0\n   vertex 1 0 0\n   vertex 0 1 0\n  endloop\n endfacet\nendsolid OpenSCAD_Model\n' > "$2""#,
    );
    let mesh = backend.build(&params()).unwrap();
    assert_eq!(mesh.triangle_count(), 1);
}

#[cfg(unix)]
#[test]
fn test_nonzero_exit_reports_stderr() {
    let backend = fake("echo 'ERROR: Parser error' >&2; exit 3");
    match backend.render(&params()) {
        Err(ScadError::Failed { status, stderr }) => {
            assert_eq!(status, Some(3));
            assert_eq!(stderr, "ERROR: Parser error");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_silent_success_without_output() {
    let backend = fake("exit 0");
    assert!(matches!(
        backend.render(&params()),
        Err(ScadError::MissingOutput { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_garbage_output_is_a_parse_error() {
    let backend = fake(r#"echo 'not an stl' > "$2""#);
    assert!(matches!(
        backend.render(&params()),
        Err(ScadError::Parse(MeshError::InvalidStl { line: 1, .. }))
    ));
}
