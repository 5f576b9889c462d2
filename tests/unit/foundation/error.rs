use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SceneError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn path_renders_fields_and_indices() {
    let err = ValidationError::at(
        &[
            PathElem::Field("instructions"),
            PathElem::Index(3),
            PathElem::Index(0),
            PathElem::Field("velo"),
        ],
        "velo must be in [0, 127] (got 128)",
    );
    assert_eq!(err.path_string(), "$.instructions[3][0].velo");
    assert_eq!(
        err.to_string(),
        "$.instructions[3][0].velo: velo must be in [0, 127] (got 128)"
    );
}

#[test]
fn root_error_has_no_path_prefix() {
    let err = ValidationError::at(&[], "expected an object");
    assert_eq!(err.to_string(), "expected an object");
}

#[test]
fn nested_prepends_prefix() {
    let err = ValidationError::at(&[PathElem::Field("opacity")], "bad")
        .nested(&[PathElem::Field("objects"), PathElem::Index(2)]);
    assert_eq!(err.path_string(), "$.objects[2].opacity");
}
