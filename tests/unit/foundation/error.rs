use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PhotoplateError::invalid_geometry("x")
            .to_string()
            .contains("invalid geometry:")
    );
    assert!(
        PhotoplateError::malformed_template("x")
            .to_string()
            .contains("malformed template:")
    );
    assert!(
        PhotoplateError::asset_not_found("x")
            .to_string()
            .contains("asset not found:")
    );
    assert!(
        PhotoplateError::export_failed("x")
            .to_string()
            .contains("export failed:")
    );
    assert!(
        PhotoplateError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PhotoplateError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
