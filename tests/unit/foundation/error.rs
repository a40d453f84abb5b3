use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ForgeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ForgeError::image("x").to_string().contains("image error:"));
    assert!(ForgeError::render("x").to_string().contains("render error:"));
    assert!(ForgeError::crop("x").to_string().contains("crop error:"));
    assert!(
        ForgeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ForgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: ForgeError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
    assert!(matches!(err, ForgeError::Serde(_)));
}
