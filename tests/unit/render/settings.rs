use super::*;

#[test]
fn defaults_match_export_density() {
    let s = RenderSettings::default();
    assert_eq!(s.pixel_ratio, 2.0);
    assert!(s.validate().is_ok());
}

#[test]
fn pixel_ratio_is_bounded() {
    for bad in [0.0, -1.0, f32::NAN, 64.0] {
        let err = RenderSettings::default().with_pixel_ratio(bad).validate();
        assert!(matches!(err, Err(ForgeError::Validation(_))), "{bad}");
    }
    assert!(RenderSettings::default().with_pixel_ratio(1.0).validate().is_ok());
}

#[test]
fn document_directory_becomes_assets_root() {
    let s = RenderSettings::for_document(Path::new("decks/fire/card.json"));
    assert_eq!(s.assets_root, PathBuf::from("decks/fire"));
    let bare = RenderSettings::for_document(Path::new("card.json"));
    assert_eq!(bare.assets_root, PathBuf::from("."));
}

#[test]
fn serializes_camel_case() {
    let json = serde_json::to_value(RenderSettings::default()).unwrap();
    assert!(json.get("pixelRatio").is_some());
    assert!(json.get("assetsRoot").is_some());
    assert!(json.get("fontDirs").is_some());
}
