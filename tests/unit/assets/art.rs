use super::*;

fn png_data_url(w: u32, h: u32) -> String {
    let img = RgbaImage::from_pixel(w, h, Rgba([200, 10, 10, 255]));
    DataUrl::new("image/png", encode_png(&img).unwrap()).to_uri()
}

#[test]
fn classify_sources() {
    let root = Path::new("/srv/cards");
    assert!(matches!(
        ArtSource::classify("data:image/png;base64,AA==", root),
        ArtSource::Inline(_)
    ));
    assert!(matches!(
        ArtSource::classify("https://example.com/a.png", root),
        ArtSource::Remote(_)
    ));
    assert_eq!(
        ArtSource::classify("art/fire.png", root),
        ArtSource::File(root.join("art/fire.png"))
    );
}

#[test]
fn inline_image_decodes() {
    let art = resolve_art(
        Some(&png_data_url(3, 5)),
        PlaceholderStyle::Plain,
        Path::new("."),
    );
    assert!(!art.placeholder);
    assert_eq!((art.width(), art.height()), (3, 5));
}

#[test]
fn unusable_urls_fall_back_to_placeholder() {
    for url in [
        Some("https://example.com/a.png"),
        Some("no/such/file.png"),
        Some("data:image/png;base64,AAAA"),
        Some("   "),
        None,
    ] {
        let art = resolve_art(url, PlaceholderStyle::Blur, Path::new("."));
        assert!(art.placeholder, "{url:?}");
        assert_eq!(
            (art.width(), art.height()),
            (PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT)
        );
    }
}

#[test]
fn placeholder_styles_per_kind() {
    assert_eq!(
        PlaceholderStyle::for_kind(EntityKind::Card),
        PlaceholderStyle::Plain
    );
    assert_eq!(
        PlaceholderStyle::for_kind(EntityKind::Rune),
        PlaceholderStyle::Grayscale
    );
    assert_eq!(
        PlaceholderStyle::for_kind(EntityKind::Structure),
        PlaceholderStyle::Grayscale
    );
    assert_eq!(
        PlaceholderStyle::for_kind(EntityKind::Artefact),
        PlaceholderStyle::Blur
    );
}

#[test]
fn grayscale_placeholder_has_no_chroma() {
    let img = generate_placeholder(PlaceholderStyle::Grayscale, 7);
    for px in img.pixels().step_by(997) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }
}

#[test]
fn placeholders_are_deterministic() {
    let a = generate_placeholder(PlaceholderStyle::Plain, 42);
    let b = generate_placeholder(PlaceholderStyle::Plain, 42);
    assert_eq!(a.as_raw(), b.as_raw());
}
