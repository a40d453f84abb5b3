use std::io::Cursor;

use super::*;

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn parse_base64_payload() {
    let url = DataUrl::parse("data:image/png;base64,aGVsbG8=").unwrap();
    assert_eq!(url.mime, "image/png");
    assert_eq!(url.bytes, b"hello");
}

#[test]
fn parse_percent_payload_and_default_mime() {
    let url = DataUrl::parse("data:,a%20b").unwrap();
    assert_eq!(url.mime, "text/plain");
    assert_eq!(url.bytes, b"a b");
}

#[test]
fn parse_percent_payload_edges() {
    let url = DataUrl::parse("data:text/plain,a%20").unwrap();
    assert_eq!(url.bytes, b"a ");
    let url = DataUrl::parse("data:,100%25%2").unwrap();
    assert_eq!(url.bytes, b"100%%2");
    let url = DataUrl::parse("data:,%e2%9c%a6").unwrap();
    assert_eq!(url.bytes, "✦".as_bytes());
}

#[test]
fn parse_rejects_non_data_uris() {
    assert!(DataUrl::parse("https://example.com/a.png").is_err());
    assert!(DataUrl::parse("data:image/png;base64").is_err());
    assert!(DataUrl::parse("data:image/png;base64,@@@").is_err());
}

#[test]
fn to_uri_parses_back() {
    let url = DataUrl::new("image/png", vec![1, 2, 3, 250]);
    assert_eq!(DataUrl::parse(&url.to_uri()).unwrap(), url);
}

#[test]
fn upload_detects_mime_from_content() {
    let dir = std::env::temp_dir().join("cardforge_data_url_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("upload.bin");
    std::fs::write(&path, tiny_png()).unwrap();

    let uri = load_file_as_data_url(&path).unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));
    assert_eq!(DataUrl::parse(&uri).unwrap().bytes, tiny_png());

    let bogus = dir.join("notes.txt");
    std::fs::write(&bogus, b"plain text").unwrap();
    assert!(load_file_as_data_url(&bogus).is_err());
    assert!(load_file_as_data_url(&dir.join("missing.png")).is_err());
}
