use std::path::PathBuf;

use super::*;

#[test]
fn broken_font_files_are_skipped() {
    let dir = std::env::temp_dir().join("cardforge_fonts_test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("broken.ttf"), b"not a font").unwrap();
    std::fs::write(dir.join("readme.txt"), b"ignored").unwrap();

    let base = build_fontdb::<PathBuf>(&[]);
    let with_dir = build_fontdb(&[dir]);
    assert_eq!(with_dir.len(), base.len());
}

#[test]
fn missing_font_dir_is_skipped() {
    let base = build_fontdb::<PathBuf>(&[]);
    let db = build_fontdb(&[std::env::temp_dir().join("cardforge_no_such_font_dir")]);
    assert_eq!(db.len(), base.len());
}
