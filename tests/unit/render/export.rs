use super::*;
use crate::model::initial::{initial_card, initial_rune};

#[test]
fn file_name_collapses_whitespace_runs() {
    assert_eq!(export_file_name("Fire  Blast", "FIRE"), "Fire_Blast_FIRE.png");
    assert_eq!(export_file_name("Rune of\tEchoes", "RUNE"), "Rune_of_Echoes_RUNE.png");
    assert_eq!(export_file_name(" Lantern", "ARTEFACT"), "_Lantern_ARTEFACT.png");
    assert_eq!(export_file_name("", "STRUCTURE"), "_STRUCTURE.png");
}

#[test]
fn file_name_counts_a_byte_order_mark_as_space() {
    assert_eq!(export_file_name("Fire\u{feff} Blast", "FIRE"), "Fire_Blast_FIRE.png");
}

#[test]
fn file_name_stays_a_single_component() {
    assert_eq!(export_file_name("Fire/Ice Blast", "FIRE"), "Fire_Ice_Blast_FIRE.png");
    assert_eq!(export_file_name("../escaped", "RUNE"), ".._escaped_RUNE.png");
    assert_eq!(export_file_name("a\\b:c?", "ARTEFACT"), "a_b_c__ARTEFACT.png");
}

#[test]
fn write_to_dir_keeps_names_with_separators_inside_the_dir() {
    let root = std::env::temp_dir().join("cardforge_export_name_test");
    let dir = root.join("out");
    let _ = std::fs::remove_dir_all(&root);

    for name in ["Fire/Ice Blast", "../escaped"] {
        let png = ExportedPng {
            file_name: export_file_name(name, "FIRE"),
            width: 1,
            height: 1,
            png: vec![0x89, b'P', b'N', b'G'],
        };
        let path = png.write_to_dir(&dir).unwrap();
        assert_eq!(path.parent(), Some(dir.as_path()));
        assert!(path.is_file());
    }
    assert!(!root.join("escaped_FIRE.png").exists());

    let raw = ExportedPng {
        file_name: "../raw.png".to_string(),
        width: 1,
        height: 1,
        png: vec![0],
    };
    assert_eq!(raw.write_to_dir(&dir).unwrap(), dir.join("raw.png"));
    assert!(!root.join("raw.png").exists());
}

#[test]
fn no_background_ignores_image_url() {
    let renderer = Renderer::new(RenderSettings::default()).unwrap();
    let mut card = initial_card();
    card.no_background = true;
    card.image_url = Some("missing/a.png".to_string());
    let a = renderer.preview_svg(&card, Language::PtBr).unwrap();
    card.image_url = Some("data:image/png;base64,AAAA".to_string());
    let b = renderer.preview_svg(&card, Language::PtBr).unwrap();
    assert_eq!(a, b);
    assert!(!a.contains("<image"));
}

#[test]
fn unreadable_art_embeds_placeholder() {
    let renderer = Renderer::new(RenderSettings::default()).unwrap();
    let mut rune = initial_rune();
    rune.image_url = Some("https://example.com/rune.png".to_string());
    let svg = renderer.preview_svg(&rune, Language::EnUs).unwrap();
    assert!(svg.contains("xlink:href=\"data:image/png;base64,"));
}

#[test]
fn export_is_twice_the_scene_size() {
    let renderer = Renderer::new(RenderSettings::default()).unwrap();
    let out = renderer.export_png(&initial_card(), Language::EnUs).unwrap();
    assert_eq!((out.width, out.height), (760, 1200));
    assert_eq!(out.file_name, "Fire_Blast_FIRE.png");
    assert!(out.png.starts_with(&[0x89, b'P', b'N', b'G']));
}
