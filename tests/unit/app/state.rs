use super::*;
use crate::{
    edit::{panel::Widget, path::FieldPath, record::Editable, value::FieldValue},
    foundation::core::{Point, Size},
    model::enums::CastTier,
};

#[test]
fn starts_on_menu_with_initial_records() {
    let app = AppState::new();
    assert_eq!(app.mode(), AppMode::Menu);
    assert_eq!(app.card(), &initial_card());
    assert_eq!(app.app_language(), Language::PtBr);
    assert_eq!(app.card_language(), Language::PtBr);
}

#[test]
fn records_survive_navigation() {
    let mut app = AppState::new();
    app.navigate(AppMode::Studio(EntityKind::Rune));
    app.edit(EntityKind::Rune, &EditOp::set("name", "Rune of Ash").unwrap())
        .unwrap();
    app.navigate(AppMode::Menu);
    app.navigate(AppMode::Studio(EntityKind::Card));
    assert_eq!(app.rune().name, "Rune of Ash");
}

#[test]
fn leaving_the_cropper_discards_it() {
    let mut app = AppState::new();
    app.navigate(AppMode::ImageCropper);
    app.crop_mut()
        .load_image(Size::new(800.0, 600.0), Size::new(400.0, 300.0))
        .unwrap();
    app.crop_mut().pointer_down(Point::new(400.0, 300.0));
    assert!(app.crop().has_image());

    app.navigate(AppMode::ImageCropper);
    assert!(app.crop().has_image(), "staying in the cropper keeps it");

    app.navigate(AppMode::Menu);
    assert!(!app.crop().has_image());
}

#[test]
fn failed_edit_leaves_record_unchanged() {
    let mut app = AppState::new();
    let before = app.card().clone();
    let op = EditOp::RemoveEffect {
        tier: CastTier::Weak,
        index: 9,
    };
    assert!(app.edit(EntityKind::Card, &op).is_err());
    assert!(app
        .edit(EntityKind::Rune, &EditOp::AddTarget { tier: CastTier::Good })
        .is_err());
    assert_eq!(app.card(), &before);
}

#[test]
fn effect_ids_are_unique_across_records() {
    let mut app = AppState::new();
    let add = |tier| EditOp::AddEffect { tier };
    app.edit(EntityKind::Card, &add(CastTier::Weak)).unwrap();
    app.edit(EntityKind::Card, &add(CastTier::Perfect)).unwrap();
    let weak = &app.card().cast_weak.effects;
    let perfect = &app.card().cast_perfect.effects;
    assert_ne!(weak[weak.len() - 1].id, perfect[perfect.len() - 1].id);
}

#[test]
fn languages_are_independent() {
    let mut app = AppState::new();
    app.set_app_language(Language::EnUs);
    let panel = app.panel(EntityKind::Card);
    assert_eq!(app.card_language(), Language::PtBr);

    let element = panel.field("element").unwrap();
    match &element.widget {
        Widget::Select(options) => assert!(options.iter().any(|o| o.label == "Fogo")),
        other => panic!("element should be a select, got {other:?}"),
    }
}

#[test]
fn menu_lists_every_mode() {
    let app = AppState::new();
    let menu = app.menu();
    assert_eq!(menu.len(), 6);
    for kind in EntityKind::ALL {
        assert!(menu.iter().any(|e| e.mode == AppMode::Studio(*kind)));
    }
    assert!(menu.iter().any(|e| e.mode == AppMode::ImageCropper));
    assert!(menu.iter().all(|e| !e.title.is_empty() && !e.description.is_empty()));
    let (title, notice) = app.sanctuary_notice();
    assert!(!title.is_empty() && !notice.is_empty());
}

#[test]
fn loaded_documents_replace_their_record() {
    let mut app = AppState::new();
    let mut rune = app.rune().clone();
    rune.name = "Loaded".to_string();
    app.load_document(EntityDocument::Rune(rune));
    assert_eq!(app.document(EntityKind::Rune).kind(), EntityKind::Rune);
    let name = app
        .rune()
        .read(&FieldPath::parse("name").unwrap())
        .unwrap();
    assert_eq!(name, FieldValue::Text("Loaded".to_string()));
}
