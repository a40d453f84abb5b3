use super::*;
use crate::model::initial::{initial_artefact, initial_card, initial_rune, initial_structure};

#[test]
fn card_panel_lists_all_tiers_and_current_values() {
    let card = initial_card();
    let panel = card_panel(&card, Language::EnUs, Language::PtBr);

    assert_eq!(panel.kind, EntityKind::Card);
    assert_eq!(
        panel.field("name").unwrap().value,
        FieldValue::text("Fire Blast")
    );
    for tier in CastTier::ALL {
        let damage = format!("{}.damage", tier.field_name());
        assert!(panel.field(&damage).is_some(), "missing {damage}");
    }
    let adds = panel
        .actions()
        .filter(|a| matches!(a.op, EditOp::AddEffect { .. }))
        .count();
    assert_eq!(adds, 3);
}

#[test]
fn select_labels_follow_card_language() {
    let panel = card_panel(&initial_card(), Language::EnUs, Language::PtBr);
    let Widget::Select(options) = &panel.field("element").unwrap().widget else {
        panic!("element should be a select");
    };
    let fire = options.iter().find(|o| o.value == "FIRE").unwrap();
    assert_eq!(fire.label, "Fogo");
    assert_eq!(panel.field("element").unwrap().label, "Element");
}

#[test]
fn no_background_disables_image_controls() {
    let mut card = initial_card();
    card.no_background = true;
    let panel = card_panel(&card, Language::PtBr, Language::PtBr);
    assert!(!panel.field("imageUrl").unwrap().enabled);
    assert!(!panel.field("imageOpacity").unwrap().enabled);
    assert!(panel.field("contentOpacity").unwrap().enabled);
    assert!(panel.field("noBackground").unwrap().enabled);
}

#[test]
fn card_sliders_show_fallback_for_zero() {
    let mut card = initial_card();
    card.image_opacity = 0.0;
    card.content_opacity = 0.0;
    let panel = card_panel(&card, Language::PtBr, Language::PtBr);
    assert!(matches!(
        panel.field("imageOpacity").unwrap().widget,
        Widget::Slider { shown, .. } if shown == 60.0
    ));
    assert!(matches!(
        panel.field("contentOpacity").unwrap().widget,
        Widget::Slider { shown, .. } if shown == 85.0
    ));
}

#[test]
fn structure_fields_depend_on_type() {
    let altar = initial_structure();
    let panel = structure_panel(&altar, Language::EnUs, Language::EnUs);
    assert!(panel.field("runicElement").is_some());
    assert!(panel.field("touchEffectValue").is_none());
    assert!(panel.field("isCounter").is_none());

    let mut barrier = altar;
    barrier.structure_type = StructureType::Barrier;
    let panel = structure_panel(&barrier, Language::EnUs, Language::EnUs);
    assert!(panel.field("runicElement").is_none());
    assert!(panel.field("touchEffectValue").is_some());
    assert!(panel.field("isCounter").is_some());
}

#[test]
fn simple_panels_cover_their_records() {
    let rune = rune_panel(&initial_rune(), Language::EnUs);
    assert!(rune.field("activationEffect").is_some());
    assert!(rune.field("continuousEffect").is_some());

    let artefact = artefact_panel(&initial_artefact(), Language::EnUs);
    assert!(artefact.field("effect").is_some());
    assert!(artefact.field("cooldown").is_some());

    let text = artefact.to_string();
    assert!(text.contains("cooldown"));
}
