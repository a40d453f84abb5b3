use super::*;
use crate::model::enums::{CardType, ElementType};

#[test]
fn kind_tag_selects_the_record() {
    let json = r#"{
        "kind": "rune",
        "id": "r1",
        "name": "Rune of Tides",
        "activationEffect": "Draw a card.",
        "continuousEffect": "",
        "imageOpacity": 40,
        "noBackground": true
    }"#;
    let doc = EntityDocument::from_json(json).unwrap();
    assert_eq!(doc.kind(), EntityKind::Rune);
    let EntityDocument::Rune(rune) = doc else {
        panic!("expected a rune");
    };
    assert_eq!(rune.name, "Rune of Tides");
    assert_eq!(rune.image_opacity, 40.0);
    assert!(rune.image_url.is_none());
}

#[test]
fn missing_numbers_default_to_zero() {
    let json = r#"{
        "kind": "card",
        "id": "c1",
        "type": "SEAL",
        "element": "DARK"
    }"#;
    let EntityDocument::Card(card) = EntityDocument::from_json(json).unwrap() else {
        panic!("expected a card");
    };
    assert_eq!(card.card_type, CardType::Seal);
    assert_eq!(card.element, ElementType::Dark);
    assert_eq!(card.mana_cost, 0.0);
    assert_eq!(card.cooldown, 0.0);
    assert_eq!(card.cast_good.damage, Some(0.0));
    assert!(card.cast_good.targets.is_empty());
}

#[test]
fn nan_survives_a_save_and_load() {
    let mut doc = EntityDocument::initial(EntityKind::Artefact);
    if let EntityDocument::Artefact(a) = &mut doc {
        a.cooldown = f64::NAN;
    }
    let json = doc.to_json_pretty().unwrap();
    assert!(json.contains("\"cooldown\": null"));
    let EntityDocument::Artefact(back) = EntityDocument::from_json(&json).unwrap() else {
        panic!("expected an artefact");
    };
    assert!(back.cooldown.is_nan());
}

#[test]
fn nan_in_optional_numbers_survives_a_save_and_load() {
    let mut doc = EntityDocument::initial(EntityKind::Card);
    if let EntityDocument::Card(card) = &mut doc {
        card.cast_good.damage = Some(f64::NAN);
        card.cast_perfect.duration = Some(f64::NAN);
        card.cast_weak.damage = None;
    }
    let json = doc.to_json_pretty().unwrap();
    let EntityDocument::Card(back) = EntityDocument::from_json(&json).unwrap() else {
        panic!("expected a card");
    };
    assert!(back.cast_good.damage.is_some_and(f64::is_nan));
    assert!(back.cast_perfect.duration.is_some_and(f64::is_nan));
    assert_eq!(back.cast_weak.damage, None);

    let mut doc = EntityDocument::initial(EntityKind::Structure);
    if let EntityDocument::Structure(s) = &mut doc {
        s.touch_effect_value = Some(f64::NAN);
    }
    let json = doc.to_json_pretty().unwrap();
    assert!(json.contains("\"touchEffectValue\": null"));
    let EntityDocument::Structure(back) = EntityDocument::from_json(&json).unwrap() else {
        panic!("expected a structure");
    };
    assert!(back.touch_effect_value.is_some_and(f64::is_nan));
}

#[test]
fn unknown_element_is_rejected() {
    let json = r#"{"kind": "card", "id": "c", "type": "MAGIC", "element": "PLASMA"}"#;
    assert!(EntityDocument::from_json(json).is_err());
}

#[test]
fn initial_documents_round_trip() {
    for &kind in EntityKind::ALL {
        let doc = EntityDocument::initial(kind);
        let back = EntityDocument::from_json(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back, doc);
    }
}
