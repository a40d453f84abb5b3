use super::*;
use crate::model::{
    enums::{ElementType, StructureType, TargetType},
    initial::{initial_artefact, initial_card, initial_rune, initial_structure},
};

fn path(s: &str) -> FieldPath {
    FieldPath::parse(s).unwrap()
}

#[test]
fn card_update_changes_only_the_named_field() {
    let card = initial_card();
    let next = card.update(&path("manaCost"), FieldValue::Number(9.0)).unwrap();
    assert_eq!(next.read(&path("manaCost")).unwrap(), FieldValue::Number(9.0));
    assert_eq!(card.mana_cost, 3.0);

    let mut expected = card.clone();
    expected.mana_cost = 9.0;
    assert_eq!(next, expected);
}

#[test]
fn card_nested_paths_reach_tiers_targets_and_effects() {
    let card = initial_card();

    let next = card
        .update(&path("castGood.effects.0.level"), FieldValue::Number(5.0))
        .unwrap();
    assert_eq!(next.cast_good.effects[0].level, 5.0);
    assert_eq!(next.cast_good.effects[0].name, card.cast_good.effects[0].name);
    assert_eq!(next.cast_weak, card.cast_weak);
    assert_eq!(next.cast_perfect, card.cast_perfect);

    let next = card
        .update(&path("castWeak.targets.0"), FieldValue::text("PLAYER"))
        .unwrap();
    assert_eq!(next.cast_weak.targets[0], TargetType::Player);

    let next = card
        .update(&path("castPerfect.damage"), FieldValue::Empty)
        .unwrap();
    assert_eq!(next.cast_perfect.damage, None);
}

#[test]
fn number_input_text_becomes_nan() {
    let card = initial_card();
    let next = card
        .update(&path("cooldown"), FieldValue::text(""))
        .unwrap();
    assert!(next.cooldown.is_nan());
}

#[test]
fn invalid_edits_are_rejected_and_leave_record_unchanged() {
    let card = initial_card();
    assert!(card.update(&path("mana"), FieldValue::Number(1.0)).is_err());
    assert!(card.update(&path("element"), FieldValue::text("LAVA")).is_err());
    assert!(card.update(&path("castWeak.targets.7"), FieldValue::text("FIELD")).is_err());
    assert!(card.update(&path("castGood.effects.0.color"), FieldValue::text("x")).is_err());
    assert!(card.update(&path("id"), FieldValue::text("other")).is_err());
    assert_eq!(card, initial_card());
}

#[test]
fn update_then_read_round_trips_every_kind() {
    let rune = initial_rune()
        .update(&path("continuousEffect"), FieldValue::text("Glows."))
        .unwrap();
    assert_eq!(
        rune.read(&path("continuousEffect")).unwrap(),
        FieldValue::text("Glows.")
    );
    assert_eq!(rune.activation_effect, initial_rune().activation_effect);

    let artefact = initial_artefact()
        .update(&path("cooldown"), FieldValue::Number(7.0))
        .unwrap();
    assert_eq!(artefact.read(&path("cooldown")).unwrap(), FieldValue::Number(7.0));
    assert_eq!(artefact.effect, initial_artefact().effect);

    let structure = initial_structure()
        .update(&path("type"), FieldValue::text("BARRIER"))
        .unwrap()
        .update(&path("touchEffectValue"), FieldValue::Number(3.0))
        .unwrap();
    assert_eq!(structure.structure_type, StructureType::Barrier);
    assert_eq!(
        structure.read(&path("touchEffectValue")).unwrap(),
        FieldValue::Number(3.0)
    );
    assert_eq!(structure.runic_element, initial_structure().runic_element);
}

#[test]
fn optional_enums_clear_with_empty() {
    let s = initial_structure()
        .update(&path("runicElement"), FieldValue::Empty)
        .unwrap();
    assert_eq!(s.read(&path("runicElement")).unwrap(), FieldValue::Empty);

    let s = s
        .update(&path("runicElement"), FieldValue::text("DARK"))
        .unwrap();
    assert_eq!(s.runic_element, Some(ElementType::Dark));
}

#[test]
fn edited_discards_copy_on_error() {
    let card = initial_card();
    let out = edited(&card, |c| {
        c.name = "changed".to_string();
        Err(ForgeError::validation("nope"))
    });
    assert!(out.is_err());
    assert_eq!(card.name, "Fire Blast");
}
