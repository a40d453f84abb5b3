use super::*;
use crate::model::{
    enums::{ElementType, StructureType},
    initial::{initial_artefact, initial_card, initial_rune, initial_structure},
};

fn ctx() -> SceneContext {
    SceneContext {
        lang: Language::EnUs,
        art: None,
    }
}

#[test]
fn card_scene_prints_name_and_effect_pills() {
    let svg = card::compose(&initial_card(), &ctx()).to_svg();
    assert!(svg.contains("viewBox=\"0 0 380 600\""));
    assert!(svg.contains(">FIRE BLAST</text>"));
    assert!(svg.contains(">BURN 1/1</text>"));
    assert!(svg.contains(">BURN 2/2</text>"));
}

#[test]
fn falsy_readouts_are_hidden() {
    let mut card = initial_card();
    for tier in [&mut card.cast_weak, &mut card.cast_good, &mut card.cast_perfect] {
        tier.damage = Some(0.0);
        tier.duration = None;
    }
    let hidden = card::compose(&card, &ctx()).to_svg();
    assert!(!hidden.contains("#fca5a5"));
    assert!(!hidden.contains("#93c5fd"));

    card.cast_weak.damage = Some(7.0);
    card.cast_weak.duration = Some(2.0);
    let shown = card::compose(&card, &ctx()).to_svg();
    assert!(shown.contains(">7</text>"));
    assert!(shown.contains(">2T</text>"));
}

#[test]
fn malformed_numbers_render_as_nan() {
    let mut card = initial_card();
    card.mana_cost = f64::NAN;
    let svg = card::compose(&card, &ctx()).to_svg();
    assert!(svg.contains(">NaN</text>"));
}

#[test]
fn counter_badge_follows_flag() {
    let mut card = initial_card();
    card.element = ElementType::Water;
    let plain = card::compose(&card, &ctx()).to_svg();
    card.is_counter = true;
    let counter = card::compose(&card, &ctx()).to_svg();
    assert!(!plain.contains(&RED_600.hex()));
    assert!(counter.contains(&RED_600.hex()));
}

#[test]
fn art_is_embedded_only_when_given() {
    let with_art = SceneContext {
        art: Some("data:image/png;base64,AAAA".to_string()),
        ..ctx()
    };
    let svg = rune::compose(&initial_rune(), &with_art).to_svg();
    assert!(svg.contains("xlink:href=\"data:image/png;base64,AAAA\""));
    assert!(svg.contains("preserveAspectRatio=\"xMidYMid slice\""));

    let bare = rune::compose(&initial_rune(), &ctx()).to_svg();
    assert!(!bare.contains("<image"));
}

#[test]
fn rune_and_artefact_print_their_labels() {
    let rune = rune::compose(&initial_rune(), &ctx()).to_svg();
    assert!(rune.contains(">ACTIVATION EFFECT</text>"));
    assert!(rune.contains(">CONTINUOUS EFFECT</text>"));

    let mut artefact = initial_artefact();
    artefact.effect = "Shine".to_string();
    let svg = artefact::compose(&artefact, &ctx()).to_svg();
    assert!(svg.contains(">\u{201c}Shine\u{201d}</text>"));
    assert!(svg.contains(">EMBER LANTERN</text>"));
}

#[test]
fn structure_variants_differ() {
    let altar = initial_structure();
    let mut barrier = altar.clone();
    barrier.structure_type = StructureType::Barrier;
    barrier.touch_effect_value = Some(3.0);

    let altar_svg = structure::compose(&altar, &ctx()).to_svg();
    let barrier_svg = structure::compose(&barrier, &ctx()).to_svg();
    assert!(altar_svg.contains("ALTAR \u{2022} FIRE"));
    assert!(barrier_svg.contains("BARRIER \u{2022} FIRE"));
    // Runic box on altars, touch box on barriers.
    assert!(altar_svg.contains(">FIRE</text>"));
    assert!(barrier_svg.contains(">3</text>"));
    assert!(barrier_svg.contains("patternUnits"));
}

#[test]
fn or_zero_shows_zero_for_falsy() {
    assert_eq!(or_zero(0.0), "0");
    assert_eq!(or_zero(f64::NAN), "0");
    assert_eq!(or_zero(4.0), "4");
}

#[test]
fn info_panel_grows_with_body() {
    let style = TextStyle::new(Face::Sans, 12.0, WHITE);
    let short = InfoPanel::new(Icon::Zap, "A", WHITE, "one", style, 200.0);
    let long = InfoPanel::new(Icon::Zap, "A", WHITE, &"word ".repeat(60), style, 200.0);
    let empty = InfoPanel::new(Icon::Zap, "A", WHITE, "", style, 200.0);
    assert!(long.height() > short.height());
    assert!(short.height() > empty.height());
}
