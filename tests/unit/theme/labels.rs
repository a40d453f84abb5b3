use super::*;

fn all_labels(lang: Language) -> Vec<&'static str> {
    let mut out = Vec::new();
    out.extend(ElementType::ALL.iter().map(|e| e.label(lang)));
    out.extend(CardType::ALL.iter().map(|e| e.label(lang)));
    out.extend(StructureType::ALL.iter().map(|e| e.label(lang)));
    out.extend(TargetType::ALL.iter().map(|e| e.label(lang)));
    out.extend(CastTier::ALL.iter().map(|e| e.label(lang)));
    out
}

#[test]
fn every_enum_value_has_a_label_in_both_languages() {
    for &lang in Language::ALL {
        for label in all_labels(lang) {
            assert!(!label.trim().is_empty());
        }
    }
}

#[test]
fn language_axes_differ() {
    assert_ne!(
        ElementType::Fire.label(Language::PtBr),
        ElementType::Fire.label(Language::EnUs)
    );
    assert_ne!(
        card_text(Language::PtBr).cooldown,
        card_text(Language::EnUs).cooldown
    );
    assert_ne!(
        ui_text(Language::PtBr).general,
        ui_text(Language::EnUs).general
    );
    assert_ne!(menu_text(Language::PtBr).back, menu_text(Language::EnUs).back);
}

#[test]
fn text_tables_are_non_empty() {
    for &lang in Language::ALL {
        let c = card_text(lang);
        for s in [
            c.cooldown,
            c.range,
            c.hp,
            c.resistance_short,
            c.runic_element,
            c.activation_effect,
            c.continuous_effect,
            c.touch_effect,
        ] {
            assert!(!s.is_empty());
        }
        let m = menu_text(lang);
        for s in [m.title, m.power_card, m.rune, m.structure, m.artefact, m.sanctuary] {
            assert!(!s.is_empty());
        }
    }
}
