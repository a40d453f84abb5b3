//! The records every session starts from.

use crate::model::{
    artefact::ArtefactData,
    card::{CardData, CastConfig, StatusEffect},
    enums::{CardType, ElementType, StructureType, TargetType},
    rune::RuneData,
    structure::StructureData,
};

pub fn initial_card() -> CardData {
    CardData {
        id: "card-initial".to_string(),
        name: "Fire Blast".to_string(),
        card_type: CardType::Magic,
        element: ElementType::Fire,
        mana_cost: 3.0,
        cooldown: 2.0,
        range: 4.0,
        base_description: "A roaring sphere of flame hurled at a distant foe.".to_string(),
        image_url: None,
        image_opacity: 60.0,
        content_opacity: 85.0,
        no_background: false,
        is_counter: false,
        cast_weak: CastConfig {
            damage: Some(2.0),
            duration: Some(0.0),
            description: "The flame sputters and grazes the target.".to_string(),
            targets: vec![TargetType::Opponent],
            effects: Vec::new(),
        },
        cast_good: CastConfig {
            damage: Some(4.0),
            duration: Some(1.0),
            description: "The blast connects and sets the target alight.".to_string(),
            targets: vec![TargetType::Opponent],
            effects: vec![StatusEffect {
                id: "fx-initial-good".to_string(),
                name: "Burn".to_string(),
                level: 1.0,
                chips: 1.0,
            }],
        },
        cast_perfect: CastConfig {
            damage: Some(6.0),
            duration: Some(2.0),
            description: "An inferno engulfs the target and spills across the field.".to_string(),
            targets: vec![TargetType::Opponent, TargetType::Field],
            effects: vec![StatusEffect {
                id: "fx-initial-perfect".to_string(),
                name: "Burn".to_string(),
                level: 2.0,
                chips: 2.0,
            }],
        },
    }
}

pub fn initial_rune() -> RuneData {
    RuneData {
        id: "rune-initial".to_string(),
        name: "Rune of Echoes".to_string(),
        activation_effect: "Repeat the last spell you cast this round.".to_string(),
        continuous_effect: "Your spells cost 1 less mana while this rune is active.".to_string(),
        image_url: None,
        image_opacity: 60.0,
        no_background: false,
    }
}

pub fn initial_artefact() -> ArtefactData {
    ArtefactData {
        id: "artefact-initial".to_string(),
        name: "Ember Lantern".to_string(),
        effect: "Reveal one hidden rune on the field.".to_string(),
        cooldown: 3.0,
        image_url: None,
        image_opacity: 60.0,
        no_background: false,
    }
}

pub fn initial_structure() -> StructureData {
    StructureData {
        id: "structure-initial".to_string(),
        name: "Altar of Cinders".to_string(),
        structure_type: StructureType::Altar,
        description: "Ancient stones that still remember the first fire.".to_string(),
        mana_cost: 4.0,
        cooldown: 0.0,
        element: ElementType::Fire,
        durability: 10.0,
        resistance_element: ElementType::Water,
        resistance_level: 2.0,
        runic_element: Some(ElementType::Fire),
        continuous_effect: "Fire spells you cast deal +1 damage.".to_string(),
        touch_effect_element: Some(ElementType::Fire),
        touch_effect_value: Some(0.0),
        image_url: None,
        image_opacity: 60.0,
        no_background: false,
        is_counter: false,
    }
}
