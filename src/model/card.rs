use crate::model::{
    enums::{CardType, CastTier, ElementType, TargetType},
    numeric::{lenient, lenient_opt},
};

/// A named status applied by a cast, e.g. `Burn 2/1`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEffect {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub level: f64,
    /// Secondary magnitude paid or granted alongside `level`.
    #[serde(default, deserialize_with = "lenient")]
    pub chips: f64,
}

impl StatusEffect {
    pub const DEFAULT_NAME: &'static str = "Burn";

    /// The effect a freshly added editor row starts with.
    pub fn fresh(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Self::DEFAULT_NAME.to_string(),
            level: 1.0,
            chips: 1.0,
        }
    }
}

/// Outcome of one cast tier.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastConfig {
    #[serde(
        default,
        deserialize_with = "lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub damage: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<f64>,
    #[serde(default)]
    pub description: String,
    /// Display order; duplicates are allowed.
    #[serde(default)]
    pub targets: Vec<TargetType>,
    #[serde(default)]
    pub effects: Vec<StatusEffect>,
}

impl CastConfig {
    /// The configuration a card starts with for every tier.
    pub fn empty() -> Self {
        Self {
            damage: Some(0.0),
            duration: Some(0.0),
            ..Self::default()
        }
    }
}

/// A power card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub element: ElementType,
    #[serde(default, deserialize_with = "lenient")]
    pub mana_cost: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub cooldown: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub range: f64,
    #[serde(default)]
    pub base_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_opacity: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub content_opacity: f64,
    #[serde(default)]
    pub no_background: bool,
    #[serde(default)]
    pub is_counter: bool,
    #[serde(default = "CastConfig::empty")]
    pub cast_weak: CastConfig,
    #[serde(default = "CastConfig::empty")]
    pub cast_good: CastConfig,
    #[serde(default = "CastConfig::empty")]
    pub cast_perfect: CastConfig,
}

impl CardData {
    pub fn cast(&self, tier: CastTier) -> &CastConfig {
        match tier {
            CastTier::Weak => &self.cast_weak,
            CastTier::Good => &self.cast_good,
            CastTier::Perfect => &self.cast_perfect,
        }
    }

    /// Copy of this card with one tier's configuration replaced.
    pub fn with_cast(&self, tier: CastTier, config: CastConfig) -> Self {
        let mut next = self.clone();
        *next.cast_mut(tier) = config;
        next
    }

    pub(crate) fn cast_mut(&mut self, tier: CastTier) -> &mut CastConfig {
        match tier {
            CastTier::Weak => &mut self.cast_weak,
            CastTier::Good => &mut self.cast_good,
            CastTier::Perfect => &mut self.cast_perfect,
        }
    }
}
