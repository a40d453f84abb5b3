use crate::model::{
    enums::{ElementType, StructureType},
    numeric::{lenient, lenient_opt},
};

/// Altar or barrier. Some fields only apply to one variant: `runic_element` to altars,
/// the touch effect to barriers. Both stay in the record when the type flips.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureData {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub structure_type: StructureType,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub mana_cost: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub cooldown: f64,
    pub element: ElementType,
    #[serde(default, deserialize_with = "lenient")]
    pub durability: f64,
    pub resistance_element: ElementType,
    #[serde(default, deserialize_with = "lenient")]
    pub resistance_level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runic_element: Option<ElementType>,
    #[serde(default)]
    pub continuous_effect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch_effect_element: Option<ElementType>,
    #[serde(
        default,
        deserialize_with = "lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub touch_effect_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_opacity: f64,
    #[serde(default)]
    pub no_background: bool,
    #[serde(default)]
    pub is_counter: bool,
}

impl StructureData {
    pub fn is_barrier(&self) -> bool {
        self.structure_type == StructureType::Barrier
    }
}
