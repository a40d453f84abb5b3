use crate::model::numeric::lenient;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuneData {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Fires once when the rune is triggered.
    #[serde(default)]
    pub activation_effect: String,
    /// Holds for as long as the rune stays in play.
    #[serde(default)]
    pub continuous_effect: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_opacity: f64,
    #[serde(default)]
    pub no_background: bool,
}
