use crate::model::numeric::lenient;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtefactData {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default, deserialize_with = "lenient")]
    pub cooldown: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_opacity: f64,
    #[serde(default)]
    pub no_background: bool,
}
