use super::{EndPoint, EndPointIds};
use crate::model::skin::SkinId;
use crate::prelude::*;

pub(crate) mod convert;

const E_P_URL: &str = const_format::concatcp!(crate::API_BASE_V2_URL, "/skins");

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SkinDto {
    pub id: SkinId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    pub icon: Option<Url>,
    pub rarity: Option<String>,
    pub description: Option<String>,
    pub details: Option<SkinDetailsDto>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SkinDetailsDto {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub weight_class: Option<String>,
    pub damage_type: Option<String>,
}

pub struct Skins;

impl EndPoint for Skins {
    type RType = Vec<SkinId>;
    fn get_url() -> &'static str {
        E_P_URL
    }
}

impl EndPointIds for Skins {
    type Id = SkinId;
    type RType = Vec<SkinDto>;

    fn get_url() -> &'static str {
        E_P_URL
    }
}
