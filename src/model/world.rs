use strum::EnumString;

use crate::prelude::*;

pub type WorldId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub id: WorldId,
    pub name: String,
    pub population: Population,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Population {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
    VeryHigh,
    Full,
}
