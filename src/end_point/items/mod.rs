use super::{EndPoint, EndPointIds};
use crate::model::item::ItemId;
use crate::prelude::*;

pub(crate) mod convert;

const E_P_URL: &str = const_format::concatcp!(crate::API_BASE_V2_URL, "/items");

/// The item record as the wire ships it. The `details` object is shared
/// by every item family; which of its fields mean anything is decided by
/// the top-level `type` discriminator.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: ItemId,
    #[serde(default)]
    pub chat_link: String,
    #[serde(default)]
    pub name: String,
    pub icon: Option<Url>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub rarity: Option<String>,
    pub level: Option<u32>,
    pub vendor_value: Option<u32>,
    pub default_skin: Option<u32>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub game_types: Vec<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    pub details: Option<ItemDetailsDto>,
}

/// The union of every family's detail fields, all optional. Converters
/// read the slice that belongs to their family and ignore the rest.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ItemDetailsDto {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub weight_class: Option<String>,
    pub defense: Option<u32>,
    #[serde(default)]
    pub infusion_slots: Vec<InfusionSlotDto>,
    pub infix_upgrade: Option<InfixUpgradeDto>,
    pub suffix_item_id: Option<u32>,
    /// Int-in-string; see the conversion policy in [`crate::convert`].
    pub secondary_suffix_item_id: Option<String>,
    pub damage_type: Option<String>,
    pub min_power: Option<u32>,
    pub max_power: Option<u32>,
    pub size: Option<u32>,
    pub no_sell_or_sort: Option<bool>,
    pub duration_ms: Option<u64>,
    pub recipe_id: Option<u32>,
    pub color_id: Option<u32>,
    pub charges: Option<u32>,
    #[serde(default)]
    pub infusion_upgrade_flags: Vec<String>,
    pub suffix: Option<String>,
    #[serde(default)]
    pub bonuses: Vec<String>,
    pub minipet_id: Option<u32>,
    pub guild_upgrade_id: Option<u32>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InfusionSlotDto {
    #[serde(default)]
    pub flags: Vec<String>,
    pub item_id: Option<u32>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InfixUpgradeDto {
    pub id: Option<u32>,
    #[serde(default)]
    pub attributes: Vec<AttributeDto>,
    pub buff: Option<BuffDto>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AttributeDto {
    pub attribute: Option<String>,
    pub modifier: Option<u32>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BuffDto {
    pub skill_id: Option<u32>,
    pub description: Option<String>,
}

pub struct Items;

impl EndPoint for Items {
    type RType = Vec<ItemId>;
    fn get_url() -> &'static str {
        E_P_URL
    }
}

impl EndPointIds for Items {
    type Id = ItemId;
    type RType = Vec<ItemDto>;

    fn get_url() -> &'static str {
        E_P_URL
    }
}
