//! The skin entity family: the wardrobe-side mirror of the item family,
//! with its own (smaller) discriminator set.

use enumflags2::{bitflags, BitFlags};
use strum::EnumString;

use super::common::{DamageType, Rarity, Restriction, WeightClass};
use super::item::{ArmorSlot, GatheringToolKind, WeaponKind};
use crate::prelude::*;

pub type SkinId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    pub id: SkinId,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<Url>,
    pub rarity: Rarity,
    pub flags: BitFlags<SkinFlag>,
    pub restrictions: Vec<Restriction>,
    pub details: SkinDetails,
}

#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SkinFlag {
    HideIfLocked = 1 << 0,
    NoCost = 1 << 1,
    OverrideRarity = 1 << 2,
    ShowInWardrobe = 1 << 3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkinDetails {
    Armor(ArmorSkin),
    Back,
    Gathering(GatheringSkin),
    Weapon(WeaponSkin),
    Unknown(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorSkin {
    pub slot: ArmorSlot,
    pub weight_class: WeightClass,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSkin {
    pub kind: WeaponKind,
    pub damage_type: DamageType,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatheringSkin {
    pub kind: GatheringToolKind,
}
