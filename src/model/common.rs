//! Value types shared across entity families.

use enumflags2::bitflags;
use glam::DVec2;
use strum::EnumString;

use crate::prelude::*;

/// An axis-aligned rectangle in map or continent coordinates, decoded
/// from the API's `[[x1, y1], [x2, y2]]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Unknown,
    Junk,
    Basic,
    Fine,
    Masterwork,
    Rare,
    Exotic,
    Ascended,
    Legendary,
}

#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ItemFlag {
    AccountBindOnUse = 1 << 0,
    AccountBound = 1 << 1,
    Attuned = 1 << 2,
    BulkConsume = 1 << 3,
    DeleteWarning = 1 << 4,
    HideSuffix = 1 << 5,
    Infused = 1 << 6,
    MonsterOnly = 1 << 7,
    NoMysticForge = 1 << 8,
    NoSalvage = 1 << 9,
    NoSell = 1 << 10,
    NotUpgradeable = 1 << 11,
    NoUnderwater = 1 << 12,
    SoulbindOnAcquire = 1 << 13,
    SoulBindOnUse = 1 << 14,
    Tonic = 1 << 15,
    Unique = 1 << 16,
}

#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum GameType {
    Activity = 1 << 0,
    Dungeon = 1 << 1,
    Pve = 1 << 2,
    Pvp = 1 << 3,
    PvpLobby = 1 << 4,
    Wvw = 1 << 5,
}

/// Race or profession gates on items and skins.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Restriction {
    #[default]
    Unknown,
    Asura,
    Charr,
    Human,
    Norn,
    Sylvari,
    Elementalist,
    Engineer,
    Guardian,
    Mesmer,
    Necromancer,
    Ranger,
    Revenant,
    Thief,
    Warrior,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum WeightClass {
    #[default]
    Unknown,
    Clothing,
    Light,
    Medium,
    Heavy,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum DamageType {
    #[default]
    Unknown,
    Choking,
    Fire,
    Ice,
    Lightning,
    Physical,
}

/// Attribute names as the `infix_upgrade` blocks spell them.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    #[default]
    Unknown,
    BoonDuration,
    ConditionDamage,
    ConditionDuration,
    CritDamage,
    Healing,
    Power,
    Precision,
    Toughness,
    Vitality,
}

#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum InfusionSlotFlag {
    Enrichment = 1 << 0,
    Infusion = 1 << 1,
}
