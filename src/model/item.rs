//! The item entity family. `ItemDetails` is the discriminated part: one
//! variant per `type` value the API documents, plus `Unknown` for
//! anything newer than this crate.

use enumflags2::BitFlags;
use strum::EnumString;

use super::common::{
    Attribute, DamageType, GameType, InfusionSlotFlag, ItemFlag, Rarity, Restriction, WeightClass,
};
use super::skin::SkinId;
use crate::prelude::*;

pub type ItemId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub chat_link: String,
    pub icon: Option<Url>,
    pub rarity: Rarity,
    pub level: u32,
    pub vendor_value: u32,
    pub default_skin: Option<SkinId>,
    pub flags: BitFlags<ItemFlag>,
    pub game_types: BitFlags<GameType>,
    pub restrictions: Vec<Restriction>,
    pub details: ItemDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemDetails {
    Armor(Armor),
    Back(Back),
    Bag(Bag),
    Consumable(Consumable),
    Container(Container),
    CraftingMaterial,
    Gathering(GatheringTool),
    Gizmo(Gizmo),
    MiniPet(MiniPet),
    Tool(Tool),
    Trinket(Trinket),
    Trophy,
    UpgradeComponent(UpgradeComponent),
    Weapon(Weapon),
    /// An item `type` this crate does not know. Carries the raw tag so
    /// callers can still log or branch on it.
    Unknown(String),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub slot: ArmorSlot,
    pub weight_class: WeightClass,
    pub defense: u32,
    pub infusion_slots: Vec<InfusionSlot>,
    pub infix_upgrade: Option<InfixUpgrade>,
    pub suffix_item_id: Option<ItemId>,
    /// Parsed out of the API's int-in-string encoding; stays `None` when
    /// the string does not hold a number.
    pub secondary_suffix_item_id: Option<ItemId>,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ArmorSlot {
    #[default]
    Unknown,
    Boots,
    Coat,
    Gloves,
    Helm,
    HelmAquatic,
    Leggings,
    Shoulders,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Back {
    pub infusion_slots: Vec<InfusionSlot>,
    pub infix_upgrade: Option<InfixUpgrade>,
    pub suffix_item_id: Option<ItemId>,
    pub secondary_suffix_item_id: Option<ItemId>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bag {
    pub size: u32,
    /// Invisible bags: contents stay out of vendor lists and sorting.
    pub no_sell_or_sort: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    pub kind: ConsumableKind,
    pub description: Option<String>,
    pub duration_ms: Option<u64>,
    pub recipe_id: Option<u32>,
    pub color_id: Option<u32>,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ConsumableKind {
    #[default]
    Unknown,
    AppearanceChange,
    Booze,
    ContractNpc,
    Food,
    Generic,
    Halloween,
    Immediate,
    Transmutation,
    Unlock,
    UpgradeRemoval,
    Utility,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ContainerKind {
    #[default]
    Unknown,
    Default,
    GiftBox,
    OpenUi,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub kind: ContainerKind,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GatheringToolKind {
    #[default]
    Unknown,
    Foraging,
    Logging,
    Mining,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatheringTool {
    pub kind: GatheringToolKind,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GizmoKind {
    #[default]
    Unknown,
    Default,
    ContainerKey,
    RentableContractNpc,
    UnlimitedConsumable,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gizmo {
    pub kind: GizmoKind,
    pub guild_upgrade_id: Option<u32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniPet {
    pub minipet_id: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Salvage kits are the only documented tool type; `charges` is how
    /// many uses remain on a fresh kit.
    pub charges: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trinket {
    pub kind: TrinketKind,
    pub infusion_slots: Vec<InfusionSlot>,
    pub infix_upgrade: Option<InfixUpgrade>,
    pub suffix_item_id: Option<ItemId>,
    pub secondary_suffix_item_id: Option<ItemId>,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum TrinketKind {
    #[default]
    Unknown,
    Accessory,
    Amulet,
    Ring,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeComponent {
    pub kind: UpgradeComponentKind,
    pub infusion_upgrade_flags: BitFlags<InfusionSlotFlag>,
    pub suffix: String,
    pub infix_upgrade: Option<InfixUpgrade>,
    /// Rune set bonuses, one string per equipped count.
    pub bonuses: Vec<String>,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum UpgradeComponentKind {
    #[default]
    Unknown,
    Default,
    Gem,
    Rune,
    Sigil,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub damage_type: DamageType,
    pub min_power: u32,
    pub max_power: u32,
    pub defense: u32,
    pub infusion_slots: Vec<InfusionSlot>,
    pub infix_upgrade: Option<InfixUpgrade>,
    pub suffix_item_id: Option<ItemId>,
    pub secondary_suffix_item_id: Option<ItemId>,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum WeaponKind {
    #[default]
    Unknown,
    Axe,
    Dagger,
    Focus,
    Greatsword,
    Hammer,
    Harpoon,
    LargeBundle,
    LongBow,
    Mace,
    Pistol,
    Rifle,
    Scepter,
    Shield,
    ShortBow,
    SmallBundle,
    Speargun,
    Staff,
    Sword,
    Torch,
    Toy,
    Trident,
    TwoHandedToy,
    Warhorn,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfusionSlot {
    pub flags: BitFlags<InfusionSlotFlag>,
    pub item_id: Option<ItemId>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfixUpgrade {
    pub id: u32,
    pub attributes: Vec<AttributeBonus>,
    pub buff: Option<Buff>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBonus {
    pub attribute: Attribute,
    pub modifier: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    pub skill_id: u32,
    pub description: Option<String>,
}
