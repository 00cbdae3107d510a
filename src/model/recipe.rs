use enumflags2::{bitflags, BitFlags};
use strum::EnumString;

use super::item::ItemId;
use crate::prelude::*;

pub type RecipeId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub kind: RecipeKind,
    pub output_item_id: ItemId,
    pub output_item_count: u32,
    pub time_to_craft_ms: u64,
    pub disciplines: Vec<Discipline>,
    pub min_rating: u32,
    pub flags: BitFlags<RecipeFlag>,
    pub ingredients: Vec<Ingredient>,
    pub chat_link: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item_id: ItemId,
    pub count: u32,
}

#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum RecipeFlag {
    AutoLearned = 1 << 0,
    LearnedFromItem = 1 << 1,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Discipline {
    #[default]
    Unknown,
    Armorsmith,
    Artificer,
    Chef,
    Huntsman,
    Jeweler,
    Leatherworker,
    Scribe,
    Tailor,
    Weaponsmith,
}

/// What the recipe produces. The API currently documents several dozen
/// output categories; anything newer decodes to `Unknown`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum RecipeKind {
    #[default]
    Unknown,
    Amulet,
    Axe,
    Backpack,
    Bag,
    Boots,
    Bulk,
    Coat,
    Component,
    Consumable,
    Dagger,
    Dessert,
    Dye,
    Earring,
    Feast,
    Focus,
    Gloves,
    Greatsword,
    Hammer,
    Harpoon,
    Helm,
    IngredientCooking,
    Inscription,
    Insignia,
    Leggings,
    LongBow,
    Mace,
    Meal,
    Pistol,
    Potion,
    Refinement,
    RefinementEctoplasm,
    RefinementObsidian,
    Rifle,
    Ring,
    Scepter,
    Seasoning,
    Shield,
    ShortBow,
    Shoulders,
    Snack,
    Soup,
    Speargun,
    Staff,
    Sword,
    Torch,
    Trident,
    UpgradeComponent,
    Warhorn,
}
