use super::{EndPoint, EndPointIds};
use crate::convert;
use crate::model::recipe::{Ingredient, Recipe, RecipeId};
use crate::prelude::*;

const E_P_URL: &str = const_format::concatcp!(crate::API_BASE_V2_URL, "/recipes");

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RecipeDto {
    pub id: RecipeId,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub output_item_id: Option<u32>,
    pub output_item_count: Option<u32>,
    pub time_to_craft_ms: Option<u64>,
    #[serde(default)]
    pub disciplines: Vec<String>,
    pub min_rating: Option<u32>,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientDto>,
    #[serde(default)]
    pub chat_link: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IngredientDto {
    pub item_id: u32,
    pub count: u32,
}

pub struct Recipes;

impl EndPoint for Recipes {
    type RType = Vec<RecipeId>;
    fn get_url() -> &'static str {
        E_P_URL
    }
}

impl EndPointIds for Recipes {
    type Id = RecipeId;
    type RType = Vec<RecipeDto>;

    fn get_url() -> &'static str {
        E_P_URL
    }
}

pub(crate) fn recipe(dto: RecipeDto) -> Recipe {
    Recipe {
        id: dto.id,
        kind: convert::enum_or_default(dto.kind.as_deref().unwrap_or_default()),
        output_item_id: dto.output_item_id.unwrap_or_default(),
        output_item_count: dto.output_item_count.unwrap_or_default(),
        time_to_craft_ms: dto.time_to_craft_ms.unwrap_or_default(),
        disciplines: convert::enums(&dto.disciplines),
        min_rating: dto.min_rating.unwrap_or_default(),
        flags: convert::flags(&dto.flags),
        ingredients: dto
            .ingredients
            .into_iter()
            .map(|ingredient| Ingredient {
                item_id: ingredient.item_id,
                count: ingredient.count,
            })
            .collect(),
        chat_link: dto.chat_link,
    }
}
