use super::{EndPoint, EndPointIds};
use crate::convert;
use crate::model::world::{World, WorldId};
use crate::prelude::*;

const E_P_URL: &str = const_format::concatcp!(crate::API_BASE_V2_URL, "/worlds");

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct WorldDto {
    pub id: WorldId,
    #[serde(default)]
    pub name: String,
    pub population: Option<String>,
}

pub struct Worlds;

impl EndPoint for Worlds {
    type RType = Vec<WorldId>;
    fn get_url() -> &'static str {
        E_P_URL
    }
}

impl EndPointIds for Worlds {
    type Id = WorldId;
    type RType = Vec<WorldDto>;

    fn get_url() -> &'static str {
        E_P_URL
    }
}

pub(crate) fn world(dto: WorldDto) -> World {
    World {
        id: dto.id,
        name: dto.name,
        population: convert::enum_or_default(dto.population.as_deref().unwrap_or_default()),
    }
}
